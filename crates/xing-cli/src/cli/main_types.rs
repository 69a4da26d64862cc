use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xing-cli")]
#[command(about = "Command line interface for the XING REST API")]
#[command(version)]
#[command(after_help = "Examples:
  xing-cli me                                   # Show your own profile
  xing-cli me --fields id,display_name          # Only selected fields
  xing-cli call get v1/users/me/contacts -P limit=10
  xing-cli call post v1/users/me/status_message -P message=Hello --text
  xing-cli config show                          # Show current configuration

Environment Variables:
  XING_CONSUMER_KEY        OAuth consumer key
  XING_CONSUMER_SECRET     OAuth consumer secret
  XING_OAUTH_TOKEN         OAuth access token
  XING_OAUTH_TOKEN_SECRET  OAuth access token secret
  XING_BASE_URL            API root (default https://api.xing.com)")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Send a raw API call
    Call(CallArgs),
    /// Show the profile of the authorizing user
    Me {
        /// Comma-separated user fields (default: all fields)
        #[arg(long)]
        fields: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  xing-cli config set --base-url https://api.xing.com
  xing-cli config set --consumer-key abc123 --timeout 60")]
    Set {
        /// XING API root URL
        #[arg(long)]
        base_url: Option<String>,
        /// OAuth consumer key
        #[arg(long)]
        consumer_key: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

/// Arguments for a raw API call
#[derive(Args, Debug)]
pub struct CallArgs {
    /// HTTP verb: get, post, put or delete
    pub verb: String,

    /// Endpoint relative to the API root, e.g. v1/users/me
    pub endpoint: String,

    /// Parameters in key=value format (can be repeated)
    #[arg(short = 'P', long = "param", action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Return the body as raw text instead of parsing JSON
    #[arg(long)]
    pub text: bool,
}
