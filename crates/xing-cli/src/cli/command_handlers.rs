use crate::cli::main_types::{CallArgs, ConfigCommands};
use std::path::PathBuf;
use xing_core::api::client::XingClient;
use xing_core::api::params::ParameterSet;
use xing_core::api::request::Request;
use xing_core::api::response::{ContentType, Decoded};
use xing_core::api::transport::Verb;
use xing_core::core::services::config_service::ConfigService;
use xing_core::core::services::user_service::UserService;
use xing_core::error::{AppError, CliError};
use xing_core::storage::credentials::has_credentials;
use xing_core::utils::logging::print_verbose;
use xing_core::utils::validation::{parse_key_value, validate_endpoint};

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                let config = config_service.config();
                println!("Current Configuration:");
                println!("=====================");
                println!("Base URL: {}", config_service.get_base_url());
                println!(
                    "Consumer key: {}",
                    config.consumer_key.as_deref().unwrap_or("(from environment)")
                );
                println!("Timeout: {}s", config.get_timeout_secs());

                if has_credentials() {
                    println!("OAuth credentials: set");
                } else {
                    println!("OAuth credentials: not set (export the XING_* variables)");
                }

                Ok(())
            }
            ConfigCommands::Set {
                base_url,
                consumer_key,
                timeout,
            } => {
                let mut updated_fields = Vec::new();

                if let Some(url) = base_url {
                    config_service.set_base_url(url.clone())?;
                    updated_fields.push(format!("base URL to: {}", url));
                }

                if let Some(key) = consumer_key {
                    config_service.set_consumer_key(key);
                    updated_fields.push("consumer key".to_string());
                }

                if let Some(secs) = timeout {
                    config_service.set_timeout_secs(secs)?;
                    updated_fields.push(format!("timeout to: {}s", secs));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --base-url, --consumer-key or --timeout".to_string(),
                    )));
                }

                println!("Set {}", updated_fields.join(", "));
                config_service.save_config(config_path)?;
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct CallHandler;

impl CallHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: CallArgs,
        client: XingClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        let verb: Verb = args
            .verb
            .parse()
            .map_err(|e: String| AppError::Cli(CliError::InvalidArguments(e)))?;
        validate_endpoint(&args.endpoint)?;
        let params = parse_params(&args.params)?;

        let content_type = if args.text {
            ContentType::Text
        } else {
            ContentType::Json
        };

        print_verbose(
            verbose,
            &format!("{} {} with {} parameter(s)", verb, args.endpoint, params.len()),
        );

        let decoded = Request::new(client)
            .execute(verb, &args.endpoint, Some(&params), content_type)
            .await?;

        print_decoded(&decoded);
        Ok(())
    }
}

#[derive(Default)]
pub struct MeHandler;

impl MeHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        fields: Option<String>,
        client: XingClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        print_verbose(verbose, "Fetching profile of the authorizing user");

        let service = UserService::new(Request::new(client));
        let profile = service.me(fields.as_deref()).await?;

        print_decoded(&Decoded::Structured(profile));
        Ok(())
    }
}

fn parse_params(args: &[String]) -> Result<ParameterSet, AppError> {
    let mut params = ParameterSet::new();
    for arg in args {
        let (key, value) = parse_key_value(arg)?;
        params.insert(key, value);
    }
    Ok(params)
}

fn print_decoded(decoded: &Decoded) {
    match decoded {
        Decoded::Empty => {}
        Decoded::Text(text) => println!("{}", text),
        Decoded::Structured(value) => match serde_json::to_string_pretty(value) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", value),
        },
    }
}
