use crate::cli::command_handlers::{CallHandler, ConfigHandler, MeHandler};
use crate::cli::main_types::Commands;
use std::path::PathBuf;
use xing_core::api::client::XingClient;
use xing_core::core::services::config_service::ConfigService;
use xing_core::error::AppError;
use xing_core::storage::config::Config;
use xing_core::utils::logging::print_verbose;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            verbose,
        }
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    // Helper method to create a signed XingClient
    fn create_client(&self) -> Result<XingClient, AppError> {
        let service = self.create_config_service();
        self.log_verbose(&format!("Creating client for {}", service.get_base_url()));
        service.build_client()
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config_service = self.create_config_service();
                handler.handle(
                    command,
                    &mut config_service,
                    self.config_path.clone(),
                    self.verbose,
                )
            }
            Commands::Call(args) => {
                let handler = CallHandler::new();
                let client = self.create_client()?;
                handler.handle(args, client, self.verbose).await
            }
            Commands::Me { fields } => {
                let handler = MeHandler::new();
                let client = self.create_client()?;
                handler.handle(fields, client, self.verbose).await
            }
        }
    }
}
