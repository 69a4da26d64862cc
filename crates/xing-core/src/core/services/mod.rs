pub mod config_service;
pub mod user_service;
