mod app_config;
mod config;
mod error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_USER_AGENT};
pub use error::ConfigError;
