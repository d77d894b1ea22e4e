pub mod app_config;
pub mod config;
mod error;

pub use app_config::AppConfig;
pub use config::{load_app_config_from_env, load_app_config_with};
pub use error::ConfigError;
