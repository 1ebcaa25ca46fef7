pub mod app_config;
pub mod config;
pub mod filters;
pub mod products;
pub mod query;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{FilterState, SortOption, ALL_CATEGORIES};
pub use products::Product;
pub use query::{build_query, ProductQuery};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sort option: {0}")]
    InvalidSortOption(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
