use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default; only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = or_default("CATALOG_API_URL", "http://localhost:8000/api");
    let api_url = api_url.trim().trim_end_matches('/').to_string();
    if api_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CATALOG_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let log_level = or_default("CATALOG_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("CATALOG_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CATALOG_USER_AGENT", "catalog-browser/0.1");
    let search_debounce_ms = parse_u64("CATALOG_SEARCH_DEBOUNCE_MS", "500")?;

    Ok(AppConfig {
        api_url,
        log_level,
        request_timeout_secs,
        user_agent,
        search_debounce_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
