use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const EIRCODE_VAR: &str = "EIRCODE";

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";
const DEFAULT_USER_AGENT: &str = "sirowatch/0.1 (availability-monitor)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// A present `eircode_override` replaces the `EIRCODE` environment variable.
///
/// # Errors
///
/// Returns `ConfigError` if no eircode is available or any value is invalid.
pub fn load_app_config_with(eircode_override: Option<String>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env(eircode_override)
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_app_config_with`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if no eircode is available or any value is invalid.
pub fn load_app_config_from_env(
    eircode_override: Option<String>,
) -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), eircode_override)
}

/// Core parsing/validation logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(
    lookup: F,
    eircode_override: Option<String>,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let raw_eircode = match eircode_override {
        Some(value) => value,
        None => lookup(EIRCODE_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(EIRCODE_VAR.to_string()))?,
    };
    let eircode = parse_eircode(&raw_eircode)?;

    let log_level = or_default("SIROWATCH_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    let request_timeout_secs =
        parse_u64("SIROWATCH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SIROWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("SIROWATCH_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        eircode,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Trims the eircode and rejects blank values. The format itself is left to
/// the remote search service.
fn parse_eircode(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: EIRCODE_VAR.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
