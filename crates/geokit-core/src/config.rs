use crate::app_config::AppConfig;
use crate::error::ConfigError;
use crate::http::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let mapquest_api_key = require("MAPQUEST_API_KEY")?;
    let mapquest_base_url = lookup("GEOKIT_MAPQUEST_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());

    let request_timeout_secs =
        parse_u64("GEOKIT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEOKIT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("GEOKIT_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("GEOKIT_LOG_LEVEL", "info");

    Ok(AppConfig {
        mapquest_api_key,
        mapquest_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MAPQUEST_API_KEY", "test-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MAPQUEST_API_KEY"),
            "expected MissingEnvVar(MAPQUEST_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_blank_api_key_as_missing() {
        let mut map = HashMap::new();
        map.insert("MAPQUEST_API_KEY", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MAPQUEST_API_KEY"),
            "expected MissingEnvVar(MAPQUEST_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.mapquest_api_key, "test-key");
        assert!(cfg.mapquest_base_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 8);
        assert_eq!(cfg.user_agent, "geokit/0.1 (geocoding)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = full_env();
        map.insert("GEOKIT_MAPQUEST_BASE_URL", "http://localhost:8080/nominatim/");
        map.insert("GEOKIT_REQUEST_TIMEOUT_SECS", "30");
        map.insert("GEOKIT_USER_AGENT", "custom-agent/2.0");
        map.insert("GEOKIT_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.mapquest_base_url.as_deref(),
            Some("http://localhost:8080/nominatim/")
        );
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn build_app_config_ignores_blank_base_url() {
        let mut map = full_env();
        map.insert("GEOKIT_MAPQUEST_BASE_URL", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.mapquest_base_url.is_none());
    }

    #[test]
    fn build_app_config_rejects_non_numeric_timeout() {
        let mut map = full_env();
        map.insert("GEOKIT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEOKIT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(GEOKIT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_timeout() {
        let mut map = full_env();
        map.insert("GEOKIT_REQUEST_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEOKIT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(GEOKIT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"), "key leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
