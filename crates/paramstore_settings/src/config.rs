use paramstore_error::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum AppEnv {
    Development,
    Staging,
    Production,
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnv::Development => write!(f, "development"),
            AppEnv::Staging => write!(f, "staging"),
            AppEnv::Production => write!(f, "production"),
        }
    }
}

impl AppEnv {
    pub fn from_str(s: &str) -> Result<AppEnv, SettingsError> {
        let trimmed_lowercase = s.trim().trim_matches('"').to_lowercase();
        match trimmed_lowercase.as_str() {
            "development" => Ok(AppEnv::Development),
            "staging" => Ok(AppEnv::Staging),
            "production" => Ok(AppEnv::Production),
            _ => Err(SettingsError::Error(format!("Unsupported app env: {}", s))),
        }
    }
}

/// ApiSettings consumed by the request-document boundary.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub api_version: String,
    pub service_label: String,
}

/// Primary configuration struct for the paramstore client stack.
/// Built from env variables with development defaults.
#[derive(Debug, Clone)]
pub struct ParamStoreConfig {
    pub app_env: AppEnv,
    pub app_version: String,
    pub endpoint: String,
    pub api_version: String,
    pub service_label: String,
}

impl Default for ParamStoreConfig {
    fn default() -> Self {
        ParamStoreConfig {
            app_env: env::var("APP_ENV")
                .ok()
                .and_then(|v| AppEnv::from_str(&v).ok())
                .unwrap_or(AppEnv::Development),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            endpoint: env::var("PARAMSTORE_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8600".to_string()),
            api_version: env::var("PARAMSTORE_API_VERSION")
                .unwrap_or_else(|_| "2024-11-15".to_string()),
            service_label: "ParamStore".to_string(),
        }
    }
}

impl ParamStoreConfig {
    pub fn new() -> Self {
        ParamStoreConfig::default()
    }

    /// Get the api settings for the request-document boundary
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            endpoint: self.endpoint.clone(),
            api_version: self.api_version.clone(),
            service_label: self.service_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_from_str() {
        assert_eq!(AppEnv::from_str("development").unwrap(), AppEnv::Development);
        assert_eq!(AppEnv::from_str(" Staging ").unwrap(), AppEnv::Staging);
        assert_eq!(AppEnv::from_str("\"production\"").unwrap(), AppEnv::Production);
        assert!(AppEnv::from_str("qa").is_err());
    }

    #[test]
    fn test_default() {
        let config = ParamStoreConfig::default();
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.endpoint, "http://localhost:8600");
        assert_eq!(config.api_version, "2024-11-15");
        assert_eq!(config.service_label, "ParamStore");
    }

    #[test]
    fn test_api_settings() {
        let config = ParamStoreConfig {
            endpoint: "https://params.internal:9000".to_string(),
            api_version: "2025-01-01".to_string(),
            ..Default::default()
        };

        let settings = config.api_settings();
        assert_eq!(settings.endpoint, "https://params.internal:9000");
        assert_eq!(settings.api_version, "2025-01-01");
        assert_eq!(settings.service_label, "ParamStore");
    }
}
