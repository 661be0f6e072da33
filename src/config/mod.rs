use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::ClientError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Aggregate storage limits. Thresholds are percentages of `max_storage_mb`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub max_storage_mb: f64,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_file_size_mb: f64,
    pub allowed_file_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Drop the stored token when the backend answers 401
    pub clear_on_unauthorized: bool,
    /// Where the durable session file lives; defaults to ~/.config/marinetracker
    pub config_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("MTP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // API overrides
        if let Ok(v) = env::var("MTP_API_BASE_URL") {
            self.api.base_url = v.trim_end_matches('/').to_string();
        }

        // Storage overrides
        if let Ok(v) = env::var("MTP_STORAGE_MAX_MB") {
            self.storage.max_storage_mb = v.parse().unwrap_or(self.storage.max_storage_mb);
        }
        if let Ok(v) = env::var("MTP_STORAGE_WARNING_PERCENT") {
            self.storage.warning_threshold = v.parse().unwrap_or(self.storage.warning_threshold);
        }
        if let Ok(v) = env::var("MTP_STORAGE_CRITICAL_PERCENT") {
            self.storage.critical_threshold = v.parse().unwrap_or(self.storage.critical_threshold);
        }

        // Upload overrides
        if let Ok(v) = env::var("MTP_UPLOAD_MAX_FILE_MB") {
            self.upload.max_file_size_mb = v.parse().unwrap_or(self.upload.max_file_size_mb);
        }
        if let Ok(v) = env::var("MTP_UPLOAD_ALLOWED_TYPES") {
            self.upload.allowed_file_types = v
                .split(',')
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Session overrides
        if let Ok(v) = env::var("MTP_SESSION_CLEAR_ON_UNAUTHORIZED") {
            self.session.clear_on_unauthorized = v.parse().unwrap_or(self.session.clear_on_unauthorized);
        }
        if let Ok(v) = env::var("MTP_CONFIG_DIR") {
            self.session.config_dir = Some(PathBuf::from(v));
        }

        self
    }

    /// Check the invariants the rest of the crate relies on:
    /// 0 < warning < critical <= 100, positive limits, parseable base URL.
    pub fn validate(&self) -> Result<(), ClientError> {
        let storage = &self.storage;

        if storage.max_storage_mb <= 0.0 {
            return Err(ClientError::config("Maximum storage must be greater than zero"));
        }
        if storage.warning_threshold <= 0.0 || storage.warning_threshold >= storage.critical_threshold {
            return Err(ClientError::config(format!(
                "Warning threshold ({}%) must be positive and below the critical threshold ({}%)",
                storage.warning_threshold, storage.critical_threshold
            )));
        }
        if storage.critical_threshold > 100.0 {
            return Err(ClientError::config(format!(
                "Critical threshold ({}%) cannot exceed 100% of maximum storage",
                storage.critical_threshold
            )));
        }
        if self.upload.max_file_size_mb <= 0.0 {
            return Err(ClientError::config("Maximum file size must be greater than zero"));
        }
        if self.upload.allowed_file_types.is_empty() {
            return Err(ClientError::config("At least one upload content type must be allowed"));
        }

        url::Url::parse(&self.api.base_url)?;
        Ok(())
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            storage: StorageConfig::default(),
            upload: UploadConfig::default(),
            session: SessionConfig {
                clear_on_unauthorized: true,
                config_dir: None,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: "https://api.staging.example.com".to_string(),
            },
            storage: StorageConfig::default(),
            upload: UploadConfig::default(),
            session: SessionConfig {
                clear_on_unauthorized: true,
                config_dir: None,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: "https://api.example.com".to_string(),
            },
            storage: StorageConfig::default(),
            upload: UploadConfig::default(),
            session: SessionConfig {
                clear_on_unauthorized: true,
                config_dir: None,
            },
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_storage_mb: 500.0,
            warning_threshold: 80.0,
            critical_threshold: 95.0,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10.0,
            allowed_file_types: vec![
                "application/pdf".to_string(),
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/jpg".to_string(),
            ],
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.storage.max_storage_mb, 500.0);
        assert_eq!(config.upload.max_file_size_mb, 10.0);
        assert!(config.session.clear_on_unauthorized);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(config.api.base_url.starts_with("https://"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warning_must_be_below_critical() {
        let mut config = AppConfig::development();
        config.storage.warning_threshold = 95.0;
        config.storage.critical_threshold = 95.0;
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_critical_cannot_exceed_maximum() {
        let mut config = AppConfig::development();
        config.storage.critical_threshold = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let mut config = AppConfig::development();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
