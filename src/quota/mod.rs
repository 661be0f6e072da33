//! Storage quota classification and local upload eligibility.

mod upload;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::AppConfig;

pub use upload::UploadGate;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}

/// Which upload constraint a candidate violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    UnsupportedType,
    FileTooLarge,
    QuotaExceeded,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::UnsupportedType => "UNSUPPORTED_TYPE",
            RejectionReason::FileTooLarge => "FILE_TOO_LARGE",
            RejectionReason::QuotaExceeded => "QUOTA_EXCEEDED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UploadRejection {}

/// A file the user wants to upload, described before any bytes are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaPolicy {
    pub max_storage_mb: f64,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
    pub max_file_size_mb: f64,
    pub allowed_file_types: Vec<String>,
}

impl QuotaPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_storage_mb: config.storage.max_storage_mb,
            warning_threshold: config.storage.warning_threshold,
            critical_threshold: config.storage.critical_threshold,
            max_file_size_mb: config.upload.max_file_size_mb,
            allowed_file_types: config.upload.allowed_file_types.clone(),
        }
    }

    pub fn usage_percent(&self, usage_mb: f64) -> f64 {
        usage_mb / self.max_storage_mb * 100.0
    }

    /// Critical wins over warning when both thresholds are crossed
    pub fn classify(&self, usage_mb: f64) -> AlertLevel {
        let percent = self.usage_percent(usage_mb);

        if percent >= self.critical_threshold {
            AlertLevel::Critical
        } else if percent >= self.warning_threshold {
            AlertLevel::Warning
        } else {
            AlertLevel::Normal
        }
    }

    pub fn remaining_mb(&self, usage_mb: f64) -> f64 {
        (self.max_storage_mb - usage_mb).max(0.0)
    }

    pub fn is_allowed_type(&self, content_type: &str) -> bool {
        // Ignore parameters such as "; charset=binary"
        let essence = content_type.split(';').next().unwrap_or("").trim();
        self.allowed_file_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(essence))
    }

    /// Check type, then per-file size, then remaining quota
    pub fn check_upload(&self, candidate: &UploadCandidate, usage_mb: f64) -> Result<(), UploadRejection> {
        self.check_file(candidate)?;
        self.check_quota(candidate, usage_mb)
    }

    /// Type and per-file size only; needs no usage figure
    pub fn check_file(&self, candidate: &UploadCandidate) -> Result<(), UploadRejection> {
        if !self.is_allowed_type(&candidate.content_type) {
            return Err(UploadRejection {
                reason: RejectionReason::UnsupportedType,
                message: format!(
                    "Invalid file type '{}'. Allowed types: {}",
                    candidate.content_type,
                    self.allowed_file_types.join(", ")
                ),
            });
        }

        if candidate.size_mb() > self.max_file_size_mb {
            return Err(UploadRejection {
                reason: RejectionReason::FileTooLarge,
                message: format!(
                    "File is too large ({:.1}MB). Maximum size is {}MB.",
                    candidate.size_mb(),
                    self.max_file_size_mb
                ),
            });
        }

        Ok(())
    }

    pub fn check_quota(&self, candidate: &UploadCandidate, usage_mb: f64) -> Result<(), UploadRejection> {
        if usage_mb + candidate.size_mb() > self.max_storage_mb {
            return Err(UploadRejection {
                reason: RejectionReason::QuotaExceeded,
                message: format!(
                    "Not enough storage: {:.1}MB remaining of {}MB",
                    self.remaining_mb(usage_mb),
                    self.max_storage_mb
                ),
            });
        }

        Ok(())
    }
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        let storage = crate::config::StorageConfig::default();
        let upload = crate::config::UploadConfig::default();
        Self {
            max_storage_mb: storage.max_storage_mb,
            warning_threshold: storage.warning_threshold,
            critical_threshold: storage.critical_threshold,
            max_file_size_mb: upload.max_file_size_mb,
            allowed_file_types: upload.allowed_file_types,
        }
    }
}
