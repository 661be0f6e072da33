//! Typed request/response contracts, one set per backend resource.
//!
//! Request payloads reject unknown fields. Response types ignore fields the
//! client does not model.

pub mod auth;
pub mod category;
pub mod certificate;
pub mod dashboard;
pub mod document;
pub mod profile;
pub mod resume;
pub mod sea_time;

use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use category::{Category, CategoryCreate, CategoryScope, CategoryUpdate};
pub use certificate::{Certificate, CertificatePayload};
pub use dashboard::DashboardSummary;
pub use document::{Document, DocumentPatch, DocumentPayload};
pub use profile::{Profile, ProfileUpdate, ProfileView};
pub use resume::{ResumeDraft, ResumeDraftCreate, ResumeDraftUpdate};
pub use sea_time::{SeaTimeLog, SeaTimeLogPayload};

/// Validity status shared by certificates and documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    Valid,
    Expiring,
    Invalid,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Valid => "VALID",
            RecordStatus::Expiring => "EXPIRING",
            RecordStatus::Invalid => "INVALID",
        }
    }
}
