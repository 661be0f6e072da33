use serde::{Deserialize, Serialize};

use super::RecordStatus;

/// Body for certificate create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificatePayload {
    /// Encoded file contents
    pub cert: String,
    pub cert_type: String,
    pub issued_by: String,
    pub status: RecordStatus,
    pub expiry: String,
    pub cert_name: String,
    pub issue_date: String,
    pub upload_date: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: i64,
    #[serde(default)]
    pub cert: String,
    pub cert_type: String,
    pub issued_by: String,
    pub status: RecordStatus,
    pub expiry: String,
    pub cert_name: String,
    pub issue_date: String,
    pub upload_date: String,
    #[serde(default)]
    pub hidden: bool,
}
