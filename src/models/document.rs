use serde::{Deserialize, Serialize};

use super::RecordStatus;

/// Body for document create
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentPayload {
    #[serde(rename = "docID")]
    pub doc_id: String,
    /// Encoded file contents
    pub doc: String,
    pub doc_type: String,
    pub category: String,
    pub status: RecordStatus,
    pub expiry: String,
    pub doc_name: String,
    pub issue_date: String,
    pub upload_date: String,
    #[serde(default)]
    pub hidden: bool,
}

/// Partial document update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentPatch {
    #[serde(rename = "docID", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    #[serde(rename = "docID")]
    pub doc_id: String,
    #[serde(default)]
    pub doc: String,
    pub doc_type: String,
    pub category: String,
    pub status: RecordStatus,
    pub expiry: String,
    pub doc_name: String,
    pub issue_date: String,
    pub upload_date: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub archived: bool,
}
