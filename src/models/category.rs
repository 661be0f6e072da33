use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which record family a category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    Document,
    Certificate,
}

impl CategoryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryScope::Document => "document",
            CategoryScope::Certificate => "certificate",
        }
    }
}

impl Default for CategoryScope {
    fn default() -> Self {
        CategoryScope::Document
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" => Ok(CategoryScope::Document),
            "certificate" => Ok(CategoryScope::Certificate),
            other => Err(format!("Unknown category scope '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub label: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub scope: CategoryScope,
    /// System categories are owned by the backend and cannot be deleted
    #[serde(default)]
    pub is_system: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryCreate {
    pub label: String,
    pub color: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub scope: CategoryScope,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<CategoryScope>,
}
