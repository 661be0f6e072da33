use serde::{Deserialize, Serialize};

/// Aggregate statistics from `/dashboard/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub sea_time: SeaTimeStats,
    #[serde(default)]
    pub certificates: CertificateStats,
    #[serde(default)]
    pub documents: DocumentStats,
    #[serde(default)]
    pub alerts: Vec<ExpiryAlert>,
    #[serde(default)]
    pub nri_status: Option<NriStatus>,
    /// Total storage consumed by the account, when the backend reports it
    #[serde(rename = "storageUsedMB", default)]
    pub storage_used_mb: Option<f64>,
}

impl DashboardSummary {
    /// Storage usage for quota checks; unreported usage counts as zero
    pub fn storage_usage_mb(&self) -> f64 {
        self.storage_used_mb.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaTimeStats {
    #[serde(default)]
    pub total_days: i64,
    #[serde(default)]
    pub last_vessel: Option<String>,
    #[serde(default)]
    pub last_rank: Option<String>,
    #[serde(default)]
    pub recent_voyages: Vec<Voyage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub vessel_name: String,
    #[serde(rename = "type", default)]
    pub vessel_type: Option<String>,
    #[serde(default)]
    pub dwt: Option<f64>,
    #[serde(default)]
    pub days: i64,
    #[serde(default)]
    pub sign_off: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub valid: i64,
    #[serde(default)]
    pub expiring: i64,
    #[serde(default)]
    pub expired: i64,
    #[serde(default)]
    pub compliance_percent: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub valid: i64,
    #[serde(default)]
    pub expiring: i64,
    #[serde(default)]
    pub expired: i64,
    #[serde(default)]
    pub recent: Vec<RecentDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDocument {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryAlert {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub days_remaining: i64,
}

/// Non-resident-Indian day count for the current March-to-March period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NriStatus {
    pub days: i64,
    pub start_date: String,
    pub end_date: String,
    pub is_retained: bool,
    pub days_remaining: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_backend_summary_shape() {
        let summary: DashboardSummary = serde_json::from_value(json!({
            "seaTime": {"totalDays": 410, "lastVessel": "MV Aurora", "lastRank": "Chief Officer", "recentVoyages": []},
            "certificates": {"total": 4, "valid": 3, "expiring": 1, "expired": 0, "compliancePercent": 75},
            "documents": {"total": 2, "valid": 2, "expiring": 0, "expired": 0, "recent": []},
            "alerts": [{"type": "certificate", "name": "GMDSS", "expiryDate": "2026-11-01", "daysRemaining": 14}],
            "nriStatus": {"days": 190, "startDate": "31 Mar 2026", "endDate": "31 Mar 2027", "isRetained": true, "daysRemaining": 0}
        }))
        .unwrap();
        assert_eq!(summary.sea_time.total_days, 410);
        assert_eq!(summary.alerts[0].kind, "certificate");
        assert_eq!(summary.storage_usage_mb(), 0.0);
    }

    #[test]
    fn reported_storage_is_used() {
        let summary: DashboardSummary = serde_json::from_value(json!({"storageUsedMB": 421.5})).unwrap();
        assert_eq!(summary.storage_usage_mb(), 421.5);
    }
}
