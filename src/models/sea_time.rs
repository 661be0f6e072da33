use serde::{Deserialize, Serialize};

/// Body for sea-time log create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeaTimeLogPayload {
    pub imo: i64,
    pub off_no: i64,
    pub flag: String,
    pub vessel_name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub company: String,
    pub main_engine: String,
    pub bhp: f64,
    pub torque: f64,
    pub dwt: f64,
    pub rank: String,
    pub sign_on: String,
    pub sign_off: String,
    pub upload_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaTimeLog {
    pub id: i64,
    #[serde(rename = "user_id", default)]
    pub user_id: Option<i64>,
    pub imo: i64,
    pub off_no: i64,
    pub flag: String,
    pub vessel_name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub company: String,
    pub main_engine: String,
    pub bhp: f64,
    pub torque: f64,
    pub dwt: f64,
    pub rank: String,
    pub sign_on: String,
    pub sign_off: String,
    pub upload_date: String,
}
