use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    /// Display time, e.g. `08:30`.
    #[serde(default)]
    pub check_in_time: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Record for a check-in made at `at`.
    pub fn checked_in(id: String, user_id: &str, name: &str, email: &str, at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            user_name: name.to_string(),
            user_email: email.to_string(),
            check_in_time: at.format("%H:%M").to_string(),
            date: at.date_naive(),
            created_at: at,
        }
    }
}

/// Body of `POST /attendance/check-in`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub user_id: String,
}
