use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_date;
use crate::error::{AppError, Result};

/// Days left before a membership counts as "expiring soon".
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// End date offered by default when creating a membership.
pub const DEFAULT_TERM_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Monthly,
    Yearly,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Monthly => "monthly",
            PlanType::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Some(PlanType::Monthly),
            "yearly" => Some(PlanType::Yearly),
            _ => None,
        }
    }

    /// One calendar month or year after `start`. Month ends clamp, so
    /// Jan 31 + 1 month is the last day of February.
    pub fn end_date_for(&self, start: NaiveDate) -> NaiveDate {
        let months = match self {
            PlanType::Monthly => Months::new(1),
            PlanType::Yearly => Months::new(12),
        };
        start.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expired,
    Cancelled,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Expired => "expired",
            MembershipStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Some(MembershipStatus::Active),
            "expired" => Some(MembershipStatus::Expired),
            "cancelled" => Some(MembershipStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    pub plan_type: PlanType,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
    pub status: MembershipStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Membership {
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        days_remaining(self.end_date, now)
    }

    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        let days = self.days_remaining(now);
        days > 0 && days <= EXPIRING_SOON_DAYS
    }
}

/// Whole days until midnight UTC of `end_date`, rounded up. Negative once
/// the date has passed.
pub fn days_remaining(end_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    let end = end_date.and_time(NaiveTime::MIN).and_utc();
    let ms = (end - now).num_milliseconds();
    // integer division truncates toward zero, which is already ceil for ms <= 0
    if ms > 0 && ms % DAY_MS != 0 {
        ms / DAY_MS + 1
    } else {
        ms / DAY_MS
    }
}

/// Body of `POST /membership`. Name and email ride along so the backend
/// can denormalize them onto the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMembership {
    pub user_id: String,
    pub plan_type: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl NewMembership {
    /// Membership starting on `start_date` with the default 30-day term.
    pub fn starting(user_id: &str, plan_type: PlanType, start_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            plan_type,
            start_date,
            end_date: start_date
                .checked_add_signed(Duration::days(DEFAULT_TERM_DAYS))
                .unwrap_or(NaiveDate::MAX),
            user_name: None,
            user_email: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Validation("User is required".to_string()));
        }
        if self.end_date < self.start_date {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
        Ok(())
    }
}
