pub mod attendance;
pub mod diet_plan;
pub mod envelope;
pub mod membership;
pub mod payment;
pub mod profile;
pub mod user;
pub mod workout_plan;

pub use attendance::{AttendanceRecord, CheckIn};
pub use diet_plan::{
    DietGoal, DietPlan, DietPlanDraft, FoodDraft, MacroTotals, Meal, MealDraft, NewDietPlan,
};
pub use envelope::Envelope;
pub use membership::{days_remaining, Membership, MembershipStatus, NewMembership, PlanType};
pub use payment::{Payment, PaymentStatus};
pub use profile::{AdminProfile, LoginCredentials, PasswordChange, ProfileUpdate};
pub use user::{User, UserUpdate};
pub use workout_plan::{Difficulty, Exercise, NewWorkoutPlan, WorkoutPlan};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Accepts either a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp
/// and keeps only the calendar date.
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
