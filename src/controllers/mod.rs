//! One controller per admin page. Each owns the page's list state, derives
//! filtered views from it and routes mutations through its repository.
//!
//! Fetch failures fall back to the fixture list, labelled as such. Writes
//! re-fetch on success; when the backend is unreachable or the endpoint is
//! missing they apply a local record instead and say so.

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod diet_plans;
pub mod memberships;
pub mod payments;
pub mod profile;
pub mod users;
pub mod workout_plans;

pub use attendance::AttendanceController;
pub use auth::AuthController;
pub use dashboard::{DashboardController, DashboardStats};
pub use diet_plans::DietPlansController;
pub use memberships::MembershipsController;
pub use payments::PaymentsController;
pub use profile::ProfileController;
pub use users::UsersController;
pub use workout_plans::WorkoutPlansController;

use crate::error::Result;
use crate::models::User;
use crate::notify::Notifier;

/// Where the records currently on a page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    NotLoaded,
    Live,
    /// Built-in sample data standing in for a failed fetch.
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub source: DataSource,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            source: DataSource::NotLoaded,
        }
    }
}

impl<T> ListState<T> {
    pub fn live(records: Vec<T>) -> Self {
        Self {
            records,
            source: DataSource::Live,
        }
    }

    pub fn fallback(records: Vec<T>) -> Self {
        Self {
            records,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// How a write ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted by the backend.
    Saved,
    /// Backend unreachable; applied locally only.
    DemoMode,
}

/// Turns a list fetch into page state, substituting `fixtures` on failure.
/// A missing endpoint (404) falls back silently.
pub(crate) fn settle_fetch<T>(
    result: Result<Vec<T>>,
    fixtures: impl FnOnce() -> Vec<T>,
    notifier: &dyn Notifier,
    resource: &str,
) -> ListState<T> {
    match result {
        Ok(records) => {
            tracing::debug!("Fetched {} {}", records.len(), resource);
            ListState::live(records)
        }
        Err(e) => {
            tracing::warn!("Fetching {} failed, showing sample data: {}", resource, e);
            if !e.is_not_found() {
                notifier.error(&format!("Failed to fetch {}", resource));
            }
            ListState::fallback(fixtures())
        }
    }
}

/// Decides between the demo-mode path and a hard failure for a write.
/// Hard failures are notified with `failure` and returned.
pub(crate) fn settle_write(result: Result<()>, notifier: &dyn Notifier, failure: &str) -> Result<Outcome> {
    match result {
        Ok(()) => Ok(Outcome::Saved),
        Err(e) if e.is_demo_fallback() => {
            tracing::info!("Backend unavailable, applying locally: {}", e);
            Ok(Outcome::DemoMode)
        }
        Err(e) => {
            notifier.error(failure);
            Err(e)
        }
    }
}

pub(crate) fn demo_id() -> String {
    format!("demo-{}", uuid::Uuid::new_v4())
}

pub const UNKNOWN_USER_NAME: &str = "Unknown User";
pub const UNKNOWN_USER_EMAIL: &str = "unknown@example.com";

/// Display name and email for `user_id`, looked up in the last fetched user
/// list. Placeholders when the user is not there.
pub fn resolve_user(users: &[User], user_id: &str) -> (String, String) {
    users
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| (u.name.clone(), u.email.clone()))
        .unwrap_or_else(|| (UNKNOWN_USER_NAME.to_string(), UNKNOWN_USER_EMAIL.to_string()))
}
