use chrono::{DateTime, NaiveDate, Utc};

use super::{demo_id, resolve_user, settle_fetch, settle_write, ListState, Outcome};
use crate::client::ApiClient;
use crate::error::{AppError, Result};
use crate::filters;
use crate::fixtures;
use crate::models::{AttendanceRecord, User};
use crate::repositories::{AttendanceRepository, UserRepository};
use crate::stats::{self, AttendanceStats, CheckInCounts};

/// Attendance log. The backend has no listing endpoint, so the log starts
/// from sample check-ins and grows with the check-ins made here.
pub struct AttendanceController {
    client: ApiClient,
    repo: AttendanceRepository,
    user_repo: UserRepository,
    pub state: ListState<AttendanceRecord>,
    pub users: ListState<User>,
    pub search: String,
    pub date: Option<NaiveDate>,
}

impl AttendanceController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: AttendanceRepository::new(client.clone()),
            user_repo: UserRepository::new(client.clone()),
            state: ListState::default(),
            users: ListState::default(),
            search: String::new(),
            date: None,
        }
    }

    pub async fn load(&mut self, now: DateTime<Utc>) {
        let result = self.user_repo.list().await;
        self.users = settle_fetch(result, fixtures::users, self.client.notifier(), "users");
        self.state = ListState::fallback(fixtures::attendance(now));
    }

    pub fn visible(&self) -> Vec<AttendanceRecord> {
        filters::search(&self.state.records, &self.search)
            .into_iter()
            .filter(|r| self.date.map_or(true, |day| r.date == day))
            .collect()
    }

    pub fn stats(&self, today: NaiveDate) -> AttendanceStats {
        stats::attendance_stats(&self.state.records, today)
    }

    pub fn user_check_ins(&self, user_id: &str, today: NaiveDate) -> CheckInCounts {
        stats::user_check_ins(&self.state.records, user_id, today)
    }

    /// Records a check-in. The new record goes to the top of the log both
    /// when the backend accepts it and in demo mode.
    pub async fn check_in(&mut self, user_id: &str, now: DateTime<Utc>) -> Result<Outcome> {
        if user_id.trim().is_empty() {
            let e = AppError::Validation("User is required".to_string());
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let result = self.repo.check_in(user_id).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to record check-in")?;

        let (name, email) = resolve_user(&self.users.records, user_id);
        let record = AttendanceRecord::checked_in(demo_id(), user_id, &name, &email, now);
        self.state.records.insert(0, record);

        match outcome {
            Outcome::Saved => self.client.notifier().success("Check-in recorded successfully"),
            Outcome::DemoMode => self.client.notifier().success("Check-in recorded (demo mode)"),
        }
        Ok(outcome)
    }
}
