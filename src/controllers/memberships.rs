use chrono::{DateTime, Utc};

use super::{demo_id, resolve_user, settle_fetch, settle_write, ListState, Outcome};
use crate::client::ApiClient;
use crate::error::Result;
use crate::filters::{self, Choice};
use crate::fixtures;
use crate::models::{Membership, MembershipStatus, NewMembership, User};
use crate::repositories::{MembershipRepository, UserRepository};
use crate::stats::{self, MembershipSummary};

pub struct MembershipsController {
    client: ApiClient,
    repo: MembershipRepository,
    user_repo: UserRepository,
    pub state: ListState<Membership>,
    /// Member directory for the create form and for name lookups.
    pub users: ListState<User>,
    pub search: String,
    pub status: Choice<MembershipStatus>,
}

impl MembershipsController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: MembershipRepository::new(client.clone()),
            user_repo: UserRepository::new(client.clone()),
            state: ListState::default(),
            users: ListState::default(),
            search: String::new(),
            status: Choice::All,
        }
    }

    /// Fetches the member directory and the current memberships side by
    /// side. Each falls back on its own.
    pub async fn load(&mut self) {
        let (users, memberships) = tokio::join!(self.user_repo.list(), self.repo.current());
        let notifier = self.client.notifier();
        self.users = settle_fetch(users, fixtures::users, notifier, "users");
        self.state = settle_fetch(memberships, fixtures::memberships, notifier, "memberships");
        self.fill_names();
    }

    pub async fn reload_memberships(&mut self) {
        let result = self.repo.current().await;
        self.state = settle_fetch(
            result,
            fixtures::memberships,
            self.client.notifier(),
            "memberships",
        );
        self.fill_names();
    }

    /// Fills in blank member names from the user directory.
    fn fill_names(&mut self) {
        for membership in &mut self.state.records {
            if membership.user_name.is_empty() || membership.user_email.is_empty() {
                let (name, email) = resolve_user(&self.users.records, &membership.user_id);
                if membership.user_name.is_empty() {
                    membership.user_name = name;
                }
                if membership.user_email.is_empty() {
                    membership.user_email = email;
                }
            }
        }
    }

    pub fn visible(&self) -> Vec<Membership> {
        filters::search(&self.state.records, &self.search)
            .into_iter()
            .filter(|m| self.status.allows(&m.status))
            .collect()
    }

    pub fn summary(&self, now: DateTime<Utc>) -> MembershipSummary {
        stats::membership_summary(&self.state.records, now)
    }

    pub fn expiring_soon(&self, now: DateTime<Utc>) -> Vec<&Membership> {
        self.state
            .records
            .iter()
            .filter(|m| m.status == MembershipStatus::Active && m.is_expiring_soon(now))
            .collect()
    }

    pub async fn create(&mut self, mut membership: NewMembership) -> Result<Outcome> {
        if let Err(e) = membership.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let (name, email) = resolve_user(&self.users.records, &membership.user_id);
        membership.user_name.get_or_insert(name);
        membership.user_email.get_or_insert(email);

        let result = self.repo.create(&membership).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to create membership")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("Membership created successfully");
                self.reload_memberships().await;
            }
            Outcome::DemoMode => {
                self.state.records.push(Membership {
                    id: demo_id(),
                    user_id: membership.user_id,
                    user_name: membership.user_name.unwrap_or_default(),
                    user_email: membership.user_email.unwrap_or_default(),
                    plan_type: membership.plan_type,
                    start_date: membership.start_date,
                    end_date: membership.end_date,
                    status: MembershipStatus::Active,
                    created_at: Some(Utc::now()),
                });
                self.client.notifier().success("Membership created (demo mode)");
            }
        }
        Ok(outcome)
    }

    pub async fn delete(&mut self, id: &str) -> Result<Outcome> {
        let result = self.repo.delete(id).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to delete membership")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("Membership deleted successfully");
                self.reload_memberships().await;
            }
            Outcome::DemoMode => {
                self.state.records.retain(|m| m.id != id);
                self.client.notifier().success("Membership deleted (demo mode)");
            }
        }
        Ok(outcome)
    }
}
