use chrono::{DateTime, Utc};

use super::{settle_write, DataSource, Outcome};
use crate::client::ApiClient;
use crate::error::Result;
use crate::fixtures;
use crate::models::{AdminProfile, PasswordChange, ProfileUpdate};
use crate::navigation;
use crate::repositories::AuthRepository;

pub struct ProfileController {
    client: ApiClient,
    repo: AuthRepository,
    pub profile: Option<AdminProfile>,
    pub source: DataSource,
}

impl ProfileController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: AuthRepository::new(client.clone()),
            profile: None,
            source: DataSource::NotLoaded,
        }
    }

    pub async fn load(&mut self, now: DateTime<Utc>) {
        match self.repo.profile().await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.source = DataSource::Live;
            }
            Err(e) => {
                tracing::warn!("Fetching profile failed, showing sample profile: {}", e);
                if !e.is_not_found() {
                    self.client.notifier().error("Failed to fetch profile");
                }
                self.profile = Some(fixtures::admin_profile(now));
                self.source = DataSource::Fallback;
            }
        }
    }

    pub async fn update(&mut self, update: ProfileUpdate, now: DateTime<Utc>) -> Result<Outcome> {
        if let Err(e) = update.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let result = self.repo.update_profile(&update).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to update profile")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("Profile updated successfully");
                self.load(now).await;
            }
            Outcome::DemoMode => {
                if let Some(profile) = self.profile.as_mut() {
                    profile.apply(&update);
                }
                self.client.notifier().success("Profile updated (demo mode)");
            }
        }
        Ok(outcome)
    }

    pub async fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<Outcome> {
        let change = match PasswordChange::new(current, new, confirm) {
            Ok(change) => change,
            Err(e) => {
                self.client.notifier().error(&e.to_string());
                return Err(e);
            }
        };

        let result = self.repo.change_password(&change).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to change password")?;

        match outcome {
            Outcome::Saved => self.client.notifier().success("Password changed successfully"),
            Outcome::DemoMode => self.client.notifier().success("Password changed (demo mode)"),
        }
        Ok(outcome)
    }

    /// Ends every session of this admin. The local token is dropped even
    /// when the backend call fails.
    pub async fn logout_all(&mut self) -> Result<()> {
        if let Err(e) = self.repo.logout_all().await {
            tracing::info!("Logout-all call failed, logging out locally: {}", e);
        }
        self.client.session().clear()?;
        self.profile = None;
        self.source = DataSource::NotLoaded;
        self.client.notifier().success("Logged out from all sessions");
        self.client.navigator().navigate(navigation::LOGIN);
        Ok(())
    }
}
