use super::{settle_fetch, settle_write, ListState, Outcome};
use crate::client::ApiClient;
use crate::error::{AppError, Result};
use crate::filters;
use crate::fixtures;
use crate::models::{User, UserUpdate};
use crate::repositories::UserRepository;

pub struct UsersController {
    client: ApiClient,
    repo: UserRepository,
    pub state: ListState<User>,
    pub search: String,
}

impl UsersController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: UserRepository::new(client.clone()),
            state: ListState::default(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) {
        let result = self.repo.list().await;
        self.state = settle_fetch(result, fixtures::users, self.client.notifier(), "users");
    }

    /// Users matching the search box.
    pub fn visible(&self) -> Vec<User> {
        filters::search(&self.state.records, &self.search)
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.state.records.iter().find(|u| u.id == id)
    }

    pub async fn update(&mut self, id: &str, update: UserUpdate) -> Result<Outcome> {
        if let Err(e) = update.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let result = self.repo.update(id, &update).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to update user")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("User updated successfully");
                self.load().await;
            }
            Outcome::DemoMode => {
                let Some(user) = self.state.records.iter_mut().find(|u| u.id == id) else {
                    let e = AppError::Validation(format!("User {} not found", id));
                    self.client.notifier().error(&e.to_string());
                    return Err(e);
                };
                user.apply(&update);
                self.client.notifier().success("User updated (demo mode)");
            }
        }
        Ok(outcome)
    }
}
