use crate::client::ApiClient;
use crate::error::Result;
use crate::models::envelope::UsersPayload;
use crate::models::{Envelope, User, UserUpdate};

pub const USERS_PATH: &str = "/users";

#[derive(Clone)]
pub struct UserRepository {
    client: ApiClient,
}

impl UserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let envelope: Envelope<UsersPayload> = self.client.get(USERS_PATH).await?;
        Ok(envelope.data.users)
    }

    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<()> {
        self.client
            .put_unit(&format!("{}/{}", USERS_PATH, id), update)
            .await
    }
}
