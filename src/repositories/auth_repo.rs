use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::envelope::{ProfilePayload, TokenPayload};
use crate::models::{AdminProfile, Envelope, LoginCredentials, PasswordChange, ProfileUpdate};

pub const LOGIN_PATH: &str = "/auth/login";
pub const PROFILE_PATH: &str = "/auth/profile";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
pub const LOGOUT_ALL_PATH: &str = "/auth/logout-all";

#[derive(Serialize)]
struct Empty {}

#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a session token. Does not store it.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String> {
        let envelope: Envelope<TokenPayload> = self.client.post(LOGIN_PATH, credentials).await?;
        Ok(envelope.data.token)
    }

    pub async fn profile(&self) -> Result<AdminProfile> {
        let envelope: Envelope<ProfilePayload> = self.client.get(PROFILE_PATH).await?;
        Ok(envelope.data.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.client.put_unit(PROFILE_PATH, update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.client.post_unit(CHANGE_PASSWORD_PATH, change).await
    }

    pub async fn logout_all(&self) -> Result<()> {
        self.client.post_unit(LOGOUT_ALL_PATH, &Empty {}).await
    }
}
