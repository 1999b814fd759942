use crate::client::ApiClient;
use crate::error::Result;
use crate::models::LoginCredentials;
use crate::navigation;
use crate::repositories::AuthRepository;

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";
pub const LOGIN_FAILURE_NOTICE: &str = "Invalid credentials";

#[derive(Clone)]
pub struct AuthController {
    client: ApiClient,
    repo: AuthRepository,
}

impl AuthController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: AuthRepository::new(client.clone()),
        }
    }

    /// Stores the issued token and moves to the dashboard. On any failure
    /// the session is left without a token and nothing navigates.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let credentials = LoginCredentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        if let Err(e) = credentials.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let token = match self.repo.login(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Login failed for {}: {}", credentials.email, e);
                self.client.notifier().error(LOGIN_FAILURE_NOTICE);
                return Err(e);
            }
        };

        self.client.session().set(&token)?;
        tracing::info!("Logged in as {}", credentials.email);
        self.client.notifier().success(LOGIN_SUCCESS_NOTICE);
        self.client.navigator().navigate(navigation::DASHBOARD);
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.client.session().clear()?;
        tracing::info!("Logged out");
        self.client.notifier().success("Logged out");
        self.client.navigator().navigate(navigation::LOGIN);
        Ok(())
    }
}
