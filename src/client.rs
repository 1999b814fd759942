use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::navigation::{self, Navigator};
use crate::notify::Notifier;
use crate::session::SessionStore;

/// The only 401 message that ends the session. Any other wording leaves
/// the token in place.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token expired";
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please login again.";
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared client for every backend call.
///
/// Outgoing requests get the session's bearer token. Failed responses are
/// triaged once here (expiry logout or a notification) and then handed back
/// to the caller unchanged.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<Config>,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: Config,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
            notifier,
            navigator,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        decode(response).await
    }

    /// POST whose response body is not needed beyond the status.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
            .map(drop)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        decode(response).await
    }

    pub async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
            .map(drop)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path))
            .await
            .map(drop)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let builder = self.http.request(method, self.config.endpoint(path));
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request failed before a response: {}", e);
                self.notifier.error(GENERIC_FAILURE_NOTICE);
                return Err(AppError::Network(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Err(self.triage_failure(status, message))
    }

    fn triage_failure(&self, status: StatusCode, message: Option<String>) -> AppError {
        tracing::warn!(
            "Backend error {}: {}",
            status,
            message.as_deref().unwrap_or("<no message>")
        );

        if status == StatusCode::UNAUTHORIZED && message.as_deref() == Some(TOKEN_EXPIRED_MESSAGE) {
            if let Err(e) = self.session.clear() {
                tracing::error!("Failed to clear expired session: {}", e);
            }
            self.notifier.error(SESSION_EXPIRED_NOTICE);
            self.navigator.navigate(navigation::LOGIN);
        } else {
            self.notifier
                .error(message.as_deref().unwrap_or(GENERIC_FAILURE_NOTICE));
        }

        AppError::Status { status, message }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
