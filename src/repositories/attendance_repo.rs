use crate::client::ApiClient;
use crate::error::Result;
use crate::models::CheckIn;

pub const CHECK_IN_PATH: &str = "/attendance/check-in";

/// The backend exposes no attendance listing, only check-in.
#[derive(Clone)]
pub struct AttendanceRepository {
    client: ApiClient,
}

impl AttendanceRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn check_in(&self, user_id: &str) -> Result<()> {
        let body = CheckIn {
            user_id: user_id.to_string(),
        };
        self.client.post_unit(CHECK_IN_PATH, &body).await
    }
}
