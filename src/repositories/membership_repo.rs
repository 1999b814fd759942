use crate::client::ApiClient;
use crate::error::Result;
use crate::models::envelope::MembershipsPayload;
use crate::models::{Envelope, Membership, NewMembership};

pub const MEMBERSHIP_PATH: &str = "/membership";
pub const CURRENT_MEMBERSHIPS_PATH: &str = "/membership/current";

#[derive(Clone)]
pub struct MembershipRepository {
    client: ApiClient,
}

impl MembershipRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn current(&self) -> Result<Vec<Membership>> {
        let envelope: Envelope<MembershipsPayload> =
            self.client.get(CURRENT_MEMBERSHIPS_PATH).await?;
        Ok(envelope.data.memberships)
    }

    pub async fn create(&self, membership: &NewMembership) -> Result<()> {
        self.client.post_unit(MEMBERSHIP_PATH, membership).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", MEMBERSHIP_PATH, id))
            .await
    }
}
