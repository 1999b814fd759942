use crate::client::ApiClient;
use crate::error::Result;
use crate::models::envelope::PaymentsPayload;
use crate::models::{Envelope, Payment};

pub const PAYMENT_HISTORY_PATH: &str = "/payment/history";

#[derive(Clone)]
pub struct PaymentRepository {
    client: ApiClient,
}

impl PaymentRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn history(&self) -> Result<Vec<Payment>> {
        let envelope: Envelope<PaymentsPayload> = self.client.get(PAYMENT_HISTORY_PATH).await?;
        Ok(envelope.data.payments)
    }
}
