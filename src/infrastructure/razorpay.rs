use super::http_client::{check_status, transport_error};
use crate::domain::payment::{PaymentOrder, PaymentOrderRequest};
use crate::domain::ports::PaymentGateway;
use crate::error::{Result, ShopError};
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "razorpay";

/// Creates payment orders through the Razorpay orders API.
pub struct RazorpayGateway {
    client: Client,
    api_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayGateway {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: PaymentOrderRequest) -> Result<PaymentOrder> {
        let response = self
            .client
            .post(format!("{}/orders", self.api_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let response = check_status(PROVIDER, response).await?;

        response.json::<PaymentOrder>().await.map_err(|e| {
            ShopError::provider(PROVIDER, format!("unreadable order response: {e}"))
        })
    }
}
