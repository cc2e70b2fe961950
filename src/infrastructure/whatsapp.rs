use super::http_client::{check_status, transport_error};
use crate::domain::notification::Message;
use crate::domain::ports::NotificationChannel;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

const PROVIDER: &str = "whatsapp";

#[derive(Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    messaging_product: &'static str,
    to: &'a str,
    r#type: &'static str,
    text: TextBody<'a>,
}

/// Sends plain-text chat messages through the WhatsApp Business Cloud API.
pub struct WhatsAppChannel {
    client: Client,
    api_url: String,
    phone_number_id: String,
    access_token: String,
}

impl WhatsAppChannel {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        phone_number_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            phone_number_id: phone_number_id.into(),
            access_token: access_token.into(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.api_url, self.phone_number_id)
    }
}

#[async_trait]
impl NotificationChannel for WhatsAppChannel {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn send(&self, destination: &str, message: &Message) -> Result<()> {
        let body = OutboundMessage {
            messaging_product: "whatsapp",
            to: destination,
            r#type: "text",
            text: TextBody {
                body: &message.text,
            },
        };

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        let response = check_status(PROVIDER, response).await?;

        let ack: serde_json::Value = response.json().await.unwrap_or_default();
        debug!(to = destination, ?ack, "whatsapp message accepted");
        Ok(())
    }
}
