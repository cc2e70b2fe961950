use super::http_client::{check_status, transport_error};
use crate::domain::notification::Message;
use crate::domain::ports::NotificationChannel;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

const PROVIDER: &str = "email";

#[derive(Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

/// Sends email through a transactional email HTTP API (`POST {base}/emails`).
pub struct EmailChannel {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl EmailChannel {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn send(&self, destination: &str, message: &Message) -> Result<()> {
        let body = OutboundEmail {
            from: &self.from,
            to: [destination],
            subject: &message.subject,
            text: &message.text,
            html: message.html.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        check_status(PROVIDER, response).await?;

        debug!(to = destination, subject = %message.subject, "email accepted");
        Ok(())
    }
}
