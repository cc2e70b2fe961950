use super::order::OrderItem;
use serde::{Deserialize, Serialize};

/// Rendered content handed to a channel. Chat channels only use `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

impl Message {
    pub fn text(subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            text: text.into(),
            html: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
    /// No destination was supplied for this recipient.
    Skipped,
}

impl DeliveryStatus {
    pub fn is_failed(&self) -> bool {
        *self == Self::Failed
    }
}

/// Per-recipient outcome of one dispatch.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct NotificationReport {
    pub admin: DeliveryStatus,
    pub customer: DeliveryStatus,
}

/// Data for the standalone email notification.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
}
