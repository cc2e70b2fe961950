use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "INR";

/// What the payment provider is asked to create.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentOrderRequest {
    /// Smallest currency unit (paise for INR).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

/// The provider's record of a pending charge.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
}

/// What the storefront needs to open the provider checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentIntent {
    #[serde(rename = "orderId")]
    pub intent_id: String,
    #[serde(rename = "key")]
    pub public_key: String,
    pub amount: u64,
    pub currency: String,
}
