use crate::error::{Result, ShopError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// A line of an order, accepted as submitted (no link to the catalog is enforced).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderItem {
    pub name: String,
    pub size: String,
    pub quantity: NonZeroU32,
    pub price: Decimal,
}

impl OrderItem {
    /// `price * quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity.get()))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Order data as the storefront submits it. Every field is optional on the wire;
/// [`OrderRequest::validate`] decides what is required.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<Decimal>,
    pub shipping_address: Option<String>,
    pub phone: Option<String>,
}

/// A validated submission, ready to be stored.
#[derive(Debug, PartialEq, Clone)]
pub struct OrderDraft {
    pub customer: String,
    pub phone: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub shipping_address: Option<String>,
}

impl OrderRequest {
    /// Checks that customer, items and phone are present.
    ///
    /// Blank strings count as missing. An empty item list is accepted: only a missing
    /// list is rejected. A missing total is computed from the items. Line totals that
    /// overflow are rejected too, so every stored item can be rendered.
    pub fn validate(self) -> Result<OrderDraft> {
        let customer = present(self.customer);
        let phone = present(self.phone);
        let (Some(customer), Some(items), Some(phone)) = (customer, self.items, phone) else {
            return Err(ShopError::ValidationError(
                "Missing required fields".to_string(),
            ));
        };

        let items_total = items
            .iter()
            .try_fold(Decimal::ZERO, |sum, item| {
                item.line_total().and_then(|line| sum.checked_add(line))
            })
            .ok_or_else(|| ShopError::ValidationError("Order amount is out of range".to_string()))?;
        let total = self.total.unwrap_or(items_total);

        Ok(OrderDraft {
            customer,
            phone,
            items,
            total,
            shipping_address: self.shipping_address,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A stored order. Field names on the wire follow the storefront client.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "customer")]
    pub customer_name: String,
    pub phone: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub shipping_address: Option<String>,
    pub status: OrderStatus,
}

impl Order {
    pub fn from_draft(id: i64, created_at: DateTime<Utc>, draft: OrderDraft) -> Self {
        Self {
            id,
            created_at,
            customer_name: draft.customer,
            phone: draft.phone,
            items: draft.items,
            total: draft.total,
            shipping_address: draft.shipping_address,
            status: OrderStatus::Pending,
        }
    }
}
