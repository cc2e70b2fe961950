use super::notification::Message;
use super::order::{Order, OrderDraft};
use super::payment::{PaymentOrder, PaymentOrderRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assigns an id and `pending` status, appends, and returns the stored order.
    async fn submit(&self, draft: OrderDraft) -> Result<Order>;
    /// Every order in insertion order.
    async fn list_all(&self) -> Result<Vec<Order>>;
}

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
    async fn send(&self, destination: &str, message: &Message) -> Result<()>;
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, request: PaymentOrderRequest) -> Result<PaymentOrder>;
}

pub type OrderStoreRef = Arc<dyn OrderStore>;
pub type ChannelRef = Arc<dyn NotificationChannel>;
pub type PaymentGatewayRef = Arc<dyn PaymentGateway>;
