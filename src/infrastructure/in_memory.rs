use crate::domain::order::{Order, OrderDraft};
use crate::domain::ports::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct OrderLog {
    orders: Vec<Order>,
    last_id: i64,
}

impl OrderLog {
    /// Millisecond timestamp, bumped past the previous id when the clock has not moved.
    fn next_id(&mut self, created_at: DateTime<Utc>) -> i64 {
        let id = created_at.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

/// A thread-safe, append-only in-memory order store.
///
/// Uses `Arc<RwLock<..>>` so the axum handlers can share it. Id generation and the
/// append happen under the same write guard, which keeps ids strictly increasing in
/// insertion order. Contents are lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    log: Arc<RwLock<OrderLog>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn submit(&self, draft: OrderDraft) -> Result<Order> {
        let mut log = self.log.write().await;
        let created_at = Utc::now();
        let id = log.next_id(created_at);
        let order = Order::from_draft(id, created_at, draft);
        log.orders.push(order.clone());
        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let log = self.log.read().await;
        Ok(log.orders.clone())
    }
}
