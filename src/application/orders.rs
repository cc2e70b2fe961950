use super::notifier::Notifier;
use crate::config::NotifyMode;
use crate::domain::notification::NotificationReport;
use crate::domain::order::{Order, OrderRequest};
use crate::domain::ports::OrderStoreRef;
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub order: Order,
    /// Present in `sync` mode only; `async` mode does not wait for delivery.
    pub notifications: Option<NotificationReport>,
}

/// Order intake: validates, stores, then dispatches chat notifications.
///
/// Order success never depends on notification success.
pub struct OrderService {
    store: OrderStoreRef,
    notifier: Arc<Notifier>,
    mode: NotifyMode,
}

impl OrderService {
    pub fn new(store: OrderStoreRef, notifier: Arc<Notifier>, mode: NotifyMode) -> Self {
        Self {
            store,
            notifier,
            mode,
        }
    }

    /// Validation runs before anything is stored or sent.
    pub async fn submit(&self, request: OrderRequest) -> Result<Submission> {
        debug!(
            has_customer = request.customer.is_some(),
            has_phone = request.phone.is_some(),
            item_count = request.items.as_ref().map(Vec::len),
            "submit called"
        );
        let draft = request.validate()?;
        let order = self.store.submit(draft).await?;
        info!(order_id = order.id, customer = %order.customer_name, total = %order.total, "order stored");

        let notifications = match self.mode {
            NotifyMode::Sync => Some(self.notifier.notify_order_placed(&order).await),
            NotifyMode::Async => {
                let notifier = Arc::clone(&self.notifier);
                let queued = order.clone();
                tokio::spawn(async move {
                    notifier.notify_order_placed(&queued).await;
                });
                None
            }
        };

        Ok(Submission {
            order,
            notifications,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Order>> {
        self.store.list_all().await
    }
}
