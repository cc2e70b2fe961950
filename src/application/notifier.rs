use super::templates;
use crate::domain::notification::{DeliveryStatus, EmailNotification, Message, NotificationReport};
use crate::domain::order::Order;
use crate::domain::ports::ChannelRef;
use crate::error::{Result, ShopError};
use tracing::{info, warn};

/// Where the admin receives notifications on each channel.
#[derive(Debug, Clone)]
pub struct AdminContacts {
    pub phone: String,
    pub email: String,
}

/// Renders order notifications and delivers them through the chat and email channels.
///
/// Each delivery is independent: both sends of a dispatch run concurrently, and one
/// failing never stops the other.
pub struct Notifier {
    chat: ChannelRef,
    email: ChannelRef,
    admin: AdminContacts,
}

impl Notifier {
    pub fn new(chat: ChannelRef, email: ChannelRef, admin: AdminContacts) -> Self {
        Self { chat, email, admin }
    }

    /// Chat notifications for a freshly stored order. Never fails: channel errors are
    /// logged and reported as `failed`.
    pub async fn notify_order_placed(&self, order: &Order) -> NotificationReport {
        let admin_message = templates::admin_order_message(order);
        let customer_message = templates::customer_confirmation(order);

        let (admin, customer) = tokio::join!(
            self.chat.send(&self.admin.phone, &admin_message),
            self.chat.send(&order.phone, &customer_message),
        );

        let report = NotificationReport {
            admin: outcome(self.chat.name(), "admin", admin),
            customer: outcome(self.chat.name(), "customer", customer),
        };
        info!(order_id = order.id, ?report, "order notifications dispatched");
        report
    }

    /// Emails the admin and, when an address was supplied, the customer.
    ///
    /// Both sends complete before returning. If any attempted delivery failed, the
    /// admin's error wins, otherwise the customer's is returned.
    pub async fn send_email_notification(
        &self,
        notification: &EmailNotification,
    ) -> Result<NotificationReport> {
        let admin_message = templates::admin_email(notification);
        let customer_target = notification
            .email
            .as_deref()
            .filter(|address| !address.trim().is_empty());

        let (admin, customer) = tokio::join!(
            self.email.send(&self.admin.email, &admin_message),
            self.send_optional(customer_target, templates::customer_email(notification)),
        );

        if let Err(e) = &admin {
            warn!(channel = self.email.name(), recipient = "admin", error = %e, "email delivery failed");
        }
        if let Some(Err(e)) = &customer {
            warn!(channel = self.email.name(), recipient = "customer", error = %e, "email delivery failed");
        }

        match (admin, customer) {
            (Err(e), _) | (Ok(()), Some(Err(e))) => Err(e),
            (Ok(()), customer) => {
                let report = NotificationReport {
                    admin: DeliveryStatus::Sent,
                    customer: match customer {
                        Some(_) => DeliveryStatus::Sent,
                        None => DeliveryStatus::Skipped,
                    },
                };
                info!(?report, "email notification sent");
                Ok(report)
            }
        }
    }

    async fn send_optional(&self, target: Option<&str>, message: Message) -> Option<Result<()>> {
        match target {
            Some(address) => Some(self.email.send(address, &message).await),
            None => None,
        }
    }
}

fn outcome(channel: &str, recipient: &str, result: Result<()>) -> DeliveryStatus {
    match result {
        Ok(()) => DeliveryStatus::Sent,
        Err(e) => {
            log_failure(channel, recipient, &e);
            DeliveryStatus::Failed
        }
    }
}

fn log_failure(channel: &str, recipient: &str, error: &ShopError) {
    match error {
        ShopError::ProviderError { details, .. } => {
            warn!(channel, recipient, error = %error, ?details, "notification delivery failed")
        }
        other => warn!(channel, recipient, error = %other, "notification delivery failed"),
    }
}
