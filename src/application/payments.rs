use crate::domain::money::Amount;
use crate::domain::payment::{DEFAULT_CURRENCY, PaymentIntent, PaymentOrderRequest};
use crate::domain::ports::PaymentGatewayRef;
use crate::error::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{error, info};

/// Creates payment intents with the provider and pairs them with the public key the
/// storefront checkout needs.
pub struct PaymentService {
    gateway: PaymentGatewayRef,
    public_key: String,
}

impl PaymentService {
    pub fn new(gateway: PaymentGatewayRef, public_key: impl Into<String>) -> Self {
        Self {
            gateway,
            public_key: public_key.into(),
        }
    }

    pub async fn create_intent(
        &self,
        amount: Decimal,
        currency: Option<String>,
    ) -> Result<PaymentIntent> {
        let amount = Amount::new(amount)?;
        let currency = currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let request = PaymentOrderRequest {
            amount: amount.to_minor_units()?,
            currency,
            receipt: format!("receipt_{}", Utc::now().timestamp_millis()),
        };

        let order = self
            .gateway
            .create_order(request)
            .await
            .inspect_err(|e| error!(error = %e, %amount, "payment order creation failed"))?;
        info!(intent_id = %order.id, amount = order.amount, currency = %order.currency, "payment order created");

        Ok(PaymentIntent {
            intent_id: order.id,
            public_key: self.public_key.clone(),
            amount: order.amount,
            currency: order.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentOrder;
    use crate::domain::ports::PaymentGateway;
    use crate::error::ShopError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct EchoGateway {
        requests: Mutex<Vec<PaymentOrderRequest>>,
    }

    #[async_trait]
    impl PaymentGateway for EchoGateway {
        async fn create_order(&self, request: PaymentOrderRequest) -> Result<PaymentOrder> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(PaymentOrder {
                id: "order_test".to_string(),
                amount: request.amount,
                currency: request.currency,
                receipt: Some(request.receipt),
            })
        }
    }

    #[tokio::test]
    async fn test_intent_uses_minor_units_and_default_currency() {
        let gateway = Arc::new(EchoGateway::default());
        let service = PaymentService::new(gateway.clone(), "rzp_test_key");

        let intent = service.create_intent(dec!(500), None).await.unwrap();

        assert_eq!(intent.intent_id, "order_test");
        assert_eq!(intent.public_key, "rzp_test_key");
        assert_eq!(intent.amount, 50000);
        assert_eq!(intent.currency, "INR");

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].amount, 50000);
        assert!(requests[0].receipt.starts_with("receipt_"));
    }

    #[tokio::test]
    async fn test_non_positive_amount_never_reaches_provider() {
        let gateway = Arc::new(EchoGateway::default());
        let service = PaymentService::new(gateway.clone(), "rzp_test_key");

        let err = service.create_intent(dec!(0), None).await.unwrap_err();

        assert!(matches!(err, ShopError::ValidationError(_)));
        assert!(gateway.requests.lock().unwrap().is_empty());
    }
}
