#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use order_intake::application::notifier::{AdminContacts, Notifier};
use order_intake::application::orders::OrderService;
use order_intake::application::payments::PaymentService;
use order_intake::config::NotifyMode;
use order_intake::domain::notification::Message;
use order_intake::domain::payment::{PaymentOrder, PaymentOrderRequest};
use order_intake::domain::ports::{NotificationChannel, PaymentGateway};
use order_intake::domain::product::Catalog;
use order_intake::error::{Result, ShopError};
use order_intake::infrastructure::in_memory::InMemoryOrderStore;
use order_intake::interfaces::http::{AppState, router};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const ADMIN_PHONE: &str = "+910000000000";
pub const ADMIN_EMAIL: &str = "admin@leostrend.test";
pub const PUBLIC_KEY: &str = "rzp_test_public";

/// Channel fake: records every send and fails for the listed destinations.
#[derive(Default)]
pub struct RecordingChannel {
    failing: HashSet<String>,
    sent: Mutex<Vec<(String, Message)>>,
}

impl RecordingChannel {
    pub fn failing_for(destinations: &[&str]) -> Self {
        Self {
            failing: destinations.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, Message)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn message_to(&self, destination: &str) -> Option<Message> {
        self.sent()
            .into_iter()
            .find(|(to, _)| to == destination)
            .map(|(_, message)| message)
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, destination: &str, message: &Message) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), message.clone()));
        if self.failing.contains(destination) {
            Err(ShopError::ProviderError {
                provider: "recording",
                message: "delivery refused".to_string(),
                details: Some(json!({ "code": 131026 })),
            })
        } else {
            Ok(())
        }
    }
}

/// Payment gateway fake that echoes the request as a provider order.
#[derive(Default)]
pub struct FakeGateway {
    pub fail: bool,
    pub requests: Mutex<Vec<PaymentOrderRequest>>,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_order(&self, request: PaymentOrderRequest) -> Result<PaymentOrder> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ShopError::ProviderError {
                provider: "razorpay",
                message: "provider responded with 401 Unauthorized".to_string(),
                details: Some(json!({ "error": { "code": "BAD_REQUEST_ERROR" } })),
            });
        }
        Ok(PaymentOrder {
            id: "order_Fake123".to_string(),
            amount: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub chat: Arc<RecordingChannel>,
    pub email: Arc<RecordingChannel>,
    pub gateway: Arc<FakeGateway>,
}

pub struct TestAppBuilder {
    mode: NotifyMode,
    chat: RecordingChannel,
    email: RecordingChannel,
    gateway: FakeGateway,
}

impl TestAppBuilder {
    pub fn mode(mut self, mode: NotifyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn chat(mut self, chat: RecordingChannel) -> Self {
        self.chat = chat;
        self
    }

    pub fn email(mut self, email: RecordingChannel) -> Self {
        self.email = email;
        self
    }

    pub fn gateway(mut self, gateway: FakeGateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn build(self) -> TestApp {
        let chat = Arc::new(self.chat);
        let email = Arc::new(self.email);
        let gateway = Arc::new(self.gateway);

        let notifier = Arc::new(Notifier::new(
            chat.clone(),
            email.clone(),
            AdminContacts {
                phone: ADMIN_PHONE.to_string(),
                email: ADMIN_EMAIL.to_string(),
            },
        ));
        let state = AppState {
            catalog: Arc::new(Catalog::seeded()),
            orders: Arc::new(OrderService::new(
                Arc::new(InMemoryOrderStore::new()),
                notifier.clone(),
                self.mode,
            )),
            notifier,
            payments: Arc::new(PaymentService::new(gateway.clone(), PUBLIC_KEY)),
        };

        TestApp {
            router: router(state, 1024 * 1024),
            chat,
            email,
            gateway,
        }
    }
}

pub fn test_app() -> TestAppBuilder {
    TestAppBuilder {
        mode: NotifyMode::Sync,
        chat: RecordingChannel::default(),
        email: RecordingChannel::default(),
        gateway: FakeGateway::default(),
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

pub fn asha_order() -> Value {
    json!({
        "customer": "Asha",
        "items": [
            { "name": "Om LeosTrend T-Shirt", "size": "M", "quantity": 2, "price": 24.99 }
        ],
        "total": 49.98,
        "shippingAddress": "12 Lotus Rd",
        "phone": "+911234567890"
    })
}

/// Polls until `check` holds or a second has passed.
pub async fn eventually(check: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
