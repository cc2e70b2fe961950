//! JSON-over-HTTP surface built on `axum`.
//!
//! Routes are served both at the root and under `/api`, the prefix the storefront
//! client calls.

pub mod handlers;

use crate::application::notifier::Notifier;
use crate::application::orders::OrderService;
use crate::application::payments::PaymentService;
use crate::domain::product::Catalog;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<OrderService>,
    pub notifier: Arc<Notifier>,
    pub payments: Arc<PaymentService>,
}

pub fn router(state: AppState, body_limit: usize) -> Router {
    let routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/leostrend-tshirts", get(handlers::catalog_overview))
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::submit_order),
        )
        .route("/send-notification", post(handlers::send_notification))
        .route("/create-order", post(handlers::create_payment_order));

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(permissive_cors())
        .with_state(state)
}

/// Mirrors the caller's origin so credentialed requests are allowed from anywhere.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
