use super::AppState;
use crate::domain::notification::{EmailNotification, NotificationReport};
use crate::domain::order::{Order, OrderRequest};
use crate::domain::product::Product;
use crate::error::ShopError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub success: bool,
    pub order_id: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notifications: Option<NotificationReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogOverview {
    pub message: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateIntentRequest {
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Malformed JSON is a client error; an oversized body keeps its 413.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StatusCode::PAYLOAD_TOO_LARGE
    } else {
        StatusCode::BAD_REQUEST
    }
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

pub async fn catalog_overview(State(state): State<AppState>) -> Json<CatalogOverview> {
    Json(CatalogOverview {
        message: "Welcome to LeosTrend T-Shirt Business API".to_string(),
        products: state.catalog.products().to_vec(),
    })
}

pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected order body");
            return (
                rejection_status(&rejection),
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match state.orders.submit(request).await {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(OrderCreated {
                success: true,
                order_id: submission.order.id,
                message: "Order placed successfully".to_string(),
                notifications: submission.notifications,
            }),
        )
            .into_response(),
        Err(ShopError::ValidationError(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "order processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to process order" })),
            )
                .into_response()
        }
    }
}

pub async fn list_orders(State(state): State<AppState>) -> Response {
    match state.orders.list_all().await {
        Ok(orders) => Json::<Vec<Order>>(orders).into_response(),
        Err(e) => {
            error!(error = %e, "listing orders failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to list orders" })),
            )
                .into_response()
        }
    }
}

pub async fn send_notification(
    State(state): State<AppState>,
    payload: Result<Json<EmailNotification>, JsonRejection>,
) -> Response {
    let notification = match payload {
        Ok(Json(notification)) => notification,
        Err(rejection) => {
            return (
                rejection_status(&rejection),
                Json(json!({ "success": false, "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match state.notifier.send_email_notification(&notification).await {
        Ok(report) => Json(json!({
            "success": true,
            "message": "Email sent successfully",
            "notifications": report,
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "email notification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "details": e.details(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn create_payment_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateIntentRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (
                rejection_status(&rejection),
                Json(json!({
                    "error": "Invalid payment request",
                    "details": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    match state
        .payments
        .create_intent(request.amount, request.currency)
        .await
    {
        Ok(intent) => Json(intent).into_response(),
        Err(e @ ShopError::ValidationError(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid payment request", "details": e.details() })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create payment order", "details": e.details() })),
        )
            .into_response(),
    }
}
