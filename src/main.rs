use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_intake::application::notifier::{AdminContacts, Notifier};
use order_intake::application::orders::OrderService;
use order_intake::application::payments::PaymentService;
use order_intake::config::Config;
use order_intake::domain::ports::{ChannelRef, OrderStoreRef, PaymentGatewayRef};
use order_intake::domain::product::Catalog;
use order_intake::infrastructure::email::EmailChannel;
use order_intake::infrastructure::http_client::build_client;
use order_intake::infrastructure::in_memory::InMemoryOrderStore;
use order_intake::infrastructure::razorpay::RazorpayGateway;
use order_intake::infrastructure::whatsapp::WhatsAppChannel;
use order_intake::interfaces::http::{AppState, router};
use order_intake::telemetry::setup_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_tracing();

    let client = build_client(config.provider_timeout()).into_diagnostic()?;

    // Provider adapters
    let chat: ChannelRef = Arc::new(WhatsAppChannel::new(
        client.clone(),
        &config.whatsapp_api_url,
        &config.whatsapp_phone_number_id,
        &config.whatsapp_access_token,
    ));
    let email: ChannelRef = Arc::new(EmailChannel::new(
        client.clone(),
        &config.email_api_url,
        &config.email_api_key,
        &config.email_from,
    ));
    let gateway: PaymentGatewayRef = Arc::new(RazorpayGateway::new(
        client,
        &config.razorpay_api_url,
        &config.razorpay_key_id,
        &config.razorpay_key_secret,
    ));

    // Orders live in memory for the lifetime of the process
    let store: OrderStoreRef = Arc::new(InMemoryOrderStore::new());

    let notifier = Arc::new(Notifier::new(
        chat,
        email,
        AdminContacts {
            phone: config.admin_phone.clone(),
            email: config.admin_email.clone(),
        },
    ));
    let state = AppState {
        catalog: Arc::new(Catalog::seeded()),
        orders: Arc::new(OrderService::new(
            store,
            Arc::clone(&notifier),
            config.notify_mode,
        )),
        notifier,
        payments: Arc::new(PaymentService::new(gateway, &config.razorpay_key_id)),
    };

    let app = router(state, config.body_limit_bytes());
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .into_diagnostic()?;
    info!(
        addr = %listener.local_addr().into_diagnostic()?,
        notify_mode = ?config.notify_mode,
        "order intake listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: run until the process is killed.
        std::future::pending::<()>().await;
    }
}
