//! Adapters for the domain ports: the in-memory order store and the provider clients.

pub mod email;
pub mod http_client;
pub mod in_memory;
pub mod razorpay;
pub mod whatsapp;
