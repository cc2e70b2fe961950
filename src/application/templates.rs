//! Static message templates for order notifications. No localization.

use crate::domain::money::format_price;
use crate::domain::notification::{EmailNotification, Message};
use crate::domain::order::{Order, OrderItem, OrderStatus};

const NOT_AVAILABLE: &str = "N/A";

fn item_line(item: &OrderItem) -> String {
    // Email notifications are not validated, so an overflowing line total can reach here.
    let line_total = item
        .line_total()
        .map(|total| format!("${}", format_price(total)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!(
        "{} (Size: {}) x{}: {}",
        item.name, item.size, item.quantity, line_total
    )
}

/// One line per item, newline separated.
pub fn items_text(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item_line(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<li>` per item, with submitted text escaped.
pub fn items_html(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(&item_line(item))))
        .collect()
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "pending",
    }
}

/// Full order summary sent to the admin's chat.
pub fn admin_order_message(order: &Order) -> Message {
    let text = format!(
        "🛍️ *NEW ORDER RECEIVED!*\n\
         \n\
         📦 *Order #{id}*\n\
         📅 {date}\n\
         \n\
         👤 *Customer Details:*\n\
         Name: {customer}\n\
         Phone: {phone}\n\
         Address: {address}\n\
         \n\
         🛒 *Order Items:*\n\
         {items}\n\
         \n\
         💰 *Total Amount:* ${total}\n\
         \n\
         📊 *Order Status:* {status}\n\
         \n\
         Thank you for your order! We'll process it shortly.",
        id = order.id,
        date = order.created_at.format("%Y-%m-%d"),
        customer = order.customer_name,
        phone = order.phone,
        address = order.shipping_address.as_deref().unwrap_or(NOT_AVAILABLE),
        items = items_text(&order.items),
        total = format_price(order.total),
        status = status_label(order.status),
    );
    Message::text(format!("New order #{}", order.id), text)
}

/// Short confirmation sent to the customer's chat.
pub fn customer_confirmation(order: &Order) -> Message {
    let text = format!(
        "Thank you for your order at LeosTrend T-Shirts! Your order #{} for ${} has been received. \
         We'll notify you when it ships.",
        order.id,
        format_price(order.total)
    );
    Message::text(format!("Order #{} received", order.id), text)
}

/// Order email for the admin inbox.
pub fn admin_email(notification: &EmailNotification) -> Message {
    let customer = notification.customer.as_deref().unwrap_or(NOT_AVAILABLE);
    let phone = notification.phone.as_deref().unwrap_or(NOT_AVAILABLE);
    let email = notification.email.as_deref().unwrap_or(NOT_AVAILABLE);
    let address = notification
        .shipping_address
        .as_deref()
        .unwrap_or(NOT_AVAILABLE);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px; background-color: #f5f5f5;">
  <div style="background: white; padding: 30px; border-radius: 10px;">
    <h2 style="color: #4CAF50;">🛒 New T-Shirt Order</h2>
    <p><strong>Customer Name:</strong> {customer}</p>
    <p><strong>Phone Number:</strong> {phone}</p>
    <p><strong>Email Address:</strong> {email}</p>
    <p><strong>Shipping Address:</strong> {address}</p>
    <h3>Ordered T-Shirts:</h3>
    <ul>{items}</ul>
    <p style="color: #2e7d32;"><strong>Status:</strong> Order received from LeosTrend website.</p>
  </div>
</div>"#,
        customer = escape_html(customer),
        phone = escape_html(phone),
        email = escape_html(email),
        address = escape_html(address),
        items = items_html(&notification.items),
    );

    let text = format!(
        "New T-Shirt Order\n\
         Customer Name: {customer}\n\
         Phone Number: {phone}\n\
         Email Address: {email}\n\
         Shipping Address: {address}\n\
         \n\
         Ordered T-Shirts:\n\
         {items}\n\
         \n\
         Status: Order received from LeosTrend website.",
        items = items_text(&notification.items),
    );

    Message {
        subject: format!("🛒 New T-Shirt Order from {customer}"),
        text,
        html: Some(html),
    }
}

/// Receipt email for the customer, when they left an address.
pub fn customer_email(notification: &EmailNotification) -> Message {
    let customer = notification.customer.as_deref().unwrap_or("there");
    let html = format!(
        "<p>Hi {},</p><p>Thank you for your order at LeosTrend T-Shirts! We have received:</p>\
         <ul>{}</ul><p>We'll notify you when it ships.</p>",
        escape_html(customer),
        items_html(&notification.items),
    );
    let text = format!(
        "Hi {customer},\n\nThank you for your order at LeosTrend T-Shirts! We have received:\n{}\n\n\
         We'll notify you when it ships.",
        items_text(&notification.items),
    );
    Message {
        subject: "Your LeosTrend T-Shirts order".to_string(),
        text,
        html: Some(html),
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` so submitted text is safe in element content
/// and in quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
