//! # Checkout Command
//!
//! Turns the cart into an order summary.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart screen: [ Checkout ]                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Signed in? ── no ──► UNAUTHENTICATED                                  │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  CartState::checkout() ── empty ──► CART_ERROR ("Cart is empty")       │
//! │       │ lines taken, cart cleared, CheckedOut published                 │
//! │       ▼                                                                 │
//! │  OrderSummary { order number, lines, totals, display strings }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Confirmation dialog                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders are not stored anywhere; the summary is the whole record.

use breadstore_core::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, SessionState};

/// The confirmation shown after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: Uuid,
    /// Short human-facing number, e.g. `ORD-261018-143005-3F2A`
    pub order_number: String,
    pub store_name: String,
    pub customer_email: String,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub item_count: i64,
    pub total: Money,
    /// `total` formatted with the configured currency
    pub total_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
    pub line_total_display: String,
}

/// Places an order for everything in the cart and empties it.
///
/// ## Errors
/// - `UNAUTHENTICATED` when nobody is signed in
/// - `CART_ERROR` when the cart is empty
pub fn checkout(
    session: &SessionState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<OrderSummary, ApiError> {
    debug!("checkout command");

    let customer = session.current().ok_or_else(ApiError::unauthenticated)?;

    let order_id = Uuid::new_v4();
    let placed_at = Utc::now();
    let order_number = order_number(&order_id, placed_at);

    let taken = cart.checkout(&order_number)?;

    let summary = OrderSummary {
        order_id,
        order_number,
        store_name: config.store_name.clone(),
        customer_email: customer.email,
        placed_at,
        lines: taken
            .items
            .into_iter()
            .map(|item| OrderLine {
                line_total_display: config.format_currency(item.line_total),
                product_id: item.product_id,
                name: item.name,
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total,
            })
            .collect(),
        item_count: taken.totals.item_count,
        total: taken.totals.total_price,
        total_display: config.format_currency(taken.totals.total_price),
    };

    info!(
        order = %summary.order_number,
        customer = %summary.customer_email,
        items = summary.item_count,
        total = %summary.total,
        "Order placed"
    );

    Ok(summary)
}

fn order_number(order_id: &Uuid, placed_at: DateTime<Utc>) -> String {
    let suffix: String = order_id
        .simple()
        .to_string()
        .chars()
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("ORD-{}-{}", placed_at.format("%y%m%d-%H%M%S"), suffix)
}
