//! # Cart State
//!
//! Owns the session's shopping cart and announces every change.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//!
//! ## Change Notifications
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Command                  Cart change            Event published        │
//! │  ───────                  ───────────            ───────────────        │
//! │  add_to_cart() ─────────► cart.add() ──────────► ItemAdded              │
//! │  update_cart_item() ────► cart.set_quantity() ─► QuantityChanged /      │
//! │                                                  ItemRemoved            │
//! │  remove_from_cart() ────► cart.remove() ───────► ItemRemoved            │
//! │  clear_cart() / logout ─► cart.clear() ────────► Cleared                │
//! │  checkout() ────────────► snapshot + clear ────► CheckedOut             │
//! │                                                                         │
//! │  Subscribers: cart badge, cart screen, logging (any number)            │
//! │  No-ops (removing an absent product) publish nothing.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use breadstore_core::{Cart, CartTotals, Catalog, CoreError, CoreResult, Money};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

/// Events buffered per subscriber before the slowest one starts lagging.
const EVENT_CAPACITY: usize = 64;

// =============================================================================
// Response Types
// =============================================================================

/// One cart line as the cart screen renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub emoji: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// Cart contents plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemView>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart
                .lines_with_products()
                .map(|(line, product)| CartItemView {
                    product_id: line.product_id.clone(),
                    name: product.name.clone(),
                    emoji: product.emoji.clone(),
                    unit_price: product.price,
                    quantity: line.quantity,
                    line_total: cart.line_total(line),
                })
                .collect(),
            totals: cart.totals(),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartChange {
    /// A product was added or its line grew.
    ItemAdded { product_id: String, quantity: i64 },
    QuantityChanged { product_id: String, quantity: i64 },
    ItemRemoved { product_id: String },
    Cleared,
    /// The cart was turned into an order and emptied.
    CheckedOut { order_id: String },
}

/// A change and the totals right after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEvent {
    pub change: CartChange,
    pub totals: CartTotals,
}

// =============================================================================
// Cart State
// =============================================================================

/// Shared cart state with change notifications.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    events: broadcast::Sender<CartEvent>,
}

impl CartState {
    /// Creates an empty cart over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        CartState {
            cart: Arc::new(Mutex::new(Cart::new(catalog))),
            events,
        }
    }

    /// Subscribes to cart changes.
    ///
    /// Receivers only see events published after they subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_lib::state::{CartResponse, CartState};
    /// use breadstore_core::Catalog;
    /// use std::sync::Arc;
    ///
    /// let cart_state = CartState::new(Arc::new(Catalog::bakery()));
    /// let response = cart_state.with_cart(|cart| CartResponse::from(cart));
    /// assert!(response.items.is_empty());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Current contents and totals.
    pub fn snapshot(&self) -> CartResponse {
        self.with_cart(|cart| CartResponse::from(cart))
    }

    /// Adds a product (merging into its line) and publishes `ItemAdded`.
    pub fn add(&self, product_id: &str, quantity: i64) -> CoreResult<CartResponse> {
        self.mutate(|cart| {
            cart.add(product_id, quantity)?;
            Ok(Some(CartChange::ItemAdded {
                product_id: product_id.to_string(),
                quantity: cart.quantity_of(product_id),
            }))
        })
    }

    /// Sets a line's quantity; zero or less removes the line.
    pub fn set_quantity(&self, product_id: &str, quantity: i64) -> CoreResult<CartResponse> {
        self.mutate(|cart| {
            let before = cart.quantity_of(product_id);
            cart.set_quantity(product_id, quantity)?;
            let after = cart.quantity_of(product_id);

            Ok(match (before, after) {
                (0, _) => None,
                (_, 0) => Some(CartChange::ItemRemoved {
                    product_id: product_id.to_string(),
                }),
                (b, a) if a != b => Some(CartChange::QuantityChanged {
                    product_id: product_id.to_string(),
                    quantity: a,
                }),
                _ => None,
            })
        })
    }

    /// Removes a product's line if present.
    pub fn remove(&self, product_id: &str) -> CoreResult<CartResponse> {
        self.mutate(|cart| {
            Ok(cart
                .remove(product_id)
                .map(|line| CartChange::ItemRemoved {
                    product_id: line.product_id,
                }))
        })
    }

    /// Empties the cart; publishes `Cleared` unless it was already empty.
    pub fn clear(&self) -> CartResponse {
        let mut cart = self.lock();
        let was_empty = cart.is_empty();
        cart.clear();
        let response = CartResponse::from(&*cart);
        drop(cart);

        if !was_empty {
            self.publish(CartChange::Cleared, response.totals);
        }
        response
    }

    /// Takes the cart contents for an order and empties the cart atomically.
    ///
    /// ## Errors
    /// `CoreError::EmptyCart` when there is nothing to check out; the cart
    /// is left untouched.
    pub fn checkout(&self, order_id: &str) -> CoreResult<CartResponse> {
        let mut cart = self.lock();
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let taken = CartResponse::from(&*cart);
        cart.clear();
        let totals = cart.totals();
        drop(cart);

        self.publish(
            CartChange::CheckedOut {
                order_id: order_id.to_string(),
            },
            totals,
        );
        Ok(taken)
    }

    /// Applies a change under the lock, then publishes it (if any) after
    /// releasing the lock.
    fn mutate<F>(&self, f: F) -> CoreResult<CartResponse>
    where
        F: FnOnce(&mut Cart) -> CoreResult<Option<CartChange>>,
    {
        let mut cart = self.lock();
        let change = f(&mut cart)?;
        let response = CartResponse::from(&*cart);
        drop(cart);

        if let Some(change) = change {
            self.publish(change, response.totals);
        }
        Ok(response)
    }

    fn publish(&self, change: CartChange, totals: CartTotals) {
        // Err only means nobody is subscribed right now
        if self.events.send(CartEvent { change, totals }).is_err() {
            trace!("Cart event dropped: no subscribers");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A panic mid-update cannot break cart invariants (every operation
        // validates before mutating), so a poisoned lock is still usable.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    fn cart_state() -> CartState {
        CartState::new(Arc::new(Catalog::bakery()))
    }

    fn next_change(rx: &mut broadcast::Receiver<CartEvent>) -> CartChange {
        rx.try_recv().expect("an event").change
    }

    #[test]
    fn test_add_returns_items_and_totals() {
        let state = cart_state();
        state.add("1", 2).unwrap();
        let response = state.add("2", 1).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name, "Roti Tawar Premium");
        assert_eq!(response.items[0].line_total.rupiah(), 30_000);
        assert_eq!(response.totals.item_count, 3);
        assert_eq!(response.totals.total_price.rupiah(), 55_000);
    }

    #[test]
    fn test_events_follow_operations() {
        let state = cart_state();
        let mut rx = state.subscribe();

        state.add("1", 2).unwrap();
        state.add("1", 1).unwrap();
        state.set_quantity("1", 5).unwrap();
        state.set_quantity("1", 0).unwrap();

        assert_eq!(
            next_change(&mut rx),
            CartChange::ItemAdded {
                product_id: "1".to_string(),
                quantity: 2
            }
        );
        assert_eq!(
            next_change(&mut rx),
            CartChange::ItemAdded {
                product_id: "1".to_string(),
                quantity: 3
            }
        );
        assert_eq!(
            next_change(&mut rx),
            CartChange::QuantityChanged {
                product_id: "1".to_string(),
                quantity: 5
            }
        );
        let removed = rx.try_recv().unwrap();
        assert_eq!(
            removed.change,
            CartChange::ItemRemoved {
                product_id: "1".to_string()
            }
        );
        assert_eq!(removed.totals.item_count, 0);
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn test_no_ops_publish_nothing() {
        let state = cart_state();
        let mut rx = state.subscribe();

        state.remove("3").unwrap();
        state.set_quantity("3", 4).unwrap();
        state.clear();

        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn test_rejected_add_publishes_nothing() {
        let state = cart_state();
        let mut rx = state.subscribe();

        assert!(matches!(
            state.add("404", 1),
            Err(CoreError::ProductNotFound(_))
        ));
        assert!(state.add("1", 0).is_err());
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn test_clear_publishes_cleared() {
        let state = cart_state();
        state.add("4", 1).unwrap();
        let mut rx = state.subscribe();

        let response = state.clear();
        assert!(response.items.is_empty());
        assert_eq!(next_change(&mut rx), CartChange::Cleared);
    }

    #[test]
    fn test_checkout_takes_and_clears() {
        let state = cart_state();
        state.add("2", 2).unwrap();
        let mut rx = state.subscribe();

        let taken = state.checkout("ORD-1").unwrap();
        assert_eq!(taken.totals.total_price.rupiah(), 50_000);
        assert!(state.snapshot().items.is_empty());

        let event = rx.try_recv().unwrap();
        assert_eq!(
            event.change,
            CartChange::CheckedOut {
                order_id: "ORD-1".to_string()
            }
        );
        assert_eq!(event.totals.item_count, 0);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let state = cart_state();
        assert!(matches!(state.checkout("ORD-2"), Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = cart_state();
        let other = state.clone();
        other.add("5", 1).unwrap();
        assert_eq!(state.snapshot().totals.item_count, 1);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_value(CartChange::ItemRemoved {
            product_id: "7".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "item_removed");
        assert_eq!(json["product_id"], "7");
    }
}
