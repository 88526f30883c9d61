//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Dialog  │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       checkout            │
//! │                   update_cart_item                  (checkout.rs)       │
//! │                   remove_from_cart                       │              │
//! │                        │                                 │              │
//! │                        ▼                                 ▼              │
//! │                   clear_cart / logout ───────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState};

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.snapshot()
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new line
/// - Prices are always read from the catalog, never stored in the line
///
/// ## Arguments
/// * `product_id` - Catalog id of the product
/// * `quantity` - Quantity to add (default: 1)
///
/// ## Errors
/// - `NOT_FOUND` for an unknown product
/// - `VALIDATION_ERROR` for a non-positive or too large quantity
/// - `CART_ERROR` when the cart already holds the maximum number of lines
pub fn add_to_cart(
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    Ok(cart.add(product_id, quantity)?)
}

/// Updates the quantity of a product in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Quantity > max: returns error
/// - Product not in cart: nothing changes
pub fn update_cart_item(
    cart: &CartState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    Ok(cart.set_quantity(product_id, quantity)?)
}

/// Removes a product from the cart; removing an absent product is a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    Ok(cart.remove(product_id)?)
}

/// Clears all items from the cart.
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CatalogState;

    fn cart_state() -> CartState {
        CartState::new(CatalogState::default().shared())
    }

    #[test]
    fn test_worked_example() {
        let cart = cart_state();

        let r = add_to_cart(&cart, "1", Some(2)).unwrap();
        assert_eq!(r.totals.item_count, 2);
        assert_eq!(r.totals.total_price.rupiah(), 30_000);

        let r = add_to_cart(&cart, "1", None).unwrap();
        assert_eq!(r.items[0].quantity, 3);
        assert_eq!(r.totals.total_price.rupiah(), 45_000);

        let r = add_to_cart(&cart, "2", Some(1)).unwrap();
        assert_eq!(r.totals.item_count, 4);
        assert_eq!(r.totals.total_price.rupiah(), 70_000);

        let r = update_cart_item(&cart, "1", 0).unwrap();
        assert_eq!(r.totals.item_count, 1);
        assert_eq!(r.totals.total_price.rupiah(), 25_000);
        assert!(r.items.iter().all(|item| item.product_id != "1"));
    }

    #[test]
    fn test_add_errors() {
        let cart = cart_state();

        let err = add_to_cart(&cart, "nope", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_cart(&cart, "1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&cart, "1", Some(1_000)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_update_absent_item_is_noop() {
        let cart = cart_state();
        add_to_cart(&cart, "1", Some(1)).unwrap();

        let r = update_cart_item(&cart, "3", 5_000).unwrap();
        assert_eq!(r.items.len(), 1);
        assert_eq!(r.totals.item_count, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let cart = cart_state();
        add_to_cart(&cart, "3", Some(2)).unwrap();
        add_to_cart(&cart, "4", Some(1)).unwrap();

        let r = remove_from_cart(&cart, "3").unwrap();
        assert_eq!(r.items.len(), 1);

        let r = remove_from_cart(&cart, "3").unwrap();
        assert_eq!(r.items.len(), 1);

        let r = clear_cart(&cart);
        assert!(r.items.is_empty());
        assert_eq!(r.totals.total_price.rupiah(), 0);
    }
}
