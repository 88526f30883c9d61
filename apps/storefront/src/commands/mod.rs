//! # Commands Module
//!
//! Every operation the storefront front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product list, categories, search
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── session.rs   ◄─── Login, registration, logout
//! ├── checkout.rs  ◄─── Order summary from the cart
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  add_to_cart(&app.cart, "2", Some(1))                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn add_to_cart(                                                        │
//! │      cart: &CartState,        ◄── Only the state it needs              │
//! │      product_id: &str,        ◄── Call arguments                       │
//! │      quantity: Option<i64>,   ◄── Optional param                       │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  Front end receives: { items: [...], totals: {...} }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_products(catalog: &CatalogState, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs session, cart and config
//! fn checkout(session: &SessionState, cart: &CartState, config: &ConfigState)
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod session;
