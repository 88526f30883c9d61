//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront                                 │   │
//! │  │  owns one of each state and hands references to commands       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────┬────────┴───────┬──────────────────┐              │
//! │      ▼              ▼                ▼                  ▼               │
//! │  ┌────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐     │
//! │  │CatalogState│ │  CartState   │ │ SessionState │ │ ConfigState  │     │
//! │  │            │ │              │ │              │ │              │     │
//! │  │ Arc<       │ │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ store_name   │     │
//! │  │  Catalog>  │ │   Cart>>     │ │  Option<     │ │ currency     │     │
//! │  │            │ │ + broadcast  │ │  Session>>>  │ │ accounts     │     │
//! │  └────────────┘ └──────────────┘ └──────────────┘ └──────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after startup, shared by Arc               │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • SessionState: Protected by Arc<Mutex<T>>                            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod session;

pub use cart::{CartChange, CartEvent, CartItemView, CartResponse, CartState};
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState, CONFIG_PATH_ENV};
pub use session::{Session, SessionState, SignIn};
