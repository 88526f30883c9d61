//! # Storefront Library
//!
//! Application layer of the bakery storefront: state, sessions and the
//! commands the front end invokes. All business rules live in
//! `breadstore-core`; this crate wires them to shared state, configuration
//! and logging.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (Storefront wiring, tracing, demo run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Shared read-only catalog
//! │   ├── cart.rs     ◄─── Cart state + change notifications
//! │   ├── session.rs  ◄─── Signed-in session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product list / search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── session.rs  ◄─── Login / register / logout
//! │   ├── checkout.rs ◄─── Order summary
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use breadstore_core::{Catalog, Credentials};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartState, CatalogState, ConfigError, ConfigState, SessionState};

/// Every piece of state one storefront instance needs.
///
/// Commands borrow only the fields they use, e.g.
/// `commands::cart::add_to_cart(&app.cart, "1", None)`.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub session: SessionState,
    pub config: ConfigState,
}

impl Storefront {
    /// Builds the storefront over the bakery catalog.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Storefront Startup                                │
    /// │                                                                         │
    /// │  1. Load Configuration ───────────────────────────────────────────────► │
    /// │     • defaults → storefront.toml → BREADSTORE_* environment             │
    /// │                                                                         │
    /// │  2. Initialize State Objects ────────────────────────────────────────► │
    /// │     • CatalogState: the bakery's eight products                         │
    /// │     • CartState: Empty cart with Mutex + broadcast channel              │
    /// │     • SessionState: nobody signed in, configured accounts              │
    /// │     • ConfigState: as loaded                                            │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn new(config: ConfigState) -> Self {
        Storefront::with_catalog(config, Catalog::bakery())
    }

    pub fn with_catalog(config: ConfigState, catalog: Catalog) -> Self {
        let catalog = CatalogState::new(catalog);
        let cart = CartState::new(catalog.shared());
        let session = SessionState::new(Arc::new(config.authenticator()));

        info!(
            store = %config.store_name,
            products = catalog.inner().len(),
            "Storefront initialized"
        );

        Storefront {
            catalog,
            cart,
            session,
            config,
        }
    }

    /// Loads configuration from file and environment, then builds the
    /// storefront.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Storefront::new(ConfigState::load()?))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for the storefront only
/// - Default: INFO, DEBUG for storefront and breadstore_core
///
/// Calling it again is harmless; only the first subscriber is installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,breadstore_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// Runs a scripted shopping session and prints every response as JSON.
///
/// ## Script
/// login → browse → add to cart → change quantity → checkout → logout
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting storefront demo session");

    let app = Storefront::load()?;
    let mut events = app.cart.subscribe();

    print_json(
        "login",
        &commands::session::login(
            &app.session,
            &app.cart,
            &Credentials::new("user@breadstore.id", "user123"),
        )?,
    )?;
    print_json("categories", &commands::catalog::list_categories())?;
    print_json("popular", &commands::catalog::popular_products(&app.catalog))?;
    print_json(
        "browse Pastry",
        &commands::catalog::browse_products(&app.catalog, Some("Pastry"), None),
    )?;

    commands::cart::add_to_cart(&app.cart, "1", Some(2))?;
    commands::cart::add_to_cart(&app.cart, "1", None)?;
    commands::cart::add_to_cart(&app.cart, "2", None)?;
    print_json("cart", &commands::cart::get_cart(&app.cart))?;

    print_json(
        "update quantity",
        &commands::cart::update_cart_item(&app.cart, "1", 2)?,
    )?;

    let order = commands::checkout::checkout(&app.session, &app.cart, &app.config)?;
    print_json("order", &order)?;

    commands::session::logout(&app.session, &app.cart);

    let mut changes = Vec::new();
    while let Ok(event) = events.try_recv() {
        changes.push(event);
    }
    print_json("cart events", &changes)?;

    info!(order = %order.order_number, "Demo session finished");
    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<(), serde_json::Error> {
    println!("== {} ==", label);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadstore_core::{Category, Money, Product, Rating};

    #[test]
    fn test_storefront_wires_shared_catalog() {
        let app = Storefront::new(ConfigState::default());
        commands::cart::add_to_cart(&app.cart, "8", None).unwrap();

        let cart = commands::cart::get_cart(&app.cart);
        assert_eq!(cart.items[0].name, "Danish Pastry");
        assert_eq!(cart.totals.total_price.rupiah(), 28_000);
    }

    #[test]
    fn test_configured_accounts_are_used() {
        let config = ConfigState::from_toml_str(
            r#"
            [[accounts]]
            email = "owner@roti.id"
            password = "owner-pass"
            role = "admin"
            "#,
        )
        .unwrap();
        let app = Storefront::new(config);

        assert!(app
            .session
            .login(&Credentials::new("admin@breadstore.id", "admin123"))
            .is_err());
        let session = app
            .session
            .login(&Credentials::new("owner@roti.id", "owner-pass"))
            .unwrap()
            .session;
        assert!(session.role.is_admin());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![Product {
            id: "sourdough".to_string(),
            name: "Sourdough".to_string(),
            category: Category::RotiKeras,
            price: Money::from_rupiah(45_000),
            description: "Roti asam".to_string(),
            emoji: "🍞".to_string(),
            rating: Rating::default(),
            is_popular: false,
        }])
        .unwrap();
        let app = Storefront::with_catalog(ConfigState::default(), catalog);

        assert_eq!(commands::catalog::list_products(&app.catalog).len(), 1);
        let cart = commands::cart::add_to_cart(&app.cart, "sourdough", Some(2)).unwrap();
        assert_eq!(cart.totals.total_price.rupiah(), 90_000);
    }
}
