//! # Storefront Entry Point
//!
//! Runs a scripted shopping session against the bakery catalog and prints
//! each command's JSON response.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults, storefront.toml, environment)
//! 3. Create state objects (CatalogState, CartState, SessionState, ConfigState)
//! 4. Run the session script

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    storefront_lib::run()
}
