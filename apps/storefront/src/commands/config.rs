//! # Config Commands
//!
//! Commands for retrieving application configuration.

use breadstore_core::Money;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (store name on the welcome screen)
/// - Currency formatting in the front end
///
/// Accounts are never serialized, so the returned value is safe to send.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Formats an amount the way the store displays prices ("Rp 15.000").
pub fn format_price(config: &ConfigState, amount: Money) -> String {
    config.format_currency(amount)
}
