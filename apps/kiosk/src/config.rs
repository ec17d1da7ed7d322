//! # Kiosk Configuration
//!
//! Storefront settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BENTO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization and the kiosk is
//! single-threaded, so no locking of any kind.

use serde::{Deserialize, Serialize};

use bento_core::{MenuItem, Money, DEFAULT_MINIMUM_DELIVERY_AMOUNT};
use tracing::warn;

/// Kiosk configuration.
///
/// ## Fields
/// All fields have development defaults; a deployed storefront overrides
/// them through environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskConfig {
    /// Store name (shown in the frame header)
    pub store_name: String,

    /// Order total at or above which delivery becomes available
    pub minimum_delivery_amount: Money,

    /// The menu offered this session, in display order
    pub menu: Vec<MenuItem>,
}

impl Default for KioskConfig {
    /// Returns the development storefront.
    ///
    /// ## Default Values
    /// - Store: "Bento Street Kitchen"
    /// - Delivery minimum: 100
    /// - Menu: four fixed dishes
    fn default() -> Self {
        KioskConfig {
            store_name: "Bento Street Kitchen".to_string(),
            minimum_delivery_amount: DEFAULT_MINIMUM_DELIVERY_AMOUNT,
            menu: vec![
                MenuItem::new("Shawarma Roast Wrap", Money::from_units(66)),
                MenuItem::new("Grilled Salmon Steak", Money::from_units(88)),
                MenuItem::new("Slow-Braised Lamb Shank", Money::from_units(118)),
                MenuItem::new("Truffle Pizza Boat", Money::from_units(68)),
            ],
        }
    }
}

impl KioskConfig {
    /// Creates a KioskConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BENTO_STORE_NAME`: Override store name
    /// - `BENTO_MIN_DELIVERY`: Override delivery minimum (whole units, e.g. "100")
    /// - `BENTO_MENU_JSON`: Override menu, e.g. `[{"name":"Udon","price":42}]`
    ///
    /// Unparseable overrides are logged and skipped, keeping the default.
    pub fn from_env() -> Self {
        let mut config = KioskConfig::default();

        if let Ok(store_name) = std::env::var("BENTO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(minimum) = std::env::var("BENTO_MIN_DELIVERY") {
            match minimum.parse::<i64>() {
                Ok(units) => config.minimum_delivery_amount = Money::from_units(units),
                Err(_) => {
                    warn!(value = %minimum, "BENTO_MIN_DELIVERY is not a whole number, keeping default")
                }
            }
        }

        if let Ok(menu_json) = std::env::var("BENTO_MENU_JSON") {
            match serde_json::from_str::<Vec<MenuItem>>(&menu_json) {
                Ok(menu) if !menu.is_empty() => config.menu = menu,
                Ok(_) => warn!("BENTO_MENU_JSON is an empty menu, keeping default"),
                Err(error) => warn!(%error, "BENTO_MENU_JSON did not parse, keeping default"),
            }
        }

        config
    }
}
