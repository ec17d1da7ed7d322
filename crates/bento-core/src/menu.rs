//! # Menu Types
//!
//! The catalog side of the cart: what can be ordered, at what price.
//!
//! Menu entries are immutable once supplied. The cart keeps its own
//! per-entry selection counters; it never writes back into the menu.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable menu entry.
///
/// Supplied by the environment at startup as an ordered list; the cart
/// preserves that order for the whole session. There is no identifier
/// beyond the position in the list, which is also how the view addresses
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Display name shown to the customer.
    pub name: String,

    /// Price in integer units.
    pub price: Money,
}

impl MenuItem {
    /// Creates a new menu item.
    ///
    /// ## Example
    /// ```rust
    /// use bento_core::menu::MenuItem;
    /// use bento_core::money::Money;
    ///
    /// let item = MenuItem::new("Grilled Salmon Steak", Money::from_units(88));
    /// assert_eq!(item.name, "Grilled Salmon Steak");
    /// assert_eq!(item.price.units(), 88);
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_construction() {
        let item = MenuItem::new("Truffle Pizza Boat", Money::from_units(68));
        assert_eq!(item.name, "Truffle Pizza Boat");
        assert_eq!(item.price, Money::from_units(68));
    }

    #[test]
    fn test_menu_item_json_shape() {
        // Money serializes as its bare integer, so a menu entry is a
        // plain { name, price } record on the wire
        let item = MenuItem::new("Udon", Money::from_units(42));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Udon","price":42}"#);

        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
