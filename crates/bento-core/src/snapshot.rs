//! # Cart Snapshots
//!
//! Read-only view of cart state, plus the `Renderer` seam that consumes it.
//!
//! ## Data Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │              Cart ──► Snapshot ──► Renderer                      │
//! │                                                                  │
//! │   Cart (mutable, owns state)                                     │
//! │     │                                                            │
//! │     │  CartSnapshot::from(&cart)     derives everything fresh    │
//! │     ▼                                                            │
//! │   CartSnapshot (plain data, serializable)                        │
//! │     │                                                            │
//! │     │  renderer.render(&snapshot)    display-only, no mutation   │
//! │     ▼                                                            │
//! │   Renderer impl (terminal, test recorder, ...)                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart never draws and renderers never mutate: all coupling between
//! the two runs through these plain-data types. Swapping the display
//! layer means writing another `Renderer` impl, nothing more.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::money::Money;

// =============================================================================
// Snapshot DTOs
// =============================================================================

/// Display state for a single item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub name: String,
    pub price: Money,
    pub selected_quantity: u32,
    pub line_total: Money,
    /// True when the row should carry the "in the cart" highlight.
    pub is_selected: bool,
}

/// Order-level aggregates, all derived from the items at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub order_total: Money,
    /// Cart badge number: total selected quantity across all items.
    pub selected_item_count: u64,
    pub minimum_delivery_amount: Money,
    pub meets_delivery_minimum: bool,
    /// `minimum - total`, captured unconditionally. Display-worthy only
    /// while `meets_delivery_minimum` is false.
    pub amount_needed_for_delivery: Money,
}

/// Everything a display layer needs to draw one frame.
///
/// ## Example
/// ```rust
/// use bento_core::{Cart, CartSnapshot, MenuItem, Money};
///
/// let menu = vec![MenuItem::new("Wrap", Money::from_units(66))];
/// let mut cart = Cart::new(menu, Money::from_units(100)).unwrap();
/// cart.increment(0).unwrap();
///
/// let snapshot = CartSnapshot::from(&cart);
/// assert_eq!(snapshot.totals.order_total, Money::from_units(66));
/// assert!(snapshot.items[0].is_selected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// One row per menu entry, in menu order.
    pub items: Vec<ItemSnapshot>,
    pub totals: CartTotals,
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&CartItem> for ItemSnapshot {
    fn from(item: &CartItem) -> Self {
        ItemSnapshot {
            name: item.menu_item().name.clone(),
            price: item.menu_item().price,
            selected_quantity: item.selected_quantity(),
            line_total: item.line_total(),
            is_selected: item.is_selected(),
        }
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            order_total: cart.order_total(),
            selected_item_count: cart.selected_item_count(),
            minimum_delivery_amount: cart.minimum_delivery_amount(),
            meets_delivery_minimum: cart.meets_delivery_minimum(),
            amount_needed_for_delivery: cart.amount_needed_for_delivery(),
        }
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items().iter().map(ItemSnapshot::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Renderer Seam
// =============================================================================

/// Anything that can draw a cart frame.
///
/// Takes `&mut self` so implementations can hold an output handle or
/// accumulate frames; takes the snapshot by reference and returns
/// nothing, so rendering can never feed back into cart state.
pub trait Renderer {
    fn render(&mut self, snapshot: &CartSnapshot);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn sample_cart() -> Cart {
        Cart::new(
            vec![
                MenuItem::new("Wrap", Money::from_units(66)),
                MenuItem::new("Salmon", Money::from_units(88)),
            ],
            Money::from_units(100),
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_mirrors_cart_state() {
        let mut cart = sample_cart();
        cart.increment(0).unwrap();
        cart.increment(1).unwrap();
        cart.increment(1).unwrap();

        let snapshot = CartSnapshot::from(&cart);
        assert_eq!(snapshot.items.len(), 2);

        assert_eq!(snapshot.items[0].name, "Wrap");
        assert_eq!(snapshot.items[0].selected_quantity, 1);
        assert_eq!(snapshot.items[0].line_total, Money::from_units(66));
        assert!(snapshot.items[0].is_selected);

        assert_eq!(snapshot.items[1].selected_quantity, 2);
        assert_eq!(snapshot.items[1].line_total, Money::from_units(176));

        assert_eq!(snapshot.totals.order_total, Money::from_units(242));
        assert_eq!(snapshot.totals.selected_item_count, 3);
        assert!(snapshot.totals.meets_delivery_minimum);
        assert_eq!(
            snapshot.totals.amount_needed_for_delivery,
            Money::from_units(-142)
        );
    }

    #[test]
    fn test_snapshot_of_empty_selection() {
        let snapshot = CartSnapshot::from(&sample_cart());

        assert!(snapshot.items.iter().all(|row| !row.is_selected));
        assert_eq!(snapshot.totals.order_total, Money::zero());
        assert_eq!(snapshot.totals.selected_item_count, 0);
        assert!(!snapshot.totals.meets_delivery_minimum);
        assert_eq!(
            snapshot.totals.amount_needed_for_delivery,
            Money::from_units(100)
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_cart() {
        let mut cart = sample_cart();
        cart.increment(0).unwrap();
        let snapshot = CartSnapshot::from(&cart);

        // Later mutations do not reach an already captured snapshot
        cart.increment(0).unwrap();
        assert_eq!(snapshot.totals.order_total, Money::from_units(66));
        assert_eq!(cart.order_total(), Money::from_units(132));
    }

    #[test]
    fn test_snapshot_serializes_with_camel_case_keys() {
        let mut cart = sample_cart();
        cart.increment(0).unwrap();

        let json = serde_json::to_string(&CartSnapshot::from(&cart)).unwrap();
        assert!(json.contains("\"orderTotal\":66"));
        assert!(json.contains("\"selectedQuantity\":1"));
        assert!(json.contains("\"meetsDeliveryMinimum\":false"));
        assert!(json.contains("\"amountNeededForDelivery\":34"));

        let back: CartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CartSnapshot::from(&cart));
    }

    #[test]
    fn test_renderer_receives_each_frame() {
        struct Recording {
            frames: Vec<CartSnapshot>,
        }
        impl Renderer for Recording {
            fn render(&mut self, snapshot: &CartSnapshot) {
                self.frames.push(snapshot.clone());
            }
        }

        let mut cart = sample_cart();
        let mut recorder = Recording { frames: Vec::new() };

        recorder.render(&CartSnapshot::from(&cart));
        cart.increment(0).unwrap();
        recorder.render(&CartSnapshot::from(&cart));

        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(recorder.frames[0].totals.order_total, Money::zero());
        assert_eq!(recorder.frames[1].totals.order_total, Money::from_units(66));
    }
}
