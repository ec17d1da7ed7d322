//! # Cart Model
//!
//! Tracks what the customer has selected and what the order costs.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  View Gesture              Cart Operation          State Change         │
//! │  ────────────              ──────────────          ────────────         │
//! │                                                                         │
//! │  Tap "+" on row i ───────► increment(i) ─────────► items[i].qty += 1    │
//! │                                                                         │
//! │  Tap "-" on row i ───────► decrement(i) ─────────► items[i].qty -= 1    │
//! │                                                    (clamped at zero)    │
//! │                                                                         │
//! │  Redraw ─────────────────► order_total() ────────► (read only,          │
//! │                            selected_item_count()    recomputed on       │
//! │                            meets_delivery_minimum() every read, never   │
//! │                            amount_needed_...()      cached)             │
//! │                                                                         │
//! │  Single-threaded by design: one gesture, one mutate-then-read cycle.    │
//! │  No locks, no async, no interleaving.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The cart is an explicitly constructed value owned by its caller. There
//! is no page-wide singleton and no ambient access: whoever drives the UI
//! holds the `Cart` and passes snapshots outward.

use chrono::{DateTime, Utc};

use crate::error::{CartError, CartResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Cart Item
// =============================================================================

/// One menu entry plus its selection counter.
///
/// Created once per menu entry when the cart is built, lives for the
/// whole session, and is only ever mutated through `increment` and
/// `decrement`. The counter is unsigned, so "never negative" holds by
/// type, not by convention.
#[derive(Debug, Clone)]
pub struct CartItem {
    /// The menu entry this counter belongs to (immutable).
    item: MenuItem,

    /// How many of this entry the customer has selected.
    selected_quantity: u32,
}

impl CartItem {
    /// Creates a cart item with nothing selected yet.
    pub fn new(item: MenuItem) -> Self {
        CartItem {
            item,
            selected_quantity: 0,
        }
    }

    /// The menu entry backing this item.
    #[inline]
    pub fn menu_item(&self) -> &MenuItem {
        &self.item
    }

    /// The currently selected quantity.
    #[inline]
    pub fn selected_quantity(&self) -> u32 {
        self.selected_quantity
    }

    /// Adds one to the selected quantity.
    ///
    /// There is no business maximum; the counter saturates at the integer
    /// ceiling rather than wrapping, so this operation has no failure
    /// conditions.
    pub fn increment(&mut self) {
        self.selected_quantity = self.selected_quantity.saturating_add(1);
    }

    /// Removes one from the selected quantity, stopping at zero.
    ///
    /// Decrementing an unselected item is a silent no-op, not an error:
    /// the minus button stays safe to press repeatedly.
    pub fn decrement(&mut self) {
        self.selected_quantity = self.selected_quantity.saturating_sub(1);
    }

    /// Line total for this item: selected quantity times unit price.
    ///
    /// Derived on every read; nothing is cached.
    pub fn line_total(&self) -> Money {
        self.item
            .price
            .multiply_quantity(i64::from(self.selected_quantity))
    }

    /// Whether the customer has selected this item at all.
    ///
    /// Drives the "in the cart" highlight on the item row.
    pub fn is_selected(&self) -> bool {
        self.selected_quantity > 0
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The order being assembled: a fixed, ordered sequence of cart items
/// plus the delivery-minimum threshold.
///
/// ## Invariants
/// - One `CartItem` per menu entry, in menu order; the sequence length
///   is fixed at construction and items are never added or removed
/// - Selected quantities are never negative (unsigned + clamped)
/// - Every aggregate (total, badge count, threshold check) is recomputed
///   from the items on each read; there is no cached aggregate to go
///   stale
///
/// ## Example
/// ```rust
/// use bento_core::{Cart, MenuItem, Money};
///
/// let menu = vec![
///     MenuItem::new("Shawarma Roast Wrap", Money::from_units(66)),
///     MenuItem::new("Grilled Salmon Steak", Money::from_units(88)),
/// ];
/// let mut cart = Cart::new(menu, Money::from_units(100)).unwrap();
///
/// cart.increment(0).unwrap();
/// assert_eq!(cart.order_total(), Money::from_units(66));
/// assert!(!cart.meets_delivery_minimum());
/// assert_eq!(cart.amount_needed_for_delivery(), Money::from_units(34));
/// ```
#[derive(Debug, Clone)]
pub struct Cart {
    /// One entry per menu item, in menu order. Length never changes.
    items: Vec<CartItem>,

    /// Order total at or above which delivery becomes available.
    minimum_delivery_amount: Money,

    /// When this cart (session) was created.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Builds a cart for the given menu and delivery threshold.
    ///
    /// This is the boundary where externally supplied data enters the
    /// core, so it is the one place the data gets validated: every name
    /// must be non-blank and at most 200 characters, and every price, as
    /// well as the threshold itself, must be non-negative.
    ///
    /// ## Errors
    /// Returns `CartError::Validation` when the menu or threshold breaks
    /// those rules.
    pub fn new(menu: Vec<MenuItem>, minimum_delivery_amount: Money) -> CartResult<Self> {
        for entry in &menu {
            validation::validate_menu_item_name(&entry.name)?;
            validation::validate_price(entry.price)?;
        }
        validation::validate_minimum_delivery_amount(minimum_delivery_amount)?;

        Ok(Cart {
            items: menu.into_iter().map(CartItem::new).collect(),
            minimum_delivery_amount,
            created_at: Utc::now(),
        })
    }

    /// Adds one to the item at `index`.
    ///
    /// ## Errors
    /// Returns `CartError::IndexOutOfRange` when `index` is not a valid
    /// position. Invalid indices fail loudly instead of silently doing
    /// nothing, because they always mean unchecked view input.
    pub fn increment(&mut self, index: usize) -> CartResult<()> {
        self.item_mut(index)?.increment();
        Ok(())
    }

    /// Removes one from the item at `index`, clamping at zero.
    ///
    /// ## Errors
    /// Returns `CartError::IndexOutOfRange` when `index` is not a valid
    /// position. An in-range decrement never fails, even at zero.
    pub fn decrement(&mut self, index: usize) -> CartResult<()> {
        self.item_mut(index)?.decrement();
        Ok(())
    }

    /// Bounds-checked mutable access, shared by both mutations.
    fn item_mut(&mut self, index: usize) -> CartResult<&mut CartItem> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })
    }

    /// Read access to the item sequence, in menu order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The delivery-minimum threshold this cart was built with.
    #[inline]
    pub fn minimum_delivery_amount(&self) -> Money {
        self.minimum_delivery_amount
    }

    /// When this cart (session) was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Order total: the sum of all line totals.
    ///
    /// Zero when nothing is selected. Recomputed on every call.
    pub fn order_total(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Money::zero(), |total, line| total + line)
    }

    /// Total selected quantity across all items.
    ///
    /// This is the cart badge number: three wraps and one pizza count as
    /// four. Distinct from `order_total`, which weighs by price.
    pub fn selected_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.selected_quantity()))
            .sum()
    }

    /// Whether the order qualifies for delivery.
    ///
    /// True exactly when `order_total() >= minimum_delivery_amount`. A
    /// pure predicate over current state, re-evaluated per read.
    pub fn meets_delivery_minimum(&self) -> bool {
        self.order_total() >= self.minimum_delivery_amount
    }

    /// How much more the customer must add to reach the delivery minimum.
    ///
    /// Computed unconditionally as `minimum - total`. Only meaningful for
    /// display while `meets_delivery_minimum()` is false; once the
    /// threshold is met the value is zero or negative and the view should
    /// not show it.
    pub fn amount_needed_for_delivery(&self) -> Money {
        self.minimum_delivery_amount - self.order_total()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
