//! # bento-core: Pure Cart Logic for Bento
//!
//! This crate is the **heart** of Bento. It holds the whole ordering model
//! as plain state and pure reads, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bento Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Kiosk App (terminal)                        │   │
//! │  │     reads gestures ──► drives the cart ──► draws frames         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ increment / decrement / snapshot      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ bento-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   menu    │  │   money   │  │   cart    │  │ snapshot  │   │   │
//! │  │   │ MenuItem  │  │   Money   │  │   Cart    │  │ DTOs +    │   │   │
//! │  │   │           │  │           │  │ CartItem  │  │ Renderer  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DRAWING • NO GLOBALS • SINGLE-THREADED            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartSnapshot                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Renderer implementations                       │   │
//! │  │        terminal frame writer, test frame recorder, ...          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer money arithmetic (no floating point!)
//! - [`menu`] - Menu entry definition (name + unit price)
//! - [`cart`] - Cart and per-item selection state, all aggregates
//! - [`snapshot`] - Read-only view DTOs and the [`Renderer`] seam
//! - [`error`] - Typed cart and validation errors
//! - [`validation`] - Input rules applied at the construction boundary
//!
//! ## Design Principles
//!
//! 1. **State In, Snapshots Out**: callers mutate through two operations
//!    and read through derived values; nothing else crosses the boundary
//! 2. **No I/O**: drawing, input, network, file system access is FORBIDDEN
//!    here - display lives behind the [`Renderer`] trait
//! 3. **Integer Money**: all monetary values are whole currency units
//!    (i64) to avoid float errors
//! 4. **Derived, Never Cached**: totals, the badge count and the
//!    delivery check are recomputed per read, so they cannot go stale
//! 5. **Explicit Errors**: bad indices and bad construction input are
//!    typed errors, never silent no-ops or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bento_core::{Cart, CartSnapshot, MenuItem, Money, DEFAULT_MINIMUM_DELIVERY_AMOUNT};
//!
//! let menu = vec![
//!     MenuItem::new("Shawarma Roast Wrap", Money::from_units(66)),
//!     MenuItem::new("Grilled Salmon Steak", Money::from_units(88)),
//! ];
//! let mut cart = Cart::new(menu, DEFAULT_MINIMUM_DELIVERY_AMOUNT).unwrap();
//!
//! // One wrap: below the delivery minimum
//! cart.increment(0).unwrap();
//! assert_eq!(cart.order_total(), Money::from_units(66));
//! assert_eq!(cart.amount_needed_for_delivery(), Money::from_units(34));
//!
//! // A salmon on top: threshold met
//! cart.increment(1).unwrap();
//! assert!(cart.meets_delivery_minimum());
//!
//! // Hand the display layer a frame
//! let snapshot = CartSnapshot::from(&cart);
//! assert_eq!(snapshot.totals.selected_item_count, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod menu;
pub mod money;
pub mod snapshot;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bento_core::Cart` instead of
// `use bento_core::cart::Cart`

pub use cart::{Cart, CartItem};
pub use error::{CartError, CartResult, ValidationError};
pub use menu::MenuItem;
pub use money::Money;
pub use snapshot::{CartSnapshot, CartTotals, ItemSnapshot, Renderer};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default order total at which delivery becomes available
///
/// ## Why a constant?
/// Every storefront so far has used the same threshold, so callers that
/// do not read it from configuration can share one well-known value.
/// `Cart::new` still takes the threshold explicitly; this is only the
/// conventional default.
pub const DEFAULT_MINIMUM_DELIVERY_AMOUNT: Money = Money::from_units(100);
