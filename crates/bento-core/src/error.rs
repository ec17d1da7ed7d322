//! # Error Types
//!
//! What can go wrong in the cart model, as typed values.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bento-core errors (this file)                                          │
//! │  ├── CartError        - Cart operation failures                         │
//! │  └── ValidationError  - Externally supplied data rejected               │
//! │                                                                         │
//! │  Kiosk errors (in app)                                                  │
//! │  └── ParseError       - User input that is not a command                │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → view shows a message               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derives every variant; no hand-written Display
//! 2. Messages carry their context (the index, the length, the field)
//! 3. A variant per distinct failure; nothing stringly typed
//!
//! Note what is deliberately NOT an error: decrementing an unselected item
//! is a silent no-op. The cart clamps at zero instead of failing, so the
//! minus button can be mashed safely.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors.
///
/// The cart has exactly two fallible entry points: construction (which
/// validates the supplied menu and threshold) and index-addressed
/// mutation (which bounds-checks the index). Everything else is pure
/// in-memory computation that cannot fail.
#[derive(Debug, Error)]
pub enum CartError {
    /// A mutation addressed a position outside the item sequence.
    ///
    /// ## When This Occurs
    /// - The view passes an index >= the number of menu entries
    /// - The item sequence is fixed at construction, so this is always
    ///   a caller bug or unchecked user input, never a race
    #[error("index {index} is out of range for a cart of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Externally supplied data was rejected (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejection reasons for externally supplied values.
///
/// Raised once, at the construction boundary, when the menu or
/// configuration handed to the cart does not meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The field was blank where a value is required.
    #[error("{field} is required")]
    Required { field: String },

    /// The text exceeds its length cap.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// The number falls outside the allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
