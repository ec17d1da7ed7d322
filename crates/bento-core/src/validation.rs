//! # Validation Module
//!
//! Boundary validation for externally supplied data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Menu + delivery minimum arrive from the environment (config, env      │
//! │  vars, a host page). They cross into the core exactly once, at         │
//! │  Cart::new, and THIS MODULE checks them there.                         │
//! │                                                                         │
//! │  After construction nothing needs re-validation: prices are            │
//! │  immutable, quantities are unsigned, and indices are bounds-checked    │
//! │  by the cart itself.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bento_core::money::Money;
//! use bento_core::validation::{validate_menu_item_name, validate_price};
//!
//! validate_menu_item_name("Grilled Salmon Steak").unwrap();
//! validate_price(Money::from_units(88)).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result alias every validator returns.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for a menu item name, in characters.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming whitespace)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use bento_core::validation::validate_menu_item_name;
///
/// assert!(validate_menu_item_name("Shawarma Roast Wrap").is_ok());
/// assert!(validate_menu_item_name("").is_err());
/// assert!(validate_menu_item_name("   ").is_err());
/// ```
pub fn validate_menu_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Negative amounts are rejected
/// - Zero passes (a free item is legal)
///
/// ## Example
/// ```rust
/// use bento_core::money::Money;
/// use bento_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_units(66)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_units(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the delivery-minimum threshold.
///
/// ## Rules
/// - Negative thresholds are rejected
/// - Zero passes (every order qualifies for delivery)
pub fn validate_minimum_delivery_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "minimum delivery amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu_item_name() {
        assert!(validate_menu_item_name("Grilled Salmon Steak").is_ok());
        assert!(validate_menu_item_name("A").is_ok());

        assert!(validate_menu_item_name("").is_err());
        assert!(validate_menu_item_name("   ").is_err());
        assert!(validate_menu_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_units(66)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_units(-100)).is_err());
    }

    #[test]
    fn test_validate_minimum_delivery_amount() {
        assert!(validate_minimum_delivery_amount(Money::from_units(100)).is_ok());
        assert!(validate_minimum_delivery_amount(Money::zero()).is_ok());
        assert!(validate_minimum_delivery_amount(Money::from_units(-1)).is_err());
    }
}
