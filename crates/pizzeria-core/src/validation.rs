//! # Validation Module
//!
//! Field-by-field checks behind `Pizza::parse` and `LineItem::new`.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizza Validation                                   │
//! │                                                                         │
//! │  validate_size ──► validate_cheese ──► validate_pepperoni               │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                  validate_mushrooms(raw, pepperoni)     │
//! │                                                                         │
//! │  The first failing field wins; later fields are not inspected.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::types::{Size, ToppingAmount};
//! use pizzeria_core::validation::{validate_mushrooms, validate_quantity, validate_size};
//!
//! assert_eq!(validate_size(Some("Large")).unwrap(), Size::Large);
//! assert!(validate_mushrooms(Some("single"), ToppingAmount::None).is_err());
//! assert!(validate_quantity(101).is_err());
//! ```

use tracing::debug;

use crate::error::{InvalidLineItem, InvalidPizzaConfig};
use crate::types::{Cheese, Choice, PizzaField, Size, ToppingAmount};
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

/// Result type for pizza field validation.
pub type ValidationResult<T> = Result<T, InvalidPizzaConfig>;

// =============================================================================
// Pizza Field Validators
// =============================================================================

/// Resolves a raw label into a member of `C`.
///
/// ## Rules
/// - Absent or empty input is `Missing`
/// - Anything not matching a label (ignoring case) is `Unrecognized`
pub fn validate_choice<C: Choice>(field: PizzaField, raw: Option<&str>) -> ValidationResult<C> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            debug!(field = %field, "Rejected pizza: field missing");
            return Err(InvalidPizzaConfig::Missing { field });
        }
    };

    C::from_label(raw).ok_or_else(|| {
        debug!(field = %field, value = %raw, "Rejected pizza: unrecognized value");
        InvalidPizzaConfig::Unrecognized {
            field,
            value: raw.to_string(),
        }
    })
}

/// Validates a size label: small, medium or large.
pub fn validate_size(raw: Option<&str>) -> ValidationResult<Size> {
    validate_choice(PizzaField::Size, raw)
}

/// Validates a cheese label: single, double or triple.
pub fn validate_cheese(raw: Option<&str>) -> ValidationResult<Cheese> {
    validate_choice(PizzaField::Cheese, raw)
}

/// Validates a pepperoni label: none, single or double.
pub fn validate_pepperoni(raw: Option<&str>) -> ValidationResult<ToppingAmount> {
    validate_choice(PizzaField::Pepperoni, raw)
}

/// Validates a mushroom label against the already-validated pepperoni.
///
/// ## Rules
/// - none, single or double
/// - Anything other than none needs pepperoni on the pizza
pub fn validate_mushrooms(
    raw: Option<&str>,
    pepperoni: ToppingAmount,
) -> ValidationResult<ToppingAmount> {
    let mushrooms = validate_choice(PizzaField::Mushrooms, raw)?;
    validate_topping_pairing(mushrooms, pepperoni)?;
    Ok(mushrooms)
}

/// Mushrooms are only sold on pizzas that also carry pepperoni.
///
/// ## Example
/// ```rust
/// use pizzeria_core::types::ToppingAmount;
/// use pizzeria_core::validation::validate_topping_pairing;
///
/// assert!(validate_topping_pairing(ToppingAmount::None, ToppingAmount::None).is_ok());
/// assert!(validate_topping_pairing(ToppingAmount::Double, ToppingAmount::Single).is_ok());
/// assert!(validate_topping_pairing(ToppingAmount::Single, ToppingAmount::None).is_err());
/// ```
pub fn validate_topping_pairing(
    mushrooms: ToppingAmount,
    pepperoni: ToppingAmount,
) -> ValidationResult<()> {
    if mushrooms.is_present() && !pepperoni.is_present() {
        debug!(mushrooms = %mushrooms, "Rejected pizza: mushrooms without pepperoni");
        return Err(InvalidPizzaConfig::MushroomsWithoutPepperoni { mushrooms });
    }

    Ok(())
}

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be at least MIN_LINE_QUANTITY (1)
/// - Must not exceed MAX_LINE_QUANTITY (100)
pub fn validate_quantity(quantity: i64) -> Result<i64, InvalidLineItem> {
    if !(MIN_LINE_QUANTITY..=MAX_LINE_QUANTITY).contains(&quantity) {
        debug!(quantity, "Rejected line item: quantity out of range");
        return Err(InvalidLineItem::QuantityOutOfRange {
            quantity,
            min: MIN_LINE_QUANTITY,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
