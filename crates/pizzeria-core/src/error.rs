//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  OrderError                - Umbrella for callers that build both       │
//! │  ├── InvalidPizzaConfig    - Pizza::new / Pizza::parse failures         │
//! │  └── InvalidLineItem       - LineItem::new / with_quantity failures     │
//! │                                                                         │
//! │  Flow: InvalidPizzaConfig ──► InvalidLineItem::Pizza (nested payload)   │
//! │                          └──► OrderError                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message names the offending field and value
//! 3. Errors are enum variants, never String
//! 4. A failed constructor never hands back a partial value

use thiserror::Error;

use crate::types::{PizzaField, ToppingAmount};

// =============================================================================
// Pizza Configuration Error
// =============================================================================

/// A pizza configuration that cannot be built.
///
/// ## When This Occurs
/// ```text
/// Pizza::parse(size, cheese, mushrooms, pepperoni)
///      │
///      ├── all four absent ──────────────► NoConfiguration
///      ├── one absent or "" ─────────────► Missing { field }
///      ├── "extra-large", "quadruple" ───► Unrecognized { field, value }
///      └── pepperoni none, mushrooms not ► MushroomsWithoutPepperoni
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPizzaConfig {
    /// Every field was absent.
    #[error("Illegal pizza: no configuration supplied")]
    NoConfiguration,

    /// A single field was absent or empty.
    #[error("Illegal pizza: {field} is required")]
    Missing { field: PizzaField },

    /// A field carried a value outside its enumeration.
    #[error("Illegal pizza: '{value}' is not a valid {field}")]
    Unrecognized { field: PizzaField, value: String },

    /// Mushrooms were requested on a pizza without pepperoni.
    #[error("Illegal pizza: {mushrooms} mushrooms require pepperoni")]
    MushroomsWithoutPepperoni { mushrooms: ToppingAmount },
}

impl InvalidPizzaConfig {
    /// The field that failed validation, if a single field is to blame.
    pub fn field(&self) -> Option<PizzaField> {
        match self {
            InvalidPizzaConfig::NoConfiguration => None,
            InvalidPizzaConfig::Missing { field } => Some(*field),
            InvalidPizzaConfig::Unrecognized { field, .. } => Some(*field),
            InvalidPizzaConfig::MushroomsWithoutPepperoni { .. } => Some(PizzaField::Mushrooms),
        }
    }

    /// The rejected value as the caller supplied it.
    pub fn value(&self) -> Option<String> {
        match self {
            InvalidPizzaConfig::NoConfiguration | InvalidPizzaConfig::Missing { .. } => None,
            InvalidPizzaConfig::Unrecognized { value, .. } => Some(value.clone()),
            InvalidPizzaConfig::MushroomsWithoutPepperoni { mushrooms } => {
                Some(mushrooms.to_string())
            }
        }
    }
}

// =============================================================================
// Line Item Error
// =============================================================================

/// A line item that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLineItem {
    /// Quantity outside `MIN_LINE_QUANTITY..=MAX_LINE_QUANTITY`.
    #[error("Illegal line item: quantity {quantity} must be between {min} and {max}")]
    QuantityOutOfRange { quantity: i64, min: i64, max: i64 },

    /// No pizza was supplied.
    #[error("Illegal line item: no pizza supplied")]
    MissingPizza,

    /// The supplied pizza payload was itself invalid.
    #[error("Illegal line item: {0}")]
    Pizza(#[from] InvalidPizzaConfig),
}

// =============================================================================
// Order Error
// =============================================================================

/// Any failure raised while assembling an order line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error(transparent)]
    InvalidPizzaConfig(#[from] InvalidPizzaConfig),

    #[error(transparent)]
    InvalidLineItem(#[from] InvalidLineItem),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
