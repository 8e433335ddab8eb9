//! # pizzeria-core: Pure Business Logic for Pizza Orders
//!
//! This crate validates pizza configurations and prices order lines. It has
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Host application (storefront, till, API)            │
//! │                                │                                        │
//! │                     raw labels / JSON payloads                          │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizzeria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   pizza   │  │ line_item │  │  pricing  │   │   │
//! │  │   │ Size      │  │  Pizza    │  │ LineItem  │  │ PriceList │   │   │
//! │  │   │ Cheese .. │  │           │  │           │  │ discounts │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │           validation   ·   money   ·   error                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Size, cheese and topping enumerations
//! - [`pizza`] - The `Pizza` value object
//! - [`line_item`] - `LineItem`: a quantity of one pizza
//! - [`pricing`] - The price list and volume discounts
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Field-by-field validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Valid or nothing**: constructors return `Result`; a rejected pizza or
//!    line item is never observable
//! 2. **Closed enumerations**: labels are parsed once at the boundary
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Log, don't print**: rejections are emitted as `tracing` events; the
//!    host decides where they go
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{LineItem, Pizza};
//!
//! let pizza = Pizza::parse(Some("small"), Some("single"), Some("none"), Some("single"))?;
//! let line = LineItem::new(15, pizza)?;
//!
//! // 15 × $8.50, less 10%
//! assert_eq!(line.cost().cents(), 11475);
//! # Ok::<(), pizzeria_core::OrderError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line_item;
pub mod money;
pub mod pizza;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{InvalidLineItem, InvalidPizzaConfig, OrderError, OrderResult};
pub use line_item::{LineItem, LineItemRequest};
pub use money::Money;
pub use pizza::{Pizza, PizzaRequest};
pub use pricing::{PriceList, VolumeDiscount};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest number of pizzas on one line.
pub const MIN_LINE_QUANTITY: i64 = 1;

/// Largest number of pizzas on one line.
///
/// ## Business Reason
/// Catches typos (1000 instead of 10). Bigger orders are split across lines.
pub const MAX_LINE_QUANTITY: i64 = 100;

/// Routes `tracing` output from tests to the test harness.
///
/// Set `RUST_LOG=pizzeria_core=trace` to see validation events.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
