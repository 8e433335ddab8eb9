//! # Line Item
//!
//! A quantity of one pizza configuration: a single row of an order.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Pizza::cost ($8.50)                                                    │
//! │       │                                                                 │
//! │       ▼  × quantity (15)                                                │
//! │  subtotal ($127.50)                                                     │
//! │       │                                                                 │
//! │       ▼  volume discount (10 - 20 → 10%, 21+ → 15%)                     │
//! │  LineItem::cost ($114.75)                                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizzeria_core::{LineItem, Pizza};
//!
//! let line = LineItem::new(15, Pizza::default()).unwrap();
//! assert_eq!(line.cost().to_string(), "$114.75");
//!
//! let single = LineItem::from(Pizza::default());
//! assert_eq!(
//!     single.to_string(),
//!     " 1 small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};
use ts_rs::TS;

use crate::error::InvalidLineItem;
use crate::money::Money;
use crate::pizza::{Pizza, PizzaRequest};
use crate::pricing::PriceList;
use crate::validation::validate_quantity;

// =============================================================================
// Line Item Request
// =============================================================================

/// An unvalidated line item as it arrives from outside the crate.
///
/// A missing quantity means one pizza. A missing pizza is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemRequest {
    pub quantity: Option<i64>,
    pub pizza: Option<PizzaRequest>,
}

impl TryFrom<LineItemRequest> for LineItem {
    type Error = InvalidLineItem;

    /// Checks the quantity first, then that a pizza is present, then the
    /// pizza itself.
    fn try_from(request: LineItemRequest) -> Result<Self, Self::Error> {
        let quantity = validate_quantity(request.quantity.unwrap_or(1))?;

        let Some(pizza) = request.pizza else {
            debug!(quantity, "Rejected line item: no pizza supplied");
            return Err(InvalidLineItem::MissingPizza);
        };

        LineItem::new(quantity, Pizza::try_from(pizza)?)
    }
}

impl From<&LineItem> for LineItemRequest {
    fn from(item: &LineItem) -> Self {
        LineItemRequest {
            quantity: Some(item.quantity),
            pizza: Some(PizzaRequest::from(&item.pizza)),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One or more identical pizzas.
///
/// ## Invariants
/// - `MIN_LINE_QUANTITY <= quantity <= MAX_LINE_QUANTITY`
/// - Always holds a validated pizza
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "LineItemRequest")]
pub struct LineItem {
    quantity: i64,
    pizza: Pizza,
}

impl LineItem {
    /// Creates a line item of `quantity` pizzas.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::{LineItem, Pizza};
    ///
    /// assert!(LineItem::new(100, Pizza::default()).is_ok());
    /// assert!(LineItem::new(0, Pizza::default()).is_err());
    /// assert!(LineItem::new(101, Pizza::default()).is_err());
    /// ```
    pub fn new(quantity: i64, pizza: Pizza) -> Result<Self, InvalidLineItem> {
        let quantity = validate_quantity(quantity)?;
        trace!(quantity, pizza = %pizza.describe(), "Line item created");
        Ok(LineItem { quantity, pizza })
    }

    /// Returns a copy of this line with a different quantity.
    pub fn with_quantity(&self, quantity: i64) -> Result<Self, InvalidLineItem> {
        LineItem::new(quantity, self.pizza.clone())
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn pizza(&self) -> &Pizza {
        &self.pizza
    }

    /// Line total on the standard price list, volume discount included.
    ///
    /// The discount is rounded half-up to whole cents, so 21 default pizzas
    /// cost $151.72 rather than $151.725.
    pub fn cost(&self) -> Money {
        self.cost_with(&PriceList::standard())
    }

    /// Line total on the given price list, volume discount included.
    pub fn cost_with(&self, prices: &PriceList) -> Money {
        self.pizza
            .cost_with(prices)
            .multiply_quantity(self.quantity)
            .apply_percentage_discount(prices.discount_bps(self.quantity))
    }

    /// Compares line costs, returning `other - self` in whole dollars.
    ///
    /// ## Rules
    /// ```text
    /// d = other.cost() - self.cost()
    ///
    ///   0 < d < $1   → 0              (treated as the same price)
    ///   otherwise    → d truncated toward zero, in dollars
    /// ```
    ///
    /// Truncation also maps any `-$1 < d < 0` to 0, so the dead-zone
    /// covers both directions.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::{LineItem, Pizza};
    ///
    /// let one = LineItem::new(1, Pizza::default()).unwrap();   // $8.50
    /// let two = LineItem::new(2, Pizza::default()).unwrap();   // $17.00
    /// assert_eq!(one.compare_to(&two), 8);
    /// assert_eq!(two.compare_to(&one), -8);
    /// ```
    pub fn compare_to(&self, other: &LineItem) -> i64 {
        let difference = (other.cost() - self.cost()).cents();
        if difference > 0 && difference < 100 {
            return 0;
        }
        difference / 100
    }

    /// Total order for sorting: the most expensive lines come first.
    ///
    /// Agrees with [`compare_to`](Self::compare_to) wherever that is
    /// non-zero. Lines inside its dollar dead-zone are ordered by exact cost.
    pub fn cmp_by_cost(&self, other: &LineItem) -> Ordering {
        other.cost().cmp(&self.cost())
    }

    /// The order-line description, padded so quantities below 10 line up
    /// with two-digit ones.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// A single pizza.
impl From<Pizza> for LineItem {
    fn from(pizza: Pizza) -> Self {
        LineItem { quantity: 1, pizza }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity < 10 {
            f.write_str(" ")?;
        }
        write!(f, "{} {}", self.quantity, self.pizza)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidPizzaConfig;
    use crate::types::{Cheese, Choice, Size, ToppingAmount};
    use rstest::rstest;

    fn pizza(size: Size, cheese: Cheese, mushrooms: ToppingAmount, pepperoni: ToppingAmount) -> Pizza {
        Pizza::new(size, cheese, mushrooms, pepperoni).unwrap()
    }

    fn line(quantity: i64, pizza: Pizza) -> LineItem {
        LineItem::new(quantity, pizza).unwrap()
    }

    #[rstest]
    #[case(1)]
    #[case(100)]
    fn test_quantity_accepted(#[case] quantity: i64) {
        assert_eq!(line(quantity, Pizza::default()).quantity(), quantity);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(101)]
    fn test_quantity_rejected(#[case] quantity: i64) {
        crate::init_test_tracing();

        let err = LineItem::new(quantity, Pizza::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidLineItem::QuantityOutOfRange {
                quantity,
                min: 1,
                max: 100
            }
        );
        assert!(err.to_string().contains(&quantity.to_string()));
    }

    #[test]
    fn test_single_pizza_line() {
        let item = LineItem::from(Pizza::default());
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.pizza(), &Pizza::default());
        assert_eq!(item.cost().cents(), 850);
    }

    #[rstest]
    #[case(1, 850)]
    #[case(9, 7650)]
    #[case(10, 7650)]
    #[case(15, 11475)]
    #[case(20, 15300)]
    #[case(21, 15172)]
    #[case(100, 72250)]
    fn test_volume_discount(#[case] quantity: i64, #[case] cents: i64) {
        assert_eq!(line(quantity, Pizza::default()).cost().cents(), cents);
    }

    #[test]
    fn test_cost_with_custom_price_list() {
        let prices = PriceList {
            volume_discounts: Vec::new(),
            ..PriceList::standard()
        };
        assert_eq!(line(15, Pizza::default()).cost_with(&prices).cents(), 12750);
    }

    #[test]
    fn test_with_quantity() {
        let item = line(3, Pizza::default());
        let bigger = item.with_quantity(12).unwrap();
        assert_eq!(bigger.quantity(), 12);
        assert_eq!(bigger.pizza(), item.pizza());
        assert_eq!(item.quantity(), 3);
        assert!(item.with_quantity(0).is_err());
    }

    #[test]
    fn test_compare_to_dead_zone() {
        let cheap = line(1, Pizza::default()); // $8.50
        let medium_plain = line(
            1,
            pizza(Size::Medium, Cheese::Single, ToppingAmount::None, ToppingAmount::None),
        ); // $9.00

        assert_eq!(cheap.compare_to(&medium_plain), 0);
        // -$0.50 truncates to 0 as well
        assert_eq!(medium_plain.compare_to(&cheap), 0);
    }

    #[test]
    fn test_compare_to_truncates_whole_dollars() {
        let cheap = line(1, Pizza::default()); // $8.50
        let double_cheese = line(
            1,
            pizza(Size::Small, Cheese::Double, ToppingAmount::None, ToppingAmount::Single),
        ); // $10.00

        assert_eq!(cheap.compare_to(&double_cheese), 1);
        assert_eq!(double_cheese.compare_to(&cheap), -1);
        assert_eq!(cheap.compare_to(&cheap), 0);
    }

    #[test]
    fn test_sorting_puts_most_expensive_first() {
        let cheap = line(1, Pizza::default()); // $8.50
        let mid = line(
            1,
            pizza(Size::Small, Cheese::Double, ToppingAmount::None, ToppingAmount::Single),
        ); // $10.00
        let dear = line(
            1,
            pizza(Size::Large, Cheese::Triple, ToppingAmount::Double, ToppingAmount::Double),
        ); // $20.00

        let mut lines = vec![mid.clone(), cheap.clone(), dear.clone()];
        lines.sort_by(LineItem::cmp_by_cost);
        assert_eq!(lines, vec![dear, mid, cheap]);
    }

    #[test]
    fn test_sorting_many_lines_half_a_dollar_apart() {
        // Every valid pizza at quantities 1-9: costs step in $0.50 increments
        let mut lines = Vec::new();
        for quantity in (1..=9).rev() {
            for size in Size::ALL {
                for cheese in Cheese::ALL {
                    for pepperoni in ToppingAmount::ALL {
                        for mushrooms in ToppingAmount::ALL {
                            if let Ok(pizza) = Pizza::new(*size, *cheese, *mushrooms, *pepperoni) {
                                lines.push(line(quantity, pizza));
                            }
                        }
                    }
                }
            }
        }
        assert!(lines.len() > 20);
        let has_cost = |cents: i64| lines.iter().any(|item| item.cost().cents() == cents);
        assert!(has_cost(850) && has_cost(900));

        lines.sort_by(LineItem::cmp_by_cost);

        for pair in lines.windows(2) {
            assert!(pair[0].cost() >= pair[1].cost());
            assert!(pair[0].compare_to(&pair[1]) <= 0);
        }
    }

    #[test]
    fn test_cmp_by_cost_orders_within_dead_zone() {
        let cheap = line(1, Pizza::default()); // $8.50
        let medium_plain = line(
            1,
            pizza(Size::Medium, Cheese::Single, ToppingAmount::None, ToppingAmount::None),
        ); // $9.00

        assert_eq!(cheap.compare_to(&medium_plain), 0);
        assert_eq!(cheap.cmp_by_cost(&medium_plain), Ordering::Greater);
        assert_eq!(medium_plain.cmp_by_cost(&cheap), Ordering::Less);
        assert_eq!(cheap.cmp_by_cost(&cheap), Ordering::Equal);
    }

    #[test]
    fn test_describe_pads_single_digit_quantities() {
        assert_eq!(
            line(1, Pizza::default()).describe(),
            " 1 small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."
        );
        assert_eq!(
            line(10, Pizza::default()).describe(),
            "10 small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."
        );
        assert_eq!(
            line(100, Pizza::default()).describe(),
            "100 small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."
        );
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(line(2, Pizza::default())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "quantity": 2,
                "pizza": {
                    "size": "small",
                    "cheese": "single",
                    "mushrooms": "none",
                    "pepperoni": "single"
                }
            })
        );

        let back: LineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, line(2, Pizza::default()));
    }

    #[test]
    fn test_request_defaults_quantity_to_one() {
        let request = LineItemRequest {
            quantity: None,
            pizza: Some(PizzaRequest::from(&Pizza::default())),
        };
        assert_eq!(LineItem::try_from(request).unwrap().quantity(), 1);
    }

    #[test]
    fn test_request_without_pizza() {
        let err = LineItem::try_from(LineItemRequest {
            quantity: Some(4),
            pizza: None,
        })
        .unwrap_err();
        assert_eq!(err, InvalidLineItem::MissingPizza);

        let err = serde_json::from_str::<LineItem>(r#"{"quantity":4,"pizza":null}"#).unwrap_err();
        assert!(err.to_string().contains("no pizza supplied"));
    }

    #[test]
    fn test_request_checks_quantity_before_pizza() {
        let err = LineItem::try_from(LineItemRequest {
            quantity: Some(0),
            pizza: None,
        })
        .unwrap_err();
        assert!(matches!(err, InvalidLineItem::QuantityOutOfRange { quantity: 0, .. }));
    }

    #[test]
    fn test_request_with_invalid_pizza() {
        let request = LineItemRequest {
            quantity: Some(2),
            pizza: Some(PizzaRequest {
                size: Some("small".to_string()),
                cheese: Some("single".to_string()),
                mushrooms: Some("single".to_string()),
                pepperoni: Some("none".to_string()),
            }),
        };
        let err = LineItem::try_from(request).unwrap_err();
        assert!(matches!(
            err,
            InvalidLineItem::Pizza(InvalidPizzaConfig::MushroomsWithoutPepperoni { .. })
        ));
    }

    #[test]
    fn test_typescript_binding_follows_serialized_layout() {
        let decl = LineItem::decl();
        assert!(decl.contains("quantity:"), "{decl}");
        assert!(decl.contains("pizza: Pizza"), "{decl}");
        assert!(!decl.contains("PizzaRequest"), "{decl}");
        assert!(!decl.contains("null"), "{decl}");
    }

    #[test]
    fn test_request_round_trip() {
        let item = line(7, Pizza::default());
        assert_eq!(LineItem::try_from(LineItemRequest::from(&item)), Ok(item));
    }
}
