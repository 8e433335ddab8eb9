//! # Pricing
//!
//! The price list every cost calculation reads from.
//!
//! ## Standard Price List
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base price (single cheese)     Surcharges                              │
//! │  ──────────────────────────     ───────────────────────────────────     │
//! │  small    $7.00                 double cheese / single topping  $1.50   │
//! │  medium   $9.00                 triple cheese / double topping  $3.00   │
//! │  large   $11.00                                                         │
//! │                                                                         │
//! │  Volume discounts (whole line)                                          │
//! │  ─────────────────────────────                                          │
//! │  1  - 9     no discount                                                 │
//! │  10 - 20    10% off                                                     │
//! │  21+        15% off                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! A `PriceList` is plain data. Hosts that price differently can deserialize
//! one from their own configuration; any field left out keeps its standard
//! value.
//!
//! ```rust
//! use pizzeria_core::pricing::PriceList;
//! use pizzeria_core::types::Size;
//!
//! let prices = PriceList::standard();
//! assert_eq!(prices.base_price(Size::Medium).cents(), 900);
//! assert_eq!(prices.discount_bps(15), 1000);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Cheese, Size, ToppingAmount};

// =============================================================================
// Volume Discount
// =============================================================================

/// A discount applied to a whole line once its quantity reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VolumeDiscount {
    /// Smallest quantity this tier applies to.
    pub min_quantity: i64,

    /// Discount in basis points (1000 = 10%).
    pub discount_bps: u32,
}

// =============================================================================
// Price List
// =============================================================================

/// Prices for sizes, cheese and toppings, plus the volume discount tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PriceList {
    pub small: Money,
    pub medium: Money,
    pub large: Money,

    /// Added on top of the size price for double cheese.
    pub double_cheese: Money,
    /// Added on top of the size price for triple cheese.
    pub triple_cheese: Money,

    /// Price of a single portion of any topping.
    pub single_topping: Money,
    /// Price of a double portion of any topping.
    pub double_topping: Money,

    /// Discount tiers; the tier with the highest reached threshold wins.
    pub volume_discounts: Vec<VolumeDiscount>,
}

impl PriceList {
    /// The house price list.
    pub fn standard() -> Self {
        PriceList {
            small: Money::from_cents(700),
            medium: Money::from_cents(900),
            large: Money::from_cents(1100),
            double_cheese: Money::from_cents(150),
            triple_cheese: Money::from_cents(300),
            single_topping: Money::from_cents(150),
            double_topping: Money::from_cents(300),
            volume_discounts: vec![
                VolumeDiscount {
                    min_quantity: 10,
                    discount_bps: 1000,
                },
                VolumeDiscount {
                    min_quantity: 21,
                    discount_bps: 1500,
                },
            ],
        }
    }

    /// Price of a single-cheese pizza of the given size.
    pub fn base_price(&self, size: Size) -> Money {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }

    /// Extra charge for cheese beyond a single portion.
    pub fn cheese_surcharge(&self, cheese: Cheese) -> Money {
        match cheese {
            Cheese::Single => Money::zero(),
            Cheese::Double => self.double_cheese,
            Cheese::Triple => self.triple_cheese,
        }
    }

    /// Price of a topping amount. Mushrooms and pepperoni cost the same.
    pub fn topping_price(&self, amount: ToppingAmount) -> Money {
        match amount {
            ToppingAmount::None => Money::zero(),
            ToppingAmount::Single => self.single_topping,
            ToppingAmount::Double => self.double_topping,
        }
    }

    /// Discount in basis points for a line of `quantity` pizzas.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::pricing::PriceList;
    ///
    /// let prices = PriceList::standard();
    /// assert_eq!(prices.discount_bps(9), 0);
    /// assert_eq!(prices.discount_bps(10), 1000);
    /// assert_eq!(prices.discount_bps(20), 1000);
    /// assert_eq!(prices.discount_bps(21), 1500);
    /// ```
    pub fn discount_bps(&self, quantity: i64) -> u32 {
        self.volume_discounts
            .iter()
            .filter(|tier| quantity >= tier.min_quantity)
            .max_by_key(|tier| tier.min_quantity)
            .map_or(0, |tier| tier.discount_bps)
    }
}

impl Default for PriceList {
    fn default() -> Self {
        PriceList::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Size::Small, 700)]
    #[case(Size::Medium, 900)]
    #[case(Size::Large, 1100)]
    fn test_base_price(#[case] size: Size, #[case] cents: i64) {
        assert_eq!(PriceList::standard().base_price(size).cents(), cents);
    }

    #[rstest]
    #[case(Cheese::Single, 0)]
    #[case(Cheese::Double, 150)]
    #[case(Cheese::Triple, 300)]
    fn test_cheese_surcharge(#[case] cheese: Cheese, #[case] cents: i64) {
        assert_eq!(PriceList::standard().cheese_surcharge(cheese).cents(), cents);
    }

    #[rstest]
    #[case(ToppingAmount::None, 0)]
    #[case(ToppingAmount::Single, 150)]
    #[case(ToppingAmount::Double, 300)]
    fn test_topping_price(#[case] amount: ToppingAmount, #[case] cents: i64) {
        assert_eq!(PriceList::standard().topping_price(amount).cents(), cents);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(9, 0)]
    #[case(10, 1000)]
    #[case(20, 1000)]
    #[case(21, 1500)]
    #[case(100, 1500)]
    fn test_discount_tiers(#[case] quantity: i64, #[case] bps: u32) {
        assert_eq!(PriceList::standard().discount_bps(quantity), bps);
    }

    #[test]
    fn test_tier_order_does_not_matter() {
        let mut prices = PriceList::standard();
        prices.volume_discounts.reverse();
        assert_eq!(prices.discount_bps(25), 1500);
        assert_eq!(prices.discount_bps(12), 1000);
    }

    #[test]
    fn test_partial_config_keeps_standard_values() {
        let prices: PriceList =
            serde_json::from_str(r#"{ "large": 1250, "volume_discounts": [] }"#).unwrap();
        assert_eq!(prices.large.cents(), 1250);
        assert_eq!(prices.small.cents(), 700);
        assert_eq!(prices.discount_bps(50), 0);
    }
}
