//! # Pizza
//!
//! A validated pizza configuration and its price.
//!
//! ## Construction Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Typed callers            Textual callers          Serialized payloads  │
//! │  ─────────────            ───────────────          ───────────────────  │
//! │  Pizza::new(Size, ..)     Pizza::parse(Some("Large"), ..)   JSON etc.   │
//! │        │                        │                          │            │
//! │        │                        │              PizzaRequest (raw)       │
//! │        │                        │                          │            │
//! │        ▼                        ▼                          ▼            │
//! │  topping pairing check   size → cheese → pepperoni → mushrooms          │
//! │        │                        │                                       │
//! │        └────────────┬───────────┘                                       │
//! │                     ▼                                                   │
//! │              Pizza (immutable)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizzeria_core::Pizza;
//!
//! let pizza = Pizza::parse(Some("Small"), Some("single"), Some("none"), Some("single")).unwrap();
//! assert_eq!(pizza.cost().cents(), 850);
//! assert_eq!(
//!     pizza.to_string(),
//!     "small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};
use ts_rs::TS;

use crate::error::InvalidPizzaConfig;
use crate::money::Money;
use crate::pricing::PriceList;
use crate::types::{Cheese, Size, ToppingAmount};
use crate::validation::{
    validate_cheese, validate_mushrooms, validate_pepperoni, validate_size,
    validate_topping_pairing,
};

// =============================================================================
// Pizza Request
// =============================================================================

/// An unvalidated pizza as it arrives from outside the crate.
///
/// Every field may be absent. Converting into a [`Pizza`] runs the full
/// validation sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PizzaRequest {
    pub size: Option<String>,
    pub cheese: Option<String>,
    pub mushrooms: Option<String>,
    pub pepperoni: Option<String>,
}

impl TryFrom<PizzaRequest> for Pizza {
    type Error = InvalidPizzaConfig;

    fn try_from(request: PizzaRequest) -> Result<Self, Self::Error> {
        Pizza::parse(
            request.size.as_deref(),
            request.cheese.as_deref(),
            request.mushrooms.as_deref(),
            request.pepperoni.as_deref(),
        )
    }
}

impl From<&Pizza> for PizzaRequest {
    fn from(pizza: &Pizza) -> Self {
        PizzaRequest {
            size: Some(pizza.size.to_string()),
            cheese: Some(pizza.cheese.to_string()),
            mushrooms: Some(pizza.mushrooms.to_string()),
            pepperoni: Some(pizza.pepperoni.to_string()),
        }
    }
}

// =============================================================================
// Pizza
// =============================================================================

/// A pizza with a valid size, cheese amount and toppings.
///
/// ## Invariants
/// - Mushrooms are `None` whenever pepperoni is `None`
/// - Fields never change after construction
///
/// Equality is structural; labels are normalized on the way in, so
/// `"LARGE"` and `"large"` produce equal pizzas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "PizzaRequest")]
pub struct Pizza {
    size: Size,
    cheese: Cheese,
    mushrooms: ToppingAmount,
    pepperoni: ToppingAmount,
}

impl Pizza {
    /// Builds a pizza from typed parts.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::types::{Cheese, Size, ToppingAmount};
    /// use pizzeria_core::Pizza;
    ///
    /// let ok = Pizza::new(Size::Large, Cheese::Triple, ToppingAmount::Double, ToppingAmount::Single);
    /// assert!(ok.is_ok());
    ///
    /// let mushrooms_only = Pizza::new(Size::Small, Cheese::Single, ToppingAmount::Single, ToppingAmount::None);
    /// assert!(mushrooms_only.is_err());
    /// ```
    pub fn new(
        size: Size,
        cheese: Cheese,
        mushrooms: ToppingAmount,
        pepperoni: ToppingAmount,
    ) -> Result<Self, InvalidPizzaConfig> {
        validate_topping_pairing(mushrooms, pepperoni)?;
        Ok(Self::assemble(size, cheese, mushrooms, pepperoni))
    }

    /// Builds a pizza from textual labels, matched case-insensitively.
    ///
    /// ## Validation Order
    /// size → cheese → pepperoni → mushrooms. The first failing field is
    /// the one reported. Passing `None` for every field is reported as
    /// [`InvalidPizzaConfig::NoConfiguration`].
    pub fn parse(
        size: Option<&str>,
        cheese: Option<&str>,
        mushrooms: Option<&str>,
        pepperoni: Option<&str>,
    ) -> Result<Self, InvalidPizzaConfig> {
        if size.is_none() && cheese.is_none() && mushrooms.is_none() && pepperoni.is_none() {
            debug!("Rejected pizza: no configuration supplied");
            return Err(InvalidPizzaConfig::NoConfiguration);
        }

        let size = validate_size(size)?;
        let cheese = validate_cheese(cheese)?;
        let pepperoni = validate_pepperoni(pepperoni)?;
        let mushrooms = validate_mushrooms(mushrooms, pepperoni)?;

        Ok(Self::assemble(size, cheese, mushrooms, pepperoni))
    }

    fn assemble(
        size: Size,
        cheese: Cheese,
        mushrooms: ToppingAmount,
        pepperoni: ToppingAmount,
    ) -> Self {
        trace!(%size, %cheese, %mushrooms, %pepperoni, "Pizza configured");
        Pizza {
            size,
            cheese,
            mushrooms,
            pepperoni,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn cheese(&self) -> Cheese {
        self.cheese
    }

    #[inline]
    pub fn mushrooms(&self) -> ToppingAmount {
        self.mushrooms
    }

    #[inline]
    pub fn pepperoni(&self) -> ToppingAmount {
        self.pepperoni
    }

    /// Price of one pizza on the standard price list.
    ///
    /// ```text
    /// cost = size_cost + topping_cost(mushrooms) + topping_cost(pepperoni)
    /// ```
    pub fn cost(&self) -> Money {
        self.cost_with(&PriceList::standard())
    }

    /// Price of one pizza on the given price list.
    pub fn cost_with(&self, prices: &PriceList) -> Money {
        self.size_cost_with(prices)
            + prices.topping_price(self.mushrooms)
            + prices.topping_price(self.pepperoni)
    }

    /// Size price including any cheese surcharge.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::types::{Cheese, Size, ToppingAmount};
    /// use pizzeria_core::Pizza;
    ///
    /// let pizza = Pizza::new(Size::Medium, Cheese::Double, ToppingAmount::None, ToppingAmount::None).unwrap();
    /// assert_eq!(pizza.size_cost().cents(), 1050);
    /// ```
    pub fn size_cost(&self) -> Money {
        self.size_cost_with(&PriceList::standard())
    }

    pub fn size_cost_with(&self, prices: &PriceList) -> Money {
        prices.base_price(self.size) + prices.cheese_surcharge(self.cheese)
    }

    /// Standard price of a topping amount; the same for mushrooms and pepperoni.
    pub fn topping_cost(amount: ToppingAmount) -> Money {
        PriceList::standard().topping_price(amount)
    }

    /// Rebuilds this pizza through validation.
    ///
    /// Returns `None` if the copy is rejected, which cannot happen for a
    /// pizza that was itself validated.
    pub fn duplicate(&self) -> Option<Pizza> {
        Pizza::new(self.size, self.cheese, self.mushrooms, self.pepperoni).ok()
    }

    /// The order-line description, e.g.
    /// `"small pizza, single cheese, no mushrooms, single pepperoni. Cost: $8.50 each."`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// The standard pizza: small, single cheese, no mushrooms, single pepperoni.
impl Default for Pizza {
    fn default() -> Self {
        Pizza::assemble(
            Size::Small,
            Cheese::Single,
            ToppingAmount::None,
            ToppingAmount::Single,
        )
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pizza, {} cheese, {} mushrooms, {} pepperoni. Cost: {} each.",
            self.size,
            self.cheese,
            self.mushrooms.describe_word(),
            self.pepperoni.describe_word(),
            self.cost()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
