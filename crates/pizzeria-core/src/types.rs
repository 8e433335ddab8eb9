//! # Domain Types
//!
//! The closed enumerations a pizza is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────┐   ┌─────────────┐   ┌───────────────────────────┐     │
//! │  │    Size     │   │   Cheese    │   │  ToppingAmount            │     │
//! │  │  ─────────  │   │  ─────────  │   │  ───────────────────────  │     │
//! │  │  Small      │   │  Single     │   │  None    (rendered "no")  │     │
//! │  │  Medium     │   │  Double     │   │  Single                   │     │
//! │  │  Large      │   │  Triple     │   │  Double                   │     │
//! │  └─────────────┘   └─────────────┘   └───────────────────────────┘     │
//! │                                        used for mushrooms AND pepperoni │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Textual Boundary
//! Labels are matched case-insensitively (`"LARGE"`, `"Large"`, `"large"`)
//! and always rendered lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Choice Trait
// =============================================================================

/// A closed set of labelled options.
///
/// ## Example
/// ```rust
/// use pizzeria_core::types::{Choice, Size};
///
/// assert_eq!(Size::from_label("MeDiUm"), Some(Size::Medium));
/// assert_eq!(Size::from_label("family"), None);
/// assert_eq!(Size::Large.as_str(), "large");
/// ```
pub trait Choice: Sized + Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The lowercase label of this member.
    fn as_str(&self) -> &'static str;

    /// Case-insensitive lookup by label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(label))
    }
}

// =============================================================================
// Size
// =============================================================================

/// Pizza size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Choice for Size {
    const ALL: &'static [Self] = &[Size::Small, Size::Medium, Size::Large];

    fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

// =============================================================================
// Cheese
// =============================================================================

/// Amount of cheese. Every pizza has at least a single portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Cheese {
    Single,
    Double,
    Triple,
}

impl Choice for Cheese {
    const ALL: &'static [Self] = &[Cheese::Single, Cheese::Double, Cheese::Triple];

    fn as_str(&self) -> &'static str {
        match self {
            Cheese::Single => "single",
            Cheese::Double => "double",
            Cheese::Triple => "triple",
        }
    }
}

// =============================================================================
// Topping Amount
// =============================================================================

/// Amount of a topping (mushrooms or pepperoni).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ToppingAmount {
    None,
    Single,
    Double,
}

impl ToppingAmount {
    /// Returns true for any amount other than `None`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        !matches!(self, ToppingAmount::None)
    }

    /// The word used on an order line: `None` reads as "no".
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::types::ToppingAmount;
    ///
    /// assert_eq!(ToppingAmount::None.describe_word(), "no");
    /// assert_eq!(ToppingAmount::Double.describe_word(), "double");
    /// ```
    pub const fn describe_word(&self) -> &'static str {
        match self {
            ToppingAmount::None => "no",
            ToppingAmount::Single => "single",
            ToppingAmount::Double => "double",
        }
    }
}

impl Choice for ToppingAmount {
    const ALL: &'static [Self] = &[
        ToppingAmount::None,
        ToppingAmount::Single,
        ToppingAmount::Double,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ToppingAmount::None => "none",
            ToppingAmount::Single => "single",
            ToppingAmount::Double => "double",
        }
    }
}

// =============================================================================
// Pizza Field
// =============================================================================

/// Names a pizza attribute in validation errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaField {
    Size,
    Cheese,
    Mushrooms,
    Pepperoni,
}

impl PizzaField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PizzaField::Size => "size",
            PizzaField::Cheese => "cheese",
            PizzaField::Mushrooms => "mushrooms",
            PizzaField::Pepperoni => "pepperoni",
        }
    }
}

// =============================================================================
// Display
// =============================================================================

macro_rules! display_as_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_label!(Size, Cheese, ToppingAmount, PizzaField);

// =============================================================================
// Unit Tests
// =============================================================================
