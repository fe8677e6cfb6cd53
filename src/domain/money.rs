use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary value in whole currency units.
///
/// This is a wrapper around `rust_decimal::Decimal` to keep price
/// arithmetic exact and stop domain code from mixing prices with bare
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(pub Decimal);

/// Price of a single cup of coffee.
pub const UNIT_PRICE: Price = Price(dec!(5));

/// Per-cup surcharge for whipped cream.
pub const CREAM_PRICE: Price = Price(dec!(1));

/// Per-cup surcharge for chocolate.
pub const CHOCOLATE_PRICE: Price = Price(dec!(2));

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Scales this per-cup price by a cup count.
    pub fn for_cups(self, quantity: u8) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

// Callers prefix the currency marker themselves ("$ " in every rendered
// surface), so Display is just the bare amount.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
