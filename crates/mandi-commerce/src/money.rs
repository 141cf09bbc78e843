//! Whole-rupee price type.
//!
//! Market rates are quoted in whole rupees per kilogram, so prices are
//! stored as integers rather than floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A price in whole rupees (per kilogram unless stated otherwise).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Rupees(pub i64);

impl Rupees {
    /// Create a price from whole rupees.
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Round a fractional amount to the nearest whole rupee.
    ///
    /// Non-finite inputs collapse to zero.
    pub fn from_f64(amount: f64) -> Self {
        if amount.is_finite() {
            Self(amount.round() as i64)
        } else {
            Self(0)
        }
    }

    /// Get the amount in rupees.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Whether this is a valid retail price (strictly positive).
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Saturating subtraction, floored at zero.
    pub fn saturating_sub(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(other.0).max(0))
    }

    /// Multiply by a quantity.
    pub fn times(self, quantity: i64) -> Rupees {
        Rupees(self.0.saturating_mul(quantity))
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_add(other.0))
    }
}

impl Sub for Rupees {
    type Output = Rupees;

    fn sub(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20b9}{}", self.0)
    }
}

impl From<i64> for Rupees {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(Rupees::from_f64(21.5), Rupees(22));
        assert_eq!(Rupees::from_f64(21.4), Rupees(21));
        assert_eq!(Rupees::from_f64(f64::NAN), Rupees(0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupees(40);
        let b = Rupees(25);
        assert_eq!(a + b, Rupees(65));
        assert_eq!(a - b, Rupees(15));
        assert_eq!(b.saturating_sub(a), Rupees(0));
        assert_eq!(a.times(2), Rupees(80));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rupees(40)), "\u{20b9}40");
    }
}
