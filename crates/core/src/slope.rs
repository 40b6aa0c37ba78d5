//! Exact slope `h / w` of a frame.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A reduced non-negative fraction with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slope {
    numerator: usize,
    denominator: usize,
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Slope {
    /// Returns `None` when `denominator` is zero.
    pub fn new(numerator: usize, denominator: usize) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let g = gcd(numerator, denominator);
        Some(Self {
            numerator: numerator / g,
            denominator: denominator / g,
        })
    }

    pub fn numerator(&self) -> usize {
        self.numerator
    }

    pub fn denominator(&self) -> usize {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_and_displays() {
        let s = Slope::new(4, 6).unwrap();
        assert_eq!((s.numerator(), s.denominator()), (2, 3));
        assert_eq!(s.to_string(), "2/3");
        assert_eq!(Slope::new(6, 3).unwrap().to_string(), "2");
        assert_eq!(Slope::new(0, 5).unwrap().to_string(), "0");
    }

    #[test]
    fn serializes_reduced() {
        let s = Slope::new(6, 9).unwrap();
        assert_eq!(
            serde_json::to_value(s).unwrap(),
            serde_json::json!({ "numerator": 2, "denominator": 3 })
        );
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert!(Slope::new(3, 0).is_none());
    }

    #[test]
    fn orders_by_value() {
        assert!(Slope::new(1, 3).unwrap() < Slope::new(1, 2).unwrap());
        assert_eq!(Slope::new(2, 4), Slope::new(1, 2));
    }
}
