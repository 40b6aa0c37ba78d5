//! Binary words: the boundary lattice path of a diagram.
//!
//! A diagram in an `h x w` frame is traced from the lower left corner of the
//! frame to the upper right one. Each unit step is either `R` (right) or `U`
//! (up), so the word has `w` letters `R`, `h` letters `U` and length `h + w`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, YoungError};

/// One unit step of a boundary path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Step {
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "U")]
    Up,
}

impl Step {
    pub const fn as_char(self) -> char {
        match self {
            Step::Right => 'R',
            Step::Up => 'U',
        }
    }

    pub const fn from_char(c: char) -> Option<Step> {
        match c {
            'R' => Some(Step::Right),
            'U' => Some(Step::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A word over `{R, U}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryWord(Vec<Step>);

impl BinaryWord {
    pub fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `U` steps.
    pub fn height(&self) -> usize {
        self.0.iter().filter(|&&s| s == Step::Up).count()
    }

    /// Number of `R` steps.
    pub fn width(&self) -> usize {
        self.0.iter().filter(|&&s| s == Step::Right).count()
    }

    /// Right rotation: the last `steps mod n` letters move to the front.
    ///
    /// Negative amounts rotate to the left.
    pub fn rotated(&self, steps: i64) -> Self {
        let n = self.0.len();
        if n == 0 {
            return self.clone();
        }
        let shift = steps.rem_euclid(n as i64) as usize;
        let mut out = self.0.clone();
        out.rotate_right(shift);
        Self(out)
    }

    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    pub fn concat(&self, other: &BinaryWord) -> Self {
        let mut out = Vec::with_capacity(self.0.len() + other.0.len());
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&other.0);
        Self(out)
    }

    /// Smallest `k >= 1` such that rotating by `k` gives the word back.
    ///
    /// Always divides `n`; the empty word has period 1.
    pub fn period(&self) -> usize {
        let n = self.0.len();
        if n == 0 {
            return 1;
        }
        (1..=n)
            .filter(|k| n % k == 0)
            .find(|&k| self.0[k..] == self.0[..n - k] && self.0[..k] == self.0[n - k..])
            .unwrap_or(n)
    }
}

impl From<Vec<Step>> for BinaryWord {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl FromIterator<Step> for BinaryWord {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for BinaryWord {
    type Err = YoungError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, found)| {
                Step::from_char(found)
                    .ok_or(YoungError::InvalidStep { position, found })
            })
            .collect()
    }
}

impl fmt::Display for BinaryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> BinaryWord {
        s.parse().unwrap()
    }

    #[test]
    fn parse_rejects_foreign_letters() {
        let err = "RRxU".parse::<BinaryWord>().unwrap_err();
        assert_eq!(
            err,
            YoungError::InvalidStep {
                position: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn counts_height_and_width() {
        let w = word("RURRU");
        assert_eq!(w.len(), 5);
        assert_eq!(w.height(), 2);
        assert_eq!(w.width(), 3);
        assert_eq!(w.to_string(), "RURRU");
    }

    #[test]
    fn rotation_moves_tail_to_front() {
        assert_eq!(word("RRUU").rotated(1), word("URRU"));
        assert_eq!(word("RRUU").rotated(3), word("RUUR"));
        assert_eq!(word("RRUU").rotated(-1), word("RUUR"));
    }

    #[test]
    fn rotation_by_multiple_of_length_is_identity() {
        assert_eq!(word("RUU").rotated(0), word("RUU"));
        assert_eq!(word("RUU").rotated(6), word("RUU"));
        assert_eq!(BinaryWord::default().rotated(4), BinaryWord::default());
    }

    #[test]
    fn period_of_repeated_blocks() {
        assert_eq!(word("RURU").period(), 2);
        assert_eq!(word("RRUU").period(), 4);
        assert_eq!(word("RRR").period(), 1);
        assert_eq!(BinaryWord::default().period(), 1);
    }
}
