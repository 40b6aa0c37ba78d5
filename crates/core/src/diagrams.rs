//! The family of all Young diagrams in a fixed frame.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::diagram::YoungDiagram;
use crate::error::{Result, YoungError};
use crate::slope::Slope;

/// All Young diagrams of a given height and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YoungDiagrams {
    height: usize,
    width: usize,
}

impl YoungDiagrams {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn half_perimeter(&self) -> usize {
        self.height + self.width
    }

    pub fn slope(&self) -> Result<Slope> {
        Slope::new(self.height, self.width)
            .ok_or(YoungError::ZeroWidth { operation: "slope" })
    }

    /// Number of diagrams in the frame, `C(h + w, h)`.
    ///
    /// Returns `None` when the count does not fit in a `u128`, which first
    /// happens for the 66x66 frame.
    pub fn cardinality(&self) -> Option<u128> {
        let n = self.half_perimeter() as u128;
        let k = self.height.min(self.width) as u128;
        // acc = C(n - k + i - 1, i - 1); dividing out the gcd first keeps
        // every intermediate no larger than the next binomial.
        (1..=k).try_fold(1u128, |acc, i| {
            let top = n - k + i;
            let g = gcd(top, i);
            (acc / (i / g)).checked_mul(top / g)
        })
    }

    /// Every diagram of the frame, in ascending lexicographic order of rows.
    pub fn iter(&self) -> Diagrams {
        Diagrams::new(self.height, self.width, vec![self.width; self.height])
    }

    /// Upper triangular diagrams in ascending lexicographic order of rows.
    ///
    /// Row `i` is bounded by `floor(width * (height - i) / height)`, the same
    /// bound [`YoungDiagram::is_upper_triangular`] checks.
    pub fn upper_triangulars(&self) -> Result<Diagrams> {
        if self.height == 0 {
            return Err(YoungError::ZeroHeight {
                operation: "upper_triangulars",
            });
        }
        let h = self.height;
        let ceiling = (0..h).map(|i| self.width * (h - i) / h).collect();
        debug!(
            height = h,
            width = self.width,
            ?ceiling,
            "enumerating upper triangulars"
        );
        Ok(Diagrams::new(h, self.width, ceiling))
    }

    /// One representative per cyclic orbit meeting the upper triangulars.
    ///
    /// The representative is the least upper triangular member of its orbit.
    pub fn minimal_upper_triangulars(&self) -> Result<MinimalUpperTriangulars> {
        Ok(MinimalUpperTriangulars {
            inner: self.upper_triangulars()?,
            seen: FxHashSet::default(),
        })
    }
}

impl IntoIterator for &YoungDiagrams {
    type Item = YoungDiagram;
    type IntoIter = Diagrams;

    fn into_iter(self) -> Diagrams {
        self.iter()
    }
}

impl fmt::Display for YoungDiagrams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Young diagrams of height {}, width {}.",
            self.height, self.width
        )
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Non-increasing row vectors under a per-row ceiling, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Diagrams {
    height: usize,
    width: usize,
    ceiling: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Diagrams {
    fn new(height: usize, width: usize, ceiling: Vec<usize>) -> Self {
        Self {
            height,
            width,
            ceiling,
            current: Some(vec![0; height]),
        }
    }

    /// Lexicographic successor: bump the rightmost row that can grow and
    /// empty every row below it.
    fn advance(&mut self, rows: &[usize]) -> Option<Vec<usize>> {
        let i = (0..rows.len()).rev().find(|&i| {
            let grown = rows[i] + 1;
            grown <= self.ceiling[i] && (i == 0 || grown <= rows[i - 1])
        })?;
        let mut next = rows.to_vec();
        next[i] += 1;
        next[i + 1..].fill(0);
        Some(next)
    }
}

impl Iterator for Diagrams {
    type Item = YoungDiagram;

    fn next(&mut self) -> Option<YoungDiagram> {
        let rows = self.current.take()?;
        self.current = self.advance(&rows);
        Some(YoungDiagram::from_valid_rows(self.height, self.width, rows))
    }
}

/// Iterator returned by [`YoungDiagrams::minimal_upper_triangulars`].
#[derive(Debug, Clone)]
pub struct MinimalUpperTriangulars {
    inner: Diagrams,
    seen: FxHashSet<YoungDiagram>,
}

impl Iterator for MinimalUpperTriangulars {
    type Item = YoungDiagram;

    fn next(&mut self) -> Option<YoungDiagram> {
        loop {
            let candidate = self.inner.next()?;
            if self.seen.contains(&candidate) {
                continue;
            }
            let mut minimal = candidate.clone();
            let mut members = 0;
            for fellow in candidate.cyclic_orbit() {
                if !fellow.under_diagonal() {
                    continue;
                }
                if fellow < minimal {
                    minimal = fellow.clone();
                }
                self.seen.insert(fellow);
                members += 1;
            }
            trace!(representative = %minimal, members, "new cyclic orbit");
            return Some(minimal);
        }
    }
}
