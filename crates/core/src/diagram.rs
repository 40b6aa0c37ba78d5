//! Young diagrams inside a rectangular frame.
//!
//! A diagram is stored by its row lengths ("usual description"), always padded
//! to the frame height. Every operation that moves a diagram around its frame
//! (complement, concatenation, cyclic rotation) goes through the boundary
//! word, see [`crate::binary`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Shr};
use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;

use crate::binary::{BinaryWord, Step};
use crate::error::{Result, YoungError};
use crate::slope::Slope;
use crate::table::Table;

/// A Young diagram in an `height x width` frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct YoungDiagram {
    height: usize,
    width: usize,
    rows: Vec<usize>,
}

impl YoungDiagram {
    /// Build a diagram from its row lengths, top row first.
    ///
    /// `rows` may be shorter than `height`; missing rows are empty. Rows must
    /// be non-increasing and the first one must fit in `width`.
    pub fn new(height: usize, width: usize, rows: Vec<usize>) -> Result<Self> {
        if rows.len() > height {
            return Err(YoungError::TooManyRows {
                rows: rows.len(),
                height,
            });
        }
        let mut bound = width;
        for (index, &length) in rows.iter().enumerate() {
            if length > bound {
                return Err(YoungError::RowTooLong {
                    index,
                    length,
                    bound,
                });
            }
            bound = length;
        }
        let mut rows = rows;
        rows.resize(height, 0);
        Ok(Self {
            height,
            width,
            rows,
        })
    }

    /// Rows the caller already knows to be non-increasing, at most `width`
    /// long and exactly `height` of them.
    pub(crate) fn from_valid_rows(
        height: usize,
        width: usize,
        rows: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(rows.len(), height);
        debug_assert!(rows.first().is_none_or(|&first| first <= width));
        debug_assert!(rows.is_sorted_by(|a, b| a >= b));
        Self {
            height,
            width,
            rows,
        }
    }

    /// The diagram with exactly these rows in the smallest frame holding them.
    pub fn from_rows(rows: &[usize]) -> Result<Self> {
        let width = rows.iter().copied().max().unwrap_or(0);
        Self::new(rows.len(), width, rows.to_vec())
    }

    /// Rebuild a diagram from its boundary word.
    ///
    /// Every word is valid: the frame is `#U x #R`.
    pub fn from_word(word: &BinaryWord) -> Self {
        let height = word.height();
        let mut column_heights = Vec::with_capacity(word.width());
        let mut current = height;
        for step in word.steps() {
            match step {
                Step::Up => current -= 1,
                Step::Right => column_heights.push(current),
            }
        }
        let rows = (0..height)
            .map(|row| column_heights.iter().filter(|&&h| h > row).count())
            .collect();
        Self {
            height,
            width: column_heights.len(),
            rows,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn frame(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Half perimeter `n = height + width`, the length of the boundary word.
    pub fn half_perimeter(&self) -> usize {
        self.height + self.width
    }

    /// Row lengths, top row first, padded with zeros to the frame height.
    pub fn row_lengths(&self) -> &[usize] {
        &self.rows
    }

    /// Column lengths, left column first, padded with zeros to the frame width.
    pub fn column_lengths(&self) -> Vec<usize> {
        (0..self.width)
            .map(|column| self.rows.iter().filter(|&&len| len > column).count())
            .collect()
    }

    /// Number of cells.
    pub fn volume(&self) -> usize {
        self.rows.iter().sum()
    }

    /// The boundary path from the lower left to the upper right corner.
    pub fn word(&self) -> BinaryWord {
        let mut x = 0;
        let mut y = self.height;
        let mut steps = Vec::with_capacity(self.half_perimeter());
        for _ in 0..self.half_perimeter() {
            if y == 0 {
                steps.push(Step::Right);
            } else if x < self.rows[y - 1] {
                steps.push(Step::Right);
                x += 1;
            } else {
                steps.push(Step::Up);
                y -= 1;
            }
        }
        BinaryWord::new(steps)
    }

    /// s(lambda) = height / width.
    pub fn slope(&self) -> Result<Slope> {
        Slope::new(self.height, self.width)
            .ok_or(YoungError::ZeroWidth { operation: "slope" })
    }

    pub fn transpose(&self) -> Self {
        Self {
            height: self.width,
            width: self.height,
            rows: self.column_lengths(),
        }
    }

    /// The cells of the frame outside the diagram, turned by half a turn.
    pub fn complement(&self) -> Self {
        Self::from_word(&self.word().reversed())
    }

    /// Glue the boundary words of two diagrams end to end.
    pub fn concat(&self, other: &YoungDiagram) -> Self {
        Self::from_word(&self.word().concat(&other.word()))
    }

    /// Rotate the boundary word right by `steps`; negative values rotate left.
    pub fn cyclic_action(&self, steps: i64) -> Self {
        Self::from_word(&self.word().rotated(steps))
    }

    /// Iterate over `self, self >> 1, self >> 2, ...` up to the first repeat.
    pub fn cyclic_orbit(&self) -> CyclicOrbit {
        let word = self.word();
        CyclicOrbit {
            first: word.clone(),
            next: Some(word),
        }
    }

    /// o(lambda): the size of the cyclic orbit.
    pub fn orbit_length(&self) -> usize {
        self.word().period()
    }

    /// Every row `i` satisfies `rows[i] <= width * (height - i) / height`.
    pub fn is_upper_triangular(&self) -> Result<bool> {
        if self.height == 0 {
            return Err(YoungError::ZeroHeight {
                operation: "is_upper_triangular",
            });
        }
        Ok(self.under_diagonal())
    }

    pub fn is_lower_triangular(&self) -> Result<bool> {
        if self.height == 0 {
            return Err(YoungError::ZeroHeight {
                operation: "is_lower_triangular",
            });
        }
        Ok(self.complement().under_diagonal())
    }

    /// d(lambda): how many single rotations reach a lower triangular diagram.
    ///
    /// `None` when no rotation in `0..n` is lower triangular.
    pub fn steps_to_next_lower_triangular(&self) -> Result<Option<usize>> {
        if self.height == 0 {
            return Err(YoungError::ZeroHeight {
                operation: "steps_to_next_lower_triangular",
            });
        }
        let found = self
            .cyclic_orbit()
            .cycle()
            .take(self.half_perimeter())
            .position(|fellow| fellow.complement().under_diagonal());
        Ok(found)
    }

    /// Lexicographic comparison of rows; only defined within one frame.
    pub fn compare(&self, other: &YoungDiagram) -> Result<Ordering> {
        self.partial_cmp(other)
            .ok_or(YoungError::FrameMismatch {
                left: self.frame(),
                right: other.frame(),
            })
    }

    /// Draw the diagram as a framed table, `x` for cells inside it.
    ///
    /// `None` for a frame without cells.
    pub fn render(&self) -> Option<Table> {
        if self.height == 0 || self.width == 0 {
            return None;
        }
        let rows = self
            .rows
            .iter()
            .map(|&len| {
                let mut cells = vec!["x".to_string(); len];
                cells.resize(self.width, " ".to_string());
                cells
            })
            .collect();
        Some(Table::new(rows).with_frame(true))
    }

    pub(crate) fn under_diagonal(&self) -> bool {
        let h = self.height;
        self.rows
            .iter()
            .enumerate()
            .all(|(i, &len)| len * h <= self.width * (h - i))
    }
}

/// Iterator over a cyclic orbit, see [`YoungDiagram::cyclic_orbit`].
#[derive(Debug, Clone)]
pub struct CyclicOrbit {
    first: BinaryWord,
    next: Option<BinaryWord>,
}

impl Iterator for CyclicOrbit {
    type Item = YoungDiagram;

    fn next(&mut self) -> Option<YoungDiagram> {
        let word = self.next.take()?;
        let rotated = word.rotated(1);
        if rotated != self.first {
            self.next = Some(rotated);
        }
        Some(YoungDiagram::from_word(&word))
    }
}

impl PartialOrd for YoungDiagram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.frame() != other.frame() {
            return None;
        }
        Some(self.rows.cmp(&other.rows))
    }
}

impl Mul for &YoungDiagram {
    type Output = YoungDiagram;

    fn mul(self, rhs: &YoungDiagram) -> YoungDiagram {
        self.concat(rhs)
    }
}

impl Mul for YoungDiagram {
    type Output = YoungDiagram;

    fn mul(self, rhs: YoungDiagram) -> YoungDiagram {
        self.concat(&rhs)
    }
}

impl Shr<usize> for &YoungDiagram {
    type Output = YoungDiagram;

    fn shr(self, steps: usize) -> YoungDiagram {
        let n = self.half_perimeter().max(1);
        self.cyclic_action((steps % n) as i64)
    }
}

impl Shr<usize> for YoungDiagram {
    type Output = YoungDiagram;

    fn shr(self, steps: usize) -> YoungDiagram {
        &self >> steps
    }
}

impl FromStr for YoungDiagram {
    type Err = YoungError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::from_word(&s.parse()?))
    }
}

/// Formats a row list the way a tuple prints: `()`, `(2,)`, `(3, 1)`.
pub fn tuple_string(values: &[usize]) -> String {
    match values {
        [] => "()".to_string(),
        [only] => format!("({only},)"),
        _ => format!("({})", values.iter().join(", ")),
    }
}

impl fmt::Display for YoungDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Young diagram of height {}, width {}, and with partition {}.",
            self.height,
            self.width,
            tuple_string(&self.rows)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yd(height: usize, width: usize, rows: &[usize]) -> YoungDiagram {
        YoungDiagram::new(height, width, rows.to_vec()).unwrap()
    }

    #[test]
    fn pads_rows_to_height() {
        let d = yd(4, 3, &[2, 1]);
        assert_eq!(d.row_lengths(), &[2, 1, 0, 0]);
    }

    #[test]
    fn rejects_invalid_rows() {
        assert_eq!(
            YoungDiagram::new(1, 3, vec![1, 1]),
            Err(YoungError::TooManyRows { rows: 2, height: 1 })
        );
        assert_eq!(
            YoungDiagram::new(2, 3, vec![4]),
            Err(YoungError::RowTooLong {
                index: 0,
                length: 4,
                bound: 3
            })
        );
        assert_eq!(
            YoungDiagram::new(3, 3, vec![1, 2]),
            Err(YoungError::RowTooLong {
                index: 1,
                length: 2,
                bound: 1
            })
        );
    }

    #[test]
    fn word_traces_boundary() {
        assert_eq!(yd(2, 3, &[2, 1]).word().to_string(), "RURUR");
        assert_eq!(yd(2, 3, &[]).word().to_string(), "UURRR");
        assert_eq!(yd(2, 3, &[3, 3]).word().to_string(), "RRRUU");
    }

    #[test]
    fn from_word_inverts_word() {
        let d: YoungDiagram = "RRURU".parse().unwrap();
        assert_eq!(d, yd(2, 3, &[3, 2]));
    }

    #[test]
    fn from_rows_uses_smallest_frame() {
        let d = YoungDiagram::from_rows(&[3, 1]).unwrap();
        assert_eq!(d.frame(), (2, 3));
        let empty = YoungDiagram::from_rows(&[]).unwrap();
        assert_eq!(empty.frame(), (0, 0));
    }

    #[test]
    fn partial_order_is_frame_local() {
        let a = yd(2, 3, &[2, 1]);
        let b = yd(2, 3, &[3, 0]);
        assert!(a < b);
        assert!(b >= a);
        assert!(a <= a.clone());
        let other = yd(3, 3, &[2, 1]);
        assert_eq!(a.partial_cmp(&other), None);
        assert!(a.compare(&other).is_err());
    }

    #[test]
    fn shr_matches_cyclic_action() {
        let d = yd(2, 3, &[2, 1]);
        assert_eq!(&d >> 1, d.cyclic_action(1));
        assert_eq!(&d >> 7, d.cyclic_action(2));
        assert_eq!(&d >> 5, d);
    }

    #[test]
    fn zero_height_triangularity_is_an_error() {
        let d = yd(0, 2, &[]);
        assert!(d.is_upper_triangular().is_err());
        assert!(d.is_lower_triangular().is_err());
    }

    #[test]
    fn tuple_formatting() {
        assert_eq!(tuple_string(&[]), "()");
        assert_eq!(tuple_string(&[2]), "(2,)");
        assert_eq!(tuple_string(&[3, 1, 0]), "(3, 1, 0)");
    }
}
