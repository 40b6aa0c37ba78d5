//! Error types for the young diagram library.

use thiserror::Error;

/// Primary error type for diagram construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YoungError {
    #[error("diagram has {rows} rows but the frame height is {height}")]
    TooManyRows { rows: usize, height: usize },

    #[error("row {index} has length {length}, longer than the bound {bound}")]
    RowTooLong {
        index: usize,
        length: usize,
        bound: usize,
    },

    #[error("invalid step {found:?} at position {position}: expected 'R' or 'U'")]
    InvalidStep { position: usize, found: char },

    #[error("frames differ: {left:?} vs {right:?}")]
    FrameMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{operation} is undefined for a frame of zero height")]
    ZeroHeight { operation: &'static str },

    #[error("{operation} is undefined for a frame of zero width")]
    ZeroWidth { operation: &'static str },
}

/// Convenience Result type alias for YoungError.
pub type Result<T> = std::result::Result<T, YoungError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_message() {
        let errors = [
            YoungError::TooManyRows { rows: 3, height: 2 },
            YoungError::RowTooLong {
                index: 1,
                length: 2,
                bound: 1,
            },
            YoungError::InvalidStep {
                position: 2,
                found: 'x',
            },
            YoungError::FrameMismatch {
                left: (1, 2),
                right: (2, 1),
            },
            YoungError::ZeroHeight { operation: "d" },
            YoungError::ZeroWidth { operation: "slope" },
        ];
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "diagram has 3 rows but the frame height is 2",
                "row 1 has length 2, longer than the bound 1",
                "invalid step 'x' at position 2: expected 'R' or 'U'",
                "frames differ: (1, 2) vs (2, 1)",
                "d is undefined for a frame of zero height",
                "slope is undefined for a frame of zero width",
            ]
        );
    }
}
