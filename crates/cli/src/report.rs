//! Serializable views of diagrams for JSON output.

use std::fmt;

use serde::Serialize;
use young_core::{YoungDiagram, YoungDiagrams, YoungError};

#[derive(Debug, Serialize)]
pub struct DiagramReport {
    pub height: usize,
    pub width: usize,
    pub rows: Vec<usize>,
    pub word: String,
    pub volume: usize,
}

impl From<&YoungDiagram> for DiagramReport {
    fn from(d: &YoungDiagram) -> Self {
        Self {
            height: d.height(),
            width: d.width(),
            rows: d.row_lengths().to_vec(),
            word: d.word().to_string(),
            volume: d.volume(),
        }
    }
}

/// Outcome of looking for the next lower triangular rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerTriangularSteps {
    Steps(usize),
    /// No rotation of the diagram is lower triangular.
    NotFound,
    /// The frame has zero height.
    Undefined,
}

impl From<Result<Option<usize>, YoungError>> for LowerTriangularSteps {
    fn from(result: Result<Option<usize>, YoungError>) -> Self {
        match result {
            Ok(Some(steps)) => Self::Steps(steps),
            Ok(None) => Self::NotFound,
            Err(_) => Self::Undefined,
        }
    }
}

impl fmt::Display for LowerTriangularSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(steps) => write!(f, "{steps}"),
            Self::NotFound => f.write_str("none"),
            Self::Undefined => f.write_str("-"),
        }
    }
}

/// Every characteristic of one diagram. Fields undefined for the frame
/// (zero height or zero width) are `None`.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub height: usize,
    pub width: usize,
    pub half_perimeter: usize,
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
    pub volume: usize,
    pub word: String,
    pub slope: Option<String>,
    pub orbit_length: usize,
    pub upper_triangular: Option<bool>,
    pub lower_triangular: Option<bool>,
    pub steps_to_next_lower_triangular: LowerTriangularSteps,
}

impl From<&YoungDiagram> for InfoReport {
    fn from(d: &YoungDiagram) -> Self {
        Self {
            height: d.height(),
            width: d.width(),
            half_perimeter: d.half_perimeter(),
            rows: d.row_lengths().to_vec(),
            columns: d.column_lengths(),
            volume: d.volume(),
            word: d.word().to_string(),
            slope: d.slope().ok().map(|s| s.to_string()),
            orbit_length: d.orbit_length(),
            upper_triangular: d.is_upper_triangular().ok(),
            lower_triangular: d.is_lower_triangular().ok(),
            steps_to_next_lower_triangular: d.steps_to_next_lower_triangular().into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FamilyReport {
    pub height: usize,
    pub width: usize,
    /// `None` once the count exceeds `u128`.
    pub cardinality: Option<String>,
    pub diagrams: Vec<DiagramReport>,
}

impl FamilyReport {
    pub fn new(family: &YoungDiagrams, diagrams: &[YoungDiagram]) -> Self {
        Self {
            height: family.height(),
            width: family.width(),
            // u128 does not fit a JSON number
            cardinality: family.cardinality().map(|c| c.to_string()),
            diagrams: diagrams.iter().map(DiagramReport::from).collect(),
        }
    }
}
