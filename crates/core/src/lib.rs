//! young - Young diagrams in a rectangular frame.
//!
//! A diagram is a non-increasing list of row lengths that fits in an
//! `height x width` box. Its boundary is a word over `{R, U}` of length
//! `height + width`; rotating that word gives the cyclic action studied here,
//! together with the numerical characteristics o(lambda), d(lambda) and
//! s(lambda).
//!
//! # Example
//!
//! ```
//! use young_core::{YoungDiagram, YoungDiagrams};
//!
//! let d = YoungDiagram::new(2, 3, vec![2, 1])?;
//! assert_eq!(d.word().to_string(), "RURUR");
//! assert_eq!(d.orbit_length(), 5);
//!
//! let family = YoungDiagrams::new(2, 3);
//! assert_eq!(family.minimal_upper_triangulars()?.count(), 2);
//! # Ok::<(), young_core::YoungError>(())
//! ```

pub mod binary;
pub mod diagram;
pub mod diagrams;
pub mod error;
pub mod slope;
pub mod table;

pub use binary::{BinaryWord, Step};
pub use diagram::{CyclicOrbit, YoungDiagram};
pub use diagrams::{Diagrams, MinimalUpperTriangulars, YoungDiagrams};
pub use error::{Result, YoungError};
pub use slope::Slope;
pub use table::Table;
