//! Error handling for RadiusKit
//!
//! The measurement core has almost no failure modes of its own: operations on
//! missing interaction state are silent no-ops, never errors. What remains is
//! host-facing parsing of unit and mode selections.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Measurement error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// Unit selector text did not match any supported distance unit
    #[error("Unknown distance unit: {name}")]
    UnknownUnit {
        /// The unrecognized unit name.
        name: String,
    },

    /// Unit selector index outside the nine supported units
    #[error("Distance unit index {index} out of range")]
    UnitIndexOutOfRange {
        /// The out-of-range selector index.
        index: usize,
    },

    /// Mode selector text did not match a measurement mode
    #[error("Unknown measurement mode: {name}")]
    UnknownMode {
        /// The unrecognized mode name.
        name: String,
    },
}

/// Result type using MeasureError
pub type Result<T> = std::result::Result<T, MeasureError>;
