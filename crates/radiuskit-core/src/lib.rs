//! # RadiusKit Core
//!
//! Host-independent logic for an interactive "measure radius" map tool:
//!
//! - **Units**: the nine supported distance units and the fixed conversion
//!   table between them, plus measurement-mode selection and the display
//!   formatting rules.
//! - **Geometry**: planar points, the two-vertex radius line, and the
//!   densified circle ring used as the buffer preview.
//!
//! Everything in this crate is pure and synchronous; the interaction state
//! machine that drives it lives in `radiuskit-tool`.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use error::{MeasureError, Result};
pub use geometry::{buffer_ring, densify_ring, Circle, Point, RadiusLine};
pub use units::{
    convert_length, format_coordinate, format_measurement, DistanceUnit, MeasurementMode,
};
