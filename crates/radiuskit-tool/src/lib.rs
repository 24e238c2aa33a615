//! # RadiusKit Tool
//!
//! The interaction layer of the radius measurement tool: a synchronous,
//! single-owner state machine driven by named transition methods, plus the
//! trait seams it consumes from the hosting GIS application.
//!
//! ## Architecture
//!
//! ```text
//! Host adapter (map-canvas events, dialog signals)
//!   └── MeasureRadiusTool (Idle / Dragging / Placed)
//!         ├── SnappingService      (cursor snapping)
//!         ├── CrsTransformService  (re-projection on CRS change)
//!         ├── GeodesicCalculator   (ellipsoidal lengths)
//!         ├── CanvasSink           (rubber bands and markers)
//!         └── MeasurePanel         (coordinate and radius text fields)
//! ```
//!
//! The state machine registers no callbacks itself; the host adapter calls
//! `press_primary`, `pointer_move`, `press_secondary`, `reset`,
//! `unit_changed`, `mode_changed` and `crs_changed` from its own event
//! wiring. Every transition is best-effort: missing prerequisite state is a
//! silent no-op, never an error.

pub mod services;
pub mod tool;

pub use services::{
    Artifact, CanvasSink, Crs, CrsTransformService, GeodesicCalculator, MeasurePanel,
    SnappingService,
};
pub use tool::{MeasureRadiusTool, Phase};
