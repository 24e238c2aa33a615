//! Trait seams between the measurement tool and its hosting application.
//!
//! The host owns the map canvas, snapping configuration, CRS machinery and
//! the measurement dialog; the tool only ever talks to these traits. Tests
//! substitute recording doubles for all of them.

use serde::{Deserialize, Serialize};

use radiuskit_core::{DistanceUnit, Point, RadiusLine};

/// Metadata of a coordinate reference system, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crs {
    /// Authority identifier, e.g. "EPSG:4326".
    pub auth_id: String,
    /// True for geographic (lat/lon) systems; affects coordinate rounding.
    pub is_geographic: bool,
    /// The CRS's native linear unit, in which planar lengths are measured.
    pub map_unit: DistanceUnit,
    /// Ellipsoid acronym used for ellipsoidal measurement, e.g. "WGS84".
    pub ellipsoid: String,
}

impl Crs {
    pub fn new(
        auth_id: impl Into<String>,
        is_geographic: bool,
        map_unit: DistanceUnit,
        ellipsoid: impl Into<String>,
    ) -> Self {
        Self {
            auth_id: auth_id.into(),
            is_geographic,
            map_unit,
            ellipsoid: ellipsoid.into(),
        }
    }
}

/// Cursor snapping provided by the host canvas.
pub trait SnappingService {
    /// Returns the snapped replacement for a raw map coordinate, or `None`
    /// when nothing snaps within the host's configured tolerance.
    fn snap(&self, point: Point) -> Option<Point>;
}

/// Re-projection between coordinate reference systems.
pub trait CrsTransformService {
    fn transform_point(&self, point: Point, from: &Crs, to: &Crs) -> Point;

    fn transform_ring(&self, ring: &[Point], from: &Crs, to: &Crs) -> Vec<Point> {
        ring.iter()
            .map(|p| self.transform_point(*p, from, to))
            .collect()
    }
}

/// Geodesic measurement engine.
pub trait GeodesicCalculator {
    /// Length of the line between two points along the CRS's ellipsoid,
    /// already converted to `target_unit`.
    fn line_length(&self, start: Point, end: Point, crs: &Crs, target_unit: DistanceUnit) -> f64;
}

/// Visual artifacts the tool places on the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Transient centre-to-cursor line shown while dragging.
    PreviewLine,
    /// Transient circle outline shown while dragging.
    PreviewCircle,
    /// Finalized radius line.
    RadiusLine,
    /// Finalized densified buffer ring.
    BufferRing,
    CentreMarker,
    OuterMarker,
}

impl Artifact {
    pub const ALL: [Artifact; 6] = [
        Artifact::PreviewLine,
        Artifact::PreviewCircle,
        Artifact::RadiusLine,
        Artifact::BufferRing,
        Artifact::CentreMarker,
        Artifact::OuterMarker,
    ];
}

/// Drawing surface for the tool's artifacts.
///
/// Setting an artifact replaces its previous geometry; removal of an absent
/// artifact must be tolerated.
pub trait CanvasSink {
    fn set_preview_line(&mut self, line: &RadiusLine);
    fn set_preview_circle(&mut self, ring: &[Point]);
    fn set_radius_line(&mut self, line: &RadiusLine);
    fn set_buffer_ring(&mut self, ring: &[Point]);
    fn set_centre_marker(&mut self, point: Point);
    fn set_outer_marker(&mut self, point: Point);
    fn remove(&mut self, artifact: Artifact);

    fn clear_all(&mut self) {
        for artifact in Artifact::ALL {
            self.remove(artifact);
        }
    }
}

/// Text surface of the measurement dialog.
pub trait MeasurePanel {
    fn set_centre_text(&mut self, x: &str, y: &str);
    fn set_radius_text(&mut self, text: &str);
    fn clear_centre_fields(&mut self);
}
