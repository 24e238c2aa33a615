//! The radius measurement state machine.

use tracing::{debug, trace};

use radiuskit_core::constants::RADIUS_DECIMALS;
use radiuskit_core::{
    buffer_ring, convert_length, format_coordinate, format_measurement, DistanceUnit,
    MeasurementMode, Point, RadiusLine,
};

use crate::services::{
    Artifact, CanvasSink, Crs, CrsTransformService, GeodesicCalculator, MeasurePanel,
    SnappingService,
};

/// Interaction phase of the tool.
///
/// `Placed` is the "result shown" rest state after a secondary-button press:
/// the finalized radius line and buffer stay on the canvas until the next
/// primary press or an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Placed,
}

/// Measures a radius on the host map canvas.
///
/// One instance per active tool session; all mutable state is owned here
/// exclusively and every transition completes synchronously on the host's
/// event-dispatch path.
pub struct MeasureRadiusTool {
    phase: Phase,
    centre_point: Option<Point>,
    outer_point: Option<Point>,
    /// Planar radius length in the CRS's native unit.
    radius_length: f64,
    unit: DistanceUnit,
    mode: MeasurementMode,
    crs: Crs,
    radius_line: Option<RadiusLine>,
    buffer: Option<Vec<Point>>,

    snapping: Box<dyn SnappingService>,
    transforms: Box<dyn CrsTransformService>,
    geodesic: Box<dyn GeodesicCalculator>,
    canvas: Box<dyn CanvasSink>,
    panel: Box<dyn MeasurePanel>,
}

impl MeasureRadiusTool {
    pub fn new(
        crs: Crs,
        snapping: Box<dyn SnappingService>,
        transforms: Box<dyn CrsTransformService>,
        geodesic: Box<dyn GeodesicCalculator>,
        canvas: Box<dyn CanvasSink>,
        mut panel: Box<dyn MeasurePanel>,
    ) -> Self {
        panel.set_radius_text(&format_measurement(0.0, RADIUS_DECIMALS));
        Self {
            phase: Phase::Idle,
            centre_point: None,
            outer_point: None,
            radius_length: 0.0,
            unit: DistanceUnit::default(),
            mode: MeasurementMode::default(),
            crs,
            radius_line: None,
            buffer: None,
            snapping,
            transforms,
            geodesic,
            canvas,
            panel,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn centre_point(&self) -> Option<Point> {
        self.centre_point
    }

    pub fn outer_point(&self) -> Option<Point> {
        self.outer_point
    }

    /// Planar radius length in the CRS's native unit.
    pub fn radius_length(&self) -> f64 {
        self.radius_length
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Primary-button press: discard any previous interaction and start a
    /// new drag at the (snapped) event point.
    pub fn press_primary(&mut self, point: Point) {
        self.discard_artifacts();

        let centre = self.snapped(point);
        self.centre_point = Some(centre);
        self.canvas.set_centre_marker(centre);
        self.publish_centre_text(centre);
        self.panel
            .set_radius_text(&format_measurement(self.radius_length, RADIUS_DECIMALS));

        self.phase = Phase::Dragging;
        debug!(x = centre.x, y = centre.y, "radius drag started");
    }

    /// Pointer move: while dragging, track the outer point, rebuild the
    /// preview geometry and republish the display length. A move before any
    /// press is a silent no-op.
    pub fn pointer_move(&mut self, point: Point) {
        let cursor = self.snapped(point);
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(centre) = self.centre_point else {
            return;
        };

        self.outer_point = Some(cursor);

        let line = RadiusLine::new(centre, cursor);
        let ring = buffer_ring(centre, cursor);
        self.canvas.set_preview_line(&line);
        self.canvas.set_preview_circle(&ring);

        self.radius_length = line.length();
        self.radius_line = Some(line);
        self.buffer = Some(ring);

        let display = self.display_length(centre, cursor);
        self.panel
            .set_radius_text(&format_measurement(display, RADIUS_DECIMALS));
        trace!(length = self.radius_length, "radius preview updated");
    }

    /// Secondary-button press: finalize the drag. The transient previews are
    /// replaced with the persisted radius line and buffer ring. Ignored
    /// unless a drag is in progress.
    pub fn press_secondary(&mut self, point: Point) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(centre) = self.centre_point else {
            return;
        };

        let outer = self.snapped(point);
        self.outer_point = Some(outer);

        self.canvas.remove(Artifact::PreviewLine);
        self.canvas.remove(Artifact::PreviewCircle);

        let line = RadiusLine::new(centre, outer);
        let ring = buffer_ring(centre, outer);
        self.radius_length = line.length();
        self.canvas.set_radius_line(&line);
        self.canvas.set_buffer_ring(&ring);
        self.canvas.set_outer_marker(outer);
        self.radius_line = Some(line);
        self.buffer = Some(ring);

        self.phase = Phase::Placed;
        debug!(length = self.radius_length, "radius measurement placed");
    }

    /// External reset: dialog "New", dialog close, or tool deactivation.
    /// Clears all state and artifacts and returns to `Idle`.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.centre_point = None;
        self.outer_point = None;
        self.radius_length = 0.0;
        self.radius_line = None;
        self.buffer = None;
        self.canvas.clear_all();
        self.panel.clear_centre_fields();
        self.panel
            .set_radius_text(&format_measurement(0.0, RADIUS_DECIMALS));
        debug!("measurement reset");
    }

    /// Display unit selection changed. Recomputes the displayed length when
    /// both points are live; geometry and points are untouched.
    pub fn unit_changed(&mut self, unit: DistanceUnit) {
        self.unit = unit;
        self.republish_display_length();
    }

    /// Measurement mode selection changed (Cartesian/Ellipsoidal).
    pub fn mode_changed(&mut self, mode: MeasurementMode) {
        self.mode = mode;
        self.republish_display_length();
    }

    /// Project CRS changed: re-project every live point and geometry into
    /// the new CRS, refresh markers and panel text, and recompute lengths.
    /// With no live state this only refreshes the cached CRS metadata.
    pub fn crs_changed(&mut self, new_crs: Crs) {
        if let Some(centre) = self.centre_point {
            let centre = self.transforms.transform_point(centre, &self.crs, &new_crs);
            self.centre_point = Some(centre);
            self.canvas.set_centre_marker(centre);
            self.panel.set_centre_text(
                &format_coordinate(centre.x, new_crs.is_geographic),
                &format_coordinate(centre.y, new_crs.is_geographic),
            );
        }
        if let Some(outer) = self.outer_point {
            let outer = self.transforms.transform_point(outer, &self.crs, &new_crs);
            self.outer_point = Some(outer);
            if self.phase == Phase::Placed {
                self.canvas.set_outer_marker(outer);
            }
        }

        if let Some(line) = self.radius_line {
            let line = RadiusLine::new(
                self.transforms.transform_point(line.start, &self.crs, &new_crs),
                self.transforms.transform_point(line.end, &self.crs, &new_crs),
            );
            self.radius_length = line.length();
            match self.phase {
                Phase::Dragging => self.canvas.set_preview_line(&line),
                Phase::Placed => self.canvas.set_radius_line(&line),
                Phase::Idle => {}
            }
            self.radius_line = Some(line);
        }
        if let Some(ring) = self.buffer.take() {
            let ring = self.transforms.transform_ring(&ring, &self.crs, &new_crs);
            match self.phase {
                Phase::Dragging => self.canvas.set_preview_circle(&ring),
                Phase::Placed => self.canvas.set_buffer_ring(&ring),
                Phase::Idle => {}
            }
            self.buffer = Some(ring);
        }

        debug!(from = %self.crs.auth_id, to = %new_crs.auth_id, "project CRS changed");
        self.crs = new_crs;
        self.republish_display_length();
    }

    fn snapped(&self, point: Point) -> Point {
        self.snapping.snap(point).unwrap_or(point)
    }

    fn display_length(&self, centre: Point, outer: Point) -> f64 {
        match self.mode {
            MeasurementMode::Cartesian => {
                convert_length(self.radius_length, self.crs.map_unit, self.unit)
            }
            MeasurementMode::Ellipsoidal => {
                self.geodesic.line_length(centre, outer, &self.crs, self.unit)
            }
        }
    }

    fn republish_display_length(&mut self) {
        let (Some(centre), Some(outer)) = (self.centre_point, self.outer_point) else {
            return;
        };
        let display = self.display_length(centre, outer);
        self.panel
            .set_radius_text(&format_measurement(display, RADIUS_DECIMALS));
    }

    fn publish_centre_text(&mut self, centre: Point) {
        self.panel.set_centre_text(
            &format_coordinate(centre.x, self.crs.is_geographic),
            &format_coordinate(centre.y, self.crs.is_geographic),
        );
    }

    fn discard_artifacts(&mut self) {
        self.canvas.clear_all();
        self.panel.clear_centre_fields();
        self.centre_point = None;
        self.outer_point = None;
        self.radius_line = None;
        self.buffer = None;
    }
}
