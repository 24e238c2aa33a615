//! Planar geometry for the radius measurement: points, the two-vertex
//! radius line, circle tessellation and ring densification.

mod circle;
mod densify;
mod line;

pub use circle::Circle;
pub use densify::densify_ring;
pub use line::RadiusLine;

use serde::{Deserialize, Serialize};

use crate::constants::{CIRCLE_SEGMENTS, DENSIFY_POINTS_PER_EDGE};

/// A 2D coordinate in the map's current coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Compass bearing to another point, in degrees clockwise from north.
    ///
    /// Range is (-180, 180]; coincident points yield 0.
    pub fn azimuth_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).to_degrees()
    }
}

/// Builds the buffer ring for a radius drag: a circle of radius
/// `centre.distance_to(outer)` centred at `centre`, its first vertex on the
/// centre-to-outer bearing, tessellated to 360 vertices and densified with
/// 10 extra vertices per edge.
///
/// The result is a closed ring with implicit closure (the last vertex is not
/// a duplicate of the first) and always contains exactly
/// `360 + 360 * 10 = 3960` vertices, independent of the radius. Pure function
/// of the two points.
pub fn buffer_ring(centre: Point, outer: Point) -> Vec<Point> {
    let radius = centre.distance_to(&outer);
    let azimuth = centre.azimuth_to(&outer);
    let circle = Circle::new(centre, radius, azimuth);
    densify_ring(&circle.to_ring(CIRCLE_SEGMENTS), DENSIFY_POINTS_PER_EDGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_azimuth_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.azimuth_to(&Point::new(0.0, 1.0)), 0.0);
        assert_eq!(origin.azimuth_to(&Point::new(1.0, 0.0)), 90.0);
        assert_eq!(origin.azimuth_to(&Point::new(0.0, -1.0)), 180.0);
        assert_eq!(origin.azimuth_to(&Point::new(-1.0, 0.0)), -90.0);
    }

    #[test]
    fn test_buffer_ring_vertex_count() {
        let ring = buffer_ring(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(ring.len(), 360 + 360 * 10);
    }

    #[test]
    fn test_buffer_ring_count_independent_of_radius() {
        let small = buffer_ring(Point::new(0.0, 0.0), Point::new(0.001, 0.0));
        let large = buffer_ring(Point::new(0.0, 0.0), Point::new(1.0e7, 0.0));
        assert_eq!(small.len(), large.len());
    }

    #[test]
    fn test_buffer_ring_centred_on_centre() {
        let centre = Point::new(10.0, -20.0);
        let ring = buffer_ring(centre, Point::new(110.0, -20.0));
        // Base vertices sit exactly on the circle; densified vertices lie on
        // chords, slightly inside. All are within the radius.
        for v in &ring {
            let d = centre.distance_to(v);
            assert!(d <= 100.0 + 1e-9);
            assert!(d >= 100.0 * (std::f64::consts::PI / 360.0).cos() - 1e-9);
        }
    }

    #[test]
    fn test_buffer_ring_starts_at_outer_bearing() {
        let centre = Point::new(0.0, 0.0);
        let outer = Point::new(100.0, 0.0);
        let ring = buffer_ring(centre, outer);
        assert!((ring[0].x - 100.0).abs() < 1e-9);
        assert!(ring[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_buffer_ring() {
        let centre = Point::new(5.0, 5.0);
        let ring = buffer_ring(centre, centre);
        assert_eq!(ring.len(), 3960);
        for v in &ring {
            assert_eq!(*v, centre);
        }
    }
}
