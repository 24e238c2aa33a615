use serde::{Deserialize, Serialize};

use super::Point;

/// A circle parameterized by centre, radius and an azimuth giving the
/// direction of the first tessellated vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    /// Bearing of the first ring vertex, degrees clockwise from north.
    pub azimuth: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64, azimuth: f64) -> Self {
        Self {
            center,
            radius,
            azimuth,
        }
    }

    /// Tessellates the circle into a ring of `segments` vertices.
    ///
    /// Vertices are laid out clockwise starting at `azimuth`. Closure is
    /// implicit: the first vertex is not repeated at the end.
    pub fn to_ring(&self, segments: usize) -> Vec<Point> {
        let step = std::f64::consts::TAU / segments as f64;
        let start = self.azimuth.to_radians();
        (0..segments)
            .map(|i| {
                let angle = start + i as f64 * step;
                Point::new(
                    self.center.x + self.radius * angle.sin(),
                    self.center.y + self.radius * angle.cos(),
                )
            })
            .collect()
    }
}
