use serde::{Deserialize, Serialize};

use super::Point;

/// The two-vertex segment from the measurement centre to the outer point.
///
/// Recomputed on every outer-point change; never persisted beyond the
/// current interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusLine {
    pub start: Point,
    pub end: Point,
}

impl RadiusLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Planar length of the segment in the CRS's native unit.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Bearing from start to end, degrees clockwise from north.
    pub fn azimuth(&self) -> f64 {
        self.start.azimuth_to(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_euclidean_distance() {
        let line = RadiusLine::new(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.length(), line.start.distance_to(&line.end));
    }

    #[test]
    fn test_zero_length() {
        let p = Point::new(-3.0, 7.0);
        assert_eq!(RadiusLine::new(p, p).length(), 0.0);
    }
}
