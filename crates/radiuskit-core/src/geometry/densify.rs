use super::Point;

/// Inserts `points_per_edge` evenly spaced vertices along every edge of a
/// closed ring, including the closing edge from the last vertex back to the
/// first. The shape is unchanged; only the vertex density increases.
///
/// A ring of `n` vertices becomes `n + n * points_per_edge` vertices.
pub fn densify_ring(ring: &[Point], points_per_edge: usize) -> Vec<Point> {
    if ring.is_empty() || points_per_edge == 0 {
        return ring.to_vec();
    }

    let mut densified = Vec::with_capacity(ring.len() * (points_per_edge + 1));
    for (i, start) in ring.iter().enumerate() {
        let end = &ring[(i + 1) % ring.len()];
        densified.push(*start);
        for j in 1..=points_per_edge {
            let t = j as f64 / (points_per_edge + 1) as f64;
            densified.push(Point::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            ));
        }
    }
    densified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densify_counts() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(densify_ring(&square, 10).len(), 4 + 4 * 10);
        assert_eq!(densify_ring(&square, 1).len(), 8);
        assert_eq!(densify_ring(&square, 0).len(), 4);
    }

    #[test]
    fn test_densify_preserves_original_vertices() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let dense = densify_ring(&square, 3);
        for (i, v) in square.iter().enumerate() {
            assert_eq!(dense[i * 4], *v);
        }
    }

    #[test]
    fn test_densify_interpolates_closing_edge() {
        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ];
        let dense = densify_ring(&triangle, 1);
        // Midpoint of the closing edge (0,2) -> (0,0).
        assert_eq!(dense[5], Point::new(0.0, 1.0));
    }

    #[test]
    fn test_densify_empty_ring() {
        assert!(densify_ring(&[], 10).is_empty());
    }
}
