//! Shared constants for geometry construction and display formatting.

/// Number of vertices a circle is tessellated into before densification.
pub const CIRCLE_SEGMENTS: usize = 360;

/// Extra vertices inserted per ring edge when densifying the buffer ring.
pub const DENSIFY_POINTS_PER_EDGE: usize = 10;

/// Decimal places used when displaying a radius length.
pub const RADIUS_DECIMALS: u32 = 5;

/// Decimal places for coordinates in a geographic CRS.
pub const GEOGRAPHIC_COORD_DECIMALS: u32 = 5;

/// Decimal places for coordinates in a projected CRS.
pub const PROJECTED_COORD_DECIMALS: u32 = 3;
