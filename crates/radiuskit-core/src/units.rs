//! Unit conversion utilities
//!
//! Handles conversion between the nine distance units offered by the radius
//! measurement panel, and selection between Cartesian and ellipsoidal
//! measurement modes.
//!
//! The conversion table uses metres as the implicit pivot, but each direction
//! carries its own independently rounded literal factor rather than a single
//! canonical ratio. A few pairs are therefore not mutually reciprocal (for
//! example feet to metres divides by 3.281 while metres to feet multiplies by
//! 3.28084), so round-tripping a value through such a pair is close but not
//! bit-exact. This is inherent imprecision of the table, kept deliberately;
//! do not normalize the factors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MeasureError;

/// Distance unit selectable in the radius panel.
///
/// Variant order matches the panel's selector, so `index`/`from_index`
/// round-trip through selector positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Feet,
    NauticalMiles,
    Yards,
    Miles,
    Degrees,
    Centimeters,
    Millimeters,
}

impl DistanceUnit {
    /// All units in selector order.
    pub const ALL: [DistanceUnit; 9] = [
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Feet,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Yards,
        DistanceUnit::Miles,
        DistanceUnit::Degrees,
        DistanceUnit::Centimeters,
        DistanceUnit::Millimeters,
    ];

    /// Position of this unit in the selector.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|u| *u == self).unwrap_or(0)
    }

    /// Unit at the given selector position.
    pub fn from_index(index: usize) -> Result<Self, MeasureError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(MeasureError::UnitIndexOutOfRange { index })
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Meters
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "meters"),
            Self::Kilometers => write!(f, "kilometers"),
            Self::Feet => write!(f, "feet"),
            Self::NauticalMiles => write!(f, "nautical miles"),
            Self::Yards => write!(f, "yards"),
            Self::Miles => write!(f, "miles"),
            Self::Degrees => write!(f, "degrees"),
            Self::Centimeters => write!(f, "centimeters"),
            Self::Millimeters => write!(f, "millimeters"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meters" | "metres" | "m" => Ok(Self::Meters),
            "kilometers" | "kilometres" | "km" => Ok(Self::Kilometers),
            "feet" | "ft" => Ok(Self::Feet),
            "nautical miles" | "nm" => Ok(Self::NauticalMiles),
            "yards" | "yd" => Ok(Self::Yards),
            "miles" | "mi" => Ok(Self::Miles),
            "degrees" | "deg" => Ok(Self::Degrees),
            "centimeters" | "centimetres" | "cm" => Ok(Self::Centimeters),
            "millimeters" | "millimetres" | "mm" => Ok(Self::Millimeters),
            other => Err(MeasureError::UnknownUnit {
                name: other.to_string(),
            }),
        }
    }
}

/// Measurement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementMode {
    /// Planar length on the projected plane, converted via the fixed table
    Cartesian,
    /// Geodesic length along the reference ellipsoid
    Ellipsoidal,
}

impl Default for MeasurementMode {
    fn default() -> Self {
        Self::Cartesian
    }
}

impl fmt::Display for MeasurementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => write!(f, "Cartesian"),
            Self::Ellipsoidal => write!(f, "Ellipsoidal"),
        }
    }
}

impl FromStr for MeasurementMode {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cartesian" => Ok(Self::Cartesian),
            "ellipsoidal" => Ok(Self::Ellipsoidal),
            other => Err(MeasureError::UnknownMode {
                name: other.to_string(),
            }),
        }
    }
}

/// Converts a planar length between two distance units.
///
/// Total over all 81 ordered unit pairs; identical units return the input
/// unchanged. Factors are the table's literal per-direction constants (see
/// module docs for the reciprocity caveat).
pub fn convert_length(length: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    use DistanceUnit::*;

    if from == to {
        return length;
    }

    match (from, to) {
        // Meters
        (Meters, Kilometers) => length / 1000.0,
        (Meters, Feet) => length * 3.28084,
        (Meters, NauticalMiles) => length / 1852.0,
        (Meters, Yards) => length * 1.09361,
        (Meters, Miles) => length / 1609.344,
        (Meters, Degrees) => length / 111319.49,
        (Meters, Centimeters) => length * 100.0,
        (Meters, Millimeters) => length * 1000.0,

        // Kilometers
        (Kilometers, Meters) => length * 1000.0,
        (Kilometers, Feet) => length * 3280.84,
        (Kilometers, NauticalMiles) => length / 1.852,
        (Kilometers, Yards) => length * 1093.61,
        (Kilometers, Miles) => length / 1.609,
        (Kilometers, Degrees) => length / 111.31949,
        (Kilometers, Centimeters) => length * 100_000.0,
        (Kilometers, Millimeters) => length * 1_000_000.0,

        // Feet
        (Feet, Meters) => length / 3.281,
        (Feet, Kilometers) => length / 3281.0,
        (Feet, NauticalMiles) => length / 6076.0,
        (Feet, Yards) => length / 3.0,
        (Feet, Miles) => length / 5280.0,
        (Feet, Degrees) => length / 365_239.247,
        (Feet, Centimeters) => length * 30.48,
        (Feet, Millimeters) => length * 304.8,

        // Nautical miles
        (NauticalMiles, Meters) => length * 1852.0,
        (NauticalMiles, Kilometers) => length * 1.852,
        (NauticalMiles, Feet) => length * 6076.0,
        (NauticalMiles, Yards) => length * 2025.37,
        (NauticalMiles, Miles) => length * 1.15078,
        (NauticalMiles, Degrees) => length / 60.108,
        (NauticalMiles, Centimeters) => length * 185_200.0,
        (NauticalMiles, Millimeters) => length * 1_852_000.0,

        // Yards
        (Yards, Meters) => length / 1.094,
        (Yards, Kilometers) => length / 1094.0,
        (Yards, Feet) => length * 3.0,
        (Yards, NauticalMiles) => length / 2025.0,
        (Yards, Miles) => length / 1760.0,
        (Yards, Degrees) => length / 121_783.522,
        (Yards, Centimeters) => length * 91.44,
        (Yards, Millimeters) => length * 914.4,

        // Miles
        (Miles, Meters) => length * 1609.34,
        (Miles, Kilometers) => length * 1.609,
        (Miles, Feet) => length * 5280.0,
        (Miles, NauticalMiles) => length / 1.151,
        (Miles, Yards) => length * 1760.0,
        (Miles, Degrees) => length / 69.171,
        (Miles, Centimeters) => length * 160_934.0,
        (Miles, Millimeters) => length * 1_609_340.0,

        // Degrees
        (Degrees, Meters) => length * 111_319.49,
        (Degrees, Kilometers) => length * 111.31949,
        (Degrees, Feet) => length * 365_239.24669,
        (Degrees, NauticalMiles) => length * 60.11252,
        (Degrees, Yards) => length * 121_783.52206,
        (Degrees, Miles) => length * 69.186,
        (Degrees, Centimeters) => length * 11_131_949.0,
        (Degrees, Millimeters) => length * 111_319_490.0,

        // Centimeters
        (Centimeters, Meters) => length / 100.0,
        (Centimeters, Kilometers) => length / 100_000.0,
        (Centimeters, Feet) => length / 30.48,
        (Centimeters, NauticalMiles) => length / 185_200.0,
        (Centimeters, Yards) => length / 91.44,
        (Centimeters, Miles) => length / 160_934.0,
        (Centimeters, Degrees) => length / 11_131_949.0,
        (Centimeters, Millimeters) => length * 10.0,

        // Millimeters
        (Millimeters, Meters) => length / 1000.0,
        (Millimeters, Kilometers) => length / 1_000_000.0,
        (Millimeters, Feet) => length / 305.0,
        (Millimeters, NauticalMiles) => length / 1_852_000.0,
        (Millimeters, Yards) => length / 914.0,
        (Millimeters, Miles) => length / 1_609_000.0,
        (Millimeters, Degrees) => length / 111_319_490.0,
        (Millimeters, Centimeters) => length / 10.0,

        // Identity pairs handled above
        _ => length,
    }
}

/// Formats a measured length for display.
///
/// Rounds to `decimals` places, then renders the shortest representation
/// that keeps at least one fractional digit: `100.0`, `0.1`, `0.62151`.
pub fn format_measurement(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Formats a coordinate component for display.
///
/// Geographic CRSes get 5 decimal places, projected CRSes 3.
pub fn format_coordinate(value: f64, is_geographic: bool) -> String {
    let decimals = if is_geographic {
        crate::constants::GEOGRAPHIC_COORD_DECIMALS
    } else {
        crate::constants::PROJECTED_COORD_DECIMALS
    };
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DistanceUnit::*;

    #[test]
    fn test_identity_all_pairs() {
        for unit in DistanceUnit::ALL {
            assert_eq!(convert_length(123.456, unit, unit), 123.456);
        }
    }

    #[test]
    fn test_metric_pairs_exact() {
        assert_eq!(convert_length(1000.0, Meters, Kilometers), 1.0);
        assert_eq!(convert_length(1.0, Kilometers, Meters), 1000.0);
        assert_eq!(convert_length(1.0, Meters, Centimeters), 100.0);
        assert_eq!(convert_length(1.0, Meters, Millimeters), 1000.0);
        assert_eq!(convert_length(10.0, Millimeters, Centimeters), 1.0);
    }

    #[test]
    fn test_kilometers_to_miles() {
        // Table uses 1.609, so 1 km is about 0.6215 mi
        let miles = convert_length(1.0, Kilometers, Miles);
        assert!((miles - 0.6215).abs() < 1e-4);
    }

    #[test]
    fn test_nautical_mile_definition() {
        assert_eq!(convert_length(1.0, NauticalMiles, Meters), 1852.0);
        assert_eq!(convert_length(1852.0, Meters, NauticalMiles), 1.0);
    }

    #[test]
    fn test_degrees_scale() {
        assert_eq!(convert_length(111319.49, Meters, Degrees), 1.0);
        assert_eq!(convert_length(1.0, Degrees, Meters), 111319.49);
    }

    #[test]
    fn test_feet_meters_round_trip_is_approximate() {
        // The two directions carry different roundings of the same constant
        // (x3.28084 out, /3.281 back), so the round trip is not exact.
        let back = convert_length(convert_length(100.0, Meters, Feet), Feet, Meters);
        assert_ne!(back, 100.0);
        assert!((back - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_miles_meters_round_trip_is_approximate() {
        // Meters->Miles divides by 1609.344, Miles->Meters multiplies by 1609.34.
        let back = convert_length(convert_length(5000.0, Meters, Miles), Miles, Meters);
        assert_ne!(back, 5000.0);
        assert!((back - 5000.0).abs() < 0.1);
    }

    #[test]
    fn test_selector_index_round_trip() {
        for (i, unit) in DistanceUnit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), i);
            assert_eq!(DistanceUnit::from_index(i).unwrap(), *unit);
        }
        assert!(DistanceUnit::from_index(9).is_err());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("meters".parse::<DistanceUnit>().unwrap(), Meters);
        assert_eq!("nautical miles".parse::<DistanceUnit>().unwrap(), NauticalMiles);
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), Kilometers);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "cartesian".parse::<MeasurementMode>().unwrap(),
            MeasurementMode::Cartesian
        );
        assert_eq!(
            "Ellipsoidal".parse::<MeasurementMode>().unwrap(),
            MeasurementMode::Ellipsoidal
        );
        assert!("planar".parse::<MeasurementMode>().is_err());
    }

    #[test]
    fn test_format_measurement() {
        assert_eq!(format_measurement(100.0, 5), "100.0");
        assert_eq!(format_measurement(0.1, 5), "0.1");
        assert_eq!(format_measurement(0.123456789, 5), "0.12346");
        assert_eq!(format_measurement(0.0, 5), "0.0");
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(144.9630919, true), "144.96309");
        assert_eq!(format_coordinate(144.9630919, false), "144.963");
        assert_eq!(format_coordinate(7_500_000.0, false), "7500000.0");
    }
}
