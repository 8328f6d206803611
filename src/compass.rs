//! Compass and bearing helpers
//!
//! Converts 16-point compass labels to bearings, measures the angle between
//! two bearings, and maps bearings back to coarse 8-point labels for display.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Error returned when a compass label is not one of the 16 points
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown compass label: '{0}'")]
pub struct UnknownCompassLabel(pub String);

/// The 16 points of the compass, clockwise from North in 22.5° steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

impl CompassPoint {
    /// Returns all 16 points in clockwise order starting at North.
    pub fn all() -> &'static [CompassPoint; 16] {
        &[
            CompassPoint::North,
            CompassPoint::NorthNorthEast,
            CompassPoint::NorthEast,
            CompassPoint::EastNorthEast,
            CompassPoint::East,
            CompassPoint::EastSouthEast,
            CompassPoint::SouthEast,
            CompassPoint::SouthSouthEast,
            CompassPoint::South,
            CompassPoint::SouthSouthWest,
            CompassPoint::SouthWest,
            CompassPoint::WestSouthWest,
            CompassPoint::West,
            CompassPoint::WestNorthWest,
            CompassPoint::NorthWest,
            CompassPoint::NorthNorthWest,
        ]
    }

    /// Bearing of this point in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            CompassPoint::North => 0.0,
            CompassPoint::NorthNorthEast => 22.5,
            CompassPoint::NorthEast => 45.0,
            CompassPoint::EastNorthEast => 67.5,
            CompassPoint::East => 90.0,
            CompassPoint::EastSouthEast => 112.5,
            CompassPoint::SouthEast => 135.0,
            CompassPoint::SouthSouthEast => 157.5,
            CompassPoint::South => 180.0,
            CompassPoint::SouthSouthWest => 202.5,
            CompassPoint::SouthWest => 225.0,
            CompassPoint::WestSouthWest => 247.5,
            CompassPoint::West => 270.0,
            CompassPoint::WestNorthWest => 292.5,
            CompassPoint::NorthWest => 315.0,
            CompassPoint::NorthNorthWest => 337.5,
        }
    }

    /// Upper-case abbreviation, e.g. "WNW".
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CompassPoint::North => "N",
            CompassPoint::NorthNorthEast => "NNE",
            CompassPoint::NorthEast => "NE",
            CompassPoint::EastNorthEast => "ENE",
            CompassPoint::East => "E",
            CompassPoint::EastSouthEast => "ESE",
            CompassPoint::SouthEast => "SE",
            CompassPoint::SouthSouthEast => "SSE",
            CompassPoint::South => "S",
            CompassPoint::SouthSouthWest => "SSW",
            CompassPoint::SouthWest => "SW",
            CompassPoint::WestSouthWest => "WSW",
            CompassPoint::West => "W",
            CompassPoint::WestNorthWest => "WNW",
            CompassPoint::NorthWest => "NW",
            CompassPoint::NorthNorthWest => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl FromStr for CompassPoint {
    type Err = UnknownCompassLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(CompassPoint::North),
            "NNE" => Ok(CompassPoint::NorthNorthEast),
            "NE" => Ok(CompassPoint::NorthEast),
            "ENE" => Ok(CompassPoint::EastNorthEast),
            "E" => Ok(CompassPoint::East),
            "ESE" => Ok(CompassPoint::EastSouthEast),
            "SE" => Ok(CompassPoint::SouthEast),
            "SSE" => Ok(CompassPoint::SouthSouthEast),
            "S" => Ok(CompassPoint::South),
            "SSW" => Ok(CompassPoint::SouthSouthWest),
            "SW" => Ok(CompassPoint::SouthWest),
            "WSW" => Ok(CompassPoint::WestSouthWest),
            "W" => Ok(CompassPoint::West),
            "WNW" => Ok(CompassPoint::WestNorthWest),
            "NW" => Ok(CompassPoint::NorthWest),
            "NNW" => Ok(CompassPoint::NorthNorthWest),
            _ => Err(UnknownCompassLabel(s.to_string())),
        }
    }
}

/// Coarse labels used in reason strings, 45° apart.
const COARSE_LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Converts a compass label to degrees.
///
/// Matching is case-insensitive. Unknown or empty labels resolve to North (0°)
/// so a bad label on a break profile never stops scoring.
///
/// # Examples
///
/// ```
/// use swellscore::compass::compass_to_degrees;
///
/// assert_eq!(compass_to_degrees("W"), 270.0);
/// assert_eq!(compass_to_degrees("nnw"), 337.5);
/// assert_eq!(compass_to_degrees(""), 0.0);
/// ```
pub fn compass_to_degrees(label: &str) -> f64 {
    match label.parse::<CompassPoint>() {
        Ok(point) => point.degrees(),
        Err(e) => {
            if !label.trim().is_empty() {
                warn!("{}, defaulting to North", e);
            }
            0.0
        }
    }
}

/// Unsigned angle between two bearings, in `[0, 180]`.
///
/// Inputs outside `[0, 360)` are wrapped first.
pub fn bearing_difference(a: f64, b: f64) -> f64 {
    let diff = (a.rem_euclid(360.0) - b.rem_euclid(360.0)).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Nearest of the 8 coarse compass labels for a bearing.
pub fn degrees_to_compass_label(deg: f64) -> &'static str {
    if !deg.is_finite() {
        return COARSE_LABELS[0];
    }
    let index = (deg.rem_euclid(360.0) / 45.0).round() as usize % 8;
    COARSE_LABELS[index]
}
