//! Tide inputs
//!
//! Parses NOAA CO-OPS high/low predictions into `TidePoint`s, and generates a
//! synthetic semi-diurnal tide for coasts without a prediction source.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{parse_timestamp, TideExtreme, TidePoint};

/// M2 constituent period in hours
const M2_PERIOD_HOURS: f64 = 12.42;

/// Synthetic tidal amplitude in metres
const SYNTHETIC_AMPLITUDE_M: f64 = 1.5;

/// Hours generated per synthetic series
const SYNTHETIC_HOURS: i64 = 48;

/// Errors that can occur when reading tide data
#[derive(Debug, Error)]
pub enum TidesError {
    /// Failed to parse JSON response
    #[error("Failed to parse tide JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid time format in a prediction
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// Prediction height is not a number
    #[error("Invalid tide height: {0}")]
    InvalidHeight(String),
}

/// NOAA CO-OPS datagetter response for `product=predictions&interval=hilo`
#[derive(Debug, Deserialize)]
struct NoaaResponse {
    #[serde(default)]
    predictions: Vec<NoaaPrediction>,
}

/// A single NOAA prediction: time, value and H/L marker, all as strings
#[derive(Debug, Deserialize)]
struct NoaaPrediction {
    t: String,
    v: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Parses a NOAA predictions payload into tide points.
///
/// Times are read as UTC (`time_zone=gmt`). `H` and `L` mark highs and lows;
/// any other marker leaves the point unmarked.
pub fn parse_noaa_predictions(json: &str) -> Result<Vec<TidePoint>, TidesError> {
    let response: NoaaResponse = serde_json::from_str(json)?;

    response
        .predictions
        .into_iter()
        .map(|p| {
            let time =
                parse_timestamp(&p.t).ok_or_else(|| TidesError::InvalidTimeFormat(p.t.clone()))?;
            let height_m = p
                .v
                .trim()
                .parse::<f64>()
                .map_err(|_| TidesError::InvalidHeight(p.v.clone()))?;
            let kind = match p.kind.as_deref() {
                Some("H") => Some(TideExtreme::High),
                Some("L") => Some(TideExtreme::Low),
                _ => None,
            };
            Ok(TidePoint::new(time, height_m, kind))
        })
        .collect()
}

/// Generates 48 hourly synthetic tide points from 00:00 UTC on `date`.
///
/// Heights follow a single M2 cosine of amplitude 1.5 m, phase-shifted by
/// `offset_hours`, and are stored shifted up by the amplitude so they stay
/// in 0-3 m. An hour is marked HIGH when it tops both half-hour neighbours and
/// sits above 85% of the amplitude, LOW symmetrically. Coarse sampling means
/// some cycles carry no marked extreme.
pub fn generate_synthetic_tides(date: NaiveDate, offset_hours: f64) -> Vec<TidePoint> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let level = |hours: f64| {
        SYNTHETIC_AMPLITUDE_M * (2.0 * std::f64::consts::PI * hours / M2_PERIOD_HOURS).cos()
    };
    let threshold = SYNTHETIC_AMPLITUDE_M * 0.85;

    let points: Vec<TidePoint> = (0..SYNTHETIC_HOURS)
        .map(|h| {
            let hours = h as f64 + offset_hours;
            let height = level(hours);
            let prev = level(hours - 0.5);
            let next = level(hours + 0.5);

            let kind = if height > prev && height > next && height > threshold {
                Some(TideExtreme::High)
            } else if height < prev && height < next && height < -threshold {
                Some(TideExtreme::Low)
            } else {
                None
            };

            let stored = ((height + SYNTHETIC_AMPLITUDE_M) * 100.0).round() / 100.0;
            TidePoint::new(midnight + Duration::hours(h), stored, kind)
        })
        .collect();

    debug!(
        "Generated {} synthetic tide points for {} ({} extremes)",
        points.len(),
        date,
        points.iter().filter(|p| p.kind.is_some()).count()
    );
    points
}
