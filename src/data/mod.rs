//! Core data models for swell scoring
//!
//! Forecast samples, tide points and locations consumed by the scoring engine.
//! Everything here is produced by an external fetch and only read by the scorer.

pub mod load;
pub mod open_meteo;
pub mod spot;
pub mod tides;

pub use spot::{all_spots, get_spot_by_id, Spot};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A geographic location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One hourly marine and atmospheric forecast reading
///
/// Field names serialize in camelCase. The upstream names without unit
/// suffixes (`waveHeight`, `forecastHour`, ...) are accepted as aliases, and
/// missing numeric fields read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    /// The hour this sample represents
    #[serde(alias = "forecastHour", deserialize_with = "deserialize_timestamp")]
    pub forecast_hour_utc: DateTime<Utc>,
    /// Significant wave height in metres
    #[serde(default, alias = "waveHeight")]
    pub wave_height_m: f64,
    /// Wave period in seconds
    #[serde(default, alias = "wavePeriod")]
    pub wave_period_s: f64,
    /// Direction the swell arrives from, in degrees
    #[serde(default, alias = "swellDirection")]
    pub swell_direction_deg: f64,
    /// Swell height in metres
    #[serde(default, alias = "swellHeight")]
    pub swell_height_m: f64,
    /// Wind speed in km/h
    #[serde(default, alias = "windSpeed")]
    pub wind_speed_kmh: f64,
    /// Direction the wind blows from, in degrees
    #[serde(default, alias = "windDirection")]
    pub wind_direction_deg: f64,
    /// Wind gust in km/h
    #[serde(default, alias = "windGust")]
    pub wind_gust_kmh: f64,
    /// Air temperature in Celsius
    #[serde(default, alias = "airTemp")]
    pub air_temp_c: f64,
    /// Precipitation in millimetres
    #[serde(default, alias = "precipitation")]
    pub precipitation_mm: f64,
    /// Cloud cover percentage (0-100)
    #[serde(default, alias = "cloudCover")]
    pub cloud_cover_pct: f64,
    /// Mean sea level pressure in hPa
    #[serde(default, alias = "pressure")]
    pub pressure_hpa: f64,
}

impl ForecastSample {
    /// A calm sample at the given hour with every reading set to zero.
    pub fn at(forecast_hour_utc: DateTime<Utc>) -> Self {
        Self {
            forecast_hour_utc,
            wave_height_m: 0.0,
            wave_period_s: 0.0,
            swell_direction_deg: 0.0,
            swell_height_m: 0.0,
            wind_speed_kmh: 0.0,
            wind_direction_deg: 0.0,
            wind_gust_kmh: 0.0,
            air_temp_c: 0.0,
            precipitation_mm: 0.0,
            cloud_cover_pct: 0.0,
            pressure_hpa: 0.0,
        }
    }
}

/// Kind of tide extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TideExtreme {
    High,
    Low,
}

/// A tide height at a moment, optionally marking a high or low
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TidePoint {
    /// Time of the reading
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub time: DateTime<Utc>,
    /// Height in metres
    #[serde(alias = "height")]
    pub height_m: f64,
    /// `Some` when this point is a high or low tide
    #[serde(rename = "type", default)]
    pub kind: Option<TideExtreme>,
}

impl TidePoint {
    pub fn new(time: DateTime<Utc>, height_m: f64, kind: Option<TideExtreme>) -> Self {
        Self {
            time,
            height_m,
            kind,
        }
    }
}

/// Parse a timestamp as RFC 3339, or as a naive UTC time in one of the
/// formats upstream providers emit ("2024-07-15T05:00", "2024-07-15 05:00").
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s)))
}
