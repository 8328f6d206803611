//! Open-Meteo payload parsing
//!
//! This module turns pre-fetched Open-Meteo atmospheric and marine responses
//! into hourly `ForecastSample`s. Fetching is left to the caller.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{parse_timestamp, ForecastSample};

/// Errors that can occur when parsing Open-Meteo payloads
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Merges atmospheric and marine responses into hourly samples.
///
/// Samples follow the atmospheric `hourly.time` array; marine values are
/// matched by index. Missing arrays, nulls and non-finite values read as 0.
pub fn merge_hourly(
    atmospheric_json: &str,
    marine_json: &str,
) -> Result<Vec<ForecastSample>, OpenMeteoError> {
    let atmospheric: AtmosphericResponse = serde_json::from_str(atmospheric_json)?;
    let marine: MarineResponse = serde_json::from_str(marine_json)?;

    let hourly = atmospheric
        .hourly
        .ok_or_else(|| OpenMeteoError::MissingField("hourly".to_string()))?;
    let times = hourly
        .time
        .as_ref()
        .ok_or_else(|| OpenMeteoError::MissingField("hourly.time".to_string()))?;
    let sea = marine.hourly.unwrap_or_default();

    let mut samples = Vec::with_capacity(times.len());

    for (i, time) in times.iter().enumerate() {
        let forecast_hour_utc = parse_timestamp(time)
            .ok_or_else(|| OpenMeteoError::InvalidTimeFormat(time.clone()))?;
        samples.push(ForecastSample {
            forecast_hour_utc,
            wave_height_m: value_at(&sea.wave_height, i),
            wave_period_s: value_at(&sea.wave_period, i),
            swell_direction_deg: value_at(&sea.swell_wave_direction, i),
            swell_height_m: value_at(&sea.swell_wave_height, i),
            wind_speed_kmh: value_at(&hourly.windspeed_10m, i),
            wind_direction_deg: value_at(&hourly.winddirection_10m, i),
            wind_gust_kmh: value_at(&hourly.windgusts_10m, i),
            air_temp_c: value_at(&hourly.temperature_2m, i),
            precipitation_mm: value_at(&hourly.precipitation, i),
            cloud_cover_pct: value_at(&hourly.cloudcover, i),
            pressure_hpa: value_at(&hourly.pressure_msl, i),
        });
    }

    debug!("Merged {} hourly Open-Meteo samples", samples.len());
    Ok(samples)
}

/// Finite value at `i`, or 0.
fn value_at(values: &[Option<f64>], i: usize) -> f64 {
    values
        .get(i)
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Open-Meteo forecast API response (only the hourly block is read)
#[derive(Debug, Deserialize)]
struct AtmosphericResponse {
    hourly: Option<AtmosphericHourly>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AtmosphericHourly {
    time: Option<Vec<String>>,
    temperature_2m: Vec<Option<f64>>,
    precipitation: Vec<Option<f64>>,
    cloudcover: Vec<Option<f64>>,
    pressure_msl: Vec<Option<f64>>,
    windspeed_10m: Vec<Option<f64>>,
    winddirection_10m: Vec<Option<f64>>,
    windgusts_10m: Vec<Option<f64>>,
}

/// Open-Meteo marine API response
#[derive(Debug, Deserialize)]
struct MarineResponse {
    hourly: Option<MarineHourly>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarineHourly {
    wave_height: Vec<Option<f64>>,
    wave_period: Vec<Option<f64>>,
    swell_wave_direction: Vec<Option<f64>>,
    swell_wave_height: Vec<Option<f64>>,
}
