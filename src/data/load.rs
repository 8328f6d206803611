//! File loaders for forecast and tide inputs.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::open_meteo::{merge_hourly, OpenMeteoError};
use super::tides::{parse_noaa_predictions, TidesError};
use super::{ForecastSample, TidePoint};

/// Errors that can occur when loading input files
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON of the expected shape
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    OpenMeteo(#[from] OpenMeteoError),

    #[error(transparent)]
    Tides(#[from] TidesError),
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a JSON array of forecast samples.
pub fn parse_forecast(json: &str) -> Result<Vec<ForecastSample>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses tide data given either as a `TidePoint` array or as a NOAA
/// predictions object.
pub fn parse_tides(json: &str) -> Result<Vec<TidePoint>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    if value.get("predictions").is_some() {
        debug!("Reading tides as NOAA predictions");
        return Ok(parse_noaa_predictions(json)?);
    }
    Ok(serde_json::from_value(value)?)
}

/// Reads a JSON array of forecast samples from `path`.
pub fn load_forecast(path: &Path) -> Result<Vec<ForecastSample>, LoadError> {
    let samples = parse_forecast(&read(path)?)?;
    info!("Loaded {} forecast samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Reads and merges Open-Meteo atmospheric and marine responses.
pub fn load_open_meteo(atmospheric: &Path, marine: &Path) -> Result<Vec<ForecastSample>, LoadError> {
    let samples = merge_hourly(&read(atmospheric)?, &read(marine)?)?;
    info!(
        "Loaded {} forecast samples from {} and {}",
        samples.len(),
        atmospheric.display(),
        marine.display()
    );
    Ok(samples)
}

/// Reads tide points from `path`.
pub fn load_tides(path: &Path) -> Result<Vec<TidePoint>, LoadError> {
    let points = parse_tides(&read(path)?)?;
    info!("Loaded {} tide points from {}", points.len(), path.display());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TideExtreme;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_forecast_from_file() {
        let file = write_temp(
            r#"[
                {"forecastHourUtc": "2024-07-15T10:00:00Z", "waveHeightM": 1.5, "wavePeriodS": 12},
                {"forecastHour": "2024-07-15T11:00", "waveHeight": 1.6}
            ]"#,
        );

        let samples = load_forecast(file.path()).expect("Should load");

        assert_eq!(samples.len(), 2);
        assert!((samples[1].wave_height_m - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_load_forecast_missing_file() {
        let result = load_forecast(Path::new("/nonexistent/forecast.json"));
        match result {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/forecast.json"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_forecast_rejects_object() {
        assert!(matches!(parse_forecast(r#"{"hourly": {}}"#), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_parse_tides_accepts_point_array() {
        let points = parse_tides(
            r#"[{"time": "2024-07-15T04:12:00Z", "height": 3.1, "type": "HIGH"}]"#,
        )
        .expect("Should parse");

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].kind, Some(TideExtreme::High));
    }

    #[test]
    fn test_parse_tides_accepts_noaa() {
        let points = parse_tides(
            r#"{"predictions": [{"t": "2024-07-15 03:12", "v": "0.211", "type": "L"}]}"#,
        )
        .expect("Should parse");

        assert_eq!(points[0].kind, Some(TideExtreme::Low));
    }

    #[test]
    fn test_parse_tides_noaa_error_propagates() {
        let result = parse_tides(r#"{"predictions": [{"t": "2024-07-15 03:12", "v": "?"}]}"#);
        assert!(matches!(result, Err(LoadError::Tides(TidesError::InvalidHeight(_)))));
    }

    #[test]
    fn test_load_open_meteo_files() {
        let atmospheric = write_temp(
            r#"{"hourly": {"time": ["2024-07-15T06:00"], "windspeed_10m": [9.0]}}"#,
        );
        let marine = write_temp(r#"{"hourly": {"wave_height": [1.4]}}"#);

        let samples = load_open_meteo(atmospheric.path(), marine.path()).expect("Should load");

        assert_eq!(samples.len(), 1);
        assert!((samples[0].wave_height_m - 1.4).abs() < 1e-9);
        assert!((samples[0].wind_speed_kmh - 9.0).abs() < 1e-9);
    }
}
