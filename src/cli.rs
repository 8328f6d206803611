//! Command-line interface parsing for swellscore
//!
//! This module defines the clap command tree and resolves its arguments into
//! the domain values the scorer needs: a location, a break profile and dates.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use crate::compass::CompassPoint;
use crate::config::Config;
use crate::data::{get_spot_by_id, parse_timestamp, Location};
use crate::outlook::DEFAULT_OUTLOOK_DAYS;
use crate::quality::{BreakProfile, BreakType, OptimalTidePhase, ProfileParseError};

/// Error types for CLI argument resolution
#[derive(Debug, Error)]
pub enum CliError {
    /// The spot ID is not in the catalogue
    #[error("Unknown spot: '{0}'. Run `swellscore spots` to list available spots")]
    UnknownSpot(String),

    /// `--break-type` or `--tide-phase` is not a known value
    #[error(transparent)]
    Profile(#[from] ProfileParseError),

    /// A compass flag is not one of the 16 points
    #[error("Invalid compass direction: '{0}'. Use labels like N, WNW or SW-W")]
    InvalidDirection(String),

    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time: '{0}'. Expected RFC 3339 or YYYY-MM-DDTHH:MM")]
    InvalidTime(String),

    /// Neither `--forecast` nor `--atmospheric`/`--marine` was given
    #[error("No forecast input. Pass --forecast FILE or --atmospheric FILE --marine FILE")]
    MissingForecast,

    /// `--at` matched no sample
    #[error("No forecast sample at {0}")]
    NoSampleAt(DateTime<Utc>),
}

/// Swellscore - score surf conditions from forecast data
#[derive(Parser, Debug)]
#[command(name = "swellscore")]
#[command(about = "Swell quality scores, best surf windows and daily outlooks for surf breaks")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print times in UTC instead of local time
    #[arg(long, global = true)]
    pub utc: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score forecast samples
    Score {
        #[command(flatten)]
        input: InputArgs,

        /// Only score the sample at this hour
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// Print scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the best 2-3 hour surf window on a day
    Window {
        #[command(flatten)]
        input: InputArgs,

        /// Day to search (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: String,
    },

    /// One morning score per day
    Outlook {
        #[command(flatten)]
        input: InputArgs,

        /// Number of days to show
        #[arg(long, default_value_t = DEFAULT_OUTLOOK_DAYS)]
        days: usize,
    },

    /// Print a synthetic tide series as JSON
    Tides {
        /// First day of the series (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: String,

        /// Phase shift of the tidal curve in hours
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset_hours: f64,
    },

    /// List catalogued surf spots
    Spots,
}

/// Forecast, tide and break inputs shared by the scoring commands
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// JSON array of forecast samples
    #[arg(long, value_name = "FILE", conflicts_with_all = ["atmospheric", "marine"])]
    pub forecast: Option<PathBuf>,

    /// Open-Meteo forecast API response
    #[arg(long, value_name = "FILE", requires = "marine")]
    pub atmospheric: Option<PathBuf>,

    /// Open-Meteo marine API response
    #[arg(long, value_name = "FILE", requires = "atmospheric")]
    pub marine: Option<PathBuf>,

    /// Tide points (JSON array) or NOAA predictions response
    #[arg(long, value_name = "FILE", conflicts_with = "synthetic_tides")]
    pub tides: Option<PathBuf>,

    /// Use a synthetic tide curve starting on the first forecast day
    #[arg(long)]
    pub synthetic_tides: bool,

    /// Phase shift for --synthetic-tides, in hours
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub tide_offset_hours: f64,

    /// Catalogue spot supplying location and break profile
    #[arg(long, value_name = "ID")]
    pub spot: Option<String>,

    /// Break type: beach, reef or point
    #[arg(long, value_name = "TYPE")]
    pub break_type: Option<String>,

    /// Compass direction the break faces, e.g. W
    #[arg(long, value_name = "DIR")]
    pub facing: Option<String>,

    /// Optimal swell direction, e.g. W-NW
    #[arg(long, value_name = "DIR")]
    pub swell_dir: Option<String>,

    /// Optimal tide phase: low, mid, high or any
    #[arg(long, value_name = "PHASE")]
    pub tide_phase: Option<String>,

    /// Latitude override
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude override
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

/// Files holding the forecast samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastSource<'a> {
    /// JSON array of forecast samples
    Samples(&'a Path),
    /// Pre-fetched Open-Meteo atmospheric and marine responses
    OpenMeteo {
        atmospheric: &'a Path,
        marine: &'a Path,
    },
}

/// Where and what to score, after applying spot, config and flag overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Catalogue spot ID, empty when scoring a custom location
    pub spot_id: String,
    pub location: Location,
    pub profile: BreakProfile,
}

impl InputArgs {
    /// The forecast source given on the command line.
    ///
    /// `--forecast` wins over an `--atmospheric`/`--marine` pair.
    pub fn forecast_source(&self) -> Result<ForecastSource<'_>, CliError> {
        match (&self.forecast, &self.atmospheric, &self.marine) {
            (Some(path), _, _) => Ok(ForecastSource::Samples(path)),
            (None, Some(atmospheric), Some(marine)) => Ok(ForecastSource::OpenMeteo {
                atmospheric,
                marine,
            }),
            _ => Err(CliError::MissingForecast),
        }
    }

    /// Resolves location and break profile.
    ///
    /// A spot (from `--spot`, else the config's `default_spot`) supplies both;
    /// otherwise they come from the config. Profile flags and `--lat`/`--lng`
    /// override individual fields.
    pub fn resolve_scenario(&self, config: &Config) -> Result<Scenario, CliError> {
        let spot_id = self.spot.as_ref().or(config.default_spot.as_ref());

        let (spot_id, mut location, mut profile) = match spot_id {
            Some(id) => {
                let spot = get_spot_by_id(id).ok_or_else(|| CliError::UnknownSpot(id.clone()))?;
                (spot.id.to_string(), spot.location(), spot.break_profile())
            }
            None => (String::new(), config.location.into(), config.profile.clone()),
        };

        if let Some(s) = &self.break_type {
            profile.break_type = parse_break_type_arg(s)?;
        }
        if let Some(s) = &self.facing {
            profile.facing_direction = parse_direction_arg(s)?;
        }
        if let Some(s) = &self.swell_dir {
            profile.optimal_swell_direction = parse_direction_arg(s)?;
        }
        if let Some(s) = &self.tide_phase {
            profile.optimal_tide_phase = parse_tide_phase_arg(s)?;
        }
        if let Some(lat) = self.lat {
            location.latitude = lat;
        }
        if let Some(lng) = self.lng {
            location.longitude = lng;
        }

        debug!("Resolved scenario: spot '{}', {:?}, {:?}", spot_id, location, profile);
        Ok(Scenario {
            spot_id,
            location,
            profile,
        })
    }
}

/// Parses a break type argument.
pub fn parse_break_type_arg(s: &str) -> Result<BreakType, CliError> {
    Ok(s.parse()?)
}

/// Parses a tide phase argument.
pub fn parse_tide_phase_arg(s: &str) -> Result<OptimalTidePhase, CliError> {
    Ok(s.parse()?)
}

/// Validates one compass label or a hyphenated pair, returned upper-cased.
pub fn parse_direction_arg(s: &str) -> Result<String, CliError> {
    let labels: Result<Vec<CompassPoint>, _> = s.split('-').map(str::parse).collect();
    let labels = labels.map_err(|_| CliError::InvalidDirection(s.to_string()))?;
    Ok(labels
        .iter()
        .map(CompassPoint::abbreviation)
        .collect::<Vec<_>>()
        .join("-"))
}

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a timestamp argument, naive times read as UTC.
pub fn parse_time_arg(s: &str) -> Result<DateTime<Utc>, CliError> {
    parse_timestamp(s.trim()).ok_or_else(|| CliError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> InputArgs {
        InputArgs::default()
    }

    #[test]
    fn test_parse_break_type_arg() {
        assert_eq!(parse_break_type_arg("reef").unwrap(), BreakType::Reef);
        let err = parse_break_type_arg("slab").unwrap_err();
        assert!(err.to_string().contains("Invalid break type"));
        assert!(err.to_string().contains("slab"));
    }

    #[test]
    fn test_parse_tide_phase_arg() {
        assert_eq!(parse_tide_phase_arg("ANY").unwrap(), OptimalTidePhase::Any);
        assert!(matches!(
            parse_tide_phase_arg("spring"),
            Err(CliError::Profile(ProfileParseError::InvalidTidePhase(_)))
        ));
    }

    #[test]
    fn test_parse_direction_arg_normalizes_case() {
        assert_eq!(parse_direction_arg("w").unwrap(), "W");
        assert_eq!(parse_direction_arg("sw-w").unwrap(), "SW-W");
        assert!(matches!(
            parse_direction_arg("west"),
            Err(CliError::InvalidDirection(_))
        ));
        assert!(parse_direction_arg("W-").is_err());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-07-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
        );
        assert!(matches!(parse_date_arg("15/07/2024"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_time_arg() {
        assert_eq!(
            parse_time_arg("2024-07-15T12:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
        );
        assert!(matches!(parse_time_arg("noon"), Err(CliError::InvalidTime(_))));
    }

    #[test]
    fn test_resolve_scenario_defaults_to_config() {
        let config = Config::default();
        let scenario = input().resolve_scenario(&config).unwrap();

        assert_eq!(scenario.spot_id, "");
        assert_eq!(scenario.location, Location::new(39.3558, -9.3811));
        assert_eq!(scenario.profile, BreakProfile::default());
    }

    #[test]
    fn test_resolve_scenario_uses_spot() {
        let args = InputArgs {
            spot: Some("supertubos".to_string()),
            ..input()
        };
        let scenario = args.resolve_scenario(&Config::default()).unwrap();

        assert_eq!(scenario.spot_id, "supertubos");
        assert_eq!(scenario.profile.facing_direction, "SW");
        assert!((scenario.location.latitude - 39.3441).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_scenario_uses_config_default_spot() {
        let config = Config {
            default_spot: Some("carcavelos".to_string()),
            ..Config::default()
        };
        let scenario = input().resolve_scenario(&config).unwrap();

        assert_eq!(scenario.spot_id, "carcavelos");
        assert_eq!(scenario.profile.optimal_tide_phase, OptimalTidePhase::Low);
    }

    #[test]
    fn test_resolve_scenario_flags_override_spot() {
        let args = InputArgs {
            spot: Some("supertubos".to_string()),
            break_type: Some("reef".to_string()),
            tide_phase: Some("high".to_string()),
            lat: Some(40.0),
            ..input()
        };
        let scenario = args.resolve_scenario(&Config::default()).unwrap();

        assert_eq!(scenario.profile.break_type, BreakType::Reef);
        assert_eq!(scenario.profile.optimal_tide_phase, OptimalTidePhase::High);
        assert_eq!(scenario.profile.facing_direction, "SW");
        assert_eq!(scenario.location.latitude, 40.0);
        assert!((scenario.location.longitude - (-9.3885)).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_scenario_unknown_spot() {
        let args = InputArgs {
            spot: Some("pipeline".to_string()),
            ..input()
        };
        match args.resolve_scenario(&Config::default()) {
            Err(CliError::UnknownSpot(id)) => assert_eq!(id, "pipeline"),
            other => panic!("Expected UnknownSpot, got {:?}", other),
        }
    }

    #[test]
    fn test_forecast_source() {
        assert!(matches!(
            input().forecast_source(),
            Err(CliError::MissingForecast)
        ));

        let args = InputArgs {
            atmospheric: Some(PathBuf::from("a.json")),
            ..input()
        };
        // Atmospheric data alone is not enough
        assert!(matches!(args.forecast_source(), Err(CliError::MissingForecast)));

        let args = InputArgs {
            atmospheric: Some(PathBuf::from("a.json")),
            marine: Some(PathBuf::from("m.json")),
            ..input()
        };
        assert_eq!(
            args.forecast_source().unwrap(),
            ForecastSource::OpenMeteo {
                atmospheric: Path::new("a.json"),
                marine: Path::new("m.json"),
            }
        );

        let args = InputArgs {
            forecast: Some(PathBuf::from("f.json")),
            ..args
        };
        assert_eq!(
            args.forecast_source().unwrap(),
            ForecastSource::Samples(Path::new("f.json"))
        );
    }

    #[test]
    fn test_profile_errors_keep_parser_message() {
        let err = parse_tide_phase_arg("spring").unwrap_err();
        assert_eq!(
            err.to_string(),
            ProfileParseError::InvalidTidePhase("spring".to_string()).to_string()
        );
        assert!(matches!(
            parse_break_type_arg("slab"),
            Err(CliError::Profile(ProfileParseError::InvalidBreakType(_)))
        ));
    }

    #[test]
    fn test_cli_parse_score() {
        let cli = Cli::parse_from([
            "swellscore", "score", "--forecast", "f.json", "--spot", "coxos", "--json",
        ]);
        match cli.command {
            Command::Score { input, at, json } => {
                assert_eq!(input.forecast, Some(PathBuf::from("f.json")));
                assert_eq!(input.spot.as_deref(), Some("coxos"));
                assert!(at.is_none());
                assert!(json);
            }
            other => panic!("Expected Score, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["swellscore", "spots", "--utc", "-v"]);
        assert!(cli.utc);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Spots));
    }

    #[test]
    fn test_cli_parse_outlook_default_days() {
        let cli = Cli::parse_from(["swellscore", "outlook", "--forecast", "f.json"]);
        match cli.command {
            Command::Outlook { days, .. } => assert_eq!(days, DEFAULT_OUTLOOK_DAYS),
            other => panic!("Expected Outlook, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_negative_coordinates() {
        let cli = Cli::parse_from([
            "swellscore", "window", "--forecast", "f.json", "--date", "2024-07-15", "--lng", "-9.5",
        ]);
        match cli.command {
            Command::Window { input, date } => {
                assert_eq!(input.lng, Some(-9.5));
                assert_eq!(date, "2024-07-15");
            }
            other => panic!("Expected Window, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_forecast_with_atmospheric() {
        let result = Cli::try_parse_from([
            "swellscore", "score", "--forecast", "f.json", "--atmospheric", "a.json", "--marine",
            "m.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_marine_with_atmospheric() {
        let result = Cli::try_parse_from(["swellscore", "score", "--atmospheric", "a.json"]);
        assert!(result.is_err());
    }
}
