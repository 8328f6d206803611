//! Swell quality scoring engine.
//!
//! This module defines break profiles and the weighted scorer that turns one
//! forecast sample into a 0-100 quality score with a label, a confidence
//! level and one explanation per scoring factor.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::compass::{bearing_difference, compass_to_degrees, degrees_to_compass_label};
use crate::daylight::is_daylight;
use crate::data::{ForecastSample, Location, TidePoint};
use crate::tide_phase::{resolve_tide_phase, TidePhase, TideReading};

// ============================================================================
// BREAK PROFILES
// ============================================================================

/// Points available for wave height
pub const WEIGHT_WAVE_HEIGHT: f64 = 25.0;
/// Points available for swell period
pub const WEIGHT_SWELL_PERIOD: f64 = 25.0;
/// Points available for wind direction
pub const WEIGHT_WIND_DIRECTION: f64 = 20.0;
/// Points available for swell direction
pub const WEIGHT_SWELL_DIRECTION: f64 = 20.0;
/// Points available for tide phase
pub const WEIGHT_TIDE_PHASE: f64 = 10.0;

/// Reason returned alone when a sample falls outside daylight.
pub const OUTSIDE_DAYLIGHT_REASON: &str = "Outside daylight hours";

/// Error for profile fields given as text (CLI flags, config)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileParseError {
    #[error("Invalid break type: '{0}'. Valid break types: beach, reef, point")]
    InvalidBreakType(String),

    #[error("Invalid tide phase: '{0}'. Valid tide phases: low, mid, high, any")]
    InvalidTidePhase(String),
}

/// How the wave breaks, which sets the wave height it handles best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakType {
    /// Sand-bottom beach break
    Beach,
    /// Reef break, handles and needs more size
    Reef,
    /// Point break
    Point,
}

impl BreakType {
    pub fn label(&self) -> &'static str {
        match self {
            BreakType::Beach => "beach",
            BreakType::Reef => "reef",
            BreakType::Point => "point",
        }
    }

    /// Ideal wave height range in metres (min, max).
    pub fn ideal_height_range(&self) -> (f64, f64) {
        match self {
            BreakType::Reef => (1.0, 4.0),
            BreakType::Beach | BreakType::Point => (0.8, 2.5),
        }
    }
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for BreakType {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beach" => Ok(BreakType::Beach),
            "reef" => Ok(BreakType::Reef),
            "point" => Ok(BreakType::Point),
            _ => Err(ProfileParseError::InvalidBreakType(s.to_string())),
        }
    }
}

/// Tide phase a break works best on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimalTidePhase {
    Low,
    Mid,
    High,
    /// No tide preference
    Any,
}

impl OptimalTidePhase {
    pub fn label(&self) -> &'static str {
        match self {
            OptimalTidePhase::Low => "low",
            OptimalTidePhase::Mid => "mid",
            OptimalTidePhase::High => "high",
            OptimalTidePhase::Any => "any",
        }
    }

    /// Whether a resolved phase satisfies this preference.
    pub fn accepts(&self, phase: TidePhase) -> bool {
        matches!(
            (self, phase),
            (OptimalTidePhase::Any, _)
                | (OptimalTidePhase::Low, TidePhase::Low)
                | (OptimalTidePhase::Mid, TidePhase::Mid)
                | (OptimalTidePhase::High, TidePhase::High)
        )
    }
}

impl fmt::Display for OptimalTidePhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for OptimalTidePhase {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(OptimalTidePhase::Low),
            "mid" => Ok(OptimalTidePhase::Mid),
            "high" => Ok(OptimalTidePhase::High),
            "any" => Ok(OptimalTidePhase::Any),
            _ => Err(ProfileParseError::InvalidTidePhase(s.to_string())),
        }
    }
}

/// Static description of how a surf spot responds to swell, wind and tide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakProfile {
    /// Break type, sets the ideal wave height band
    pub break_type: BreakType,
    /// Compass direction the break faces; offshore wind blows from the opposite bearing
    pub facing_direction: String,
    /// One or two compass labels, e.g. "W-NW"; only the first is scored
    pub optimal_swell_direction: String,
    /// Tide phase the break works best on
    pub optimal_tide_phase: OptimalTidePhase,
    /// Descriptive only, offshore is derived from `facing_direction`
    pub optimal_wind_direction: String,
}

impl Default for BreakProfile {
    /// West-facing beach break, used for spots with no metadata.
    fn default() -> Self {
        Self {
            break_type: BreakType::Beach,
            facing_direction: "W".to_string(),
            optimal_swell_direction: "W-NW".to_string(),
            optimal_tide_phase: OptimalTidePhase::Mid,
            optimal_wind_direction: "E".to_string(),
        }
    }
}

/// A factor's share of its weight (0.0-1.0) and the explanation for it
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub credit: f64,
    pub reason: String,
}

impl FactorScore {
    fn new(credit: f64, reason: String) -> Self {
        Self { credit, reason }
    }
}

impl BreakProfile {
    /// The given profile, or the default profile when there is none.
    pub fn resolve(profile: Option<&BreakProfile>) -> Cow<'_, BreakProfile> {
        match profile {
            Some(p) => Cow::Borrowed(p),
            None => {
                debug!("No break profile supplied, using default beach profile");
                Cow::Owned(BreakProfile::default())
            }
        }
    }

    /// Bearing the wind must blow from to be offshore.
    pub fn offshore_degrees(&self) -> f64 {
        (compass_to_degrees(&self.facing_direction) + 180.0) % 360.0
    }

    /// Bearing of the first label in `optimal_swell_direction`.
    pub fn target_swell_degrees(&self) -> f64 {
        let first = self
            .optimal_swell_direction
            .split('-')
            .next()
            .unwrap_or_default();
        compass_to_degrees(first.trim())
    }

    /// Score wave height against the break's ideal band.
    pub fn score_wave_height(&self, h: f64) -> FactorScore {
        let (min, max) = self.break_type.ideal_height_range();

        if h >= min && h <= max {
            FactorScore::new(1.0, format!("Wave height {:.1}m — in ideal range for this break.", h))
        } else if h > 0.3 && h < min {
            FactorScore::new(0.5, format!("Wave height {:.1}m — a bit small but surfable.", h))
        } else if h > max && h <= max * 1.5 {
            FactorScore::new(
                0.6,
                format!("Wave height {:.1}m — overhead, experienced surfers only.", h),
            )
        } else if h <= 0.3 {
            FactorScore::new(0.0, format!("Wave height {:.1}m — too flat to surf.", h))
        } else {
            FactorScore::new(0.2, format!("Wave height {:.1}m — dangerously large.", h))
        }
    }

    /// Score swell period. Longer periods carry more organised energy.
    pub fn score_swell_period(period: f64) -> FactorScore {
        if period >= 14.0 {
            FactorScore::new(
                1.0,
                format!("Long period {:.0}s — excellent ground swell energy.", period),
            )
        } else if period >= 10.0 {
            FactorScore::new(
                0.75,
                format!("Good swell period {:.0}s — clean, organised waves.", period),
            )
        } else if period >= 7.0 {
            FactorScore::new(
                0.4,
                format!("Short period {:.0}s — choppy, wind-swell conditions.", period),
            )
        } else {
            FactorScore::new(
                0.0,
                format!("Very short period {:.0}s — messy and close-out conditions.", period),
            )
        }
    }

    /// Score wind direction relative to the break's offshore bearing.
    pub fn score_wind(&self, direction_deg: f64, speed_kmh: f64) -> FactorScore {
        let diff = bearing_difference(direction_deg, self.offshore_degrees());
        let label = degrees_to_compass_label(direction_deg);

        if diff <= 45.0 {
            FactorScore::new(
                1.0,
                format!("Offshore {} wind at {:.0} km/h — perfect conditions.", label, speed_kmh),
            )
        } else if diff <= 90.0 {
            FactorScore::new(
                0.5,
                format!("Cross-shore {} wind at {:.0} km/h — acceptable but not ideal.", label, speed_kmh),
            )
        } else if diff <= 135.0 {
            FactorScore::new(
                0.2,
                format!("Mostly onshore {} wind at {:.0} km/h — expect messy, choppy conditions.", label, speed_kmh),
            )
        } else {
            FactorScore::new(
                0.0,
                format!("Strong onshore {} wind at {:.0} km/h — conditions blown out.", label, speed_kmh),
            )
        }
    }

    /// Score how well the swell direction lines up with the break.
    pub fn score_swell_direction(&self, direction_deg: f64) -> FactorScore {
        let diff = bearing_difference(direction_deg, self.target_swell_degrees());
        let label = degrees_to_compass_label(direction_deg);

        if diff <= 30.0 {
            FactorScore::new(1.0, format!("Swell from {} — perfectly aligned with break.", label))
        } else if diff <= 60.0 {
            FactorScore::new(
                0.65,
                format!("Swell direction {} — good angle for this break.", label),
            )
        } else if diff <= 90.0 {
            FactorScore::new(
                0.3,
                format!("Swell direction {} marginal — may not fully wrap into the break.", label),
            )
        } else {
            FactorScore::new(
                0.0,
                format!("Swell direction {} — wrong angle, poor shape expected.", label),
            )
        }
    }

    /// Score a resolved tide reading against the break's preference.
    pub fn score_tide(&self, reading: TideReading) -> FactorScore {
        if self.optimal_tide_phase.accepts(reading.phase) {
            FactorScore::new(1.0, format!("Tide ({}) — matches optimal.", reading))
        } else {
            FactorScore::new(
                0.3,
                format!("Tide ({}) — optimal is {}.", reading, self.optimal_tide_phase),
            )
        }
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// Discrete quality label derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityLabel {
    Poor,
    Fair,
    Good,
    Epic,
}

impl QualityLabel {
    pub fn label(&self) -> &'static str {
        match self {
            QualityLabel::Epic => "EPIC",
            QualityLabel::Good => "GOOD",
            QualityLabel::Fair => "FAIR",
            QualityLabel::Poor => "POOR",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

/// How far the forecast models can be trusted for this sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Weighted points each factor contributed to the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactors {
    pub wave_height: f64,
    pub swell_period: f64,
    pub wind_direction: f64,
    pub swell_direction: f64,
    pub tide_phase: f64,
}

impl ScoreFactors {
    pub fn total(&self) -> f64 {
        self.wave_height + self.swell_period + self.wind_direction + self.swell_direction + self.tide_phase
    }
}

/// Scoring options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    /// Skip the daylight gate when the caller has already filtered to daylight
    pub skip_daylight_check: bool,
}

impl ScoreOptions {
    pub fn skip_daylight() -> Self {
        Self {
            skip_daylight_check: true,
        }
    }
}

/// Quality score for one forecast hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwellQualityScore {
    /// Caller-assigned spot identifier, empty by default
    pub spot_id: String,
    /// Echo of the sample's forecast hour
    pub forecast_hour_utc: DateTime<Utc>,
    /// Final score (0-100)
    pub score: u8,
    pub label: QualityLabel,
    pub confidence: Confidence,
    /// Height, period, wind, swell direction and tide reasons in that order,
    /// or the single daylight reason
    pub reasons: Vec<String>,
    /// Weighted factor points, absent when gated out by daylight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<ScoreFactors>,
}

impl SwellQualityScore {
    /// Sets the spot identifier.
    pub fn with_spot_id(mut self, spot_id: impl Into<String>) -> Self {
        self.spot_id = spot_id.into();
        self
    }

    /// Whether this score came from the daylight gate rather than the factors.
    pub fn is_outside_daylight(&self) -> bool {
        self.factors.is_none()
    }
}

/// Label for a final score: 80+ EPIC, 55+ GOOD, 35+ FAIR, else POOR.
pub fn label_for_score(score: u8) -> QualityLabel {
    match score {
        80.. => QualityLabel::Epic,
        55..=79 => QualityLabel::Good,
        35..=54 => QualityLabel::Fair,
        _ => QualityLabel::Poor,
    }
}

/// Forecast confidence from raw period and height, independent of the score.
pub fn confidence_for(period_s: f64, height_m: f64) -> Confidence {
    if period_s >= 10.0 && height_m >= 0.5 {
        Confidence::High
    } else if period_s >= 7.0 && height_m >= 0.3 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Scores one forecast sample for a break.
///
/// Unless `options.skip_daylight_check` is set, a sample outside sunrise to
/// sunset scores 0 / POOR / LOW with the single reason
/// [`OUTSIDE_DAYLIGHT_REASON`]. Otherwise the five weighted factors are summed
/// and rounded, and exactly five reasons are returned in factor order.
///
/// A missing `profile` falls back to [`BreakProfile::default`], and an empty
/// `tide_points` slice scores the tide as mid with no direction.
pub fn score_sample(
    sample: &ForecastSample,
    profile: Option<&BreakProfile>,
    location: &Location,
    tide_points: &[TidePoint],
    options: ScoreOptions,
) -> SwellQualityScore {
    if !options.skip_daylight_check && !is_daylight(sample.forecast_hour_utc, location) {
        debug!("Sample at {} is outside daylight", sample.forecast_hour_utc);
        return SwellQualityScore {
            spot_id: String::new(),
            forecast_hour_utc: sample.forecast_hour_utc,
            score: 0,
            label: QualityLabel::Poor,
            confidence: Confidence::Low,
            reasons: vec![OUTSIDE_DAYLIGHT_REASON.to_string()],
            factors: None,
        };
    }

    let profile = BreakProfile::resolve(profile);
    let tide = resolve_tide_phase(sample.forecast_hour_utc, tide_points);

    let height = profile.score_wave_height(sample.wave_height_m);
    let period = BreakProfile::score_swell_period(sample.wave_period_s);
    let wind = profile.score_wind(sample.wind_direction_deg, sample.wind_speed_kmh);
    let swell = profile.score_swell_direction(sample.swell_direction_deg);
    let tide = profile.score_tide(tide);

    let factors = ScoreFactors {
        wave_height: height.credit * WEIGHT_WAVE_HEIGHT,
        swell_period: period.credit * WEIGHT_SWELL_PERIOD,
        wind_direction: wind.credit * WEIGHT_WIND_DIRECTION,
        swell_direction: swell.credit * WEIGHT_SWELL_DIRECTION,
        tide_phase: tide.credit * WEIGHT_TIDE_PHASE,
    };

    let score = factors.total().round().clamp(0.0, 100.0) as u8;

    SwellQualityScore {
        spot_id: String::new(),
        forecast_hour_utc: sample.forecast_hour_utc,
        score,
        label: label_for_score(score),
        confidence: confidence_for(sample.wave_period_s, sample.wave_height_m),
        reasons: vec![height.reason, period.reason, wind.reason, swell.reason, tide.reason],
        factors: Some(factors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TideExtreme;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
    }

    fn peniche() -> Location {
        Location::new(39.3558, -9.3811)
    }

    /// Conditions that earn full credit on every factor for the default profile.
    fn perfect_sample() -> ForecastSample {
        ForecastSample {
            wave_height_m: 1.5,
            wave_period_s: 14.0,
            swell_direction_deg: 270.0,
            swell_height_m: 1.2,
            wind_speed_kmh: 10.0,
            wind_direction_deg: 90.0,
            ..ForecastSample::at(noon())
        }
    }

    fn reef() -> BreakProfile {
        BreakProfile {
            break_type: BreakType::Reef,
            ..BreakProfile::default()
        }
    }

    // ========================================================================
    // Profile parsing
    // ========================================================================

    #[test]
    fn test_break_type_from_str() {
        assert_eq!("beach".parse::<BreakType>(), Ok(BreakType::Beach));
        assert_eq!("REEF".parse::<BreakType>(), Ok(BreakType::Reef));
        assert_eq!(" Point ".parse::<BreakType>(), Ok(BreakType::Point));
        assert!("slab".parse::<BreakType>().is_err());
    }

    #[test]
    fn test_optimal_tide_phase_from_str() {
        assert_eq!("any".parse::<OptimalTidePhase>(), Ok(OptimalTidePhase::Any));
        assert_eq!("High".parse::<OptimalTidePhase>(), Ok(OptimalTidePhase::High));
        let err = "flood".parse::<OptimalTidePhase>().unwrap_err();
        assert!(err.to_string().contains("flood"));
    }

    #[test]
    fn test_default_profile() {
        let profile = BreakProfile::default();
        assert_eq!(profile.break_type, BreakType::Beach);
        assert_eq!(profile.facing_direction, "W");
        assert_eq!(profile.optimal_swell_direction, "W-NW");
        assert_eq!(profile.optimal_tide_phase, OptimalTidePhase::Mid);
        assert_eq!(profile.optimal_wind_direction, "E");
    }

    #[test]
    fn test_resolve_substitutes_default_for_missing_profile() {
        assert_eq!(*BreakProfile::resolve(None), BreakProfile::default());

        let reef = reef();
        let resolved = BreakProfile::resolve(Some(&reef));
        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.break_type, BreakType::Reef);
    }

    #[test]
    fn test_offshore_is_opposite_of_facing() {
        let mut profile = BreakProfile::default();
        assert_eq!(profile.offshore_degrees(), 90.0);
        profile.facing_direction = "NW".to_string();
        assert_eq!(profile.offshore_degrees(), 135.0);
        profile.facing_direction = "S".to_string();
        assert_eq!(profile.offshore_degrees(), 0.0);
    }

    #[test]
    fn test_target_swell_uses_first_label() {
        let mut profile = BreakProfile::default();
        assert_eq!(profile.target_swell_degrees(), 270.0);
        profile.optimal_swell_direction = "NW".to_string();
        assert_eq!(profile.target_swell_degrees(), 315.0);
        profile.optimal_swell_direction = "sw - w".to_string();
        assert_eq!(profile.target_swell_degrees(), 225.0);
        profile.optimal_swell_direction = String::new();
        assert_eq!(profile.target_swell_degrees(), 0.0);
    }

    // ========================================================================
    // Factor scoring
    // ========================================================================

    #[test]
    fn test_wave_height_bands_for_beach() {
        let profile = BreakProfile::default();
        assert_eq!(profile.score_wave_height(0.8).credit, 1.0);
        assert_eq!(profile.score_wave_height(2.5).credit, 1.0);
        assert_eq!(profile.score_wave_height(0.5).credit, 0.5);
        assert_eq!(profile.score_wave_height(3.0).credit, 0.6);
        assert_eq!(profile.score_wave_height(3.75).credit, 0.6);
        assert_eq!(profile.score_wave_height(3.8).credit, 0.2);
        assert_eq!(profile.score_wave_height(0.3).credit, 0.0);
        assert_eq!(profile.score_wave_height(-1.0).credit, 0.0);
    }

    #[test]
    fn test_wave_height_bands_for_reef() {
        let profile = reef();
        assert_eq!(profile.score_wave_height(0.9).credit, 0.5);
        assert_eq!(profile.score_wave_height(1.0).credit, 1.0);
        assert_eq!(profile.score_wave_height(4.0).credit, 1.0);
        assert_eq!(profile.score_wave_height(6.0).credit, 0.6);
        assert_eq!(profile.score_wave_height(6.1).credit, 0.2);
    }

    #[test]
    fn test_wave_height_reason_includes_height() {
        let profile = BreakProfile::default();
        let ideal = profile.score_wave_height(1.84);
        assert!(ideal.reason.contains("1.8m"));
        assert!(ideal.reason.contains("in ideal range"));
        assert!(profile.score_wave_height(0.2).reason.contains("too flat to surf"));
        assert!(profile.score_wave_height(5.0).reason.contains("dangerously large"));
        assert!(profile.score_wave_height(3.0).reason.contains("overhead"));
        assert!(profile.score_wave_height(0.5).reason.contains("a bit small but surfable"));
    }

    #[test]
    fn test_swell_period_bands() {
        assert_eq!(BreakProfile::score_swell_period(16.0).credit, 1.0);
        assert_eq!(BreakProfile::score_swell_period(14.0).credit, 1.0);
        assert_eq!(BreakProfile::score_swell_period(13.9).credit, 0.75);
        assert_eq!(BreakProfile::score_swell_period(10.0).credit, 0.75);
        assert_eq!(BreakProfile::score_swell_period(9.9).credit, 0.4);
        assert_eq!(BreakProfile::score_swell_period(7.0).credit, 0.4);
        assert_eq!(BreakProfile::score_swell_period(6.9).credit, 0.0);
        assert!(BreakProfile::score_swell_period(15.0).reason.contains("ground swell"));
        assert!(BreakProfile::score_swell_period(5.0).reason.contains("close-out"));
    }

    #[test]
    fn test_wind_offshore_and_onshore() {
        let profile = BreakProfile::default();

        let offshore = profile.score_wind(90.0, 12.0);
        assert_eq!(offshore.credit, 1.0);
        assert!(offshore.reason.contains("Offshore E wind at 12 km/h"));
        assert!(offshore.reason.contains("perfect conditions"));

        let onshore = profile.score_wind(270.0, 25.0);
        assert_eq!(onshore.credit, 0.0);
        assert!(onshore.reason.contains("blown out"));
    }

    #[test]
    fn test_wind_band_boundaries() {
        let profile = BreakProfile::default();
        // Offshore bearing is 90°
        assert_eq!(profile.score_wind(135.0, 10.0).credit, 1.0);
        assert_eq!(profile.score_wind(136.0, 10.0).credit, 0.5);
        assert_eq!(profile.score_wind(180.0, 10.0).credit, 0.5);
        assert_eq!(profile.score_wind(181.0, 10.0).credit, 0.2);
        assert_eq!(profile.score_wind(225.0, 10.0).credit, 0.2);
        assert_eq!(profile.score_wind(226.0, 10.0).credit, 0.0);
        assert!(profile.score_wind(0.0, 10.0).reason.contains("Cross-shore"));
        assert!(profile.score_wind(200.0, 10.0).reason.contains("Mostly onshore"));
    }

    #[test]
    fn test_swell_direction_bands() {
        let profile = BreakProfile::default();
        // Target bearing is 270°
        assert_eq!(profile.score_swell_direction(300.0).credit, 1.0);
        assert_eq!(profile.score_swell_direction(301.0).credit, 0.65);
        assert_eq!(profile.score_swell_direction(210.0).credit, 0.65);
        assert_eq!(profile.score_swell_direction(180.0).credit, 0.3);
        assert_eq!(profile.score_swell_direction(179.0).credit, 0.0);
        assert!(profile.score_swell_direction(275.0).reason.contains("perfectly aligned"));
        assert!(profile.score_swell_direction(90.0).reason.contains("wrong angle"));
    }

    #[test]
    fn test_tide_any_always_matches() {
        let profile = BreakProfile {
            optimal_tide_phase: OptimalTidePhase::Any,
            ..BreakProfile::default()
        };
        for phase in [TidePhase::Low, TidePhase::Mid, TidePhase::High] {
            let reading = TideReading {
                phase,
                direction: None,
            };
            assert_eq!(profile.score_tide(reading).credit, 1.0);
        }
    }

    #[test]
    fn test_tide_mismatch_gets_partial_credit() {
        let profile = BreakProfile {
            optimal_tide_phase: OptimalTidePhase::Low,
            ..BreakProfile::default()
        };
        let scored = profile.score_tide(TideReading::UNKNOWN);
        assert_eq!(scored.credit, 0.3);
        assert_eq!(scored.reason, "Tide (mid) — optimal is low.");
    }

    // ========================================================================
    // Labels and confidence
    // ========================================================================

    #[test]
    fn test_label_thresholds() {
        assert_eq!(label_for_score(100), QualityLabel::Epic);
        assert_eq!(label_for_score(80), QualityLabel::Epic);
        assert_eq!(label_for_score(79), QualityLabel::Good);
        assert_eq!(label_for_score(55), QualityLabel::Good);
        assert_eq!(label_for_score(54), QualityLabel::Fair);
        assert_eq!(label_for_score(35), QualityLabel::Fair);
        assert_eq!(label_for_score(34), QualityLabel::Poor);
        assert_eq!(label_for_score(0), QualityLabel::Poor);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(confidence_for(10.0, 0.5), Confidence::High);
        assert_eq!(confidence_for(9.9, 0.5), Confidence::Medium);
        assert_eq!(confidence_for(12.0, 0.4), Confidence::Medium);
        assert_eq!(confidence_for(7.0, 0.3), Confidence::Medium);
        assert_eq!(confidence_for(6.9, 2.0), Confidence::Low);
        assert_eq!(confidence_for(12.0, 0.2), Confidence::Low);
    }

    #[test]
    fn test_label_ordering() {
        assert!(QualityLabel::Epic > QualityLabel::Good);
        assert!(QualityLabel::Fair > QualityLabel::Poor);
    }

    // ========================================================================
    // Full scoring
    // ========================================================================

    #[test]
    fn test_perfect_conditions_score_100() {
        let result = score_sample(&perfect_sample(), None, &peniche(), &[], ScoreOptions::default());

        assert_eq!(result.score, 100);
        assert_eq!(result.label, QualityLabel::Epic);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.reasons.len(), 5);
        assert!(!result.is_outside_daylight());
    }

    #[test]
    fn test_reasons_are_in_factor_order() {
        let result = score_sample(&perfect_sample(), None, &peniche(), &[], ScoreOptions::default());

        assert!(result.reasons[0].starts_with("Wave height"));
        assert!(result.reasons[1].contains("period"));
        assert!(result.reasons[2].contains("wind"));
        assert!(result.reasons[3].starts_with("Swell"));
        assert!(result.reasons[4].starts_with("Tide"));
    }

    #[test]
    fn test_outside_daylight_short_circuits() {
        let sample = ForecastSample {
            forecast_hour_utc: Utc.with_ymd_and_hms(2024, 7, 15, 2, 0, 0).unwrap(),
            ..perfect_sample()
        };

        let result = score_sample(&sample, None, &peniche(), &[], ScoreOptions::default());

        assert_eq!(result.score, 0);
        assert_eq!(result.label, QualityLabel::Poor);
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.reasons, vec![OUTSIDE_DAYLIGHT_REASON.to_string()]);
        assert!(result.is_outside_daylight());
        assert_eq!(result.forecast_hour_utc, sample.forecast_hour_utc);
    }

    #[test]
    fn test_skip_daylight_check_scores_night_sample() {
        let sample = ForecastSample {
            forecast_hour_utc: Utc.with_ymd_and_hms(2024, 7, 15, 2, 0, 0).unwrap(),
            ..perfect_sample()
        };

        let result = score_sample(&sample, None, &peniche(), &[], ScoreOptions::skip_daylight());

        assert_eq!(result.score, 100);
        assert_eq!(result.reasons.len(), 5);
    }

    #[test]
    fn test_tide_data_changes_tide_factor() {
        let profile = BreakProfile {
            optimal_tide_phase: OptimalTidePhase::High,
            ..BreakProfile::default()
        };
        let tides = vec![
            TidePoint::new(noon() - Duration::minutes(30), 3.2, Some(TideExtreme::High)),
            TidePoint::new(noon() + Duration::hours(6), 0.4, Some(TideExtreme::Low)),
        ];

        let with_tides = score_sample(&perfect_sample(), Some(&profile), &peniche(), &tides, ScoreOptions::default());
        let without = score_sample(&perfect_sample(), Some(&profile), &peniche(), &[], ScoreOptions::default());

        assert_eq!(with_tides.score, 100);
        assert_eq!(with_tides.reasons[4], "Tide (high) — matches optimal.");
        assert_eq!(without.score, 93);
        assert_eq!(without.reasons[4], "Tide (mid) — optimal is high.");
    }

    #[test]
    fn test_mid_tide_reason_includes_direction() {
        let tides = vec![
            TidePoint::new(noon() - Duration::hours(3), 0.4, Some(TideExtreme::Low)),
            TidePoint::new(noon() + Duration::hours(3), 3.2, Some(TideExtreme::High)),
        ];

        let result = score_sample(&perfect_sample(), None, &peniche(), &tides, ScoreOptions::default());

        assert_eq!(result.reasons[4], "Tide (mid, rising) — matches optimal.");
    }

    #[test]
    fn test_factors_sum_to_unrounded_score() {
        let sample = ForecastSample {
            wave_height_m: 0.5,
            wave_period_s: 11.0,
            wind_direction_deg: 0.0,
            swell_direction_deg: 230.0,
            ..perfect_sample()
        };

        let result = score_sample(&sample, None, &peniche(), &[], ScoreOptions::default());
        let factors = result.factors.expect("daylight sample has factors");

        // 12.5 + 18.75 + 10 + 13 + 10 = 64.25
        assert!((factors.total() - 64.25).abs() < 1e-9);
        assert_eq!(result.score, 64);
        assert_eq!(result.label, QualityLabel::Good);
    }

    #[test]
    fn test_with_spot_id() {
        let result = score_sample(&perfect_sample(), None, &peniche(), &[], ScoreOptions::default());
        assert_eq!(result.spot_id, "");
        assert_eq!(result.with_spot_id("supertubos").spot_id, "supertubos");
    }

    #[test]
    fn test_score_serializes_upper_case_labels() {
        let result = score_sample(&perfect_sample(), None, &peniche(), &[], ScoreOptions::default());
        let json = serde_json::to_string(&result).expect("Should serialize");
        assert!(json.contains("\"label\":\"EPIC\""));
        assert!(json.contains("\"confidence\":\"HIGH\""));
        assert!(json.contains("\"forecastHourUtc\""));
    }
}
