//! Best surf window selection
//!
//! Scores a day of daylight samples and picks the contiguous run of two or
//! three hours with the highest mean score.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::data::{ForecastSample, Location, TidePoint};
use crate::daylight::sun_times;
use crate::quality::{score_sample, BreakProfile, QualityLabel, ScoreOptions, SwellQualityScore};

/// Window sizes tried, in order.
const WINDOW_SIZES: [usize; 2] = [3, 2];

/// Windows averaging below this are not worth recommending.
const MIN_WINDOW_MEAN: f64 = 30.0;

pub const LIMITED_DAYLIGHT_MESSAGE: &str = "Limited daylight data";
pub const NO_GOOD_WINDOW_MESSAGE: &str = "No good window today";

/// The winning run of samples
#[derive(Debug, Clone, PartialEq)]
pub struct BestWindow {
    /// Hour of the first sample
    pub start: DateTime<Utc>,
    /// One hour after the last sample
    pub end: DateTime<Utc>,
    pub mean_score: f64,
    /// Label of the highest-scoring sample in the window
    pub best_label: QualityLabel,
    /// Scores of the samples in the window
    pub scores: Vec<SwellQualityScore>,
}

impl BestWindow {
    /// "Best window: 09:00–12:00 (GOOD conditions)" with times in `tz`.
    pub fn describe_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "Best window: {}–{} ({} conditions)",
            self.start.with_timezone(tz).format("%H:%M"),
            self.end.with_timezone(tz).format("%H:%M"),
            self.best_label
        )
    }
}

/// Outcome of a best-window search
#[derive(Debug, Clone, PartialEq)]
pub enum WindowVerdict {
    Found(BestWindow),
    /// Fewer than two daylight samples on the day
    LimitedDaylight,
    /// The best window averaged under 30
    NoGoodWindow,
}

impl WindowVerdict {
    pub fn window(&self) -> Option<&BestWindow> {
        match self {
            WindowVerdict::Found(window) => Some(window),
            _ => None,
        }
    }

    /// Display string with window times in `tz`.
    pub fn describe_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            WindowVerdict::Found(window) => window.describe_in(tz),
            WindowVerdict::LimitedDaylight => LIMITED_DAYLIGHT_MESSAGE.to_string(),
            WindowVerdict::NoGoodWindow => NO_GOOD_WINDOW_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for WindowVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.describe_in(&Utc))
    }
}

/// Finds the best 2-3 hour window on `date`.
///
/// Samples outside that day's sunrise to sunset are dropped, the rest are
/// scored without the daylight gate, and every window of three then two
/// consecutive samples is compared by mean score. A later window replaces the
/// current best only when its mean is strictly higher, so ties keep the
/// earlier and longer window.
pub fn find_best_window(
    samples: &[ForecastSample],
    profile: Option<&BreakProfile>,
    location: &Location,
    tide_points: &[TidePoint],
    date: NaiveDate,
) -> WindowVerdict {
    let sun = sun_times(date, location);
    let scored: Vec<SwellQualityScore> = samples
        .iter()
        .filter(|s| sun.contains(s.forecast_hour_utc))
        .map(|s| score_sample(s, profile, location, tide_points, ScoreOptions::skip_daylight()))
        .collect();

    if scored.len() < 2 {
        debug!("Only {} daylight samples on {}", scored.len(), date);
        return WindowVerdict::LimitedDaylight;
    }

    let mut best: Option<&[SwellQualityScore]> = None;
    let mut best_mean = -1.0;

    for size in WINDOW_SIZES {
        if scored.len() < size {
            continue;
        }
        for window in scored.windows(size) {
            let mean = window.iter().map(|s| f64::from(s.score)).sum::<f64>() / size as f64;
            if mean > best_mean {
                best_mean = mean;
                best = Some(window);
            }
        }
    }

    let Some(window) = best else {
        return WindowVerdict::LimitedDaylight;
    };

    if best_mean < MIN_WINDOW_MEAN {
        debug!("Best window on {} averages {:.1}, below threshold", date, best_mean);
        return WindowVerdict::NoGoodWindow;
    }

    // First sample wins ties for the window's headline label
    let top = window
        .iter()
        .fold(&window[0], |top, s| if s.score > top.score { s } else { top });

    let start = window[0].forecast_hour_utc;
    let end = window[window.len() - 1].forecast_hour_utc + Duration::hours(1);
    debug!("Best window on {}: {} to {} (mean {:.1})", date, start, end, best_mean);

    WindowVerdict::Found(BestWindow {
        start,
        end,
        mean_score: best_mean,
        best_label: top.label,
        scores: window.to_vec(),
    })
}

/// Best window on `date` as a display string with times in `tz`.
pub fn best_surf_window<Tz>(
    samples: &[ForecastSample],
    profile: Option<&BreakProfile>,
    location: &Location,
    tide_points: &[TidePoint],
    date: NaiveDate,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    find_best_window(samples, profile, location, tide_points, date).describe_in(tz)
}
