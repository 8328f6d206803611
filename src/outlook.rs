//! Multi-day outlook: one representative morning score per day.

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use crate::data::{ForecastSample, Location, TidePoint};
use crate::quality::{score_sample, BreakProfile, ScoreOptions, SwellQualityScore};

/// Days shown when the caller does not ask for a count.
pub const DEFAULT_OUTLOOK_DAYS: usize = 7;

/// UTC hours preferred for a day's representative sample.
const MORNING_HOURS: std::ops::RangeInclusive<u32> = 8..=10;

/// One day of the outlook
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOutlook {
    /// UTC calendar date
    pub date: NaiveDate,
    /// Sample the day was scored on
    pub representative: ForecastSample,
    pub score: SwellQualityScore,
}

/// Scores one representative sample for each of the first `max_days` dates.
///
/// Samples are grouped by UTC date in the order the dates first appear. The
/// representative is the first sample between 08:00 and 10:00 UTC, or the
/// day's first sample when there is none. Scoring keeps the daylight gate on.
pub fn daily_outlook(
    samples: &[ForecastSample],
    profile: Option<&BreakProfile>,
    location: &Location,
    tide_points: &[TidePoint],
    spot_id: &str,
    max_days: usize,
) -> Vec<DayOutlook> {
    let mut days: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();
    for sample in samples {
        let date = sample.forecast_hour_utc.date_naive();
        match days.iter_mut().find(|(d, _)| *d == date) {
            Some((_, group)) => group.push(sample),
            None => days.push((date, vec![sample])),
        }
    }

    days.into_iter()
        .take(max_days)
        .filter_map(|(date, group)| {
            let representative = group
                .iter()
                .find(|s| MORNING_HOURS.contains(&s.forecast_hour_utc.hour()))
                .or_else(|| group.first())?;
            let score = score_sample(
                representative,
                profile,
                location,
                tide_points,
                ScoreOptions::default(),
            )
            .with_spot_id(spot_id);
            Some(DayOutlook {
                date,
                representative: (*representative).clone(),
                score,
            })
        })
        .collect()
}
