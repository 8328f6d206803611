//! Daylight window
//!
//! Sunrise and sunset for a location, and filtering of forecast samples to
//! the hours between them.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{ForecastSample, Location};

/// Sunrise and sunset for one day at one location
///
/// During polar night `sunrise` is after `sunset`, so the span contains no
/// instant at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Whether `t` lies between sunrise and sunset, both ends included.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.sunrise <= t && t <= self.sunset
    }
}

/// Altitude of the sun's centre at sunrise and sunset, allowing for refraction.
const HORIZON_ALTITUDE_DEG: f64 = -0.833;

/// Approximate solar declination in degrees for `date`.
fn solar_declination(date: NaiveDate) -> f64 {
    let day_of_year = date.ordinal() as f64;
    -23.44 * (2.0 * PI / 365.0 * (day_of_year + 10.0)).cos()
}

/// Sun altitude in degrees at local solar noon.
fn noon_altitude(date: NaiveDate, location: &Location) -> f64 {
    90.0 - (location.latitude - solar_declination(date)).abs()
}

/// Calendar date of `t` at the location's mean solar time.
///
/// UTC dates split a Pacific evening or an Asian morning across two days;
/// shifting by longitude keeps a sample with the sunrise and sunset of the
/// day it is actually lit by.
pub fn solar_date(t: DateTime<Utc>, location: &Location) -> NaiveDate {
    let offset_seconds = (location.longitude * 240.0).round() as i64;
    (t + Duration::seconds(offset_seconds)).date_naive()
}

/// Sunrise and sunset for `date` at `location`.
///
/// When the sun never crosses the horizon, which only happens at polar
/// latitudes, the span covers the whole local solar day under the midnight
/// sun and nothing during polar night.
pub fn sun_times(date: NaiveDate, location: &Location) -> SunTimes {
    #[allow(deprecated)]
    let (sunrise, sunset) = sunrise::sunrise_sunset(
        location.latitude,
        location.longitude,
        date.year(),
        date.month(),
        date.day(),
    );

    match (
        DateTime::from_timestamp(sunrise, 0),
        DateTime::from_timestamp(sunset, 0),
    ) {
        (Some(sunrise), Some(sunset)) if sunrise < sunset => SunTimes { sunrise, sunset },
        _ => {
            let offset_seconds = (location.longitude * 240.0).round() as i64;
            let day_start =
                date.and_time(NaiveTime::MIN).and_utc() - Duration::seconds(offset_seconds);
            let day_end = day_start + Duration::days(1) - Duration::seconds(1);

            if noon_altitude(date, location) > HORIZON_ALTITUDE_DEG {
                debug!(
                    "Midnight sun on {} at ({}, {}), whole day is daylight",
                    date, location.latitude, location.longitude
                );
                SunTimes {
                    sunrise: day_start,
                    sunset: day_end,
                }
            } else {
                debug!(
                    "Polar night on {} at ({}, {}), no daylight",
                    date, location.latitude, location.longitude
                );
                SunTimes {
                    sunrise: day_end,
                    sunset: day_start,
                }
            }
        }
    }
}

/// Whether `t` falls between sunrise and sunset of its own day.
pub fn is_daylight(t: DateTime<Utc>, location: &Location) -> bool {
    sun_times(solar_date(t, location), location).contains(t)
}

/// Keeps the samples that fall in daylight, preserving order.
pub fn filter_daylight<'a>(
    samples: &'a [ForecastSample],
    location: &Location,
) -> Vec<&'a ForecastSample> {
    samples
        .iter()
        .filter(|s| is_daylight(s.forecast_hour_utc, location))
        .collect()
}
