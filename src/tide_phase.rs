//! Tide phase resolution
//!
//! Works out whether a moment sits at low, mid or high tide from the high and
//! low events around it, and for mid tide whether the water is rising or
//! falling.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::data::{TideExtreme, TidePoint};

/// Within this distance of a high or low, the tide counts as that extreme.
const EXTREME_WINDOW_MINUTES: i64 = 45;

/// Point in the tidal cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TidePhase {
    Low,
    Mid,
    High,
}

impl TidePhase {
    pub fn label(&self) -> &'static str {
        match self {
            TidePhase::Low => "low",
            TidePhase::Mid => "mid",
            TidePhase::High => "high",
        }
    }
}

impl fmt::Display for TidePhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Direction the water is moving between two extremes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideDirection {
    Rising,
    Falling,
}

impl TideDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TideDirection::Rising => "rising",
            TideDirection::Falling => "falling",
        }
    }
}

impl fmt::Display for TideDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Resolved tide state at a moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideReading {
    pub phase: TidePhase,
    /// `None` when the bracketing extremes are missing or of the same kind
    pub direction: Option<TideDirection>,
}

impl TideReading {
    /// Reading used when no tide data brackets the moment.
    pub const UNKNOWN: TideReading = TideReading {
        phase: TidePhase::Mid,
        direction: None,
    };
}

impl fmt::Display for TideReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.phase, self.direction) {
            (TidePhase::Mid, Some(direction)) => write!(f, "mid, {}", direction),
            (phase, _) => write!(f, "{}", phase),
        }
    }
}

/// Resolves the tide phase at `target` from a day's tide points.
///
/// Only points marked as a high or low are used. The first consecutive pair
/// of extremes with `before.time <= target <= after.time` brackets the moment;
/// with no bracketing pair (no data, or `target` outside the covered range)
/// the reading is mid tide with no direction.
pub fn resolve_tide_phase(target: DateTime<Utc>, tide_points: &[TidePoint]) -> TideReading {
    let extremes: Vec<(&TidePoint, TideExtreme)> = tide_points
        .iter()
        .filter_map(|p| p.kind.map(|kind| (p, kind)))
        .collect();

    let Some(pair) = extremes
        .windows(2)
        .find(|pair| pair[0].0.time <= target && target <= pair[1].0.time)
    else {
        return TideReading::UNKNOWN;
    };
    let (before, before_kind) = pair[0];
    let (after, after_kind) = pair[1];

    let direction = match (before_kind, after_kind) {
        (TideExtreme::High, TideExtreme::Low) => Some(TideDirection::Falling),
        (TideExtreme::Low, TideExtreme::High) => Some(TideDirection::Rising),
        _ => None,
    };

    let to_before = target - before.time;
    let to_after = after.time - target;
    let (nearest_distance, nearest_kind) = if to_before < to_after {
        (to_before, before_kind)
    } else {
        (to_after, after_kind)
    };

    let phase = if nearest_distance <= Duration::minutes(EXTREME_WINDOW_MINUTES) {
        match nearest_kind {
            TideExtreme::High => TidePhase::High,
            TideExtreme::Low => TidePhase::Low,
        }
    } else {
        TidePhase::Mid
    };

    TideReading { phase, direction }
}
