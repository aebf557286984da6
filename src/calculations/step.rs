use crate::point::CalendarPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest unit a pointer gesture snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Granularity {
    #[default]
    Day,
    HalfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("granularity must be 1 or 0.5 days, got {0}")]
pub struct InvalidGranularity(pub f64);

impl Granularity {
    pub fn as_days(self) -> f64 {
        match self {
            Granularity::Day => 1.0,
            Granularity::HalfDay => 0.5,
        }
    }
}

impl TryFrom<f64> for Granularity {
    type Error = InvalidGranularity;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Granularity::Day)
        } else if value == 0.5 {
            Ok(Granularity::HalfDay)
        } else {
            Err(InvalidGranularity(value))
        }
    }
}

impl From<Granularity> for f64 {
    fn from(value: Granularity) -> Self {
        value.as_days()
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_days())
    }
}

/// Offset `point` by `delta_days`, snapped to `granularity`.
///
/// Workday rules are ignored. At day granularity the delta is rounded to
/// whole days and the timing is kept; at half-day granularity it is rounded
/// to half days and the point walks AM -> PM -> next AM (and back).
pub fn step(point: CalendarPoint, delta_days: f64, granularity: Granularity) -> CalendarPoint {
    if !delta_days.is_finite() {
        return point;
    }
    let halves = match granularity {
        Granularity::Day => (delta_days.round() as i64).saturating_mul(2),
        Granularity::HalfDay => (delta_days / 0.5).round() as i64,
    };
    step_halves(point, halves)
}

/// Offset `point` by a whole number of half days.
pub fn step_halves(point: CalendarPoint, halves: i64) -> CalendarPoint {
    if halves == 0 {
        return point;
    }
    point.offset_halves(halves)
}

/// Signed number of half days from `from` to `to`.
pub fn halves_between(from: CalendarPoint, to: CalendarPoint) -> i64 {
    to.half_ordinal() - from.half_ordinal()
}
