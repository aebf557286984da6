use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of a day a point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timing {
    Am,
    Pm,
}

impl Timing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Am => "AM",
            Timing::Pm => "PM",
        }
    }

    fn half_index(self) -> i64 {
        match self {
            Timing::Am => 0,
            Timing::Pm => 1,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-day resolution instant. Ordering is by date, then AM before PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarPoint {
    pub date: NaiveDate,
    pub timing: Timing,
}

impl CalendarPoint {
    pub fn new(date: NaiveDate, timing: Timing) -> Self {
        Self { date, timing }
    }

    pub fn am(date: NaiveDate) -> Self {
        Self::new(date, Timing::Am)
    }

    pub fn pm(date: NaiveDate) -> Self {
        Self::new(date, Timing::Pm)
    }

    /// Number of half days since 0001-01-01 AM.
    pub(crate) fn half_ordinal(&self) -> i64 {
        i64::from(self.date.num_days_from_ce()) * 2 + self.timing.half_index()
    }

    /// Shift by whole half days. Saturates at chrono's representable range.
    pub(crate) fn offset_halves(&self, halves: i64) -> Self {
        let target = self.half_ordinal().saturating_add(halves);
        let days = target.div_euclid(2);
        let timing = if target.rem_euclid(2) == 0 {
            Timing::Am
        } else {
            Timing::Pm
        };
        let delta = days - i64::from(self.date.num_days_from_ce());
        let date = Duration::try_days(delta)
            .and_then(|d| self.date.checked_add_signed(d))
            .unwrap_or(if delta < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });
        Self { date, timing }
    }
}

impl fmt::Display for CalendarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.timing)
    }
}
