use crate::calculations::{projection, span};
use crate::holiday::{HolidayKind, HolidayTable, YearHolidays};
use crate::point::CalendarPoint;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

/// Upper bound on how far `next_workday`/`prev_workday` search.
const WORKDAY_SEARCH_LIMIT_DAYS: i64 = 3660;

/// Which days count as working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayConfig {
    /// Indexed from Monday (`Weekday::num_days_from_monday`).
    pub weekdays: [bool; 7],
    /// National holidays count as working days.
    pub work_on_holidays: bool,
    /// Custom holidays count as working days.
    pub work_on_custom_holidays: bool,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            weekdays: [true, true, true, true, true, false, false],
            work_on_holidays: false,
            work_on_custom_holidays: false,
        }
    }
}

impl WorkdayConfig {
    pub const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Working days given as a list; holidays of both kinds are off.
    pub fn with_working_days<I>(working_days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut weekdays = [false; 7];
        for day in working_days {
            weekdays[day.num_days_from_monday() as usize] = true;
        }
        Self {
            weekdays,
            ..Self::default()
        }
    }

    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }

    pub fn set_working_weekday(&mut self, weekday: Weekday, working: bool) {
        self.weekdays[weekday.num_days_from_monday() as usize] = working;
    }

    pub fn working_days(&self) -> Vec<Weekday> {
        Self::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| self.is_working_weekday(*day))
            .collect()
    }
}

/// User-marked dates: custom holidays and display-only events.
///
/// A date belongs to at most one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CustomDatesRecord")]
pub struct CustomDates {
    holidays: BTreeSet<NaiveDate>,
    events: BTreeSet<NaiveDate>,
}

/// Wire form of [`CustomDates`]. The sets may overlap here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CustomDatesRecord {
    holidays: Vec<NaiveDate>,
    events: Vec<NaiveDate>,
}

/// A date listed as both a holiday and an event stays a holiday.
impl From<CustomDatesRecord> for CustomDates {
    fn from(record: CustomDatesRecord) -> Self {
        let mut dates = CustomDates::new();
        for date in record.events {
            dates.add_event(date);
        }
        for date in record.holidays {
            if dates.is_event(date) {
                warn!(%date, "custom date listed as holiday and event, keeping holiday");
            }
            dates.add_holiday(date);
        }
        dates
    }
}

impl CustomDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.events.remove(&date);
        self.holidays.insert(date);
    }

    pub fn add_holidays(&mut self, dates: &[NaiveDate]) {
        for date in dates {
            self.add_holiday(*date);
        }
    }

    pub fn add_event(&mut self, date: NaiveDate) {
        self.holidays.remove(&date);
        self.events.insert(date);
    }

    /// Unmark a date from whichever set holds it.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date) | self.events.remove(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_event(&self, date: NaiveDate) -> bool {
        self.events.contains(&date)
    }

    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    pub fn events(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.events.iter().copied()
    }
}

/// Working calendar: weekday flags, national holidays and custom dates.
#[derive(Debug, Clone, Default)]
pub struct WorkCalendar {
    config: WorkdayConfig,
    custom: CustomDates,
    holidays: HolidayTable,
}

impl WorkCalendar {
    pub fn new(config: WorkdayConfig, custom: CustomDates) -> Self {
        Self {
            config,
            custom,
            holidays: HolidayTable::default(),
        }
    }

    pub fn with_holiday_table(mut self, holidays: HolidayTable) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn config(&self) -> &WorkdayConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WorkdayConfig {
        &mut self.config
    }

    pub fn custom_dates(&self) -> &CustomDates {
        &self.custom
    }

    pub fn custom_dates_mut(&mut self) -> &mut CustomDates {
        &mut self.custom
    }

    pub fn holidays_for_year(&self, year: i32) -> Arc<YearHolidays> {
        self.holidays.year(year)
    }

    pub fn holiday_kind(&self, date: NaiveDate) -> Option<HolidayKind> {
        self.holidays.kind(date)
    }

    /// Whether `date` counts toward an item's working-day span.
    ///
    /// Custom holidays are checked first, then national holidays, then the
    /// weekday flag. Custom events never matter.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        if self.custom.is_holiday(date) {
            return self.config.work_on_custom_holidays;
        }
        if self.holidays.contains(date) {
            return self.config.work_on_holidays;
        }
        self.config.is_working_weekday(date.weekday())
    }

    pub fn workday_span(&self, start: CalendarPoint, end: CalendarPoint) -> f64 {
        span::workday_span(self, start, end)
    }

    pub fn project_end(&self, start: CalendarPoint, span: f64) -> CalendarPoint {
        projection::project_end(self, start, span)
    }

    /// Find the next working day after a given date
    pub fn next_workday(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut current = from;
        for _ in 0..WORKDAY_SEARCH_LIMIT_DAYS {
            current = current.succ_opt()?;
            if self.is_workday(current) {
                return Some(current);
            }
        }
        None
    }

    /// Find the previous working day before a given date
    pub fn prev_workday(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut current = from;
        for _ in 0..WORKDAY_SEARCH_LIMIT_DAYS {
            current = current.pred_opt()?;
            if self.is_workday(current) {
                return Some(current);
            }
        }
        None
    }

    /// Get all working days in a date range (inclusive)
    pub fn workdays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = start;

        while current <= end {
            if self.is_workday(current) {
                days.push(current);
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        days
    }

    /// Count working days in a date range (inclusive)
    pub fn count_workdays(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut current = start;

        while current <= end {
            if self.is_workday(current) {
                count += 1;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        count
    }
}
