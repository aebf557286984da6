//! National holiday ruleset.
//!
//! A year's holidays are derived from four rule families (fixed dates, the
//! two equinoxes, "Nth Monday" holidays and the sandwich rule) followed by
//! substitute days for holidays that land on a Sunday. The ruleset is fixed,
//! so a computed year never changes and can be memoized by [`HolidayTable`].

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

/// Default number of years a [`HolidayTable`] retains.
pub const DEFAULT_TABLE_CAPACITY: usize = 64;

const FIXED_HOLIDAYS: [(u32, u32); 10] = [
    (1, 1),
    (2, 11),
    (2, 23),
    (4, 29),
    (5, 3),
    (5, 4),
    (5, 5),
    (8, 11),
    (11, 3),
    (11, 23),
];

const NTH_MONDAY_HOLIDAYS: [(u32, u32); 4] = [(1, 2), (7, 3), (9, 3), (10, 2)];

const VERNAL_EQUINOX_BASE: f64 = 20.8431;
const AUTUMNAL_EQUINOX_BASE: f64 = 23.2488;

/// The rule that made a date a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    Fixed,
    Equinox,
    HappyMonday,
    Sandwich,
    Substitute,
}

/// Immutable holiday set for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHolidays {
    year: i32,
    days: BTreeMap<NaiveDate, HolidayKind>,
}

impl YearHolidays {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn kind(&self, date: NaiveDate) -> Option<HolidayKind> {
        self.days.get(&date).copied()
    }

    /// Holidays in ascending date order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, HolidayKind)> + '_ {
        self.days.iter().map(|(date, kind)| (*date, *kind))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Compute the holidays of `year` without caching.
pub fn holidays_for_year(year: i32) -> YearHolidays {
    let mut days = BTreeMap::new();

    for (month, day) in FIXED_HOLIDAYS {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            days.insert(date, HolidayKind::Fixed);
        }
    }

    for (month, base) in [(3, VERNAL_EQUINOX_BASE), (9, AUTUMNAL_EQUINOX_BASE)] {
        if let Some(date) = equinox_day(year, base)
            .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
        {
            days.insert(date, HolidayKind::Equinox);
        }
    }

    for (month, n) in NTH_MONDAY_HOLIDAYS {
        if let Some(date) = nth_weekday(year, month, Weekday::Mon, n) {
            days.insert(date, HolidayKind::HappyMonday);
        }
    }

    // A non-Sunday day squeezed between two holidays becomes one.
    let sandwiched: Vec<NaiveDate> = days
        .keys()
        .filter_map(|date| {
            let middle = date.succ_opt()?;
            let after = middle.succ_opt()?;
            let eligible = !days.contains_key(&middle)
                && days.contains_key(&after)
                && middle.weekday() != Weekday::Sun;
            eligible.then_some(middle)
        })
        .collect();
    for date in sandwiched {
        days.insert(date, HolidayKind::Sandwich);
    }

    let sundays: Vec<NaiveDate> = days
        .keys()
        .copied()
        .filter(|date| date.weekday() == Weekday::Sun)
        .collect();
    for sunday in sundays {
        let mut candidate = sunday + Duration::days(1);
        while days.contains_key(&candidate) {
            candidate = candidate + Duration::days(1);
        }
        days.insert(candidate, HolidayKind::Substitute);
    }

    YearHolidays { year, days }
}

fn equinox_day(year: i32, base: f64) -> Option<u32> {
    let offset = f64::from(year - 1980);
    let leap_correction = f64::from((year - 1980).div_euclid(4));
    let day = (base + 0.242194 * offset - leap_correction).floor();
    (1.0..=31.0).contains(&day).then_some(day as u32)
}

/// Find the nth occurrence of a weekday in a month.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut count = 0;

    while date.month() == month {
        if date.weekday() == weekday {
            count += 1;
            if count == n {
                return Some(date);
            }
        }
        date = date.succ_opt()?;
    }
    None
}

#[derive(Debug, Default)]
struct TableSlots {
    years: HashMap<i32, Arc<YearHolidays>>,
    insertion_order: VecDeque<i32>,
}

/// Bounded memoization of [`holidays_for_year`], keyed by year.
///
/// When full, the year inserted longest ago is evicted. Evicted years are
/// recomputed on demand and compare equal to what was evicted.
#[derive(Debug)]
pub struct HolidayTable {
    capacity: usize,
    slots: Mutex<TableSlots>,
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TABLE_CAPACITY)
    }
}

impl Clone for HolidayTable {
    fn clone(&self) -> Self {
        Self::with_capacity(self.capacity)
    }
}

impl HolidayTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            slots: Mutex::new(TableSlots::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of years currently memoized.
    pub fn len(&self) -> usize {
        self.slots.lock().years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn year(&self, year: i32) -> Arc<YearHolidays> {
        let mut slots = self.slots.lock();
        if let Some(found) = slots.years.get(&year) {
            return Arc::clone(found);
        }

        let computed = Arc::new(holidays_for_year(year));
        if slots.years.len() >= self.capacity {
            if let Some(evicted) = slots.insertion_order.pop_front() {
                slots.years.remove(&evicted);
                tracing::trace!(year = evicted, "evicted holiday year");
            }
        }
        slots.years.insert(year, Arc::clone(&computed));
        slots.insertion_order.push_back(year);
        tracing::debug!(year, holidays = computed.len(), "computed holiday year");
        computed
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year(date.year()).contains(date)
    }

    pub fn kind(&self, date: NaiveDate) -> Option<HolidayKind> {
        self.year(date.year()).kind(date)
    }
}
