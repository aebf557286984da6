use crate::calendar::WorkCalendar;
use crate::point::{CalendarPoint, Timing};

/// Working days between two points, inclusive, at half-day resolution.
///
/// Whole working days from `start.date` to `end.date` are counted first.
/// A PM start gives back half of the start day and an AM end half of the end
/// day, but only when that day was counted in the first place. Inverted
/// ranges yield 0.
pub fn workday_span(calendar: &WorkCalendar, start: CalendarPoint, end: CalendarPoint) -> f64 {
    if start.date > end.date {
        return 0.0;
    }

    let mut span = calendar.count_workdays(start.date, end.date) as f64;
    if start.timing == Timing::Pm && calendar.is_workday(start.date) {
        span -= 0.5;
    }
    if end.timing == Timing::Am && calendar.is_workday(end.date) {
        span -= 0.5;
    }
    span.max(0.0)
}
