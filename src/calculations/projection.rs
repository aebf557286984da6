use crate::calendar::WorkCalendar;
use crate::point::{CalendarPoint, Timing};

/// Consecutive non-working days walked before giving up on a calendar that
/// has no working days at all.
const MAX_IDLE_DAYS: u32 = 3660;

/// Find the end point that gives `start` a span of `span` working days.
///
/// The span is consumed in half-day units: an AM start has two units on its
/// own day, a PM start one, a non-working start none, and every later
/// working day two. The day on which the budget runs out is the end date,
/// AM if one unit was used on it and PM if two. A span of 0 returns `start`.
pub fn project_end(calendar: &WorkCalendar, start: CalendarPoint, span: f64) -> CalendarPoint {
    let mut remaining = half_units(span);
    if remaining == 0 {
        return start;
    }

    if calendar.is_workday(start.date) {
        let capacity = match start.timing {
            Timing::Am => 2,
            Timing::Pm => 1,
        };
        if remaining <= capacity {
            let timing = if start.timing == Timing::Am && remaining == 1 {
                Timing::Am
            } else {
                Timing::Pm
            };
            return CalendarPoint::new(start.date, timing);
        }
        remaining -= capacity;
    }

    let mut date = start.date;
    let mut idle_days = 0;
    loop {
        date = match date.succ_opt() {
            Some(next) => next,
            None => return CalendarPoint::pm(date),
        };
        if calendar.is_workday(date) {
            idle_days = 0;
            if remaining <= 2 {
                let timing = if remaining == 1 { Timing::Am } else { Timing::Pm };
                return CalendarPoint::new(date, timing);
            }
            remaining -= 2;
        } else {
            idle_days += 1;
            if idle_days >= MAX_IDLE_DAYS {
                tracing::warn!(%start, span, "no working day found while projecting end");
                return CalendarPoint::pm(date);
            }
        }
    }
}

/// Span rounded to whole half days; negative and non-finite spans are 0.
fn half_units(span: f64) -> i64 {
    if !span.is_finite() || span <= 0.0 {
        return 0;
    }
    (span * 2.0).round() as i64
}
