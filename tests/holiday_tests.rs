use chrono::{Datelike, NaiveDate, Weekday};
use workday_timeline::holiday::{HolidayKind, HolidayTable, holidays_for_year};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn holidays_2024_match_published_calendar() {
    let holidays = holidays_for_year(2024);
    let expected = vec![
        d(2024, 1, 1),
        d(2024, 1, 8),
        d(2024, 2, 11),
        d(2024, 2, 12),
        d(2024, 2, 23),
        d(2024, 3, 20),
        d(2024, 4, 29),
        d(2024, 5, 3),
        d(2024, 5, 4),
        d(2024, 5, 5),
        d(2024, 5, 6),
        d(2024, 7, 15),
        d(2024, 8, 11),
        d(2024, 8, 12),
        d(2024, 9, 16),
        d(2024, 9, 22),
        d(2024, 9, 23),
        d(2024, 10, 14),
        d(2024, 11, 3),
        d(2024, 11, 4),
        d(2024, 11, 23),
    ];
    assert_eq!(holidays.dates().collect::<Vec<_>>(), expected);
    assert_eq!(holidays.year(), 2024);
}

#[test]
fn equinoxes_follow_the_approximation_formula() {
    let y2024 = holidays_for_year(2024);
    assert_eq!(y2024.kind(d(2024, 3, 20)), Some(HolidayKind::Equinox));
    assert_eq!(y2024.kind(d(2024, 9, 22)), Some(HolidayKind::Equinox));

    let y2025 = holidays_for_year(2025);
    assert_eq!(y2025.kind(d(2025, 3, 20)), Some(HolidayKind::Equinox));
    assert_eq!(y2025.kind(d(2025, 9, 23)), Some(HolidayKind::Equinox));
}

#[test]
fn nth_monday_holidays_land_on_mondays() {
    for year in 2000..=2040 {
        let holidays = holidays_for_year(year);
        let mondays: Vec<NaiveDate> = holidays
            .iter()
            .filter(|(_, kind)| *kind == HolidayKind::HappyMonday)
            .map(|(date, _)| date)
            .collect();
        assert_eq!(mondays.len(), 4, "year {year}");
        assert!(mondays.iter().all(|date| date.weekday() == Weekday::Mon));
        let months: Vec<u32> = mondays.iter().map(|date| date.month()).collect();
        assert_eq!(months, vec![1, 7, 9, 10]);
    }
}

#[test]
fn sunday_holiday_moves_to_first_free_day() {
    // 2025-05-04 is a Sunday followed by the 5th (a holiday) so the 6th is taken.
    let holidays = holidays_for_year(2025);
    assert_eq!(holidays.kind(d(2025, 5, 4)), Some(HolidayKind::Fixed));
    assert_eq!(holidays.kind(d(2025, 5, 5)), Some(HolidayKind::Fixed));
    assert_eq!(holidays.kind(d(2025, 5, 6)), Some(HolidayKind::Substitute));

    let y2024 = holidays_for_year(2024);
    assert_eq!(y2024.kind(d(2024, 2, 12)), Some(HolidayKind::Substitute));
}

#[test]
fn every_sunday_holiday_has_a_substitute() {
    for year in 1990..=2050 {
        let holidays = holidays_for_year(year);
        let sundays = holidays
            .dates()
            .filter(|date| date.weekday() == Weekday::Sun)
            .count();
        let substitutes = holidays
            .iter()
            .filter(|(_, kind)| *kind == HolidayKind::Substitute)
            .count();
        assert_eq!(sundays, substitutes, "year {year}");
    }
}

#[test]
fn day_between_respect_for_aged_and_equinox_becomes_holiday() {
    // 2026: Mon 21st, Wed 23rd equinox.
    let y2026 = holidays_for_year(2026);
    assert_eq!(y2026.kind(d(2026, 9, 21)), Some(HolidayKind::HappyMonday));
    assert_eq!(y2026.kind(d(2026, 9, 22)), Some(HolidayKind::Sandwich));
    assert_eq!(y2026.kind(d(2026, 9, 23)), Some(HolidayKind::Equinox));

    let y2015 = holidays_for_year(2015);
    assert_eq!(y2015.kind(d(2015, 9, 22)), Some(HolidayKind::Sandwich));

    let y2024 = holidays_for_year(2024);
    assert!(
        y2024
            .iter()
            .all(|(_, kind)| kind != HolidayKind::Sandwich)
    );
}

#[test]
fn table_returns_stable_results_across_calls_and_evictions() {
    let table = HolidayTable::with_capacity(2);
    let first = table.year(2024);
    let again = table.year(2024);
    assert_eq!(*first, *again);

    table.year(2025);
    table.year(2026);
    assert_eq!(table.len(), 2);

    // 2024 was evicted; recomputing must give the same set.
    let recomputed = table.year(2024);
    assert_eq!(*recomputed, *first);
    assert_eq!(*recomputed, holidays_for_year(2024));
}

#[test]
fn table_lookups_by_date() {
    let table = HolidayTable::default();
    assert!(table.contains(d(2024, 7, 15)));
    assert!(!table.contains(d(2024, 7, 16)));
    assert_eq!(table.kind(d(2024, 11, 4)), Some(HolidayKind::Substitute));
    assert_eq!(table.len(), 1);
}
