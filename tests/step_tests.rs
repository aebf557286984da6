use chrono::NaiveDate;
use workday_timeline::calculations::{Granularity, halves_between, step, step_halves};
use workday_timeline::point::CalendarPoint;

fn am(y: i32, m: u32, day: u32) -> CalendarPoint {
    CalendarPoint::am(NaiveDate::from_ymd_opt(y, m, day).unwrap())
}

fn pm(y: i32, m: u32, day: u32) -> CalendarPoint {
    CalendarPoint::pm(NaiveDate::from_ymd_opt(y, m, day).unwrap())
}

#[test]
fn whole_day_steps_round_and_keep_timing() {
    assert_eq!(step(am(2024, 6, 3), 2.4, Granularity::Day), am(2024, 6, 5));
    assert_eq!(step(pm(2024, 6, 3), 2.5, Granularity::Day), pm(2024, 6, 6));
    assert_eq!(step(am(2024, 6, 3), -1.6, Granularity::Day), am(2024, 6, 1));
    assert_eq!(step(pm(2024, 6, 3), 0.4, Granularity::Day), pm(2024, 6, 3));
}

#[test]
fn half_day_steps_walk_through_timings() {
    assert_eq!(step(am(2024, 6, 3), 0.5, Granularity::HalfDay), pm(2024, 6, 3));
    assert_eq!(step(pm(2024, 6, 3), 0.5, Granularity::HalfDay), am(2024, 6, 4));
    assert_eq!(step(am(2024, 6, 3), -0.5, Granularity::HalfDay), pm(2024, 6, 2));
    assert_eq!(step(pm(2024, 6, 3), -1.0, Granularity::HalfDay), pm(2024, 6, 2));
    assert_eq!(step(am(2024, 6, 3), 0.74, Granularity::HalfDay), pm(2024, 6, 3));
    assert_eq!(step(am(2024, 6, 3), 2.5, Granularity::HalfDay), pm(2024, 6, 5));
}

#[test]
fn steps_ignore_workday_rules() {
    // Friday + 1 lands on Saturday.
    assert_eq!(step(am(2024, 6, 7), 1.0, Granularity::Day), am(2024, 6, 8));
}

#[test]
fn step_is_self_inverse() {
    let deltas = [-3.7, -1.25, -0.5, 0.0, 0.3, 0.75, 2.5, 10.2, 400.0];
    let points = [am(2024, 2, 28), pm(2024, 2, 28), am(2024, 12, 31), pm(2025, 1, 1)];
    for granularity in [Granularity::Day, Granularity::HalfDay] {
        for point in points {
            for delta in deltas {
                let there = step(point, delta, granularity);
                assert_eq!(
                    step(there, -delta, granularity),
                    point,
                    "{point} by {delta} at {granularity}"
                );
            }
        }
    }
}

#[test]
fn non_finite_delta_leaves_point_alone() {
    assert_eq!(step(am(2024, 6, 3), f64::NAN, Granularity::Day), am(2024, 6, 3));
    assert_eq!(
        step(am(2024, 6, 3), f64::INFINITY, Granularity::HalfDay),
        am(2024, 6, 3)
    );
}

#[test]
fn halves_between_measures_signed_half_days() {
    assert_eq!(halves_between(am(2024, 6, 3), pm(2024, 6, 5)), 5);
    assert_eq!(halves_between(pm(2024, 6, 5), am(2024, 6, 3)), -5);
    let from = pm(2024, 2, 27);
    assert_eq!(step_halves(from, halves_between(from, am(2024, 3, 2))), am(2024, 3, 2));
}

#[test]
fn granularity_converts_from_days() {
    assert_eq!(Granularity::try_from(1.0), Ok(Granularity::Day));
    assert_eq!(Granularity::try_from(0.5), Ok(Granularity::HalfDay));
    assert!(Granularity::try_from(0.25).is_err());
    assert_eq!(f64::from(Granularity::HalfDay), 0.5);
}
