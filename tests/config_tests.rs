use chrono::{NaiveDate, Weekday};
use std::io::Write;
use tempfile::NamedTempFile;
use workday_timeline::calculations::Granularity;
use workday_timeline::calendar::CustomDates;
use workday_timeline::config::{
    ConfigError, EngineConfig, load_config_from_json, load_custom_dates_from_csv,
    save_config_to_json,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn temp_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn partial_json_config_fills_defaults() {
    let file = temp_with(
        r#"{
            "granularity": 0.5,
            "workdays": {"weekdays": [true, true, true, true, true, true, false]},
            "custom_dates": {"holidays": ["2024-06-04"], "events": ["2024-06-05"]}
        }"#,
    );
    let config = load_config_from_json(file.path()).unwrap();
    assert_eq!(config.granularity, Granularity::HalfDay);
    assert!(config.workdays.is_working_weekday(Weekday::Sat));
    assert!(!config.workdays.work_on_holidays);
    assert_eq!(config.drag_threshold_px, 3.0);
    assert_eq!(config.holiday_cache_years, 64);

    let cal = config.calendar();
    assert!(cal.is_workday(d(2024, 6, 8)));
    assert!(!cal.is_workday(d(2024, 6, 4)));
    assert!(cal.is_workday(d(2024, 6, 5)));
}

#[test]
fn invalid_granularity_is_rejected() {
    let file = temp_with(r#"{"granularity": 0.25}"#);
    let err = load_config_from_json(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Serialization(_)));
}

#[test]
fn negative_threshold_is_rejected() {
    let file = temp_with(r#"{"drag_threshold_px": -1.0}"#);
    let err = load_config_from_json(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

#[test]
fn missing_file_reports_io_error() {
    let err = load_config_from_json("/nonexistent/workday-timeline.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn config_round_trips_through_json() {
    let mut config = EngineConfig::default();
    config.granularity = Granularity::HalfDay;
    config.drag_threshold_px = 5.0;
    config.workdays.work_on_custom_holidays = true;
    config.custom_dates.add_holiday(d(2024, 12, 30));

    let file = NamedTempFile::new().unwrap();
    save_config_to_json(&config, file.path()).unwrap();
    let loaded = load_config_from_json(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.drag_controller().threshold_px(), 5.0);
}

#[test]
fn custom_dates_load_from_csv() {
    let file = temp_with("date,kind\n2024-06-04,holiday\n2024-06-05, event\n2024/06/06,\n");
    let dates = load_custom_dates_from_csv(file.path()).unwrap();
    assert!(dates.is_holiday(d(2024, 6, 4)));
    assert!(dates.is_event(d(2024, 6, 5)));
    assert!(dates.is_holiday(d(2024, 6, 6)));
}

#[test]
fn custom_dates_csv_rejects_unknown_kind_and_bad_dates() {
    let file = temp_with("date,kind\n2024-06-04,vacation\n");
    let err = load_custom_dates_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidData(_)));

    let file = temp_with("date,kind\nnot-a-date,holiday\n");
    let err = load_custom_dates_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidData(_)));
}

#[test]
fn overlapping_custom_dates_in_json_keep_holiday() {
    let dates: CustomDates =
        serde_json::from_str(r#"{"holidays":["2024-06-03"],"events":["2024-06-03","2024-06-05"]}"#)
            .unwrap();
    assert!(dates.is_holiday(d(2024, 6, 3)));
    assert!(!dates.is_event(d(2024, 6, 3)));
    assert!(dates.is_event(d(2024, 6, 5)));

    let file = temp_with(
        r#"{"custom_dates": {"holidays": ["2024-06-04"], "events": ["2024-06-04"]}}"#,
    );
    let config = load_config_from_json(file.path()).unwrap();
    assert!(config.custom_dates.is_holiday(d(2024, 6, 4)));
    assert!(!config.custom_dates.is_event(d(2024, 6, 4)));
    assert_eq!(config.custom_dates.events().count(), 0);
}
