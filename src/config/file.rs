use super::{ConfigError, ConfigResult, EngineConfig};
use crate::calendar::CustomDates;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> ConfigResult<EngineConfig> {
    let file = File::open(path)?;
    let config: EngineConfig = serde_json::from_reader(file)?;
    config.validate()?;
    Ok(config)
}

pub fn save_config_to_json<P: AsRef<Path>>(config: &EngineConfig, path: P) -> ConfigResult<()> {
    config.validate()?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CustomDateRecord {
    date: String,
    #[serde(default)]
    kind: String,
}

/// Read `date,kind` rows where kind is `holiday` (the default) or `event`.
///
/// A date listed twice keeps the kind of its last row.
pub fn load_custom_dates_from_csv<P: AsRef<Path>>(path: P) -> ConfigResult<CustomDates> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut dates = CustomDates::new();

    for (idx, row) in reader.deserialize::<CustomDateRecord>().enumerate() {
        let record = row?;
        let date = parse_date(&record.date).ok_or_else(|| {
            ConfigError::InvalidData(format!("row {}: invalid date '{}'", idx + 1, record.date))
        })?;
        match record.kind.to_ascii_lowercase().as_str() {
            "" | "holiday" => dates.add_holiday(date),
            "event" => dates.add_event(date),
            other => {
                return Err(ConfigError::InvalidData(format!(
                    "row {}: unknown custom date kind '{}'",
                    idx + 1,
                    other
                )));
            }
        }
    }
    Ok(dates)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .ok()
}
