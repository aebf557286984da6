use crate::calculations::Granularity;
use crate::calendar::{CustomDates, WorkCalendar, WorkdayConfig};
use crate::drag::{DEFAULT_DRAG_THRESHOLD_PX, DragController};
use crate::holiday::{DEFAULT_TABLE_CAPACITY, HolidayTable};
use serde::{Deserialize, Serialize};
use std::io;

pub mod file;

pub use file::{load_config_from_json, load_custom_dates_from_csv, save_config_to_json};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Host-supplied settings for the calendar and the drag controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub workdays: WorkdayConfig,
    pub custom_dates: CustomDates,
    /// Snap unit for gestures, `1` or `0.5` days.
    pub granularity: Granularity,
    pub drag_threshold_px: f64,
    /// Years the holiday table keeps memoized.
    pub holiday_cache_years: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workdays: WorkdayConfig::default(),
            custom_dates: CustomDates::default(),
            granularity: Granularity::Day,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            holiday_cache_years: DEFAULT_TABLE_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ConfigError::InvalidData(format!(
                "drag_threshold_px must be a non-negative number (got {})",
                self.drag_threshold_px
            )));
        }
        if self.holiday_cache_years == 0 {
            return Err(ConfigError::InvalidData(
                "holiday_cache_years must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn calendar(&self) -> WorkCalendar {
        WorkCalendar::new(self.workdays.clone(), self.custom_dates.clone())
            .with_holiday_table(HolidayTable::with_capacity(self.holiday_cache_years))
    }

    pub fn drag_controller(&self) -> DragController {
        DragController::new(self.drag_threshold_px)
    }
}
