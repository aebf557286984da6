pub mod calculations;
pub mod calendar;
pub mod config;
pub mod drag;
pub mod holiday;
pub mod item;
pub mod item_validation;
pub mod point;
pub mod selection;

pub use calculations::{Granularity, project_end, step, workday_span};
pub use calendar::{CustomDates, WorkCalendar, WorkdayConfig};
pub use config::{
    ConfigError, EngineConfig, load_config_from_json, load_custom_dates_from_csv,
    save_config_to_json,
};
pub use drag::{
    BarGeometry, DownOutcome, DragContext, DragController, DragMode, DragOutcome, DragSink,
    DragState, Grab, Handle, ItemUpdate, Modifiers, MoveOutcome, PointerDown, Preview,
};
pub use holiday::{HolidayKind, HolidayTable, YearHolidays, holidays_for_year};
pub use item::{Item, ItemId, ItemKind};
pub use item_validation::{ItemValidationError, normalize_item, validate_item, validate_items};
pub use point::{CalendarPoint, Timing};
pub use selection::Selection;
