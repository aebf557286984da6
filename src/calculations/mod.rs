//! Date arithmetic over [`CalendarPoint`](crate::point::CalendarPoint)s.
//!
//! `span` and `projection` honor the working calendar and are inverses of
//! each other; `step` is purely mechanical and ignores it.

pub mod projection;
pub mod span;
pub mod step;

pub use projection::project_end;
pub use span::workday_span;
pub use step::{Granularity, InvalidGranularity, halves_between, step, step_halves};
