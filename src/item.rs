use crate::calendar::WorkCalendar;
use crate::point::{CalendarPoint, Timing};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ItemId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Task,
    Milestone,
}

/// A scheduled bar on the timeline.
///
/// `cached_span` is advisory: it survives moves, but anything that moves one
/// endpoint on its own recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub start: CalendarPoint,
    pub end: CalendarPoint,
    pub cached_span: Option<f64>,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub kind: ItemKind,
}

impl Item {
    pub fn task(id: ItemId, start: CalendarPoint, end: CalendarPoint) -> Self {
        Self {
            id,
            name: String::new(),
            start,
            end,
            cached_span: None,
            progress: 0,
            kind: ItemKind::Task,
        }
    }

    pub fn milestone(id: ItemId, date: NaiveDate) -> Self {
        let point = CalendarPoint::am(date);
        Self {
            id,
            name: String::new(),
            start: point,
            end: point,
            cached_span: None,
            progress: 0,
            kind: ItemKind::Milestone,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_milestone(&self) -> bool {
        self.kind == ItemKind::Milestone
    }

    /// Cached span when present, otherwise measured on `calendar`.
    pub fn span(&self, calendar: &WorkCalendar) -> f64 {
        self.cached_span
            .unwrap_or_else(|| calendar.workday_span(self.start, self.end))
    }

    /// Replace the cached span with a fresh measurement.
    pub fn with_measured_span(mut self, calendar: &WorkCalendar) -> Self {
        self.cached_span = Some(calendar.workday_span(self.start, self.end));
        self
    }
}

/// Flat wire form. Older records may omit timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    id: ItemId,
    #[serde(default)]
    name: String,
    start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_timing: Option<Timing>,
    end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_timing: Option<Timing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cached_span: Option<f64>,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    kind: ItemKind,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            start: CalendarPoint::new(
                record.start_date,
                record.start_timing.unwrap_or(Timing::Am),
            ),
            end: CalendarPoint::new(record.end_date, record.end_timing.unwrap_or(Timing::Pm)),
            cached_span: record.cached_span,
            progress: record.progress,
            kind: record.kind,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            start_date: item.start.date,
            start_timing: Some(item.start.timing),
            end_date: item.end.date,
            end_timing: Some(item.end.timing),
            cached_span: item.cached_span,
            progress: item.progress,
            kind: item.kind,
        }
    }
}
