//! Pointer-driven editing of timeline items.
//!
//! A [`DragController`] owns at most one [`DragSession`]. The host feeds it
//! pointer-down, pointer-move and pointer-up notifications; the controller
//! derives previews from immutable snapshots and hands the final edit to a
//! [`DragSink`] on pointer-up. Nothing is written back to the caller's items
//! before that.

mod controller;
mod session;

pub use controller::{DEFAULT_DRAG_THRESHOLD_PX, DragController, DragState};
pub use session::{DragSession, ItemSnapshot};

use crate::calculations::Granularity;
use crate::calendar::WorkCalendar;
use crate::item::{Item, ItemId};
use crate::point::CalendarPoint;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Handle {
    Body,
    LeftEdge,
    RightEdge,
    Progress(BarGeometry),
}

/// Horizontal extent of a rendered bar, in the same pixel space as pointer X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Completion percentage for a pointer at `x`, clamped to 0..=100.
    pub fn progress_at(&self, x: f64) -> u8 {
        if self.width.is_nan() || self.width <= 0.0 || !x.is_finite() {
            return 0;
        }
        let pct = ((x - self.left) / self.width * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragMode {
    Move,
    ResizeLeft,
    ResizeRight,
    ChangeProgress,
}

impl DragMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragMode::Move => "move",
            DragMode::ResizeLeft => "resize-left",
            DragMode::ResizeRight => "resize-right",
            DragMode::ChangeProgress => "change-progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub item_id: ItemId,
    pub handle: Handle,
}

impl Grab {
    pub fn new(item_id: ItemId, handle: Handle) -> Self {
        Self { item_id, handle }
    }
}

/// Selection modifiers held during a pointer-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Toggle the grabbed item in the selection (ctrl/cmd-click).
    pub multi: bool,
    /// Extend the selection from its anchor (shift-click).
    pub range: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDown {
    pub x: f64,
    pub modifiers: Modifiers,
}

impl PointerDown {
    pub fn at(x: f64) -> Self {
        Self {
            x,
            modifiers: Modifiers::default(),
        }
    }
}

/// View state a gesture is interpreted against.
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    pub calendar: &'a WorkCalendar,
    pub pixels_per_day: f64,
    pub granularity: Granularity,
    /// Item ids in the order rows are displayed.
    pub display_order: &'a [ItemId],
}

impl<'a> DragContext<'a> {
    pub fn new(calendar: &'a WorkCalendar, pixels_per_day: f64, granularity: Granularity) -> Self {
        Self {
            calendar,
            pixels_per_day,
            granularity,
            display_order: &[],
        }
    }

    pub fn with_display_order(mut self, display_order: &'a [ItemId]) -> Self {
        self.display_order = display_order;
        self
    }

    /// Continuous day offset for a pointer travel of `dx` pixels.
    pub fn delta_days(&self, dx: f64) -> f64 {
        if self.pixels_per_day.is_nan() || self.pixels_per_day <= 0.0 || !dx.is_finite() {
            return 0.0;
        }
        dx / self.pixels_per_day
    }
}

/// Live values of the grabbed item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub item_id: ItemId,
    pub start: CalendarPoint,
    pub end: CalendarPoint,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownOutcome {
    /// A modifier was held; the selection changed and no drag began.
    SelectionChanged,
    /// A session was created and waits for the movement threshold.
    Armed,
    /// Unknown item, or a session is already active.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Idle,
    /// Still inside the movement threshold.
    Armed,
    /// Same preview as the last one reported.
    Unchanged,
    Preview(Preview),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Single(Item),
    Batch(Vec<Item>),
}

impl ItemUpdate {
    pub fn items(&self) -> &[Item] {
        match self {
            ItemUpdate::Single(item) => std::slice::from_ref(item),
            ItemUpdate::Batch(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Committed(ItemUpdate),
    /// The gesture was a click on an item body.
    Select(ItemId),
    /// The gesture ended without changing anything.
    NoOp,
    /// No session was active.
    Idle,
}

/// Receives the result of a finished gesture.
pub trait DragSink {
    fn commit(&mut self, update: &ItemUpdate);
    fn select(&mut self, id: ItemId);
}
