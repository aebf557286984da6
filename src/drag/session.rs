use super::{BarGeometry, DragContext, DragMode, ItemUpdate, Preview};
use crate::calculations::{halves_between, step, step_halves};
use crate::calendar::WorkCalendar;
use crate::item::{Item, ItemId};
use crate::point::CalendarPoint;

/// Original state of one item taking part in a gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSnapshot {
    pub item: Item,
    /// Working-day span the item keeps while moved.
    pub span: f64,
}

impl ItemSnapshot {
    pub fn capture(item: &Item, calendar: &WorkCalendar) -> Self {
        Self {
            span: item.span(calendar),
            item: item.clone(),
        }
    }

    /// Where this item lands when its start moves to `start`.
    fn placed_at(
        &self,
        start: CalendarPoint,
        calendar: &WorkCalendar,
    ) -> (CalendarPoint, CalendarPoint) {
        if self.item.is_milestone() {
            let point = CalendarPoint::am(start.date);
            return (point, point);
        }
        (start, calendar.project_end(start, self.span))
    }

    fn preview(&self, start: CalendarPoint, end: CalendarPoint, progress: u8) -> Preview {
        Preview {
            item_id: self.item.id,
            start,
            end,
            progress,
        }
    }
}

/// Finished gesture, before it is handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolution {
    Update(ItemUpdate),
    Click(ItemId),
    NoOp,
}

/// Transient state of one gesture.
///
/// Previews and the committed edit are pure functions of the snapshots and
/// a pointer X, so dropped or coalesced move events do not change the result.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    mode: DragMode,
    origin_x: f64,
    last_x: f64,
    grabbed: usize,
    snapshots: Vec<ItemSnapshot>,
    bar: Option<BarGeometry>,
    preview: Preview,
}

impl DragSession {
    /// `snapshots` must contain the grabbed item at index `grabbed`.
    pub(crate) fn new(
        mode: DragMode,
        origin_x: f64,
        grabbed: usize,
        snapshots: Vec<ItemSnapshot>,
        bar: Option<BarGeometry>,
    ) -> Self {
        let item = &snapshots[grabbed].item;
        let preview = snapshots[grabbed].preview(item.start, item.end, item.progress);
        Self {
            mode,
            origin_x,
            last_x: origin_x,
            grabbed,
            snapshots,
            bar,
            preview,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn grabbed_id(&self) -> ItemId {
        self.grabbed_snapshot().item.id
    }

    pub fn snapshots(&self) -> &[ItemSnapshot] {
        &self.snapshots
    }

    pub fn is_bulk(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Last preview reported to the host.
    pub fn preview(&self) -> Preview {
        self.preview
    }

    pub(crate) fn last_x(&self) -> f64 {
        self.last_x
    }

    fn grabbed_snapshot(&self) -> &ItemSnapshot {
        &self.snapshots[self.grabbed]
    }

    pub(crate) fn travel(&self, x: f64) -> f64 {
        (x - self.origin_x).abs()
    }

    /// Record `preview` for pointer `x`. Returns false when it equals the
    /// previous one.
    pub(crate) fn record(&mut self, x: f64, preview: Preview) -> bool {
        self.last_x = x;
        if preview == self.preview {
            return false;
        }
        self.preview = preview;
        true
    }

    /// Grabbed item's values with the pointer at `x`.
    pub fn preview_at(&self, x: f64, ctx: &DragContext<'_>) -> Preview {
        let snapshot = self.grabbed_snapshot();
        let original = &snapshot.item;
        let delta = ctx.delta_days(x - self.origin_x);

        match self.mode {
            DragMode::Move => {
                let start = step(original.start, delta, ctx.granularity);
                let (start, end) = snapshot.placed_at(start, ctx.calendar);
                snapshot.preview(start, end, original.progress)
            }
            DragMode::ResizeLeft => {
                let start = step(original.start, delta, ctx.granularity).min(original.end);
                snapshot.preview(start, original.end, original.progress)
            }
            DragMode::ResizeRight => {
                let end = step(original.end, delta, ctx.granularity).max(original.start);
                snapshot.preview(original.start, end, original.progress)
            }
            DragMode::ChangeProgress => {
                let progress = self
                    .bar
                    .map(|bar| bar.progress_at(x))
                    .unwrap_or(original.progress);
                snapshot.preview(original.start, original.end, progress)
            }
        }
    }

    /// Previews of every item in the session with the pointer at `x`.
    ///
    /// All items move by the grabbed item's half-day offset and keep their
    /// own span. Outside move mode only the grabbed item is returned.
    pub fn batch_preview_at(&self, x: f64, ctx: &DragContext<'_>) -> Vec<Preview> {
        let grabbed = self.preview_at(x, ctx);
        if self.mode != DragMode::Move {
            return vec![grabbed];
        }
        let halves = halves_between(self.grabbed_snapshot().item.start, grabbed.start);
        self.snapshots
            .iter()
            .map(|snapshot| {
                let start = step_halves(snapshot.item.start, halves);
                let (start, end) = snapshot.placed_at(start, ctx.calendar);
                snapshot.preview(start, end, snapshot.item.progress)
            })
            .collect()
    }

    /// Turn the final pointer position into an edit, a click or nothing.
    ///
    /// `below_threshold` marks a press that never became a drag; once a
    /// preview has been shown only the edited values decide.
    pub(crate) fn resolve(
        &self,
        x: f64,
        ctx: &DragContext<'_>,
        below_threshold: bool,
    ) -> Resolution {
        let original = &self.grabbed_snapshot().item;
        let click = match self.mode {
            DragMode::Move => Resolution::Click(original.id),
            _ => Resolution::NoOp,
        };
        if below_threshold {
            return click;
        }

        let preview = self.preview_at(x, ctx);
        let unchanged = match self.mode {
            DragMode::ChangeProgress => preview.progress == original.progress,
            _ => preview.start == original.start && preview.end == original.end,
        };
        if unchanged {
            return click;
        }

        let update = match self.mode {
            DragMode::Move if self.is_bulk() => {
                let items = self
                    .batch_preview_at(x, ctx)
                    .into_iter()
                    .zip(&self.snapshots)
                    .map(|(moved, snapshot)| Item {
                        start: moved.start,
                        end: moved.end,
                        ..snapshot.item.clone()
                    })
                    .collect();
                ItemUpdate::Batch(items)
            }
            DragMode::Move => ItemUpdate::Single(Item {
                start: preview.start,
                end: preview.end,
                ..original.clone()
            }),
            DragMode::ResizeLeft | DragMode::ResizeRight => ItemUpdate::Single(
                Item {
                    start: preview.start,
                    end: preview.end,
                    ..original.clone()
                }
                .with_measured_span(ctx.calendar),
            ),
            DragMode::ChangeProgress => ItemUpdate::Single(Item {
                progress: preview.progress,
                ..original.clone()
            }),
        };
        Resolution::Update(update)
    }
}
