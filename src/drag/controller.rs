use super::session::{DragSession, ItemSnapshot, Resolution};
use super::{
    DownOutcome, DragContext, DragMode, DragOutcome, DragSink, Grab, Handle, MoveOutcome,
    PointerDown, Preview,
};
use crate::item::Item;
use crate::selection::Selection;
use tracing::{debug, trace, warn};

/// Pointer travel, in pixels, that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 3.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down but has not travelled past the threshold.
    Armed(DragSession),
    Dragging(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Armed(session) | DragState::Dragging(session) => Some(session),
        }
    }
}

/// Gesture state machine: Idle -> Armed -> Dragging -> Idle.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    threshold_px: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl DragController {
    pub fn new(threshold_px: f64) -> Self {
        let threshold_px = if threshold_px.is_finite() {
            threshold_px.max(0.0)
        } else {
            DEFAULT_DRAG_THRESHOLD_PX
        };
        Self {
            state: DragState::Idle,
            threshold_px,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Whether the host should keep its global move/up listeners attached.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn pointer_down(
        &mut self,
        grab: Grab,
        pointer: PointerDown,
        items: &[Item],
        selection: &mut Selection,
        ctx: &DragContext<'_>,
    ) -> DownOutcome {
        if self.is_active() {
            warn!(item = grab.item_id, "pointer-down while a drag session is active");
            return DownOutcome::Ignored;
        }
        if pointer.modifiers.range {
            selection.select_range(grab.item_id, ctx.display_order);
            debug!(item = grab.item_id, "range selection");
            return DownOutcome::SelectionChanged;
        }
        if pointer.modifiers.multi {
            let selected = selection.toggle(grab.item_id);
            debug!(item = grab.item_id, selected, "toggled selection");
            return DownOutcome::SelectionChanged;
        }

        let Some(grabbed_item) = items.iter().find(|item| item.id == grab.item_id) else {
            warn!(item = grab.item_id, "pointer-down on unknown item");
            return DownOutcome::Ignored;
        };

        let (mode, bar) = match grab.handle {
            _ if grabbed_item.is_milestone() => (DragMode::Move, None),
            Handle::Body => (DragMode::Move, None),
            Handle::LeftEdge => (DragMode::ResizeLeft, None),
            Handle::RightEdge => (DragMode::ResizeRight, None),
            Handle::Progress(bar) => (DragMode::ChangeProgress, Some(bar)),
        };

        let bulk = mode == DragMode::Move
            && selection.len() > 1
            && selection.contains(grab.item_id);
        let (grabbed, snapshots) = if bulk {
            let snapshots: Vec<ItemSnapshot> = selection
                .ids()
                .iter()
                .filter_map(|id| items.iter().find(|item| item.id == *id))
                .map(|item| ItemSnapshot::capture(item, ctx.calendar))
                .collect();
            let grabbed = snapshots
                .iter()
                .position(|snapshot| snapshot.item.id == grab.item_id)
                .unwrap_or(0);
            (grabbed, snapshots)
        } else {
            (0, vec![ItemSnapshot::capture(grabbed_item, ctx.calendar)])
        };

        debug!(
            item = grab.item_id,
            mode = mode.as_str(),
            items = snapshots.len(),
            x = pointer.x,
            "drag armed"
        );
        let session = DragSession::new(mode, pointer.x, grabbed, snapshots, bar);
        self.state = DragState::Armed(session);
        DownOutcome::Armed
    }

    pub fn pointer_move(&mut self, x: f64, ctx: &DragContext<'_>) -> MoveOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => MoveOutcome::Idle,
            DragState::Armed(session) if session.travel(x) <= self.threshold_px => {
                self.state = DragState::Armed(session);
                MoveOutcome::Armed
            }
            DragState::Armed(session) => {
                debug!(
                    item = session.grabbed_id(),
                    mode = session.mode().as_str(),
                    "drag started"
                );
                self.advance(session, x, ctx)
            }
            DragState::Dragging(session) => self.advance(session, x, ctx),
        }
    }

    fn advance(
        &mut self,
        mut session: DragSession,
        x: f64,
        ctx: &DragContext<'_>,
    ) -> MoveOutcome {
        let preview = session.preview_at(x, ctx);
        let changed = session.record(x, preview);
        self.state = DragState::Dragging(session);
        if !changed {
            return MoveOutcome::Unchanged;
        }
        trace!(
            item = preview.item_id,
            start = %preview.start,
            end = %preview.end,
            progress = preview.progress,
            "drag preview"
        );
        MoveOutcome::Preview(preview)
    }

    /// Previews of every item in the active session at the last pointer X.
    pub fn preview_batch(&self, ctx: &DragContext<'_>) -> Vec<Preview> {
        self.state
            .session()
            .map(|session| session.batch_preview_at(session.last_x(), ctx))
            .unwrap_or_default()
    }

    /// Finish the gesture at pointer `x` and report the result to `sink`.
    pub fn pointer_up<S>(&mut self, x: f64, ctx: &DragContext<'_>, sink: &mut S) -> DragOutcome
    where
        S: DragSink + ?Sized,
    {
        let (session, below_threshold) = match std::mem::take(&mut self.state) {
            DragState::Idle => return DragOutcome::Idle,
            DragState::Armed(session) => {
                let below = session.travel(x) <= self.threshold_px;
                (session, below)
            }
            DragState::Dragging(session) => (session, false),
        };

        match session.resolve(x, ctx, below_threshold) {
            Resolution::Update(update) => {
                debug!(
                    item = session.grabbed_id(),
                    mode = session.mode().as_str(),
                    items = update.items().len(),
                    "drag committed"
                );
                sink.commit(&update);
                DragOutcome::Committed(update)
            }
            Resolution::Click(id) => {
                debug!(item = id, "drag resolved as click");
                sink.select(id);
                DragOutcome::Select(id)
            }
            Resolution::NoOp => {
                debug!(item = session.grabbed_id(), "drag ended without changes");
                DragOutcome::NoOp
            }
        }
    }

    /// Drop the active session without reporting anything.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Idle => false,
            DragState::Armed(session) | DragState::Dragging(session) => {
                debug!(item = session.grabbed_id(), "drag cancelled");
                true
            }
        }
    }
}
