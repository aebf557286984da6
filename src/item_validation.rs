use crate::item::{Item, ItemId};
use crate::point::{CalendarPoint, Timing};
use std::collections::HashSet;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("item {id} ends at {end} before it starts at {start}")]
    Inverted {
        id: ItemId,
        start: CalendarPoint,
        end: CalendarPoint,
    },
    #[error("milestone {id} must start and end on the same AM point (got {start} to {end})")]
    MalformedMilestone {
        id: ItemId,
        start: CalendarPoint,
        end: CalendarPoint,
    },
    #[error("item {id} has progress {progress} (must be between 0 and 100)")]
    ProgressOutOfRange { id: ItemId, progress: u8 },
    #[error("item {id} has invalid cached span {span}")]
    InvalidSpan { id: ItemId, span: f64 },
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
}

pub fn validate_item(item: &Item) -> Result<(), ItemValidationError> {
    if item.end < item.start {
        return Err(ItemValidationError::Inverted {
            id: item.id,
            start: item.start,
            end: item.end,
        });
    }

    if item.is_milestone() && (item.start != item.end || item.start.timing != Timing::Am) {
        return Err(ItemValidationError::MalformedMilestone {
            id: item.id,
            start: item.start,
            end: item.end,
        });
    }

    if item.progress > MAX_PROGRESS {
        return Err(ItemValidationError::ProgressOutOfRange {
            id: item.id,
            progress: item.progress,
        });
    }

    if let Some(span) = item.cached_span {
        if !span.is_finite() || span < 0.0 {
            return Err(ItemValidationError::InvalidSpan { id: item.id, span });
        }
    }

    Ok(())
}

pub fn validate_items(items: &[Item]) -> Result<(), ItemValidationError> {
    let mut seen_ids = HashSet::with_capacity(items.len());
    for item in items {
        if !seen_ids.insert(item.id) {
            return Err(ItemValidationError::DuplicateId(item.id));
        }
        validate_item(item)?;
    }
    Ok(())
}

/// Repair an item instead of rejecting it.
///
/// Inverted endpoints are swapped, milestones are pinned to their start date
/// at AM, progress is clamped and an unusable cached span is dropped.
pub fn normalize_item(mut item: Item) -> Item {
    if item.end < item.start {
        tracing::warn!(
            id = item.id,
            start = %item.start,
            end = %item.end,
            "swapping inverted item range"
        );
        std::mem::swap(&mut item.start, &mut item.end);
    }
    if item.is_milestone() {
        item.start = CalendarPoint::am(item.start.date);
        item.end = item.start;
    }
    item.progress = item.progress.min(MAX_PROGRESS);
    if item
        .cached_span
        .is_some_and(|span| !span.is_finite() || span < 0.0)
    {
        item.cached_span = None;
    }
    item
}
