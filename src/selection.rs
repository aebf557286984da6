//! Multi-selection of timeline items.
//!
//! Range selection walks the order the host passes in, which should be the
//! order rows are displayed in (grouping included), not storage order.

use crate::item::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ItemId>,
    anchor: Option<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in the order they were selected.
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn anchor(&self) -> Option<ItemId> {
        self.anchor
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.anchor = None;
    }

    pub fn select_only(&mut self, id: ItemId) {
        self.ids.clear();
        self.ids.push(id);
        self.anchor = Some(id);
    }

    /// Add or remove `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            if self.anchor == Some(id) {
                self.anchor = self.ids.last().copied();
            }
            false
        } else {
            self.ids.push(id);
            self.anchor = Some(id);
            true
        }
    }

    /// Select every id between the anchor and `id` in `display_order`.
    ///
    /// Without an anchor, or when either end is missing from the order, this
    /// behaves like [`Selection::select_only`]. The anchor is kept so that
    /// consecutive range selections pivot around the same row.
    pub fn select_range(&mut self, id: ItemId, display_order: &[ItemId]) {
        let Some(anchor) = self.anchor else {
            self.select_only(id);
            return;
        };
        let anchor_pos = display_order.iter().position(|row| *row == anchor);
        let target_pos = display_order.iter().position(|row| *row == id);
        let (Some(a), Some(b)) = (anchor_pos, target_pos) else {
            self.select_only(id);
            return;
        };

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.ids = display_order[lo..=hi].to_vec();
        self.anchor = Some(anchor);
    }
}
