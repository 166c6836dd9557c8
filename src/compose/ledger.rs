use smallvec::SmallVec;

use crate::foundation::geom::Rect;

/// Maximum number of per-rect dirty regions tracked in one frame.
pub const DIRTY_CAPACITY: usize = 16;

/// Result of [`DirtyLedger::mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Appended as its own region.
    Tracked,
    /// Empty rect, or the ledger already covers the whole screen.
    Ignored,
    /// Capacity reached; the list now holds one full-screen region.
    Collapsed,
}

/// What a frame has to repaint, drained from the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirtyFrame {
    Clean,
    Regions(SmallVec<[Rect; DIRTY_CAPACITY]>),
    Full,
}

/// Bounded, insertion-ordered list of dirty rectangles.
///
/// Appends are O(1). On overflow the whole list is replaced with a single full-screen
/// region and per-rect tracking stops until the next [`DirtyLedger::clear`].
#[derive(Clone, Debug)]
pub struct DirtyLedger {
    screen: Rect,
    regions: SmallVec<[Rect; DIRTY_CAPACITY]>,
    full: bool,
}

impl DirtyLedger {
    pub fn new(screen: Rect) -> Self {
        Self {
            screen,
            regions: SmallVec::new(),
            full: false,
        }
    }

    pub fn mark(&mut self, rect: Rect) -> MarkOutcome {
        if rect.is_empty() || self.full {
            return MarkOutcome::Ignored;
        }
        if self.regions.len() >= DIRTY_CAPACITY {
            self.set_full();
            tracing::debug!(capacity = DIRTY_CAPACITY, "dirty ledger collapsed to full screen");
            return MarkOutcome::Collapsed;
        }
        self.regions.push(rect);
        MarkOutcome::Tracked
    }

    /// Replace everything with one full-screen region.
    pub fn set_full(&mut self) {
        self.regions.clear();
        self.regions.push(self.screen);
        self.full = true;
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
        self.full = false;
    }

    /// Drain into a [`DirtyFrame`], leaving the ledger empty.
    pub fn take(&mut self) -> DirtyFrame {
        let out = if self.full {
            DirtyFrame::Full
        } else if self.regions.is_empty() {
            DirtyFrame::Clean
        } else {
            DirtyFrame::Regions(std::mem::take(&mut self.regions))
        };
        self.clear();
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/ledger.rs"]
mod tests;
