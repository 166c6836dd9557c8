use crate::{
    compose::backing::{BackingStore, PreservedRegion},
    compose::ledger::{DirtyFrame, DirtyLedger, MarkOutcome},
    foundation::core::Canvas,
    foundation::geom::Rect,
    surface::framebuffer::Surface,
};

/// Dirty-region ledger plus optional backing store for one screen.
///
/// If the backing store cannot be allocated the compositor runs degraded: dirty tracking
/// keeps working and [`Compositor::preserve`] returns `None`.
#[derive(Debug)]
pub struct Compositor {
    screen: Canvas,
    ledger: DirtyLedger,
    backing: Option<BackingStore>,
}

impl Compositor {
    #[tracing::instrument]
    pub fn new(screen: Canvas) -> Self {
        let backing = match BackingStore::allocate(screen) {
            Ok(b) => Some(b),
            Err(e) => {
                tracing::warn!(error = %e, "backing store unavailable, save/restore disabled");
                None
            }
        };
        Self::with_backing(screen, backing)
    }

    /// Build with an explicit backing store, `None` for degraded mode.
    pub fn with_backing(screen: Canvas, backing: Option<BackingStore>) -> Self {
        Self {
            screen,
            ledger: DirtyLedger::new(screen.bounds()),
            backing,
        }
    }

    pub fn screen(&self) -> Canvas {
        self.screen
    }

    pub fn has_backing_store(&self) -> bool {
        self.backing.is_some()
    }

    pub fn mark_dirty(&mut self, rect: Rect) -> MarkOutcome {
        self.ledger.mark(rect)
    }

    /// Force the next frame to repaint everything.
    pub fn mark_full(&mut self) {
        self.ledger.set_full();
    }

    pub fn dirty_regions(&self) -> &[Rect] {
        self.ledger.regions()
    }

    pub fn is_full_damage(&self) -> bool {
        self.ledger.is_full()
    }

    pub fn take_dirty(&mut self) -> DirtyFrame {
        self.ledger.take()
    }

    pub fn clear_dirty(&mut self) {
        self.ledger.clear();
    }

    /// Snapshot `rect` and hand back a guard that restores it when dropped.
    ///
    /// Returns `None` in degraded mode or when `rect` lies entirely off screen.
    pub fn preserve<'a, S: Surface + ?Sized>(
        &'a mut self,
        surface: &'a mut S,
        rect: Rect,
    ) -> Option<PreservedRegion<'a, S>> {
        let clipped = rect.clip_to(self.screen.bounds())?;
        let store = self.backing.as_mut()?;
        Some(PreservedRegion::new(store, surface, clipped))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
