use std::ops::{Deref, DerefMut};

use crate::{
    foundation::core::Canvas,
    foundation::error::{DeskError, DeskResult},
    foundation::geom::Rect,
    foundation::palette::Color,
    surface::framebuffer::Surface,
};

/// Off-screen, one byte per pixel, screen-sized snapshot buffer.
///
/// A saved pixel lives at the same coordinates it had on screen, so any rect can be saved
/// without sizing a separate buffer. Dimensions are fixed at construction.
#[derive(Debug)]
pub struct BackingStore {
    canvas: Canvas,
    pixels: Vec<u8>,
}

impl BackingStore {
    /// Reserve the buffer without aborting on allocation failure.
    pub fn allocate(canvas: Canvas) -> DeskResult<Self> {
        let len = canvas.pixel_count();
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            DeskError::allocation(format!("backing store of {len} bytes: {e}"))
        })?;
        pixels.resize(len, 0);
        Ok(Self { canvas, pixels })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Copy `rect` (clipped to the screen) from `surface` into the store.
    ///
    /// Pixels of `rect` that fall outside the screen are left untouched.
    pub(crate) fn save<S: Surface + ?Sized>(&mut self, surface: &S, rect: Rect) {
        let Some(r) = rect.clip_to(self.canvas.bounds()) else {
            return;
        };
        let stride = self.canvas.width as usize;
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                if let Some(c) = surface.get_pixel(x, y) {
                    self.pixels[y as usize * stride + x as usize] = c.0;
                }
            }
        }
    }

    /// Inverse of [`BackingStore::save`] with the same clipping rule.
    pub(crate) fn restore<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rect) {
        let Some(r) = rect.clip_to(self.canvas.bounds()) else {
            return;
        };
        let stride = self.canvas.width as usize;
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                let c = self.pixels[y as usize * stride + x as usize];
                surface.put_pixel(x, y, Color(c));
            }
        }
    }
}

/// Scoped save/restore of one screen region.
///
/// Created by [`crate::Compositor::preserve`]. While alive it is the only path to the
/// surface and the backing store, so nothing unrelated can write the area between the save
/// and its matching restore. Dropping the guard restores the saved pixels on every exit
/// path.
pub struct PreservedRegion<'a, S: Surface + ?Sized> {
    store: &'a BackingStore,
    surface: &'a mut S,
    rect: Rect,
}

impl<'a, S: Surface + ?Sized> PreservedRegion<'a, S> {
    pub(crate) fn new(store: &'a mut BackingStore, surface: &'a mut S, rect: Rect) -> Self {
        store.save(&*surface, rect);
        Self {
            store,
            surface,
            rect,
        }
    }

    /// Screen rectangle that will be restored, already clipped.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl<S: Surface + ?Sized> Deref for PreservedRegion<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for PreservedRegion<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface + ?Sized> Drop for PreservedRegion<'_, S> {
    fn drop(&mut self) {
        self.store.restore(&mut *self.surface, self.rect);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/backing.rs"]
mod tests;
