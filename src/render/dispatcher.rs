use smallvec::SmallVec;

use crate::{
    assets::wallpaper::{PlacementMode, WallpaperCache},
    foundation::core::{Canvas, Point},
    foundation::geom::Rect,
    foundation::palette::Color,
    render::icons::{DesktopIcon, paint_icons},
    render::taskbar::Taskbar,
    shell::host::ProgramHost,
    shell::input::ClockTime,
    surface::framebuffer::Surface,
    surface::text::TextPainter,
};

/// Repaint strategy for one detected change. "Nothing changed" is the absence of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repaint {
    Full,
    Partial(Rect),
}

/// Borrowed view of every painted layer below the cursor.
pub struct Scene<'a> {
    pub background: Color,
    pub wallpaper: &'a WallpaperCache,
    pub taskbar: &'a Taskbar,
    pub clock: ClockTime,
    pub icons: &'a [DesktopIcon],
    pub text: &'a dyn TextPainter,
}

/// What a partial repaint touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialReport {
    /// Request clipped to the area above the taskbar.
    pub desktop: Option<Rect>,
    /// The whole band and clock were repainted.
    pub taskbar_dirty: bool,
    /// Rectangles handed to [`ProgramHost::invalidate`], in order.
    pub invalidated: SmallVec<[Rect; 2]>,
}

/// Chooses repaint scope and owns the paint order
/// background → wallpaper → taskbar → clock → windows → icons → cursor.
#[derive(Clone, Copy, Debug)]
pub struct RedrawDispatcher {
    canvas: Canvas,
}

impl RedrawDispatcher {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    pub fn dispatch(
        &self,
        repaint: Repaint,
        surface: &mut dyn Surface,
        scene: &Scene<'_>,
        host: &mut dyn ProgramHost,
    ) -> Option<PartialReport> {
        match repaint {
            Repaint::Full => {
                self.full(surface, scene, host);
                None
            }
            Repaint::Partial(r) => Some(self.partial(surface, scene, host, r)),
        }
    }

    /// Repaint every layer of the screen.
    pub fn full(&self, surface: &mut dyn Surface, scene: &Scene<'_>, host: &mut dyn ProgramHost) {
        tracing::debug!("full repaint");
        surface.fill_rect(self.canvas.bounds(), scene.background);
        scene.wallpaper.draw_full(surface);
        scene.taskbar.paint(surface, scene.text);
        scene.taskbar.paint_clock(surface, scene.text, scene.clock);
        host.paint_windows(surface);
        paint_icons(surface, scene.text, scene.icons);
    }

    /// Repaint the area of `r`, escalating to the whole taskbar band when `r` touches it.
    pub fn partial(
        &self,
        surface: &mut dyn Surface,
        scene: &Scene<'_>,
        host: &mut dyn ProgramHost,
        r: Rect,
    ) -> PartialReport {
        let band = scene.taskbar.band();
        // Tested on the unclipped request: the band is only ever repainted whole.
        let mut taskbar_dirty = r.y < self.canvas.height_i32() && r.bottom() > band.y;
        let mut desktop = r.clip_to(self.canvas.desktop_area());

        if let Some(d) = desktop {
            surface.fill_rect(d, scene.background);
            match scene.wallpaper.mode() {
                PlacementMode::Stretch => {
                    // A stretched bitmap covers the band too, so it is redrawn whole and
                    // everything on top of it is repainted.
                    scene.wallpaper.draw_full(surface);
                    taskbar_dirty = true;
                    desktop = Some(self.canvas.desktop_area());
                }
                PlacementMode::Center => {
                    if let Some(o) = scene.wallpaper.footprint().and_then(|fp| d.intersect(fp)) {
                        let origin = scene
                            .wallpaper
                            .cached()
                            .map_or(Point::ORIGIN, |c| c.origin);
                        scene.wallpaper.draw_partial(
                            surface,
                            o.x,
                            o.y,
                            o.x - origin.x,
                            o.y - origin.y,
                            o.w,
                            o.h,
                        );
                    }
                }
            }
        }

        if taskbar_dirty {
            scene.taskbar.paint(surface, scene.text);
            scene.taskbar.paint_clock(surface, scene.text, scene.clock);
        }

        let mut invalidated = SmallVec::new();
        if let Some(d) = desktop {
            invalidated.push(d);
        }
        if taskbar_dirty {
            invalidated.push(band);
        }
        for &rect in &invalidated {
            host.invalidate(surface, rect);
        }

        // Icons stay above the band and windows.
        let touched = scene.icons.iter().filter(|icon| {
            let fp = icon.footprint(scene.text);
            invalidated.iter().any(|&rect| fp.intersects(rect))
        });
        paint_icons(surface, scene.text, touched);

        tracing::debug!(?r, ?desktop, taskbar_dirty, "partial repaint");
        PartialReport {
            desktop,
            taskbar_dirty,
            invalidated,
        }
    }
}

/// Arrow cursor bounding box for a pointer at `at`.
pub fn cursor_rect(at: Point) -> Rect {
    Rect::new(at.x, at.y, CURSOR_W, CURSOR_H)
}

const CURSOR_W: i32 = 8;
const CURSOR_H: i32 = 12;

/// Draw a white arrow with black outline, hotspot at the top-left.
pub fn paint_cursor(surface: &mut dyn Surface, at: Point) {
    for row in 0..CURSOR_H {
        let span = (row + 1).min(CURSOR_W);
        for col in 0..span {
            let edge = col == 0 || col == span - 1 || row == CURSOR_H - 1;
            let color = if edge { Color::BLACK } else { Color::WHITE };
            surface.put_pixel(at.x + col, at.y + row, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatcher.rs"]
mod tests;
