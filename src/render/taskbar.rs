//! Taskbar contents, layout geometry, and painting.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    foundation::core::Canvas,
    foundation::error::{DeskError, DeskResult},
    foundation::geom::Rect,
    foundation::palette::Color,
    shell::input::ClockTime,
    surface::bitmap::Bitmap,
    surface::framebuffer::Surface,
    surface::text::TextPainter,
};

/// Button slots, including the primary launcher at index 0.
pub const MAX_BUTTONS: usize = 8;
/// Action identifier of the primary launcher.
pub const LAUNCHER_ACTION: &str = "launcher";
/// Well-known action identifier opened by the volume hotspot.
pub const VOLUME_ACTION: &str = "volume";

pub const BUTTON_WIDTH: i32 = 57;
pub const BUTTON_GAP: i32 = 3;
pub const CLOCK_WIDTH: i32 = 44;
pub const VOLUME_WIDTH: i32 = 20;

pub const TASKBAR_COLOR: Color = Color::GREY;
const HIGHLIGHT: Color = Color::WHITE;
const SHADOW: Color = Color::DARK_GREY;
const INK: Color = Color::BLACK;

/// What a button shows, fixed when the button is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonFace {
    Label(String),
    Icon(Arc<Bitmap>),
    LabelIcon { label: String, icon: Arc<Bitmap> },
}

#[derive(Clone, Debug)]
pub struct TaskbarButton {
    pub rect: Rect,
    pub face: ButtonFace,
    pub action: String,
    /// Transient press feedback driven by the interaction state machine.
    pub pressed: bool,
}

/// The fixed band along the bottom of the screen.
///
/// Buttons occupy an order-preserving, fixed-capacity array; every change of the button
/// count recomputes the full layout.
#[derive(Clone, Debug)]
pub struct Taskbar {
    band: Rect,
    buttons: SmallVec<[TaskbarButton; MAX_BUTTONS]>,
    clock: Rect,
    volume: Rect,
    volume_pressed: bool,
    volume_level: u8,
}

impl Taskbar {
    /// Taskbar with only the primary launcher.
    pub fn new(canvas: Canvas) -> Self {
        let band = canvas.taskbar_band();
        let inner_y = band.y + BUTTON_GAP;
        let inner_h = band.h - BUTTON_GAP;
        let clock = Rect::new(
            band.right() - BUTTON_GAP - CLOCK_WIDTH,
            inner_y,
            CLOCK_WIDTH,
            inner_h,
        );
        let volume = Rect::new(clock.x - BUTTON_GAP - VOLUME_WIDTH, inner_y, VOLUME_WIDTH, inner_h);

        let mut out = Self {
            band,
            buttons: SmallVec::new(),
            clock,
            volume,
            volume_pressed: false,
            volume_level: 0,
        };
        out.buttons.push(TaskbarButton {
            rect: Rect::default(),
            face: ButtonFace::Label("Start".to_string()),
            action: LAUNCHER_ACTION.to_string(),
            pressed: false,
        });
        out.layout();
        out
    }

    pub fn band(&self) -> Rect {
        self.band
    }

    pub fn clock_rect(&self) -> Rect {
        self.clock
    }

    pub fn volume_rect(&self) -> Rect {
        self.volume
    }

    pub fn buttons(&self) -> &[TaskbarButton] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [TaskbarButton] {
        &mut self.buttons
    }

    pub fn volume_pressed(&self) -> bool {
        self.volume_pressed
    }

    pub fn set_volume_pressed(&mut self, pressed: bool) {
        self.volume_pressed = pressed;
    }

    /// Volume level (0..=100) drawn as the hotspot's level bar.
    pub fn set_volume_level(&mut self, level: u8) {
        self.volume_level = level.min(100);
    }

    /// Append a program button. Fails with [`DeskError::Capacity`] when all slots are used.
    pub fn push(&mut self, face: ButtonFace, action: impl Into<String>) -> DeskResult<usize> {
        if self.buttons.len() >= MAX_BUTTONS {
            return Err(DeskError::capacity(format!(
                "taskbar holds at most {MAX_BUTTONS} buttons"
            )));
        }
        self.buttons.push(TaskbarButton {
            rect: Rect::default(),
            face,
            action: action.into(),
            pressed: false,
        });
        self.layout();
        Ok(self.buttons.len() - 1)
    }

    /// Remove the button at `index`. The primary launcher cannot be removed.
    pub fn remove(&mut self, index: usize) -> Option<TaskbarButton> {
        if index == 0 || index >= self.buttons.len() {
            return None;
        }
        let removed = self.buttons.remove(index);
        self.layout();
        Some(removed)
    }

    /// Lay every button out left to right between the left edge and the volume hotspot.
    fn layout(&mut self) {
        let n = i32::try_from(self.buttons.len()).unwrap_or(i32::MAX).max(1);
        let avail = self.volume.x - 2 * BUTTON_GAP;
        let fit = (avail - BUTTON_GAP * (n - 1)) / n;
        let w = BUTTON_WIDTH.min(fit).max(1);
        let y = self.band.y + BUTTON_GAP;
        let h = self.band.h - BUTTON_GAP;
        for (i, b) in self.buttons.iter_mut().enumerate() {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            b.rect = Rect::new(BUTTON_GAP + i * (w + BUTTON_GAP), y, w, h);
        }
    }

    /// Paint the whole band: background, buttons, and the volume hotspot.
    pub fn paint(&self, surface: &mut dyn Surface, text: &dyn TextPainter) {
        surface.fill_rect(self.band, TASKBAR_COLOR);
        surface.draw_line(
            self.band.x,
            self.band.y + 1,
            self.band.right() - 1,
            self.band.y + 1,
            HIGHLIGHT,
        );
        for b in &self.buttons {
            paint_button(surface, text, b);
        }
        self.paint_volume(surface);
    }

    /// Paint the sunken clock well with `HH:MM`.
    pub fn paint_clock(&self, surface: &mut dyn Surface, text: &dyn TextPainter, time: ClockTime) {
        surface.fill_rect(self.clock, TASKBAR_COLOR);
        bevel(surface, self.clock, true);
        let label = time.label();
        let (tw, th) = text.measure(&label);
        let x = self.clock.x + (self.clock.w - tw) / 2;
        let y = self.clock.y + (self.clock.h - th) / 2;
        text.draw_text(surface, x, y, &label, INK);
    }

    fn paint_volume(&self, surface: &mut dyn Surface) {
        let r = self.volume;
        surface.fill_rect(r, TASKBAR_COLOR);
        bevel(surface, r, self.volume_pressed);
        // Speaker body plus a level bar scaled to the current volume.
        let cy = r.y + r.h / 2;
        surface.fill_rect(Rect::new(r.x + 4, cy - 2, 3, 5), INK);
        let max_h = r.h - 6;
        let bar_h = max_h * i32::from(self.volume_level) / 100;
        if bar_h > 0 {
            surface.fill_rect(Rect::new(r.x + 11, r.bottom() - 3 - bar_h, 4, bar_h), INK);
        }
    }
}

fn paint_button(surface: &mut dyn Surface, text: &dyn TextPainter, b: &TaskbarButton) {
    let r = b.rect;
    surface.fill_rect(r, TASKBAR_COLOR);
    bevel(surface, r, b.pressed);
    let shift = i32::from(b.pressed);

    match &b.face {
        ButtonFace::Label(label) => {
            let (_, th) = text.measure(label);
            text.draw_text(surface, r.x + 4 + shift, r.y + (r.h - th) / 2 + shift, label, INK);
        }
        ButtonFace::Icon(icon) => {
            let (iw, ih) = icon_extent(icon);
            surface.blit(
                icon,
                r.x + (r.w - iw) / 2 + shift,
                r.y + (r.h - ih) / 2 + shift,
                icon.bounds(),
            );
        }
        ButtonFace::LabelIcon { label, icon } => {
            let (iw, ih) = icon_extent(icon);
            surface.blit(icon, r.x + 3 + shift, r.y + (r.h - ih) / 2 + shift, icon.bounds());
            let (_, th) = text.measure(label);
            text.draw_text(
                surface,
                r.x + 3 + iw + 3 + shift,
                r.y + (r.h - th) / 2 + shift,
                label,
                INK,
            );
        }
    }
}

fn icon_extent(icon: &Bitmap) -> (i32, i32) {
    let b = icon.bounds();
    (b.w, b.h)
}

/// Two-tone 3D edge: raised draws light top-left, sunken swaps the tones.
fn bevel(surface: &mut dyn Surface, r: Rect, sunken: bool) {
    if r.is_empty() {
        return;
    }
    let (tl, br) = if sunken { (SHADOW, HIGHLIGHT) } else { (HIGHLIGHT, SHADOW) };
    let (x1, y1) = (r.right() - 1, r.bottom() - 1);
    surface.draw_line(r.x, r.y, x1, r.y, tl);
    surface.draw_line(r.x, r.y, r.x, y1, tl);
    surface.draw_line(r.x, y1, x1, y1, br);
    surface.draw_line(x1, r.y, x1, y1, br);
}

#[cfg(test)]
#[path = "../../tests/unit/render/taskbar.rs"]
mod tests;
