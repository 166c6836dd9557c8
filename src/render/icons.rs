use crate::{
    foundation::geom::Rect, foundation::palette::Color, surface::framebuffer::Surface,
    surface::text::TextPainter,
};

/// Desktop shortcut painted in the icons layer above windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesktopIcon {
    pub rect: Rect,
    pub color: Color,
    pub label: Option<String>,
}

impl DesktopIcon {
    /// Screen area touched by the icon including its caption.
    pub fn footprint(&self, text: &dyn TextPainter) -> Rect {
        let Some(label) = &self.label else {
            return self.rect;
        };
        let (tw, th) = text.measure(label);
        let x0 = self.rect.x.min(self.rect.x + (self.rect.w - tw) / 2);
        let x1 = self.rect.right().max(self.rect.x + (self.rect.w - tw) / 2 + tw);
        Rect::new(x0, self.rect.y, x1 - x0, self.rect.h + 2 + th)
    }
}

pub(crate) fn paint_icons<'a>(
    surface: &mut dyn Surface,
    text: &dyn TextPainter,
    icons: impl IntoIterator<Item = &'a DesktopIcon>,
) {
    for icon in icons {
        surface.fill_rect(icon.rect, icon.color);
        surface.outline_rect(icon.rect, Color::BLACK);
        if let Some(label) = &icon.label {
            let (tw, _) = text.measure(label);
            let x = icon.rect.x + (icon.rect.w - tw) / 2;
            text.draw_text(surface, x, icon.rect.bottom() + 2, label, Color::WHITE);
        }
    }
}
