use crate::foundation::geom::Rect;

/// Fixed framebuffer width.
pub const SCREEN_WIDTH: u32 = 640;
/// Fixed framebuffer height.
pub const SCREEN_HEIGHT: u32 = 480;
/// Height of the taskbar band anchored to the bottom edge.
pub const TASKBAR_HEIGHT: i32 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::SCREEN
    }
}

impl Canvas {
    /// The one supported screen mode.
    pub const SCREEN: Canvas = Canvas {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
    };

    pub fn bounds(self) -> Rect {
        Rect::from_size(self.width_i32(), self.height_i32())
    }

    pub fn width_i32(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    pub fn height_i32(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The fixed taskbar band along the bottom edge.
    pub fn taskbar_band(self) -> Rect {
        let top = self.height_i32() - TASKBAR_HEIGHT;
        Rect::new(0, top, self.width_i32(), TASKBAR_HEIGHT)
    }

    /// Everything above the taskbar band.
    pub fn desktop_area(self) -> Rect {
        Rect::from_size(self.width_i32(), self.height_i32() - TASKBAR_HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
