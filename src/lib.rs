//! deskpaint is the screen-compositing and dirty-region redraw engine of a fixed-resolution,
//! 8-bit palette desktop.
//!
//! One [`Desktop`] value owns the whole visual state. Each call to [`Desktop::step`]:
//!
//! - polls pointer, clock and key signal through an [`InputSource`]
//! - runs the taskbar press/release state machine and resolves clicks against a [`ProgramHost`]
//! - drains the dirty ledger and repaints FULL, PARTIAL per rect, or nothing
//! - overlays the cursor and presents the [`Surface`]
#![forbid(unsafe_code)]

/// Wallpaper decoding and caching.
pub mod assets;
/// Dirty ledger, backing store and the compositor.
pub mod compose;
/// Geometry, palette, screen constants and errors.
pub mod foundation;
/// Layer painting and repaint dispatch.
pub mod render;
/// Desktop context, frame loop and collaborators.
pub mod shell;
/// Framebuffer, bitmap and text primitives.
pub mod surface;

pub use crate::foundation::core::{Canvas, Point, SCREEN_HEIGHT, SCREEN_WIDTH, TASKBAR_HEIGHT};
pub use crate::foundation::error::{DeskError, DeskResult};
pub use crate::foundation::geom::Rect;
pub use crate::foundation::palette::Color;

pub use crate::assets::wallpaper::{PlacementMode, WallpaperCache};
pub use crate::compose::backing::{BackingStore, PreservedRegion};
pub use crate::compose::compositor::Compositor;
pub use crate::compose::ledger::{DIRTY_CAPACITY, DirtyFrame, MarkOutcome};
pub use crate::render::dispatcher::{PartialReport, RedrawDispatcher, Repaint, Scene};
pub use crate::render::icons::DesktopIcon;
pub use crate::render::taskbar::{ButtonFace, Taskbar};
pub use crate::shell::desktop::{Desktop, FrameOutcome, FrameRepaint};
pub use crate::shell::headless::{HeadlessHost, HostCall, ScriptedInput};
pub use crate::shell::host::{
    InstanceHandle, InstanceId, ProgramHost, RouteOutcome, WindowEvent, WindowHandle,
};
pub use crate::shell::input::{ClockTime, InputSource, KeySignal, PRIMARY_BUTTON, PointerState};
pub use crate::shell::interaction::{ClickOutcome, TaskbarInteraction};
pub use crate::shell::settings::DesktopSettings;
pub use crate::surface::bitmap::Bitmap;
pub use crate::surface::framebuffer::{IndexedFramebuffer, Surface};
pub use crate::surface::text::{BlockText, TextPainter};
