use crate::{foundation::error::DeskResult, foundation::geom::Rect, surface::framebuffer::Surface};

/// Opaque window identifier owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u32);

/// Opaque program-instance identifier owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

/// A running program instance as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceHandle {
    pub id: InstanceId,
    /// Action identifier the instance was launched for.
    pub action: String,
    /// Windows owned by the instance, possibly none.
    pub windows: Vec<WindowHandle>,
}

/// Result of pumping one window's event queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    /// The window asked to be closed.
    Close,
    /// Window stacking or geometry changed; the whole screen must be repainted.
    MajorStateChange,
    /// Any other code, forwarded unchanged to [`ProgramHost::route_event`].
    Other(i32),
}

impl WindowEvent {
    /// Map a raw pump code: `0` none, `-2` major state change, `-3` close.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::None,
            -2 => Self::MajorStateChange,
            -3 => Self::Close,
            other => Self::Other(other),
        }
    }
}

/// What [`ProgramHost::route_event`] decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteOutcome {
    pub close_requested: bool,
}

/// The window-management and program-lifecycle collaborator.
///
/// Every method must return promptly; they are called from inside the single cooperative
/// frame loop.
pub trait ProgramHost {
    /// Is any instance of `action` running?
    fn is_running(&self, action: &str) -> bool;

    /// Start a new instance of `action`.
    fn launch(&mut self, action: &str) -> DeskResult<InstanceHandle>;

    fn running_count(&self) -> usize;

    /// Instance at `index` in `0..running_count()`.
    fn instance(&self, index: usize) -> Option<&InstanceHandle>;

    /// Un-minimize and focus `window`.
    fn restore_window(&mut self, window: WindowHandle);

    fn close_instance(&mut self, id: InstanceId);

    /// Drain at most one pending event for `window`.
    fn pump_events(&mut self, window: WindowHandle) -> WindowEvent;

    /// Hand a generic event code to the window's own handler.
    fn route_event(&mut self, window: WindowHandle, code: i32) -> RouteOutcome;

    /// Paint every window layer, bottom to top.
    fn paint_windows(&mut self, surface: &mut dyn Surface);

    /// Repaint whatever part of any window overlaps `rect`.
    fn invalidate(&mut self, surface: &mut dyn Surface, rect: Rect);

    /// Advance the window-cycle preview.
    fn preview_cycle(&mut self) {}

    /// Focus the previewed window.
    fn commit_cycle(&mut self) {}

    /// True once the loop should stop.
    fn shutdown_requested(&self) -> bool;
}
