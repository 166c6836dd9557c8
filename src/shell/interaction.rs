use smallvec::SmallVec;

use crate::{
    render::taskbar::{Taskbar, VOLUME_ACTION},
    shell::host::{InstanceId, ProgramHost, WindowHandle},
    shell::input::{PRIMARY_BUTTON, PointerState},
};

/// Press state of one hotspot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HotspotState {
    #[default]
    Idle,
    Pressed,
}

impl HotspotState {
    fn from_pressed(pressed: bool) -> Self {
        if pressed { Self::Pressed } else { Self::Idle }
    }

    fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hotspot {
    /// Taskbar button by index.
    Button(usize),
    Volume,
}

/// A completed press/release on one hotspot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Click {
    pub hotspot: Hotspot,
    pub action: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub clicks: SmallVec<[Click; 1]>,
    /// Some hotspot changed state and the band needs repainting.
    pub taskbar_dirty: bool,
}

/// How a click was resolved against the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Launched(InstanceId),
    Restored(WindowHandle),
    /// Launch was attempted and failed; already logged.
    LaunchFailed,
}

/// Press/release state machine over every taskbar hotspot.
///
/// Hotspot state lives in the taskbar's pressed flags. The only state kept here is the
/// previous poll's button mask, used for edge detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskbarInteraction {
    prev_buttons: u8,
}

impl TaskbarInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every hotspot by one pointer poll.
    pub fn poll(&mut self, taskbar: &mut Taskbar, pointer: PointerState) -> InteractionOutcome {
        let was_down = self.prev_buttons & PRIMARY_BUTTON != 0;
        let down = pointer.primary_down();
        self.prev_buttons = pointer.buttons;

        let mut out = InteractionOutcome::default();
        for (i, b) in taskbar.buttons_mut().iter_mut().enumerate() {
            let inside = b.rect.contains(pointer.x, pointer.y);
            let prev = HotspotState::from_pressed(b.pressed);
            let (next, clicked) = step(prev, inside, down, was_down);
            if next.is_pressed() != b.pressed {
                b.pressed = next.is_pressed();
                out.taskbar_dirty = true;
            }
            if clicked {
                out.clicks.push(Click {
                    hotspot: Hotspot::Button(i),
                    action: b.action.clone(),
                });
            }
        }

        let inside = taskbar.volume_rect().contains(pointer.x, pointer.y);
        let prev = HotspotState::from_pressed(taskbar.volume_pressed());
        let (next, clicked) = step(prev, inside, down, was_down);
        if next != prev {
            taskbar.set_volume_pressed(next.is_pressed());
            out.taskbar_dirty = true;
        }
        if clicked {
            out.clicks.push(Click {
                hotspot: Hotspot::Volume,
                action: VOLUME_ACTION.to_string(),
            });
        }

        out
    }
}

/// One transition. Returns the next state and whether a click fired.
pub fn step(state: HotspotState, inside: bool, down: bool, was_down: bool) -> (HotspotState, bool) {
    match state {
        HotspotState::Idle if inside && down => (HotspotState::Pressed, false),
        HotspotState::Idle => (HotspotState::Idle, false),
        HotspotState::Pressed if !inside => (HotspotState::Idle, false),
        HotspotState::Pressed if down => (HotspotState::Pressed, false),
        // Released inside: fire only on the down→up edge.
        HotspotState::Pressed => (HotspotState::Idle, was_down),
    }
}

/// Focus a running instance of `action` if one owns a window, else launch a new one.
pub fn resolve_click(host: &mut dyn ProgramHost, action: &str) -> ClickOutcome {
    if host.is_running(action) {
        let window = (0..host.running_count())
            .filter_map(|i| host.instance(i))
            .find(|inst| inst.action == action && !inst.windows.is_empty())
            .and_then(|inst| inst.windows.first().copied());
        if let Some(window) = window {
            tracing::debug!(action, window = window.0, "restoring running instance");
            host.restore_window(window);
            return ClickOutcome::Restored(window);
        }
    }

    match host.launch(action) {
        Ok(inst) => {
            tracing::debug!(action, id = inst.id.0, "launched");
            ClickOutcome::Launched(inst.id)
        }
        Err(e) => {
            tracing::warn!(action, error = %e, "launch failed");
            ClickOutcome::LaunchFailed
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/interaction.rs"]
mod tests;
