//! In-process collaborators for tests and the headless binary.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    foundation::error::{DeskError, DeskResult},
    foundation::geom::Rect,
    foundation::palette::Color,
    shell::host::{
        InstanceHandle, InstanceId, ProgramHost, RouteOutcome, WindowEvent, WindowHandle,
    },
    shell::input::{ClockTime, InputSource, KeySignal, PointerState},
    surface::framebuffer::Surface,
};

/// Replays a fixed sequence of polls; the last pointer state repeats once the queue runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    pointer: VecDeque<PointerState>,
    last: PointerState,
    clock: VecDeque<ClockTime>,
    now: ClockTime,
    keys: VecDeque<Option<KeySignal>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pointer(&mut self, state: PointerState) -> &mut Self {
        self.pointer.push_back(state);
        self
    }

    pub fn push_clock(&mut self, time: ClockTime) -> &mut Self {
        self.clock.push_back(time);
        self
    }

    /// Queue one key slot per frame; `None` means no key that frame.
    pub fn push_key(&mut self, key: Option<KeySignal>) -> &mut Self {
        self.keys.push_back(key);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll_pointer(&mut self) -> PointerState {
        if let Some(p) = self.pointer.pop_front() {
            self.last = p;
        }
        self.last
    }

    fn clock(&mut self) -> ClockTime {
        if let Some(t) = self.clock.pop_front() {
            self.now = t;
        }
        self.now
    }

    fn key_signal(&mut self) -> Option<KeySignal> {
        self.keys.pop_front().flatten()
    }
}

/// Every host call, recorded for assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Launch(String),
    Restore(WindowHandle),
    Close(InstanceId),
    Route(WindowHandle, i32),
    PaintAll,
    Invalidate(Rect),
    PreviewCycle,
    CommitCycle,
}

#[derive(Clone, Debug)]
struct HeadlessWindow {
    handle: WindowHandle,
    rect: Rect,
    color: Color,
}

/// Program host that keeps its instances and windows in memory.
///
/// Each launch opens one window, cascaded from the top-left. Windows paint as a filled body
/// with a title strip, stacked in launch order with the most recently restored on top.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    instances: Vec<InstanceHandle>,
    windows: Vec<HeadlessWindow>,
    events: HashMap<WindowHandle, VecDeque<i32>>,
    failing: HashSet<String>,
    windowless: HashSet<String>,
    calls: Vec<HostCall>,
    next_id: u32,
    shutdown: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Make every launch of `action` fail.
    pub fn fail_launches_of(&mut self, action: impl Into<String>) {
        self.failing.insert(action.into());
    }

    /// Launches of `action` start without opening a window.
    pub fn launch_windowless(&mut self, action: impl Into<String>) {
        self.windowless.insert(action.into());
    }

    /// Queue a raw pump code for `window`.
    pub fn queue_event(&mut self, window: WindowHandle, code: i32) {
        self.events.entry(window).or_default().push_back(code);
    }

    pub fn request_shutdown(&mut self) {
        self.shutdown = true;
    }

    pub fn window_rect(&self, window: WindowHandle) -> Option<Rect> {
        self.windows
            .iter()
            .find(|w| w.handle == window)
            .map(|w| w.rect)
    }

    fn paint_window(surface: &mut dyn Surface, w: &HeadlessWindow, clip: Rect) {
        let Some(body) = w.rect.intersect(clip) else {
            return;
        };
        surface.fill_rect(body, w.color);
        let title = Rect::new(w.rect.x, w.rect.y, w.rect.w, 12);
        if let Some(t) = title.intersect(clip) {
            surface.fill_rect(t, Color::NAVY);
        }
    }
}

impl ProgramHost for HeadlessHost {
    fn is_running(&self, action: &str) -> bool {
        self.instances.iter().any(|i| i.action == action)
    }

    fn launch(&mut self, action: &str) -> DeskResult<InstanceHandle> {
        self.calls.push(HostCall::Launch(action.to_string()));
        if self.failing.contains(action) {
            return Err(DeskError::host(format!("cannot launch '{action}'")));
        }

        self.next_id += 1;
        let id = self.next_id;
        let mut windows = Vec::new();
        if !self.windowless.contains(action) {
            let handle = WindowHandle(id);
            let step = i32::try_from(self.windows.len() % 8).unwrap_or(0) * 24;
            self.windows.push(HeadlessWindow {
                handle,
                rect: Rect::new(40, 30, 240, 160).translate(step, step),
                color: Color(((id * 37) % 200 + 20) as u8),
            });
            // A new window changes stacking.
            self.queue_event(handle, -2);
            windows.push(handle);
        }

        let inst = InstanceHandle {
            id: InstanceId(id),
            action: action.to_string(),
            windows,
        };
        self.instances.push(inst.clone());
        Ok(inst)
    }

    fn running_count(&self) -> usize {
        self.instances.len()
    }

    fn instance(&self, index: usize) -> Option<&InstanceHandle> {
        self.instances.get(index)
    }

    fn restore_window(&mut self, window: WindowHandle) {
        self.calls.push(HostCall::Restore(window));
        if let Some(pos) = self.windows.iter().position(|w| w.handle == window) {
            let w = self.windows.remove(pos);
            self.windows.push(w);
            self.queue_event(window, -2);
        }
    }

    fn close_instance(&mut self, id: InstanceId) {
        self.calls.push(HostCall::Close(id));
        if let Some(pos) = self.instances.iter().position(|i| i.id == id) {
            let inst = self.instances.remove(pos);
            self.windows.retain(|w| !inst.windows.contains(&w.handle));
            for w in &inst.windows {
                self.events.remove(w);
            }
        }
    }

    fn pump_events(&mut self, window: WindowHandle) -> WindowEvent {
        let code = self
            .events
            .get_mut(&window)
            .and_then(VecDeque::pop_front)
            .unwrap_or(0);
        WindowEvent::from_code(code)
    }

    fn route_event(&mut self, window: WindowHandle, code: i32) -> RouteOutcome {
        self.calls.push(HostCall::Route(window, code));
        // Code 27 (escape) closes the window in this host.
        RouteOutcome {
            close_requested: code == 27,
        }
    }

    fn paint_windows(&mut self, surface: &mut dyn Surface) {
        self.calls.push(HostCall::PaintAll);
        let screen = surface.canvas().bounds();
        for w in &self.windows {
            Self::paint_window(surface, w, screen);
        }
    }

    fn invalidate(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.calls.push(HostCall::Invalidate(rect));
        for w in self.windows.iter().filter(|w| w.rect.intersects(rect)) {
            Self::paint_window(surface, w, rect);
        }
    }

    fn preview_cycle(&mut self) {
        self.calls.push(HostCall::PreviewCycle);
    }

    fn commit_cycle(&mut self) {
        self.calls.push(HostCall::CommitCycle);
        if self.windows.len() > 1 {
            let w = self.windows.remove(0);
            self.windows.push(w);
        }
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown
    }
}
