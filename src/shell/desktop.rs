use std::path::PathBuf;

use smallvec::SmallVec;

use crate::{
    assets::wallpaper::{PlacementMode, WallpaperCache},
    compose::compositor::Compositor,
    compose::ledger::DirtyFrame,
    foundation::core::{Canvas, Point},
    foundation::error::DeskResult,
    foundation::palette::Color,
    render::dispatcher::{RedrawDispatcher, Repaint, Scene, cursor_rect, paint_cursor},
    render::icons::DesktopIcon,
    render::taskbar::{ButtonFace, Taskbar},
    shell::host::{InstanceId, ProgramHost, WindowEvent, WindowHandle},
    shell::input::{ClockTime, InputSource, KeySignal},
    shell::interaction::{ClickOutcome, TaskbarInteraction, resolve_click},
    shell::settings::DesktopSettings,
    surface::framebuffer::Surface,
    surface::text::TextPainter,
};

/// Which repaint strategy one frame ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRepaint {
    NoOp,
    Full,
    /// One partial repaint per drained dirty rect.
    Partial(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The host asked the loop to stop; nothing was polled or painted.
    pub shutdown: bool,
    pub repaint: FrameRepaint,
    pub presented: bool,
    pub clicks: SmallVec<[ClickOutcome; 1]>,
}

impl FrameOutcome {
    fn stopped() -> Self {
        Self {
            shutdown: true,
            repaint: FrameRepaint::NoOp,
            presented: false,
            clicks: SmallVec::new(),
        }
    }
}

/// The single owned visual state of the desktop.
///
/// Everything the frame loop and the settings entry point touch lives here and is passed
/// by `&mut`. There is no shared or global state.
#[derive(Debug)]
pub struct Desktop {
    settings: DesktopSettings,
    screen: Canvas,
    compositor: Compositor,
    wallpaper: WallpaperCache,
    taskbar: Taskbar,
    interaction: TaskbarInteraction,
    dispatcher: RedrawDispatcher,
    icons: Vec<DesktopIcon>,
    cursor: Point,
    last_cursor: Option<Point>,
    clock: ClockTime,
}

impl Desktop {
    #[tracing::instrument(skip(settings))]
    pub fn new(settings: DesktopSettings) -> Self {
        Self::with_compositor(settings, Compositor::new(Canvas::SCREEN))
    }

    /// Build around an existing compositor, e.g. one without a backing store.
    pub fn with_compositor(settings: DesktopSettings, mut compositor: Compositor) -> Self {
        let screen = compositor.screen();
        let mut wallpaper = WallpaperCache::new();
        wallpaper.cache(settings.wallpaper.as_deref(), settings.placement, screen);
        let mut taskbar = Taskbar::new(screen);
        taskbar.set_volume_level(settings.volume);
        compositor.mark_full();

        Self {
            settings,
            screen,
            compositor,
            wallpaper,
            taskbar,
            interaction: TaskbarInteraction::new(),
            dispatcher: RedrawDispatcher::new(screen),
            icons: Vec::new(),
            cursor: Point::ORIGIN,
            last_cursor: None,
            clock: ClockTime::default(),
        }
    }

    pub fn settings(&self) -> &DesktopSettings {
        &self.settings
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn wallpaper(&self) -> &WallpaperCache {
        &self.wallpaper
    }

    pub fn taskbar(&self) -> &Taskbar {
        &self.taskbar
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Settings entry point. Recaches the wallpaper only if path or mode changed and always
    /// schedules a full repaint. Returns whether a recache happened.
    #[tracing::instrument(skip(self))]
    pub fn apply_settings(
        &mut self,
        background: Color,
        wallpaper: Option<PathBuf>,
        placement: PlacementMode,
    ) -> bool {
        let recached = self
            .wallpaper
            .update(wallpaper.as_deref(), placement, self.screen);
        self.settings.background = background;
        self.settings.wallpaper = wallpaper;
        self.settings.placement = placement;
        self.compositor.mark_full();
        tracing::debug!(recached, "settings applied");
        recached
    }

    /// Add a program button to the taskbar. Fails when every slot is taken.
    pub fn add_program_button(
        &mut self,
        face: ButtonFace,
        action: impl Into<String>,
    ) -> DeskResult<usize> {
        let index = self.taskbar.push(face, action)?;
        self.compositor.mark_dirty(self.taskbar.band());
        Ok(index)
    }

    pub fn add_icon(&mut self, icon: DesktopIcon) {
        self.icons.push(icon);
        self.compositor.mark_full();
    }

    /// One loop iteration: poll, react, repaint, present.
    pub fn step(
        &mut self,
        surface: &mut dyn Surface,
        text: &dyn TextPainter,
        input: &mut dyn InputSource,
        host: &mut dyn ProgramHost,
    ) -> FrameOutcome {
        if host.shutdown_requested() {
            return FrameOutcome::stopped();
        }

        let pointer = input.poll_pointer();
        self.cursor = Point::new(
            pointer.x.clamp(0, self.screen.width_i32() - 1),
            pointer.y.clamp(0, self.screen.height_i32() - 1),
        );

        let fsm = self.interaction.poll(&mut self.taskbar, pointer);
        if fsm.taskbar_dirty {
            self.compositor.mark_dirty(self.taskbar.band());
        }
        let clicks: SmallVec<[ClickOutcome; 1]> = fsm
            .clicks
            .iter()
            .map(|c| resolve_click(host, &c.action))
            .collect();

        let now = input.clock();
        if (now.hour, now.minute) != (self.clock.hour, self.clock.minute) {
            self.clock = now;
            self.compositor.mark_dirty(self.taskbar.band());
        }

        match input.key_signal() {
            Some(KeySignal::CyclePreview) => host.preview_cycle(),
            Some(KeySignal::CommitCycle) => {
                host.commit_cycle();
                self.compositor.mark_full();
            }
            None => {}
        }

        self.pump_host(host);

        let moved = self.last_cursor != Some(self.cursor);
        if moved && !self.compositor.has_backing_store() {
            // Without a backing store the old cursor stays in the back buffer until repainted.
            if let Some(last) = self.last_cursor {
                self.compositor.mark_dirty(cursor_rect(last));
            }
        }

        let repaint = self.repaint(surface, text, host);
        let presented = repaint != FrameRepaint::NoOp || moved;
        if presented {
            self.present_with_cursor(surface);
        }
        self.last_cursor = Some(self.cursor);

        FrameOutcome {
            shutdown: false,
            repaint,
            presented,
            clicks,
        }
    }

    /// Run [`Desktop::step`] until the host requests shutdown. Returns the number of frames.
    pub fn run(
        &mut self,
        surface: &mut dyn Surface,
        text: &dyn TextPainter,
        input: &mut dyn InputSource,
        host: &mut dyn ProgramHost,
    ) -> u64 {
        let mut frames = 0;
        while !self.step(surface, text, input, host).shutdown {
            frames += 1;
            std::thread::yield_now();
        }
        tracing::debug!(frames, "desktop loop stopped");
        frames
    }

    fn pump_host(&mut self, host: &mut dyn ProgramHost) {
        let windows: Vec<(InstanceId, WindowHandle)> = (0..host.running_count())
            .filter_map(|i| host.instance(i))
            .flat_map(|inst| inst.windows.iter().map(move |&w| (inst.id, w)))
            .collect();

        let mut closed: SmallVec<[InstanceId; 4]> = SmallVec::new();
        for (id, window) in windows {
            if closed.contains(&id) {
                continue;
            }
            let close = match host.pump_events(window) {
                WindowEvent::None => false,
                WindowEvent::MajorStateChange => {
                    self.compositor.mark_full();
                    false
                }
                WindowEvent::Close => true,
                WindowEvent::Other(code) => host.route_event(window, code).close_requested,
            };
            if close {
                tracing::debug!(id = id.0, "closing instance");
                host.close_instance(id);
                closed.push(id);
                self.compositor.mark_full();
            }
        }
    }

    fn repaint(
        &mut self,
        surface: &mut dyn Surface,
        text: &dyn TextPainter,
        host: &mut dyn ProgramHost,
    ) -> FrameRepaint {
        let frame = self.compositor.take_dirty();
        let scene = Scene {
            background: self.settings.background,
            wallpaper: &self.wallpaper,
            taskbar: &self.taskbar,
            clock: self.clock,
            icons: &self.icons,
            text,
        };
        match frame {
            DirtyFrame::Clean => FrameRepaint::NoOp,
            DirtyFrame::Full => {
                self.dispatcher.dispatch(Repaint::Full, surface, &scene, host);
                FrameRepaint::Full
            }
            DirtyFrame::Regions(regions) => {
                tracing::debug!(count = regions.len(), "partial frame");
                for &r in &regions {
                    self.dispatcher
                        .dispatch(Repaint::Partial(r), surface, &scene, host);
                }
                FrameRepaint::Partial(regions.len())
            }
        }
    }

    /// Present with the cursor on top. With a backing store the cursor area is restored
    /// right after the present, so the back buffer never holds cursor pixels.
    fn present_with_cursor(&mut self, surface: &mut dyn Surface) {
        let at = self.cursor;
        if let Some(mut overlay) = self.compositor.preserve(&mut *surface, cursor_rect(at)) {
            paint_cursor(&mut *overlay, at);
            overlay.present();
            return;
        }
        paint_cursor(surface, at);
        surface.present();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/desktop.rs"]
mod tests;
