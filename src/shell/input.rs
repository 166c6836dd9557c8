/// Bit of [`PointerState::buttons`] for the primary (left) button.
pub const PRIMARY_BUTTON: u8 = 0x01;

/// One pointer poll: position plus button mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub buttons: u8,
}

impl PointerState {
    pub const fn new(x: i32, y: i32, buttons: u8) -> Self {
        Self { x, y, buttons }
    }

    pub fn primary_down(self) -> bool {
        self.buttons & PRIMARY_BUTTON != 0
    }
}

/// Wall-clock reading shown in the taskbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// `HH:MM`, 24-hour.
    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.hour % 24, self.minute % 60)
    }
}

/// Two-valued discrete key signal for window cycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySignal {
    /// Advance the cycle preview (e.g. Alt held, Tab pressed).
    CyclePreview,
    /// Commit the previewed window (Alt released).
    CommitCycle,
}

/// Input and timer polling, consumed once per loop iteration.
pub trait InputSource {
    fn poll_pointer(&mut self) -> PointerState;

    fn clock(&mut self) -> ClockTime;

    /// Pending key signal, consumed on read.
    fn key_signal(&mut self) -> Option<KeySignal>;
}
