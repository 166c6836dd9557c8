//! The desktop shell: owned visual state, the frame loop, and its collaborators.

/// The `Desktop` context and its frame loop.
pub mod desktop;
/// In-memory input and program host.
pub mod headless;
/// Program lifecycle and window management collaborator.
pub mod host;
/// Pointer, clock and key polling.
pub mod input;
/// Taskbar hotspot press/release state machine.
pub mod interaction;
/// Persisted desktop preferences.
pub mod settings;
