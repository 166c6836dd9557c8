//! Painting of the desktop layers and repaint-scope selection.

/// FULL / PARTIAL repaint selection and layer ordering.
pub mod dispatcher;
/// Desktop shortcut icons.
pub mod icons;
/// The taskbar band, its buttons, volume hotspot and clock.
pub mod taskbar;
