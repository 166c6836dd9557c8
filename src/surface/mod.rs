//! Driver-layer primitives: the framebuffer contract, bitmaps, and text painting.

/// Decoded palette bitmaps.
pub mod bitmap;
/// Framebuffer trait and the in-memory implementation.
pub mod framebuffer;
/// Font collaborator trait and the headless block font.
pub mod text;
