//! Wallpaper decoding and the single-entry wallpaper cache.

/// Image decoding into palette bitmaps.
pub mod decode;
/// Wallpaper cache and placement.
pub mod wallpaper;
