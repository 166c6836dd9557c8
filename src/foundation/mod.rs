//! Shared value types: geometry, palette colors, screen constants, and errors.

pub mod core;
pub mod error;
pub mod geom;
pub mod palette;
