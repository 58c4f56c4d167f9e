//! Terminal rendering layer for the voxel city.
//!
//! This is a small rendering pipeline: project the world into a screen buffer,
//! frame it, encode it as ANSI text and flush it to a terminal.
//!
//! Goals:
//! - Keep projection pure and testable (no I/O outside [`renderer`])
//! - Reuse one buffer across frames
//! - Keep the output format byte-for-byte stable (`ESC[0;<code>m<glyph>` tokens)

pub mod ansi;
pub mod fb;
pub mod frames;
pub mod iso_view;
pub mod renderer;

pub use voxel_city_core as core;
pub use voxel_city_types as types;

pub use ansi::{encode_frame, encode_frame_into};
pub use fb::ScreenBuffer;
pub use frames::{ViewportFrames, DEFAULT_STEP};
pub use iso_view::{project, IsometricView, Viewport};
pub use renderer::{DrawMode, TerminalRenderer};
