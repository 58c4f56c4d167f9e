//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the city renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world generation, projection, terminal output).
//!
//! # Axes
//!
//! The world uses three integer axes:
//!
//! - **x**: horizontal, grows to the right on screen
//! - **z**: horizontal depth, shears both screen axes
//! - **y**: vertical height, shifts content upward on screen
//!
//! # City Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 10 | Footprint of one city tile (cells per side) |
//! | `DEFAULT_WORLD_HEIGHT` | 100 | Number of vertical layers in a generated city |
//! | `DEFAULT_VIEW_WIDTH` | 60 | Default viewport width in cells |
//! | `DEFAULT_VIEW_HEIGHT` | 40 | Default viewport height in cells |
//! | `FRAME_GLYPH` | `@` | Glyph drawn along the viewport frame |
//!
//! # Examples
//!
//! ```
//! use voxel_city_types::{Block, Color, Position};
//!
//! let block = Block::new(Color::Green, '.');
//! assert_eq!(block.color.code(), 32);
//!
//! // Parse from an ANSI code
//! assert_eq!(Color::from_code(36), Some(Color::Cyan));
//! assert_eq!(Color::from_code(90), None);
//!
//! // Offsets compose component-wise
//! let p = Position::new(1, 2, 3).offset(10, 0, -3);
//! assert_eq!(p, Position::new(11, 2, 0));
//! ```

/// Footprint of one city tile (10x10 cells)
pub const TILE_SIZE: i32 = 10;

/// Vertical layers in a generated city
pub const DEFAULT_WORLD_HEIGHT: i32 = 100;

/// Default viewport width in cells
pub const DEFAULT_VIEW_WIDTH: u16 = 60;

/// Default viewport height in cells
pub const DEFAULT_VIEW_HEIGHT: u16 = 40;

/// Glyph drawn along all four edges of the viewport
pub const FRAME_GLYPH: char = '@';

/// Color of the viewport frame
pub const FRAME_COLOR: Color = Color::Red;

/// A point in the world grid, or a relative offset while stamping shapes.
///
/// Field order follows the grid: `x` and `z` span the ground plane, `y` is height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub z: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    /// Shift the position by the given deltas.
    pub const fn offset(self, dx: i32, dz: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
            y: self.y + dy,
        }
    }
}

/// Extents of a stamped region.
///
/// Any extent `<= 0` makes the region empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub depth: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, depth: i32, height: i32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.depth <= 0 || self.height <= 0
    }
}

/// The eight terminal colors
///
/// Each variant maps to a fixed ANSI SGR foreground code (30-37). The codes are
/// part of the output format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// ANSI SGR foreground code
    ///
    /// # Examples
    ///
    /// ```
    /// use voxel_city_types::Color;
    ///
    /// assert_eq!(Color::Black.code(), 30);
    /// assert_eq!(Color::White.code(), 37);
    /// ```
    pub const fn code(&self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    /// Parse a color from its ANSI SGR foreground code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            30 => Some(Color::Black),
            31 => Some(Color::Red),
            32 => Some(Color::Green),
            33 => Some(Color::Yellow),
            34 => Some(Color::Blue),
            35 => Some(Color::Magenta),
            36 => Some(Color::Cyan),
            37 => Some(Color::White),
            _ => None,
        }
    }
}

/// A colored glyph occupying one voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub color: Color,
    pub glyph: char,
}

impl Block {
    pub const fn new(color: Color, glyph: char) -> Self {
        Self { color, glyph }
    }
}

/// A cell of the world grid or of a screen buffer
///
/// - `None`: empty
/// - `Some(Block)`: filled with a colored glyph
pub type Cell = Option<Block>;
