//! Rectangle stamping and edge classification.
//!
//! Walls of houses and pyramid levels are drawn as hollow-looking boxes: every
//! cell of the box is filled, but cells on the box's edges get line glyphs so
//! the outline reads clearly once projected.

use crate::types::{Block, Color, Position, Size};
use crate::world::VoxelGrid;

/// Where a cell sits relative to the edges of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// At least two edge kinds meet.
    Corner,
    /// Corner pillar running along y.
    Vertical,
    /// Top or bottom edge running along z.
    Depth,
    /// Top or bottom edge running along x.
    Horizontal,
    /// Face or interior cell.
    Face,
}

impl EdgeKind {
    pub const fn glyph(&self) -> char {
        match self {
            EdgeKind::Corner => '@',
            EdgeKind::Vertical => '|',
            EdgeKind::Depth => '/',
            EdgeKind::Horizontal => '-',
            EdgeKind::Face => ' ',
        }
    }
}

#[inline]
fn on_bound(value: i32, start: i32, extent: i32) -> bool {
    let last = i64::from(start) + i64::from(extent) - 1;
    value == start || i64::from(value) == last
}

/// Classify `at` against the box at `origin` with `size`.
///
/// # Examples
///
/// ```
/// use voxel_city_core::{classify_edge, EdgeKind};
/// use voxel_city_core::types::{Position, Size};
///
/// let origin = Position::new(0, 0, 0);
/// let size = Size::new(3, 3, 3);
/// assert_eq!(classify_edge(Position::new(2, 2, 2), origin, size), EdgeKind::Corner);
/// assert_eq!(classify_edge(Position::new(0, 0, 1), origin, size), EdgeKind::Vertical);
/// ```
pub fn classify_edge(at: Position, origin: Position, size: Size) -> EdgeKind {
    let on_x = on_bound(at.x, origin.x, size.width);
    let on_z = on_bound(at.z, origin.z, size.depth);
    let on_y = on_bound(at.y, origin.y, size.height);

    let vertical = on_x && on_z;
    let depth = on_x && on_y;
    let horizontal = on_z && on_y;

    if (vertical && depth) || (vertical && horizontal) || (depth && horizontal) {
        EdgeKind::Corner
    } else if vertical {
        EdgeKind::Vertical
    } else if depth {
        EdgeKind::Depth
    } else if horizontal {
        EdgeKind::Horizontal
    } else {
        EdgeKind::Face
    }
}

/// Fill a box in `color` with edge glyphs from [`classify_edge`].
pub fn build_rectangle(grid: &mut VoxelGrid, position: Position, size: Size, color: Color) {
    grid.fill_region_with(position, size, |at| {
        Block::new(color, classify_edge(at, position, size).glyph())
    });
}
