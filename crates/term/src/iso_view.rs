//! IsometricView: projects a voxel world into a screen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! A voxel at `(x, z, y)` lands on
//!
//! ```text
//! row = z - y - offset_y
//! col = x - z - offset_x
//! ```
//!
//! so depth shears both axes and height lifts content upward. Only the interior
//! of the viewport receives world content; the outer ring is the frame.

use crate::core::BlockSource;
use crate::fb::ScreenBuffer;
use crate::types::{Block, Position, FRAME_COLOR, FRAME_GLYPH};

/// Rendering window and its scroll position in projected space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// The same window shifted by `(dx, dy)`.
    pub fn scrolled(self, dx: i32, dy: i32) -> Self {
        Self {
            offset_x: self.offset_x.saturating_add(dx),
            offset_y: self.offset_y.saturating_add(dy),
            ..self
        }
    }

    /// Whether a projected `(row, col)` falls strictly inside the frame.
    pub fn is_interior(&self, row: i64, col: i64) -> bool {
        row > 0 && row < i64::from(self.height) - 1 && col > 0 && col < i64::from(self.width) - 1
    }
}

/// Screen `(row, col)` of a world position. May lie outside the viewport.
pub fn project(position: Position, viewport: &Viewport) -> (i64, i64) {
    let (x, z, y) = (
        i64::from(position.x),
        i64::from(position.z),
        i64::from(position.y),
    );
    let row = z - y - i64::from(viewport.offset_y);
    let col = x - z - i64::from(viewport.offset_x);
    (row, col)
}

/// Isometric renderer for block worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsometricView {
    frame: Block,
}

impl Default for IsometricView {
    fn default() -> Self {
        Self {
            frame: Block::new(FRAME_COLOR, FRAME_GLYPH),
        }
    }
}

impl IsometricView {
    pub fn with_frame(mut self, frame: Block) -> Self {
        self.frame = frame;
        self
    }

    pub fn frame(&self) -> Block {
        self.frame
    }

    /// Render `world` into an existing buffer.
    ///
    /// Allocation-free once `fb` has the viewport's size. Voxels are painted in
    /// ascending y, then z, then x, later ones covering earlier ones, so the
    /// topmost and then frontmost voxel of a screen cell wins. The frame is
    /// drawn last and always covers world content.
    pub fn render_into<W>(&self, world: &W, viewport: Viewport, fb: &mut ScreenBuffer)
    where
        W: BlockSource + ?Sized,
    {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        place_world(world, viewport, fb);
        fb.draw_border(self.frame);
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render<W>(&self, world: &W, viewport: Viewport) -> ScreenBuffer
    where
        W: BlockSource + ?Sized,
    {
        let mut fb = ScreenBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }
}

/// Walk the inverse image of the interior rectangle, layer by layer.
///
/// For a fixed layer each interior cell has exactly one preimage, at
/// `z = row + y + offset_y` and `x = col + z + offset_x`. Ascending rows are
/// ascending z and ascending columns are ascending x, so this visits exactly
/// the voxels that can land inside the frame, in painting order.
fn place_world<W>(world: &W, viewport: Viewport, fb: &mut ScreenBuffer)
where
    W: BlockSource + ?Sized,
{
    if viewport.width < 3 || viewport.height < 3 {
        return;
    }
    let layers = i32::try_from(world.layers()).unwrap_or(i32::MAX);
    let offset_x = i64::from(viewport.offset_x);
    let offset_y = i64::from(viewport.offset_y);

    for y in 0..layers {
        for row in 1..viewport.height - 1 {
            let Ok(z) = i32::try_from(i64::from(row) + i64::from(y) + offset_y) else {
                continue;
            };
            for col in 1..viewport.width - 1 {
                let Ok(x) = i32::try_from(i64::from(col) + i64::from(z) + offset_x) else {
                    continue;
                };
                if let Some(block) = world.block_at(Position::new(x, z, y)) {
                    fb.put(col, row, block);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VoxelGrid;
    use crate::types::Color;

    #[test]
    fn project_follows_isometric_formula() {
        let vp = Viewport::new(20, 20).with_offset(3, -2);
        assert_eq!(project(Position::new(10, 4, 1), &vp), (4 - 1 + 2, 10 - 4 - 3));
        assert_eq!(project(Position::new(0, 0, 0), &Viewport::new(1, 1)), (0, 0));
    }

    #[test]
    fn interior_excludes_frame_ring() {
        let vp = Viewport::new(5, 4);
        assert!(vp.is_interior(1, 1));
        assert!(vp.is_interior(2, 3));
        assert!(!vp.is_interior(0, 2));
        assert!(!vp.is_interior(3, 2));
        assert!(!vp.is_interior(1, 0));
        assert!(!vp.is_interior(1, 4));
        assert!(!vp.is_interior(-1, 2));
    }

    #[test]
    fn scrolled_shifts_offsets_only() {
        let vp = Viewport::new(8, 6).with_offset(1, 1).scrolled(-1, 2);
        assert_eq!(vp, Viewport::new(8, 6).with_offset(0, 3));
        let far = Viewport::new(8, 6).with_offset(i32::MAX, 0).scrolled(1, 0);
        assert_eq!(far.offset_x, i32::MAX);
    }

    #[test]
    fn single_voxel_lands_on_projection() {
        let mut grid = VoxelGrid::new(10, 10, 3).unwrap();
        let block = Block::new(Color::Cyan, '#');
        grid.set_block(Position::new(7, 3, 1), block);

        let vp = Viewport::new(12, 12);
        let fb = IsometricView::default().render(&grid, vp);
        // row = 3 - 1 = 2, col = 7 - 3 = 4
        assert_eq!(fb.block(4, 2), Some(block));
        let placed = fb.cells().iter().filter(|c| **c == Some(block)).count();
        assert_eq!(placed, 1);
    }

    #[test]
    fn tiny_viewports_are_all_frame() {
        let mut grid = VoxelGrid::new(4, 4, 1).unwrap();
        grid.fill_region(
            Position::new(0, 0, 0),
            crate::types::Size::new(4, 4, 1),
            Block::new(Color::Green, '.'),
        );
        let view = IsometricView::default();
        for (w, h) in [(0, 0), (1, 1), (2, 5), (5, 2)] {
            let fb = view.render(&grid, Viewport::new(w, h));
            assert!(fb.cells().iter().all(|c| *c == Some(view.frame())));
        }
    }

    #[test]
    fn custom_frame_block() {
        let frame = Block::new(Color::Blue, '+');
        let grid = VoxelGrid::new(1, 1, 1).unwrap();
        let fb = IsometricView::default()
            .with_frame(frame)
            .render(&grid, Viewport::new(3, 3));
        assert_eq!(fb.block(0, 0), Some(frame));
        assert_eq!(fb.block(1, 1), None);
    }
}
