//! City tiles - the shapes stamped into each 10x10 footprint.

use crate::stamp::build_rectangle;
use crate::types::{Block, Color, Position, Size, TILE_SIZE};
use crate::world::VoxelGrid;

const ASPHALT: Block = Block::new(Color::White, ' ');
const LANE_MARK: Block = Block::new(Color::White, '*');

/// Content of one city tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    House { big: bool, floors: i32, color: Color },
    Road { horizontal: bool },
    Crossroad,
    Pyramid { color: Color, floor_height: i32 },
}

impl Tile {
    /// Write this tile into `grid` with its footprint starting at `origin`.
    pub fn stamp(&self, grid: &mut VoxelGrid, origin: Position) {
        match *self {
            Tile::House { big, floors, color } => {
                stamp_house(grid, origin.offset(2, 2, 0), big, floors, color)
            }
            Tile::Road { horizontal } => stamp_road(grid, origin, horizontal),
            Tile::Crossroad => {
                stamp_road(grid, origin, false);
                stamp_road(grid, origin, true);
                grid.fill_region(origin.offset(0, 3, 0), Size::new(TILE_SIZE, 5, 1), ASPHALT);
                grid.fill_region(origin.offset(3, 0, 0), Size::new(5, TILE_SIZE, 1), ASPHALT);
            }
            Tile::Pyramid {
                color,
                floor_height,
            } => {
                for i in 0..5 {
                    let side = TILE_SIZE - i * 2;
                    build_rectangle(
                        grid,
                        origin.offset(i, i, i * floor_height),
                        Size::new(side, side, floor_height),
                        color,
                    );
                }
            }
        }
    }
}

/// Picks the (x, z) pair for the road's orientation.
fn along(horizontal: bool, h: (i32, i32), v: (i32, i32)) -> (i32, i32) {
    if horizontal {
        h
    } else {
        v
    }
}

fn stamp_road(grid: &mut VoxelGrid, origin: Position, horizontal: bool) {
    let at = |(dx, dz): (i32, i32)| origin.offset(dx, dz, 0);
    let size = |(w, d): (i32, i32)| Size::new(w, d, 1);

    grid.fill_region(
        at(along(horizontal, (0, 2), (2, 0))),
        size(along(horizontal, (TILE_SIZE, 6), (6, TILE_SIZE))),
        ASPHALT,
    );

    let curb = Block::new(Color::White, if horizontal { '-' } else { '/' });
    let curb_size = size(along(horizontal, (TILE_SIZE, 1), (1, TILE_SIZE)));
    grid.fill_region(at(along(horizontal, (0, 2), (2, 0))), curb_size, curb);
    grid.fill_region(at(along(horizontal, (0, 8), (8, 0))), curb_size, curb);

    let mark_size = size(along(horizontal, (3, 1), (1, 3)));
    grid.fill_region(at(along(horizontal, (1, 5), (5, 1))), mark_size, LANE_MARK);
    grid.fill_region(at(along(horizontal, (6, 5), (5, 6))), mark_size, LANE_MARK);
}

fn stamp_house(grid: &mut VoxelGrid, position: Position, big: bool, floors: i32, color: Color) {
    if big {
        let height = floors * 5;
        build_rectangle(
            grid,
            position.offset(1, 1, 0),
            Size::new(8, 8, height),
            Color::White,
        );
        // Slab heights are absolute, not relative to `position.y`.
        for y in (2..height).step_by(5) {
            build_rectangle(
                grid,
                Position::new(position.x, position.z, y),
                Size::new(10, 10, 2),
                color,
            );
        }
    } else {
        let height = floors * 4;
        build_rectangle(grid, position, Size::new(5, 5, height), Color::White);
        let window = Size::new(1, 1, 2);
        for y in (2..height).step_by(4) {
            build_rectangle(grid, Position::new(position.x + 3, position.z + 5, y), window, color);
            build_rectangle(grid, Position::new(position.x + 5, position.z + 3, y), window, color);
        }
    }
}
