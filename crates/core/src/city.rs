//! City generation - lays out tiles, floor and trees on a fresh grid.

use log::{debug, info};

use crate::error::WorldError;
use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{Block, Color, Position, Size, DEFAULT_WORLD_HEIGHT, TILE_SIZE};
use crate::world::VoxelGrid;

/// Every fourth tile row/column is a road.
const ROAD_PERIOD: usize = 4;

const GRASS: Block = Block::new(Color::Green, '.');

/// Parameters for [`generate_city`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityParams {
    /// Tiles along x.
    pub tiles_wide: usize,
    /// Tiles along z.
    pub tiles_deep: usize,
    /// Vertical layers.
    pub height: usize,
    pub seed: u32,
}

impl Default for CityParams {
    fn default() -> Self {
        Self {
            tiles_wide: 2,
            tiles_deep: 2,
            height: DEFAULT_WORLD_HEIGHT as usize,
            seed: 1,
        }
    }
}

impl CityParams {
    pub fn new(tiles_wide: usize, tiles_deep: usize) -> Self {
        Self {
            tiles_wide,
            tiles_deep,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

/// Which tile goes at tile coordinates `(tile_x, tile_z)`.
///
/// Roads and crossroads are fixed by position; everything else is drawn from `rng`.
pub fn pick_tile(tile_x: usize, tile_z: usize, rng: &mut SimpleRng) -> Tile {
    let vertical_road = tile_x % ROAD_PERIOD == 0;
    let horizontal_road = tile_z % ROAD_PERIOD == 0;

    match (vertical_road, horizontal_road) {
        (true, true) => Tile::Crossroad,
        (true, false) => Tile::Road { horizontal: false },
        (false, true) => Tile::Road { horizontal: true },
        (false, false) => random_structure(rng),
    }
}

fn random_structure(rng: &mut SimpleRng) -> Tile {
    if rng.one_in(5) {
        Tile::Pyramid {
            color: rng.color(),
            floor_height: rng.roll(3),
        }
    } else {
        Tile::House {
            big: rng.one_in(7),
            floors: rng.roll(4),
            color: rng.color(),
        }
    }
}

/// Build a complete city grid.
pub fn generate_city(params: CityParams) -> Result<VoxelGrid, WorldError> {
    let tile = TILE_SIZE as usize;
    let width = params.tiles_wide.saturating_mul(tile);
    let depth = params.tiles_deep.saturating_mul(tile);
    let mut grid = VoxelGrid::new(width, depth, params.height)?;
    let mut rng = SimpleRng::new(params.seed);

    info!(
        "Generating city: {}x{} tiles ({}x{}x{} voxels), seed={}",
        params.tiles_wide, params.tiles_deep, width, depth, params.height, params.seed
    );

    // The grid dimensions were validated to fit in i32 above.
    grid.fill_region(
        Position::new(0, 0, 0),
        Size::new(width as i32, depth as i32, 1),
        GRASS,
    );

    for tile_x in 0..params.tiles_wide {
        for tile_z in 0..params.tiles_deep {
            let origin = Position::new(tile_x as i32 * TILE_SIZE, tile_z as i32 * TILE_SIZE, 0);
            let tile = pick_tile(tile_x, tile_z, &mut rng);
            debug!("tile ({tile_x}, {tile_z}): {tile:?}");
            tile.stamp(&mut grid, origin);
        }
    }

    let trees = plant_trees(&mut grid, &mut rng);
    info!(
        "City ready: {} trees, {} filled voxels",
        trees,
        grid.filled_count()
    );

    Ok(grid)
}

/// Grow `^` columns on free grass cells. Returns the number of trees planted.
fn plant_trees(grid: &mut VoxelGrid, rng: &mut SimpleRng) -> usize {
    let mut planted = 0;
    for z in 0..grid.depth() as i32 {
        for x in 0..grid.width() as i32 {
            let is_grass = grid
                .block_at(Position::new(x, z, 0))
                .is_some_and(|b| b.glyph == GRASS.glyph);
            if !is_grass || !rng.one_in(20) {
                continue;
            }

            let height = rng.next_range(5) as i32 + 2;
            let color = if rng.one_in(2) {
                Color::Green
            } else {
                Color::Yellow
            };
            grid.fill_region(
                Position::new(x, z, 1),
                Size::new(1, 1, height),
                Block::new(color, '^'),
            );
            planted += 1;
        }
    }
    planted
}
