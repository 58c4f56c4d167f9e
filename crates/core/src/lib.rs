//! Core world module - voxel storage, addressing and city generation
//!
//! This crate holds everything that produces or stores voxels. It has no
//! dependency on terminals or output, which keeps it:
//!
//! - **Deterministic**: the same seed always builds the same city
//! - **Testable**: every stamping rule is checked cell by cell
//! - **Total**: writes clip to the grid and lookups never fault
//!
//! # Module Structure
//!
//! - [`world`]: [`VoxelGrid`] (mutable, used while generating) and
//!   [`VoxelWorld`] (read-only, bounded or wrapping lookups)
//! - [`stamp`]: box stamping and the edge classification used for walls
//! - [`tile`]: road, crossroad, house and pyramid tiles
//! - [`city`]: the generator that lays tiles, floor and trees on a grid
//! - [`rng`]: seeded LCG used by the generator
//!
//! # Example
//!
//! ```
//! use voxel_city_core::{generate_city, CityParams, Wrapping};
//! use voxel_city_core::types::Position;
//!
//! let grid = generate_city(CityParams::new(2, 2).with_seed(9)).unwrap();
//! let world = grid.into_world::<Wrapping>();
//!
//! // The floor tiles forever.
//! assert_eq!(
//!     world.block_at(Position::new(-1, -1, 0)),
//!     world.block_at(Position::new(19, 19, 0)),
//! );
//! ```

pub mod city;
pub mod error;
pub mod rng;
pub mod stamp;
pub mod tile;
pub mod world;

pub use voxel_city_types as types;

pub use city::{generate_city, pick_tile, CityParams};
pub use error::WorldError;
pub use rng::SimpleRng;
pub use stamp::{build_rectangle, classify_edge, EdgeKind};
pub use tile::Tile;
pub use world::{wrap, Addressing, BlockSource, Bounded, VoxelGrid, VoxelWorld, Wrapping};
