//! Voxel City (workspace facade crate).
//!
//! Re-exports `voxel_city::{core, term, types}` from the crates under `crates/`
//! and adds the driver-side pieces used by the binary: configuration and
//! logging setup.

pub mod config;
pub mod logging;

pub use voxel_city_core as core;
pub use voxel_city_term as term;
pub use voxel_city_types as types;

pub use config::CityConfig;
