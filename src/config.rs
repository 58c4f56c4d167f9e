//! Runtime configuration read from `CITY_*` environment variables.
//!
//! Every variable is optional; missing or unparsable values fall back to the
//! defaults below. [`CityConfig::validate`] caps the generated world at
//! [`MAX_VOXELS`] cells.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CITY_TILES_WIDE` / `CITY_TILES_DEEP` | 2 / 2 |
//! | `CITY_HEIGHT` | 100 |
//! | `CITY_SEED` | 1 |
//! | `CITY_VIEW_WIDTH` / `CITY_VIEW_HEIGHT` | 60 / 40 |
//! | `CITY_OFFSET_X` / `CITY_OFFSET_Y` | 0 / 0 |
//! | `CITY_STEP_X` / `CITY_STEP_Y` | -1 / 2 |
//! | `CITY_FRAME_MS` | 100 |
//! | `CITY_MAX_FRAMES` | unset (run forever) |
//! | `CITY_BOUNDED` | false |
//! | `CITY_DRAW_MODE` | `append` |

use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::core::CityParams;
use crate::term::{DrawMode, Viewport, ViewportFrames, DEFAULT_STEP};
use crate::types::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, DEFAULT_WORLD_HEIGHT, TILE_SIZE};

/// Largest world the driver will try to allocate (2 GiB of cells).
pub const MAX_VOXELS: u64 = 1 << 28;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityConfig {
    pub tiles_wide: usize,
    pub tiles_deep: usize,
    pub height: usize,
    pub seed: u32,
    pub view_width: u16,
    pub view_height: u16,
    pub offset_x: i32,
    pub offset_y: i32,
    pub step_x: i32,
    pub step_y: i32,
    pub frame_ms: u64,
    pub max_frames: Option<usize>,
    /// Render a bounded world instead of an endlessly tiled one.
    pub bounded: bool,
    pub draw_mode: DrawMode,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            tiles_wide: 2,
            tiles_deep: 2,
            height: DEFAULT_WORLD_HEIGHT as usize,
            seed: 1,
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            offset_x: 0,
            offset_y: 0,
            step_x: DEFAULT_STEP.0,
            step_y: DEFAULT_STEP.1,
            frame_ms: 100,
            max_frames: None,
            bounded: false,
            draw_mode: DrawMode::Append,
        }
    }
}

impl CityConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();

        Self {
            tiles_wide: parsed(&lookup, "CITY_TILES_WIDE").unwrap_or(d.tiles_wide),
            tiles_deep: parsed(&lookup, "CITY_TILES_DEEP").unwrap_or(d.tiles_deep),
            height: parsed(&lookup, "CITY_HEIGHT").unwrap_or(d.height),
            seed: parsed(&lookup, "CITY_SEED").unwrap_or(d.seed),
            view_width: parsed(&lookup, "CITY_VIEW_WIDTH").unwrap_or(d.view_width),
            view_height: parsed(&lookup, "CITY_VIEW_HEIGHT").unwrap_or(d.view_height),
            offset_x: parsed(&lookup, "CITY_OFFSET_X").unwrap_or(d.offset_x),
            offset_y: parsed(&lookup, "CITY_OFFSET_Y").unwrap_or(d.offset_y),
            step_x: parsed(&lookup, "CITY_STEP_X").unwrap_or(d.step_x),
            step_y: parsed(&lookup, "CITY_STEP_Y").unwrap_or(d.step_y),
            frame_ms: parsed(&lookup, "CITY_FRAME_MS").unwrap_or(d.frame_ms),
            max_frames: parsed(&lookup, "CITY_MAX_FRAMES").or(d.max_frames),
            bounded: lookup("CITY_BOUNDED")
                .map(|v| parse_flag(&v))
                .unwrap_or(d.bounded),
            draw_mode: lookup("CITY_DRAW_MODE")
                .and_then(|v| DrawMode::from_str(&v))
                .unwrap_or(d.draw_mode),
        }
    }

    /// Reject settings that cannot produce a world.
    pub fn validate(&self) -> Result<()> {
        if self.tiles_wide == 0 || self.tiles_deep == 0 {
            bail!(
                "city needs at least one tile on each axis (CITY_TILES_WIDE={}, CITY_TILES_DEEP={})",
                self.tiles_wide,
                self.tiles_deep
            );
        }
        if self.height == 0 {
            bail!("CITY_HEIGHT must be at least 1");
        }

        let tile = TILE_SIZE as u64;
        let voxels = [self.tiles_wide, self.tiles_deep, self.height]
            .iter()
            .try_fold(tile * tile, |acc, &n| acc.checked_mul(n as u64));
        if !voxels.is_some_and(|v| v <= MAX_VOXELS) {
            bail!(
                "city of {}x{} tiles and height {} exceeds {} voxels",
                self.tiles_wide,
                self.tiles_deep,
                self.height,
                MAX_VOXELS
            );
        }
        Ok(())
    }

    pub fn city_params(&self) -> CityParams {
        CityParams::new(self.tiles_wide, self.tiles_deep)
            .with_height(self.height)
            .with_seed(self.seed)
    }

    pub fn start_viewport(&self) -> Viewport {
        Viewport::new(self.view_width, self.view_height).with_offset(self.offset_x, self.offset_y)
    }

    pub fn frames(&self) -> ViewportFrames {
        ViewportFrames::with_step(self.start_viewport(), self.step_x, self.step_y)
    }

    /// Pause between frames, if any.
    pub fn frame_delay(&self) -> Option<Duration> {
        (self.frame_ms > 0).then(|| Duration::from_millis(self.frame_ms))
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_one_and_true() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        assert_eq!(CityConfig::from_lookup(|_| None), CityConfig::default());
    }
}
