//! Voxel city runner (default binary).
//!
//! Generates a city once, then scrolls an isometric view over it forever (or
//! for `CITY_MAX_FRAMES` frames), printing each frame to stdout.

use std::thread;

use anyhow::{Context, Result};
use log::{info, trace};

use voxel_city::core::{generate_city, BlockSource, Bounded, Wrapping};
use voxel_city::logging;
use voxel_city::term::{IsometricView, ScreenBuffer, TerminalRenderer};
use voxel_city::CityConfig;

fn main() -> Result<()> {
    logging::init();

    let config = CityConfig::from_env();
    config.validate()?;
    info!(
        "Viewport {}x{} from ({}, {}), step ({}, {}), {} world, {} drawing",
        config.view_width,
        config.view_height,
        config.offset_x,
        config.offset_y,
        config.step_x,
        config.step_y,
        if config.bounded { "bounded" } else { "wrapping" },
        config.draw_mode.as_str()
    );

    let grid = generate_city(config.city_params()).context("failed to generate city")?;

    let mut term = TerminalRenderer::new(config.draw_mode);
    term.enter()?;

    let result = if config.bounded {
        run(&grid.into_world::<Bounded>(), &config, &mut term)
    } else {
        run(&grid.into_world::<Wrapping>(), &config, &mut term)
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<W>(world: &W, config: &CityConfig, term: &mut TerminalRenderer) -> Result<()>
where
    W: BlockSource + ?Sized,
{
    let view = IsometricView::default();
    let mut fb = ScreenBuffer::new(config.view_width, config.view_height);
    let delay = config.frame_delay();

    for viewport in config.frames().take(config.max_frames.unwrap_or(usize::MAX)) {
        trace!(
            "frame {}: offset ({}, {})",
            term.frames(),
            viewport.offset_x,
            viewport.offset_y
        );
        view.render_into(world, viewport, &mut fb);
        term.draw(&fb)?;

        if let Some(delay) = delay {
            thread::sleep(delay);
        }
    }

    info!("Rendered {} frames", term.frames());
    Ok(())
}
