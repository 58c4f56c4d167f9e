//! End-to-end: generate a city, freeze it, render frames and encode them.

use std::collections::HashMap;

use voxel_city::core::{generate_city, pick_tile, CityParams, SimpleRng, Tile, Wrapping};
use voxel_city::term::{encode_frame, DrawMode, IsometricView, TerminalRenderer, Viewport};
use voxel_city::types::{Position, TILE_SIZE};
use voxel_city::CityConfig;

/// Drop `ESC[...m` sequences, keeping the visible characters.
fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn road_grid_repeats_every_four_tiles() {
    let mut rng = SimpleRng::new(1);
    for tx in 0..9 {
        for tz in 0..9 {
            let tile = pick_tile(tx, tz, &mut rng);
            match (tx % 4 == 0, tz % 4 == 0) {
                (true, true) => assert_eq!(tile, Tile::Crossroad),
                (true, false) => assert_eq!(tile, Tile::Road { horizontal: false }),
                (false, true) => assert_eq!(tile, Tile::Road { horizontal: true }),
                (false, false) => assert!(matches!(
                    tile,
                    Tile::House { .. } | Tile::Pyramid { .. }
                )),
            }
        }
    }
}

#[test]
fn first_tile_is_a_paved_crossroad() {
    let grid = generate_city(CityParams::new(2, 2).with_seed(4)).unwrap();
    let glyph = |x, z| grid.block_at(Position::new(x, z, 0)).map(|b| b.glyph);

    // The junction paves over lane marks; curbs survive at the tile corners.
    for x in 0..TILE_SIZE {
        for z in 0..TILE_SIZE {
            assert_ne!(glyph(x, z), Some('*'), "({x}, {z})");
        }
    }
    assert_eq!(glyph(5, 5), Some(' '));
    assert_eq!(glyph(2, 2), Some('-'));
    assert_eq!(glyph(2, 0), Some('/'));
    assert_eq!(glyph(0, 0), Some('.'));
}

#[test]
fn structures_rise_above_the_floor() {
    // Tile (1, 1) is always a house or a pyramid, both at least 1 layer tall.
    let grid = generate_city(CityParams::new(2, 2).with_seed(21)).unwrap();
    let footprint = (TILE_SIZE + 2..2 * TILE_SIZE - 3)
        .flat_map(|x| (TILE_SIZE + 2..2 * TILE_SIZE - 3).map(move |z| (x, z)));
    let tall = footprint
        .filter(|&(x, z)| grid.block_at(Position::new(x, z, 0)).map(|b| b.glyph) != Some('.'))
        .count();
    assert!(tall > 0);
}

#[test]
fn encoded_frame_has_viewport_shape() {
    let world = generate_city(CityParams::new(2, 2).with_height(40))
        .unwrap()
        .into_world::<Wrapping>();
    let vp = Viewport::new(24, 12).with_offset(-4, 6);
    let text = encode_frame(&IsometricView::default().render(&world, vp));

    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 12);
    for line in &lines {
        let visible = strip_ansi(line);
        assert_eq!(visible.chars().count(), 24 * 2);
        // Every other character is a separating space.
        assert!(visible.chars().step_by(2).all(|c| c == ' '));
    }

    // Top and bottom rows are all frame glyphs in red.
    assert_eq!(lines[0], " \u{1b}[0;31m@".repeat(24));
    assert_eq!(lines[11], " \u{1b}[0;31m@".repeat(24));
}

#[test]
fn config_drives_a_capped_frame_loop() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("CITY_TILES_WIDE", "1"),
        ("CITY_TILES_DEEP", "1"),
        ("CITY_HEIGHT", "12"),
        ("CITY_VIEW_WIDTH", "8"),
        ("CITY_VIEW_HEIGHT", "5"),
        ("CITY_MAX_FRAMES", "3"),
        ("CITY_FRAME_MS", "0"),
    ]);
    let config = CityConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
    config.validate().unwrap();
    assert_eq!(config.frame_delay(), None);

    let world = generate_city(config.city_params())
        .unwrap()
        .into_world::<Wrapping>();
    let view = IsometricView::default();
    let mut term = TerminalRenderer::with_writer(Vec::new(), DrawMode::Append);

    for vp in config.frames().take(config.max_frames.unwrap()) {
        term.draw(&view.render(&world, vp)).unwrap();
    }
    assert_eq!(term.frames(), 3);

    let out = String::from_utf8(term.into_inner()).unwrap();
    // 3 frames of 5 rows each.
    assert_eq!(out.lines().count(), 15);
}
