use std::collections::HashMap;
use std::time::Duration;

use voxel_city::term::{DrawMode, Viewport};
use voxel_city::config::MAX_VOXELS;
use voxel_city::CityConfig;

fn config_from(pairs: &[(&str, &str)]) -> CityConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CityConfig::from_lookup(|k| env.get(k).cloned())
}

#[test]
fn defaults_describe_a_two_by_two_city() {
    let config = CityConfig::default();
    assert_eq!((config.tiles_wide, config.tiles_deep, config.height), (2, 2, 100));
    assert_eq!(config.start_viewport(), Viewport::new(60, 40));
    assert_eq!((config.step_x, config.step_y), (-1, 2));
    assert_eq!(config.max_frames, None);
    assert!(!config.bounded);
    assert_eq!(config.draw_mode, DrawMode::Append);
    assert_eq!(config.frame_delay(), Some(Duration::from_millis(100)));
}

#[test]
fn variables_override_defaults() {
    let config = config_from(&[
        ("CITY_TILES_WIDE", "5"),
        ("CITY_SEED", "777"),
        ("CITY_OFFSET_X", "-12"),
        ("CITY_OFFSET_Y", " 4 "),
        ("CITY_STEP_X", "0"),
        ("CITY_BOUNDED", "true"),
        ("CITY_DRAW_MODE", "home"),
        ("CITY_MAX_FRAMES", "10"),
    ]);
    assert_eq!(config.tiles_wide, 5);
    assert_eq!(config.tiles_deep, 2);
    assert_eq!(config.seed, 777);
    assert_eq!(config.city_params().seed, 777);
    assert_eq!(config.start_viewport(), Viewport::new(60, 40).with_offset(-12, 4));
    assert!(config.bounded);
    assert_eq!(config.draw_mode, DrawMode::Home);
    assert_eq!(config.max_frames, Some(10));
}

#[test]
fn unparsable_values_fall_back() {
    let config = config_from(&[
        ("CITY_VIEW_WIDTH", "wide"),
        ("CITY_VIEW_HEIGHT", "-3"),
        ("CITY_DRAW_MODE", "sideways"),
        ("CITY_BOUNDED", "maybe"),
    ]);
    assert_eq!(config.view_width, 60);
    assert_eq!(config.view_height, 40);
    assert_eq!(config.draw_mode, DrawMode::Append);
    assert!(!config.bounded);
}

#[test]
fn frames_follow_configured_step() {
    let config = config_from(&[("CITY_STEP_X", "3"), ("CITY_STEP_Y", "-1")]);
    let offsets: Vec<(i32, i32)> = config
        .frames()
        .take(3)
        .map(|vp| (vp.offset_x, vp.offset_y))
        .collect();
    assert_eq!(offsets, vec![(0, 0), (3, -1), (6, -2)]);
}

#[test]
fn validate_rejects_empty_worlds() {
    assert!(config_from(&[("CITY_TILES_DEEP", "0")]).validate().is_err());
    assert!(config_from(&[("CITY_HEIGHT", "0")]).validate().is_err());
    assert!(CityConfig::default().validate().is_ok());
}

#[test]
fn validate_rejects_unallocatable_worlds() {
    let err = config_from(&[("CITY_TILES_WIDE", "100000"), ("CITY_HEIGHT", "100000")])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("exceeds"));

    let overflow = config_from(&[
        ("CITY_TILES_WIDE", &usize::MAX.to_string()),
        ("CITY_TILES_DEEP", &usize::MAX.to_string()),
    ]);
    assert!(overflow.validate().is_err());

    // The default 2 * 2 tiles give 400 cells per layer.
    let at_limit = config_from(&[("CITY_HEIGHT", &(MAX_VOXELS / 400).to_string())]);
    assert!(at_limit.validate().is_ok());
}

#[test]
fn zero_frame_ms_disables_pacing() {
    assert_eq!(config_from(&[("CITY_FRAME_MS", "0")]).frame_delay(), None);
}
