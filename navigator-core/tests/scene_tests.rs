use navigator_core::config::SpriteConfig;
use navigator_core::terrain::{self, TerrainConfig};
use navigator_core::{DrawCommand, NavigatorConfig, NavigatorError, Rect, Rgb, Scene};

fn scene_for_width(width: i32) -> Scene {
    let t = terrain::generate(&TerrainConfig::default(), width).unwrap();
    Scene::new(t, SpriteConfig::default())
}

// ============================================================================
// Frame Order
// ============================================================================

#[test]
fn test_frame_paint_order() {
    let frame = scene_for_width(1024).frame();
    assert_eq!(frame.len(), 3);
    assert_eq!(frame[0], DrawCommand::Clear(Rgb::BLACK));
    assert!(matches!(
        &frame[1],
        DrawCommand::Polyline { color, points } if *color == Rgb::WHITE && points.len() == 9
    ));
    assert_eq!(
        frame[2],
        DrawCommand::Sprite {
            dest: Rect::new(10, 200, 64, 24)
        }
    );
}

#[test]
fn test_polyline_matches_terrain() {
    let scene = scene_for_width(1024);
    let frame = scene.frame();
    match &frame[1] {
        DrawCommand::Polyline { points, .. } => {
            assert_eq!(points.as_slice(), scene.terrain.points())
        }
        other => panic!("Expected polyline, got {:?}", other),
    }
}

#[test]
fn test_single_vertex_skips_polyline() {
    let frame = scene_for_width(0).frame();
    assert_eq!(frame.len(), 2);
    assert!(matches!(frame[0], DrawCommand::Clear(_)));
    assert!(matches!(frame[1], DrawCommand::Sprite { .. }));
}

#[test]
fn test_frame_is_stable_across_repaints() {
    let scene = scene_for_width(1024);
    assert_eq!(scene.frame(), scene.frame());
}

#[test]
fn test_custom_colors() {
    let mut scene = scene_for_width(1024);
    scene.background = Rgb::new(10, 20, 30);
    scene.foreground = Rgb::new(0, 255, 0);
    let frame = scene.frame();
    assert_eq!(frame[0], DrawCommand::Clear(Rgb::new(10, 20, 30)));
    assert!(matches!(
        &frame[1],
        DrawCommand::Polyline { color, .. } if *color == Rgb::new(0, 255, 0)
    ));
}

// ============================================================================
// Scene From Config
// ============================================================================

#[test]
fn test_scene_from_config_uses_window_width() {
    let mut config = NavigatorConfig::default();
    config.window.width = 512;
    let scene = Scene::from_config(&config).unwrap();
    // 0, 128, 256, 384, 512
    assert_eq!(scene.terrain.len(), 5);
}

#[test]
fn test_scene_from_config_propagates_terrain_error() {
    let mut config = NavigatorConfig::default();
    config.terrain.min_height = 600;
    config.terrain.max_height = 100;
    assert!(Scene::from_config(&config).is_err());
}

#[test]
fn test_scene_from_config_rejects_width_beyond_i32() {
    let mut config = NavigatorConfig::default();
    config.window.width = i32::MAX as u32 + 1;
    let err = Scene::from_config(&config).unwrap_err();
    assert!(matches!(err, NavigatorError::InvalidConfig(_)));
}

#[test]
fn test_scene_uses_configured_sprite_rect() {
    let mut config = NavigatorConfig::default();
    config.sprite.dest = Rect::new(50, 60, 32, 12);
    let frame = Scene::from_config(&config).unwrap().frame();
    assert_eq!(
        frame.last(),
        Some(&DrawCommand::Sprite {
            dest: Rect::new(50, 60, 32, 12)
        })
    );
}
