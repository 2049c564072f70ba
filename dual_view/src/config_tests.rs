use crate::camera::CameraMode;
use crate::error::Error;
use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_projection_defaults() {
    let p = ProjectionConfig::default();
    assert_eq!(p.fovy_degrees, 80.0);
    assert_eq!(p.near, 0.01);
    assert_eq!(p.far, 10.0);
    assert_eq!(p.top_half_height, 6.0);
}

#[test]
fn test_movement_defaults_unit_speed() {
    assert_eq!(MovementConfig::default().speed, 1.0);
}

#[test]
fn test_viewer_defaults_are_valid() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.fly_mode, CameraMode::Perspective3D);
    assert_eq!(config.overview_mode, CameraMode::OrthoTop2D);
}

// ============================================================================
// Validation
// ============================================================================

fn assert_invalid(config: ViewerConfig, needle: &str) {
    match config.validate() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains(needle), "message was: {}", msg),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_rejects_fovy_out_of_range() {
    let mut config = ViewerConfig::default();
    config.projection.fovy_degrees = 180.0;
    assert_invalid(config, "fovy_degrees");
}

#[test]
fn test_rejects_non_positive_near() {
    let mut config = ViewerConfig::default();
    config.projection.near = 0.0;
    assert_invalid(config, "near");
}

#[test]
fn test_rejects_far_not_beyond_near() {
    let mut config = ViewerConfig::default();
    config.projection.far = config.projection.near;
    assert_invalid(config, "far");
}

#[test]
fn test_rejects_nan_half_height() {
    let mut config = ViewerConfig::default();
    config.projection.top_half_height = f32::NAN;
    assert_invalid(config, "top_half_height");
}

#[test]
fn test_rejects_negative_speed() {
    let mut config = ViewerConfig::default();
    config.movement.speed = -1.0;
    assert_invalid(config, "speed");
}

#[test]
fn test_rejects_zero_epsilon() {
    let mut config = ViewerConfig::default();
    config.movement.intent_epsilon = 0.0;
    assert_invalid(config, "intent_epsilon");
}

#[test]
fn test_rejects_pitch_limit_past_vertical() {
    let mut config = ViewerConfig::default();
    config.movement.pitch_limit = 120.0;
    assert_invalid(config, "pitch_limit");
}

#[test]
fn test_rejects_decay_of_one() {
    let mut config = ViewerConfig::default();
    config.frame_time_decay = 1.0;
    assert_invalid(config, "frame_time_decay");
}

#[test]
fn test_rejects_zero_glyph_length() {
    let mut config = ViewerConfig::default();
    config.glyph_length = 0.0;
    assert_invalid(config, "glyph_length");
}
