use glam::Vec3;
use super::*;

const EPS: f32 = 1e-5;
const SPEED: f32 = 1.0;
const THRESHOLD: f32 = 1e-3;

fn step(yaw: f32, intent: InputIntent, dt: f32) -> Option<Vec3> {
    displacement(&Orientation::new(0.0, 0.0, yaw), intent, dt, SPEED, THRESHOLD)
}

// ============================================================================
// InputIntent
// ============================================================================

#[test]
fn test_intent_constants() {
    assert_eq!(InputIntent::NONE.magnitude(), 0.0);
    assert_eq!(InputIntent::FORWARD.as_vec3(), Vec3::Y);
    assert_eq!(InputIntent::RIGHT.as_vec3(), Vec3::X);
    assert_eq!(InputIntent::UP.as_vec3(), Vec3::Z);
    assert_eq!(InputIntent::default(), InputIntent::NONE);
}

#[test]
fn test_intent_magnitude_diagonal() {
    let intent = InputIntent::new(1.0, 1.0, 0.0);
    assert!((intent.magnitude() - 2.0_f32.sqrt()).abs() < EPS);
}

// ============================================================================
// Guard
// ============================================================================

#[test]
fn test_no_intent_gives_no_displacement() {
    assert!(step(0.0, InputIntent::NONE, 1.0).is_none());
}

#[test]
fn test_sub_threshold_intent_gives_no_displacement() {
    assert!(step(0.0, InputIntent::new(1e-4, 0.0, 0.0), 1.0).is_none());
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_forward_at_zero_yaw_is_world_y() {
    let d = step(0.0, InputIntent::FORWARD, 1.0).unwrap();
    assert!(d.abs_diff_eq(Vec3::Y, EPS));
}

#[test]
fn test_forward_at_half_turn_is_negative_y() {
    let d = step(180.0, InputIntent::FORWARD, 1.0).unwrap();
    assert!(d.abs_diff_eq(Vec3::NEG_Y, EPS));
}

#[test]
fn test_forward_at_quarter_turn_is_zero_yaw_right() {
    let turned = step(90.0, InputIntent::FORWARD, 1.0).unwrap();
    let right = step(0.0, InputIntent::RIGHT, 1.0).unwrap();
    assert!(turned.abs_diff_eq(right, EPS));
}

#[test]
fn test_strafe_left_is_opposite_of_right() {
    let left = step(37.0, InputIntent::LEFT, 1.0).unwrap();
    let right = step(37.0, InputIntent::RIGHT, 1.0).unwrap();
    assert!((left + right).abs_diff_eq(Vec3::ZERO, EPS));
}

#[test]
fn test_vertical_is_world_z_regardless_of_orientation() {
    let o = Orientation::new(60.0, 20.0, 215.0);
    let d = displacement(&o, InputIntent::UP, 0.5, SPEED, THRESHOLD).unwrap();
    assert!(d.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));
}

#[test]
fn test_pitch_does_not_tilt_horizontal_movement() {
    let o = Orientation::new(45.0, 0.0, 0.0);
    let d = displacement(&o, InputIntent::FORWARD, 1.0, SPEED, THRESHOLD).unwrap();
    assert!(d.abs_diff_eq(Vec3::Y, EPS));
}

// ============================================================================
// Magnitude
// ============================================================================

#[test]
fn test_cardinal_magnitude_equals_dt() {
    for yaw in [0.0, 45.0, 90.0, 211.0] {
        for intent in [
            InputIntent::FORWARD, InputIntent::BACKWARD,
            InputIntent::LEFT, InputIntent::RIGHT,
            InputIntent::UP, InputIntent::DOWN,
        ] {
            let d = step(yaw, intent, 0.25).unwrap();
            assert!((d.length() - 0.25).abs() < EPS, "yaw {} intent {:?}", yaw, intent);
        }
    }
}

#[test]
fn test_diagonal_is_normalized() {
    let d = step(0.0, InputIntent::new(1.0, 1.0, 1.0), 2.0).unwrap();
    assert!((d.length() - 2.0).abs() < EPS);
}

#[test]
fn test_speed_scales_displacement() {
    let d = displacement(&Orientation::default(), InputIntent::FORWARD, 0.5, 4.0, THRESHOLD).unwrap();
    assert!(d.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPS));
}

#[test]
fn test_zero_dt_gives_zero_displacement() {
    let d = step(0.0, InputIntent::FORWARD, 0.0).unwrap();
    assert_eq!(d, Vec3::ZERO);
}
