//! Ground and air acceleration.
//!
//! Ground movement applies friction and then accelerates; air movement only
//! accelerates. Both cap the speed *projected* onto the wish direction, never
//! the resultant speed, so turning while airborne can push the resultant
//! speed past the air cap. That is air strafing.
//!
//! Every function here is pure and takes the tick duration explicitly. Hosts
//! must pass a fixed duration to keep runs reproducible.

use glam::Vec3;

use super::config::MovementTuning;

/// Accelerate `prev_velocity` along `wish_dir`.
///
/// The added speed is `accel_rate * tick`, reduced so the projected speed
/// along `wish_dir` lands exactly on `max_velocity` when it would overshoot.
/// The reduced amount can go negative, which slows the entity down toward
/// the cap instead of pushing past it.
pub fn accelerate(
    wish_dir: Vec3,
    prev_velocity: Vec3,
    accel_rate: f32,
    max_velocity: f32,
    tick: f32,
) -> Vec3 {
    let projected_speed = prev_velocity.dot(wish_dir);
    let mut accel_speed = accel_rate * tick;

    if projected_speed + accel_speed > max_velocity {
        accel_speed = max_velocity - projected_speed;
    }

    prev_velocity + wish_dir * accel_speed
}

/// Scale velocity down by ground friction.
///
/// The scale factor is clamped to `[0, 1]` so friction can stop the entity
/// but never reverse it. Zero velocity is returned as-is.
pub fn apply_friction(velocity: Vec3, friction: f32, tick: f32) -> Vec3 {
    let speed = velocity.length();
    if speed == 0.0 {
        return velocity;
    }

    let drop = speed * friction * tick;
    velocity * ((speed - drop).max(0.0) / speed)
}

/// Velocity after one tick of ground movement.
pub fn move_ground(wish_dir: Vec3, prev_velocity: Vec3, tuning: &MovementTuning, tick: f32) -> Vec3 {
    let velocity = apply_friction(prev_velocity, tuning.ground_friction, tick);

    accelerate(
        wish_dir,
        velocity,
        tuning.ground_acceleration,
        tuning.max_ground_velocity,
        tick,
    )
}

/// Velocity after one tick of air movement.
pub fn move_air(wish_dir: Vec3, prev_velocity: Vec3, tuning: &MovementTuning, tick: f32) -> Vec3 {
    accelerate(
        wish_dir,
        prev_velocity,
        tuning.air_acceleration,
        tuning.max_air_velocity,
        tick,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-5;

    fn tuning(ground_accel: f32, max_ground: f32, air_accel: f32, max_air: f32, friction: f32) -> MovementTuning {
        MovementTuning {
            ground_acceleration: ground_accel,
            max_ground_velocity: max_ground,
            air_acceleration: air_accel,
            max_air_velocity: max_air,
            ground_friction: friction,
            ..Default::default()
        }
    }

    #[test]
    fn test_accelerate_uncapped_adds_full_step() {
        let prev = Vec3::new(1.0, 2.0, -3.0);
        let wish = Vec3::X;

        // projected 1.0 + 0.5 stays under the cap of 10
        let result = accelerate(wish, prev, 5.0, 10.0, 0.1);
        assert_eq!(result, prev + wish * (5.0 * 0.1));
    }

    #[test]
    fn test_accelerate_cap_lands_on_max() {
        let prev = Vec3::new(4.0, 0.0, 1.0);
        let wish = Vec3::new(1.0, 0.0, 1.0).normalize();

        let result = accelerate(wish, prev, 100.0, 3.0, 0.1);
        assert_relative_eq!(result.dot(wish), 3.0, epsilon = EPS);
    }

    #[test]
    fn test_accelerate_above_cap_decelerates() {
        let prev = Vec3::new(8.0, 0.0, 0.0);

        let result = accelerate(Vec3::X, prev, 10.0, 5.0, 0.1);
        assert_relative_eq!(result.x, 5.0, epsilon = EPS);
    }

    #[test]
    fn test_accelerate_zero_wish_dir_is_identity() {
        let prev = Vec3::new(3.0, -1.0, 7.0);
        assert_eq!(accelerate(Vec3::ZERO, prev, 10.0, 0.0, 1.0), prev);
        assert_eq!(accelerate(Vec3::ZERO, prev, 10.0, 100.0, 1.0), prev);
    }

    #[test]
    fn test_friction_zero_speed_untouched() {
        let result = apply_friction(Vec3::ZERO, 6.0, 0.1);
        assert_eq!(result, Vec3::ZERO);
        assert!(!result.x.is_nan());
    }

    #[test]
    fn test_friction_never_reverses() {
        let prev = Vec3::new(2.0, 0.0, -1.0);

        // drop = speed * 50 * 1 is far larger than speed
        let result = apply_friction(prev, 50.0, 1.0);
        assert_eq!(result, Vec3::ZERO);

        for friction in [0.0, 0.5, 1.0, 5.0, 9.99] {
            let result = apply_friction(prev, friction, 0.1);
            let factor = result.length() / prev.length();
            assert!((0.0..=1.0).contains(&factor), "factor {} out of range", factor);
            assert!(result.dot(prev) >= 0.0);
        }
    }

    #[test]
    fn test_move_ground_from_rest_matches_accelerate() {
        let t = tuning(10.0, 5.0, 0.0, 0.0, 3.0);
        let wish = Vec3::new(0.0, 0.0, 1.0);

        let ground = move_ground(wish, Vec3::ZERO, &t, 0.2);
        let direct = accelerate(wish, Vec3::ZERO, 10.0, 5.0, 0.2);
        assert_eq!(ground, direct);
    }

    #[test]
    fn test_scenario_grounded_start_is_capped() {
        let t = tuning(10.0, 5.0, 0.0, 0.0, 0.0);
        let result = move_ground(Vec3::X, Vec3::ZERO, &t, 1.0);
        assert_eq!(result, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_scenario_airborne_start_matches_ground() {
        let t = tuning(0.0, 0.0, 10.0, 5.0, 1.0);
        let result = move_air(Vec3::X, Vec3::ZERO, &t, 1.0);
        assert_eq!(result, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_scenario_friction_drop() {
        let result = apply_friction(Vec3::new(5.0, 0.0, 0.0), 1.0, 0.1);
        assert_relative_eq!(result.x, 4.5, epsilon = EPS);
        assert_eq!(result.y, 0.0);
        assert_eq!(result.z, 0.0);

        // With no wish direction the ground move is friction alone.
        let t = tuning(10.0, 5.0, 0.0, 0.0, 1.0);
        let moved = move_ground(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), &t, 0.1);
        assert_relative_eq!(moved.x, 4.5, epsilon = EPS);
    }

    #[test]
    fn test_air_move_keeps_momentum() {
        let t = tuning(10.0, 5.0, 10.0, 5.0, 100.0);
        let prev = Vec3::new(6.0, 1.0, 0.0);

        // No friction in the air even with huge ground friction.
        assert_eq!(move_air(Vec3::ZERO, prev, &t, 0.1), prev);
    }

    #[test]
    fn test_air_strafing_exceeds_cap() {
        let t = MovementTuning::default();
        let tick = 1.0 / 60.0;
        let mut velocity = Vec3::new(0.0, 0.0, t.max_air_velocity);

        // Always wish perpendicular to the current horizontal velocity.
        for _ in 0..120 {
            let wish = Vec3::Y.cross(velocity).normalize_or_zero();
            velocity = move_air(wish, velocity, &t, tick);
        }

        assert!(
            velocity.length() > t.max_air_velocity * 2.0,
            "strafing should outgrow the projected cap, got {}",
            velocity.length()
        );
    }

    #[test]
    fn test_ground_cap_holds_in_straight_line() {
        let t = tuning(50.0, 7.0, 0.0, 0.0, 6.0);
        let mut velocity = Vec3::ZERO;
        for _ in 0..600 {
            velocity = move_ground(Vec3::X, velocity, &t, 1.0 / 60.0);
            assert!(velocity.x <= 7.0 + EPS);
        }
    }
}
