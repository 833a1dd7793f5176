//! Jump handling.
//!
//! The jump request is a latch on [`MovementIntent`]. Applying a jump always
//! consumes the latch, grounded or not, so a request made mid-air is dropped
//! instead of firing on the next landing.

use glam::Vec3;

use super::state::{MovementIntent, WORLD_UP};

/// Apply a pending jump to `prev_velocity` and clear the latch.
///
/// Returns the new velocity and whether an impulse was added. A grounded
/// jump adds `jump_force` on top of any existing vertical velocity.
pub fn jump(intent: &mut MovementIntent, prev_velocity: Vec3, grounded: bool, jump_force: f32) -> (Vec3, bool) {
    intent.wish_jump = false;

    if grounded {
        log::debug!("jump applied: force={}", jump_force);
        (prev_velocity + WORLD_UP * jump_force, true)
    } else {
        log::debug!("jump request dropped while airborne");
        (prev_velocity, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latched() -> MovementIntent {
        MovementIntent {
            wish_dir: Vec3::ZERO,
            wish_jump: true,
        }
    }

    #[test]
    fn test_grounded_jump_adds_force_to_up_only() {
        let mut intent = latched();
        let prev = Vec3::new(3.0, 0.5, -2.0);

        let (velocity, jumped) = jump(&mut intent, prev, true, 2.0);

        assert!(jumped);
        assert!(!intent.wish_jump);
        assert_eq!(velocity.x, prev.x);
        assert_eq!(velocity.z, prev.z);
        assert_eq!(velocity.y, prev.y + 2.0);
    }

    #[test]
    fn test_airborne_jump_is_dropped() {
        let mut intent = latched();
        let prev = Vec3::new(1.0, -4.0, 0.0);

        let (velocity, jumped) = jump(&mut intent, prev, false, 2.0);

        assert!(!jumped);
        assert!(!intent.wish_jump, "latch must clear even when airborne");
        assert_eq!(velocity, prev);
    }

    #[test]
    fn test_jump_stacks_with_upward_velocity() {
        let mut intent = latched();
        let (velocity, _) = jump(&mut intent, Vec3::new(0.0, 3.0, 0.0), true, 2.0);
        assert_eq!(velocity.y, 5.0);
    }
}
