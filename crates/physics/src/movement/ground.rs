//! Ground detection.
//!
//! A single ray is cast straight down from the entity origin. The hit normal
//! decides whether the surface counts as ground; there is no hysteresis, so
//! one tick of odd probe data flips the state.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::{GroundReference, MovementTuning};
use super::state::{KinematicState, WORLD_FORWARD, WORLD_UP};

/// How far below the origin the ground probe reaches.
pub const GROUND_PROBE_LENGTH: f32 = 1.1;

/// A downward probe hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeHit {
    /// Distance from the probe origin to the hit point.
    pub distance: f32,

    /// Surface normal at the hit point.
    pub normal: Vec3,
}

/// Geometry query used by the ground check.
pub trait GroundProbe {
    /// Cast a ray from `origin` straight down, up to `max_distance`.
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<ProbeHit>;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec3, f32) -> Option<ProbeHit>,
{
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<ProbeHit> {
        self(origin, max_distance)
    }
}

/// Whether a surface with this normal counts as ground.
pub fn is_ground_surface(normal: Vec3, tuning: &MovementTuning) -> bool {
    if !normal.is_finite() || normal.length_squared() == 0.0 {
        return false;
    }

    match tuning.ground_reference {
        GroundReference::Forward => {
            WORLD_FORWARD.angle_between(normal).to_degrees() > tuning.min_ground_angle
        }
        GroundReference::Up => {
            WORLD_UP.angle_between(normal).to_degrees() < 90.0 - tuning.min_ground_angle
        }
    }
}

/// Probe below `origin` and update `state.grounded` and `state.ground_normal`.
///
/// Returns the new grounded flag.
pub fn check_ground<P>(state: &mut KinematicState, probe: &P, origin: Vec3, tuning: &MovementTuning) -> bool
where
    P: GroundProbe + ?Sized,
{
    let hit = probe
        .cast_down(origin, GROUND_PROBE_LENGTH)
        .filter(|hit| is_ground_surface(hit.normal, tuning));

    let grounded = hit.is_some();
    if grounded != state.grounded {
        log::debug!(
            "{} at {:?}",
            if grounded { "landed" } else { "left ground" },
            origin
        );
    }

    state.grounded = grounded;
    state.ground_normal = hit.map_or(WORLD_UP, |hit| hit.normal);
    grounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(normal: Vec3) -> impl Fn(Vec3, f32) -> Option<ProbeHit> {
        move |_, _| Some(ProbeHit { distance: 1.0, normal })
    }

    fn nothing(_: Vec3, _: f32) -> Option<ProbeHit> {
        None
    }

    fn tilted_toward_z(degrees: f32) -> Vec3 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec3::new(0.0, cos, sin)
    }

    #[test]
    fn test_flat_floor_is_ground() {
        let tuning = MovementTuning::default();
        let mut state = KinematicState::new();

        assert!(check_ground(&mut state, &surface(Vec3::Y), Vec3::ZERO, &tuning));
        assert!(state.grounded);
        assert_eq!(state.ground_normal, Vec3::Y);
    }

    #[test]
    fn test_no_hit_is_airborne() {
        let tuning = MovementTuning::default();
        let mut state = KinematicState {
            grounded: true,
            ground_normal: Vec3::X,
            ..Default::default()
        };

        assert!(!check_ground(&mut state, &nothing, Vec3::ZERO, &tuning));
        assert_eq!(state.ground_normal, WORLD_UP);
    }

    #[test]
    fn test_probe_uses_fixed_length_from_origin() {
        let tuning = MovementTuning::default();
        let mut state = KinematicState::new();
        let origin = Vec3::new(1.0, 2.0, 3.0);

        let probe = |from: Vec3, max: f32| -> Option<ProbeHit> {
            assert_eq!(from, origin);
            assert_eq!(max, GROUND_PROBE_LENGTH);
            None
        };
        check_ground(&mut state, &probe, origin, &tuning);
    }

    #[test]
    fn test_forward_reference_is_literal() {
        let tuning = MovementTuning::default(); // 60 degrees, Forward

        // A normal facing away from +Z sits 180 degrees from forward.
        assert!(is_ground_surface(Vec3::NEG_Z, &tuning));
        // A normal facing +Z sits 0 degrees from forward.
        assert!(!is_ground_surface(Vec3::Z, &tuning));
        // Slopes tilted toward +Z: 25 degrees from up is 65 from forward.
        assert!(is_ground_surface(tilted_toward_z(25.0), &tuning));
        assert!(!is_ground_surface(tilted_toward_z(35.0), &tuning));
    }

    #[test]
    fn test_up_reference_rejects_walls() {
        let tuning = MovementTuning {
            ground_reference: GroundReference::Up,
            ..Default::default()
        };

        assert!(is_ground_surface(Vec3::Y, &tuning));
        assert!(!is_ground_surface(Vec3::NEG_Z, &tuning));
        assert!(!is_ground_surface(Vec3::X, &tuning));
        assert!(is_ground_surface(tilted_toward_z(25.0), &tuning));
        assert!(!is_ground_surface(tilted_toward_z(35.0), &tuning));
    }

    #[test]
    fn test_degenerate_normal_is_not_ground() {
        let tuning = MovementTuning::default();
        assert!(!is_ground_surface(Vec3::ZERO, &tuning));
        assert!(!is_ground_surface(Vec3::new(f32::NAN, 1.0, 0.0), &tuning));
    }
}
