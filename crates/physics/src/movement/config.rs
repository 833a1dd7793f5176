//! Movement tuning constants.
//!
//! All rates are grouped here for easy tuning. The solver treats a tuning
//! value as immutable for the duration of a tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axis the ground-probe hit normal is measured against.
///
/// See [`MovementTuning::ground_reference`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundReference {
    /// Measure against the world forward axis (+Z).
    ///
    /// A hit counts as ground when its angle from forward exceeds
    /// `min_ground_angle`. This reproduces the legacy controller exactly,
    /// including walls facing away from +Z being treated as floor.
    #[default]
    Forward,

    /// Measure against the world up axis (+Y).
    ///
    /// A hit counts as ground when its angle from up is below
    /// `90 - min_ground_angle`, which matches `Forward` for surfaces
    /// tilting toward +Z and rejects steep walls in every direction.
    Up,
}

/// Errors reported by [`MovementTuning::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("min_ground_angle must be within [0, 180] degrees, got {0}")]
    GroundAngleOutOfRange(f32),
}

/// Configuration for ground/air movement physics.
///
/// Velocities are in units/second, accelerations in units/second².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementTuning {
    // ========================================================================
    // Ground
    // ========================================================================
    /// Acceleration applied along the wish direction while grounded.
    pub ground_acceleration: f32,

    /// Cap on the projected speed along the wish direction while grounded.
    pub max_ground_velocity: f32,

    /// Proportional speed decay per second while grounded.
    pub ground_friction: f32,

    // ========================================================================
    // Air
    // ========================================================================
    /// Acceleration applied along the wish direction while airborne.
    pub air_acceleration: f32,

    /// Cap on the projected speed along the wish direction while airborne.
    ///
    /// Only the projection is capped, never the resultant speed.
    pub max_air_velocity: f32,

    // ========================================================================
    // Jumping and ground detection
    // ========================================================================
    /// Upward velocity added by a grounded jump.
    pub jump_force: f32,

    /// Threshold angle for ground detection (degrees, 0..=180).
    pub min_ground_angle: f32,

    /// Axis `min_ground_angle` is measured against.
    #[serde(default)]
    pub ground_reference: GroundReference,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            ground_acceleration: 50.0,
            max_ground_velocity: 7.0,
            ground_friction: 6.0,

            air_acceleration: 100.0,
            max_air_velocity: 1.0,  // low projected cap is what makes strafing work

            jump_force: 2.0,
            min_ground_angle: 60.0,
            ground_reference: GroundReference::Forward,
        }
    }
}

impl MovementTuning {
    /// Tuning with strong air control for bunny hopping.
    pub fn bhop() -> Self {
        Self {
            ground_friction: 4.0,
            air_acceleration: 200.0,
            max_air_velocity: 1.5,
            jump_force: 5.0,
            ..Default::default()
        }
    }

    /// Tuning where air control mirrors ground control (no strafing gain
    /// beyond the ground cap).
    pub fn grounded_walk() -> Self {
        Self {
            air_acceleration: 50.0,
            max_air_velocity: 7.0,
            jump_force: 4.0,
            ..Default::default()
        }
    }

    /// Check that every rate is finite and non-negative and that the ground
    /// angle is a valid degree value.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("ground_acceleration", self.ground_acceleration),
            ("max_ground_velocity", self.max_ground_velocity),
            ("ground_friction", self.ground_friction),
            ("air_acceleration", self.air_acceleration),
            ("max_air_velocity", self.max_air_velocity),
            ("jump_force", self.jump_force),
            ("min_ground_angle", self.min_ground_angle),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.min_ground_angle > 180.0 {
            return Err(TuningError::GroundAngleOutOfRange(self.min_ground_angle));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert_eq!(MovementTuning::default().validate(), Ok(()));
        assert_eq!(MovementTuning::bhop().validate(), Ok(()));
        assert_eq!(MovementTuning::grounded_walk().validate(), Ok(()));
    }

    #[test]
    fn test_default_keeps_literal_ground_rule() {
        assert_eq!(MovementTuning::default().ground_reference, GroundReference::Forward);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let tuning = MovementTuning {
            ground_friction: -1.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::Negative { field: "ground_friction", value: -1.0 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let tuning = MovementTuning {
            max_air_velocity: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NotFinite { field: "max_air_velocity" })
        );
    }

    #[test]
    fn test_ground_angle_range() {
        let mut tuning = MovementTuning {
            min_ground_angle: 180.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());

        tuning.min_ground_angle = 180.5;
        assert_eq!(tuning.validate(), Err(TuningError::GroundAngleOutOfRange(180.5)));
    }
}
