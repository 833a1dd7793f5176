//! Movement state and input structures.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World up axis. Jumps push along it and the ray probe casts against it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// World forward axis.
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Kinematic state of one moving entity.
///
/// Owned by a single solver and updated once per fixed tick. The host may
/// alter `velocity` between ticks (gravity, contact response) the same way a
/// rigid body would; `last_velocity` only changes when a tick commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// Authoritative velocity (units/second).
    pub velocity: Vec3,

    /// Velocity committed by the most recent tick, for observers.
    pub last_velocity: Vec3,

    /// Result of the most recent ground check.
    pub grounded: bool,

    /// Normal of the surface below, `WORLD_UP` while airborne.
    pub ground_normal: Vec3,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            last_velocity: Vec3::ZERO,
            grounded: false,
            ground_normal: WORLD_UP,
        }
    }
}

impl KinematicState {
    /// Create a state at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal speed of the committed velocity (vertical component
    /// ignored).
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.last_velocity.x, 0.0, self.last_velocity.z).length()
    }
}

/// What the entity wants to do on the next fixed tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementIntent {
    /// World-space wish direction. Used as given: a zero vector means no
    /// directional intent, a raw (unnormalized) vector scales acceleration.
    pub wish_dir: Vec3,

    /// Jump request latch. Stays set across frames until a fixed tick
    /// consumes it.
    pub wish_jump: bool,
}

impl MovementIntent {
    /// Merge one frame of input. The latch is only ever set here, never
    /// cleared.
    pub fn sample(&mut self, input: FrameInput) {
        self.wish_dir = input.wish_dir;
        self.wish_jump = self.wish_jump || input.jump_pressed;
    }
}

/// One frame of already-resolved input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// World-space wish direction for this frame.
    pub wish_dir: Vec3,

    /// Whether the jump button went down this frame.
    pub jump_pressed: bool,
}

/// What a fixed tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Committed velocity.
    pub velocity: Vec3,

    /// Ground state used for this tick.
    pub grounded: bool,

    /// Whether a jump impulse was applied.
    pub jumped: bool,
}
