//! Player entity and state.

use airstrafe_physics::{FrameInput, KinematicState, MovementSolver};
use glam::{Quat, Vec2, Vec3};

use crate::locomotion::LocomotionBridge;

/// Unique identifier for entities.
pub type EntityId = u32;

/// A player in the game.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Player name/handle.
    pub name: String,

    /// Body origin in world space. The ground probe starts here.
    pub position: Vec3,

    /// Facing around the world up axis (radians). Set by the host's look
    /// code; movement only reads it.
    pub yaw: f32,

    /// Movement solver owning the kinematic state and jump latch.
    pub solver: MovementSolver,

    /// Animation feed updated after every fixed tick.
    pub locomotion: LocomotionBridge,
}

impl Player {
    /// Create a new player at the given spawn position.
    pub fn new(id: EntityId, name: String, spawn_position: Vec3, solver: MovementSolver) -> Self {
        Self {
            id,
            name,
            position: spawn_position,
            yaw: 0.0,
            solver,
            locomotion: LocomotionBridge::new(),
        }
    }

    /// Committed movement state.
    #[inline]
    pub fn movement(&self) -> &KinematicState {
        self.solver.state()
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.solver.state().grounded
    }

    /// Lift a local move axis into world space.
    ///
    /// `local.x` strafes, `local.y` moves forward; at zero yaw these map to
    /// +X and +Z. The result is not normalized, so a diagonal input is
    /// longer than a straight one.
    pub fn local_to_world(&self, local: Vec2) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::new(local.x, 0.0, local.y)
    }

    /// Sample one rendered frame of input.
    pub fn sample_input(&mut self, local_move: Vec2, jump_pressed: bool) {
        let wish_dir = self.local_to_world(local_move);
        self.solver.advance_variable_tick(FrameInput { wish_dir, jump_pressed });
    }
}
