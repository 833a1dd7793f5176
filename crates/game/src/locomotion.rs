//! Locomotion parameters for the animation layer.

use airstrafe_physics::{KinematicState, VelocityObserver};

/// Feeds the animator's locomotion blend from committed movement state.
///
/// `speed` is the horizontal magnitude of the last committed velocity;
/// falling or jumping never speeds up the run cycle.
#[derive(Debug, Clone, Default)]
pub struct LocomotionBridge {
    speed: f32,
    grounded: bool,
}

impl LocomotionBridge {
    /// Animator parameter name for [`LocomotionBridge::speed`].
    pub const SPEED_PARAMETER: &'static str = "Speed";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Parameters to push to the animator this frame.
    pub fn parameters(&self) -> [(&'static str, f32); 1] {
        [(Self::SPEED_PARAMETER, self.speed)]
    }
}

impl VelocityObserver for LocomotionBridge {
    fn on_velocity_updated(&mut self, state: &KinematicState) {
        self.speed = state.horizontal_speed();
        self.grounded = state.grounded;
    }
}
