//! Read-only hook for presentation code (animation, camera bob, HUD).

use super::state::KinematicState;

/// Notified after every fixed tick with the committed state.
pub trait VelocityObserver {
    fn on_velocity_updated(&mut self, state: &KinematicState);
}

/// No-op observer.
impl VelocityObserver for () {
    fn on_velocity_updated(&mut self, _state: &KinematicState) {}
}

impl<O: VelocityObserver + ?Sized> VelocityObserver for &mut O {
    fn on_velocity_updated(&mut self, state: &KinematicState) {
        (**self).on_velocity_updated(state);
    }
}

impl<O: VelocityObserver + ?Sized> VelocityObserver for Box<O> {
    fn on_velocity_updated(&mut self, state: &KinematicState) {
        (**self).on_velocity_updated(state);
    }
}
