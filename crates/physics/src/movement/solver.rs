//! Per-tick movement solver.
//!
//! This is the main entry point for movement. [`advance_tick`] is the whole
//! pipeline as a free function; [`MovementSolver`] wraps it with owned state
//! and splits input sampling from physics integration.

use glam::Vec3;

use super::accelerate::{move_air, move_ground};
use super::config::{MovementTuning, TuningError};
use super::ground::{check_ground, GroundProbe};
use super::jump::jump;
use super::observer::VelocityObserver;
use super::state::{FrameInput, KinematicState, MovementIntent, TickOutcome};

/// Advance one fixed tick.
///
/// In order: probe the ground, pick ground or air movement, apply a pending
/// jump to the result, then commit it to both `velocity` and
/// `last_velocity`. `tuning` is assumed to have passed
/// [`MovementTuning::validate`].
pub fn advance_tick<P>(
    state: &mut KinematicState,
    intent: &mut MovementIntent,
    probe: &P,
    origin: Vec3,
    tuning: &MovementTuning,
    tick: f32,
) -> TickOutcome
where
    P: GroundProbe + ?Sized,
{
    let grounded = check_ground(state, probe, origin, tuning);

    let mut velocity = if grounded {
        move_ground(intent.wish_dir, state.velocity, tuning, tick)
    } else {
        move_air(intent.wish_dir, state.velocity, tuning, tick)
    };

    let mut jumped = false;
    if intent.wish_jump {
        (velocity, jumped) = jump(intent, velocity, grounded, tuning.jump_force);
    }

    state.velocity = velocity;
    state.last_velocity = velocity;

    log::trace!("tick: grounded={} velocity={:?}", grounded, velocity);

    TickOutcome {
        velocity,
        grounded,
        jumped,
    }
}

/// Movement solver for one entity.
///
/// Input is sampled at frame rate with [`advance_variable_tick`] and physics
/// runs at a fixed rate with [`advance_fixed_tick`]. The jump latch set by
/// the former is consumed exactly once by the next call to the latter.
///
/// # Example
///
/// ```no_run
/// use airstrafe_physics::{CollisionWorld, FrameInput, MovementSolver, MovementTuning, TuningError};
/// use glam::Vec3;
///
/// # fn main() -> Result<(), TuningError> {
/// let world = CollisionWorld::new();
/// let position = Vec3::new(0.0, 1.0, 0.0);
/// let mut solver = MovementSolver::new(MovementTuning::default())?;
///
/// // Every rendered frame:
/// solver.advance_variable_tick(FrameInput { wish_dir: Vec3::Z, jump_pressed: true });
///
/// // Every physics step:
/// let outcome = solver.advance_fixed_tick(&world, position, 1.0 / 60.0);
/// assert!(!outcome.grounded);
/// # Ok(())
/// # }
/// ```
///
/// [`advance_variable_tick`]: MovementSolver::advance_variable_tick
/// [`advance_fixed_tick`]: MovementSolver::advance_fixed_tick
#[derive(Debug, Clone)]
pub struct MovementSolver {
    tuning: MovementTuning,
    state: KinematicState,
    intent: MovementIntent,
}

impl MovementSolver {
    /// Create a solver at rest. Fails if the tuning does not validate.
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: KinematicState::new(),
            intent: MovementIntent::default(),
        })
    }

    /// Create a solver with default tuning.
    pub fn with_default_tuning() -> Self {
        Self {
            tuning: MovementTuning::default(),
            state: KinematicState::new(),
            intent: MovementIntent::default(),
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Replace the tuning. The old tuning stays in place on error.
    pub fn set_tuning(&mut self, tuning: MovementTuning) -> Result<(), TuningError> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(())
    }

    /// Committed state, for observers and the host.
    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Mutable state, for host-side integration between ticks.
    pub fn state_mut(&mut self) -> &mut KinematicState {
        &mut self.state
    }

    pub fn intent(&self) -> &MovementIntent {
        &self.intent
    }

    /// Sample one frame of input. May run any number of times between fixed
    /// ticks; the jump latch only ever gets set here.
    pub fn advance_variable_tick(&mut self, input: FrameInput) {
        self.intent.sample(input);
    }

    /// Run one fixed physics step from `origin`.
    pub fn advance_fixed_tick<P>(&mut self, probe: &P, origin: Vec3, tick: f32) -> TickOutcome
    where
        P: GroundProbe + ?Sized,
    {
        self.advance_fixed_tick_with(probe, origin, tick, &mut ())
    }

    /// Run one fixed physics step and notify `observer` with the committed
    /// state.
    pub fn advance_fixed_tick_with<P, O>(
        &mut self,
        probe: &P,
        origin: Vec3,
        tick: f32,
        observer: &mut O,
    ) -> TickOutcome
    where
        P: GroundProbe + ?Sized,
        O: VelocityObserver + ?Sized,
    {
        let outcome = advance_tick(
            &mut self.state,
            &mut self.intent,
            probe,
            origin,
            &self.tuning,
            tick,
        );
        observer.on_velocity_updated(&self.state);
        outcome
    }
}

// ============================================================================
// Tests
// ============================================================================
