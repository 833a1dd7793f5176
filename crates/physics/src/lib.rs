//! Airstrafe Physics
//!
//! A deterministic first-person movement core with source-style air
//! strafing. Velocities advance once per fixed tick; the same inputs and
//! tick durations always produce the same results.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Movement**: Pure acceleration, friction, jump and ground-check
//!   functions, composed by [`MovementSolver`]
//! - **Collision**: A parry3d-backed [`CollisionWorld`] that answers the
//!   downward ground probe
//!
//! # Design Principles
//!
//! 1. **Determinism**: Fixed tick durations, no wall-clock reads
//! 2. **Purity**: Sub-steps only talk through velocity/direction arguments
//! 3. **Single owner**: One solver mutates one entity's state per tick

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{CollisionWorld, ContentFlags, TraceResult};
pub use movement::{
    advance_tick, FrameInput, GroundProbe, GroundReference, KinematicState, MovementIntent,
    MovementSolver, MovementTuning, ProbeHit, TickOutcome, TuningError, VelocityObserver,
};
