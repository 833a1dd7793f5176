//! Air-strafe movement physics.
//!
//! This module implements source-style movement with:
//!
//! - Ground and air movement with different physics
//! - Friction applied only on the ground
//! - Acceleration capped on the projected speed, not the resultant speed
//! - A latched jump request consumed once per fixed tick
//! - A single downward ground probe
//!
//! # Design
//!
//! [`advance_tick`] runs one fixed step over an explicit [`KinematicState`]
//! and [`MovementIntent`]. [`MovementSolver`] owns both and splits frame-rate
//! input sampling from fixed-rate integration. Presentation code observes
//! committed state through [`VelocityObserver`].
//!
//! All movement is deterministic - the same inputs and tick durations will
//! always produce the same velocities.

mod accelerate;
mod config;
mod ground;
mod jump;
mod observer;
mod solver;
mod state;

pub use accelerate::{accelerate, apply_friction, move_air, move_ground};
pub use config::{GroundReference, MovementTuning, TuningError};
pub use ground::{check_ground, is_ground_surface, GroundProbe, ProbeHit, GROUND_PROBE_LENGTH};
pub use jump::jump;
pub use observer::VelocityObserver;
pub use solver::{advance_tick, MovementSolver};
pub use state::{FrameInput, KinematicState, MovementIntent, TickOutcome, WORLD_FORWARD, WORLD_UP};
