//! Airstrafe game host
//!
//! This crate hosts the movement core the way an engine would:
//!
//! - A fixed-timestep accumulator driving physics at a constant rate
//! - Player entities owning a body position and a movement solver
//! - Minimal rigid-body integration (gravity, resting on the probed ground)
//! - A locomotion bridge feeding the animation layer
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Simulation                            │
//! │  ┌───────────┐    ┌───────────────┐    ┌──────────────────┐  │
//! │  │ Frame     │───►│ Fixed ticks   │───►│ Body integration │  │
//! │  │ input     │    │ (solver per   │    │ (gravity, rest   │  │
//! │  │ (latched) │    │  player)      │    │  on ground)      │  │
//! │  └───────────┘    └───────┬───────┘    └──────────────────┘  │
//! │                           ▼                                  │
//! │                   LocomotionBridge                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod level;
pub mod locomotion;
pub mod player;
pub mod simulation;
pub mod timestep;

// Re-export main types
pub use level::Level;
pub use locomotion::LocomotionBridge;
pub use player::{EntityId, Player};
pub use simulation::{Simulation, SimulationConfig, SimulationError};
pub use timestep::{FixedTimestep, TimestepError};

// Re-export physics types for convenience
pub use airstrafe_physics::{
    CollisionWorld, ContentFlags, KinematicState, MovementSolver, MovementTuning,
};
