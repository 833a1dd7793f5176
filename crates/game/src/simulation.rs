//! Game simulation - the fixed-timestep host loop.
//!
//! Each fixed step runs the movement solver for every player, then does the
//! rigid-body part the solver leaves to its host: gravity, position
//! integration and resting on the ground below.

use airstrafe_physics::{CollisionWorld, GroundProbe, MovementSolver, MovementTuning, TuningError};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level::Level;
use crate::player::{EntityId, Player};
use crate::timestep::{FixedTimestep, TimestepError};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid movement tuning: {0}")]
    Tuning(#[from] TuningError),

    #[error("invalid timestep: {0}")]
    Timestep(#[from] TimestepError),

    #[error("no player with id {0}")]
    UnknownPlayer(EntityId),
}

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Downward acceleration applied to bodies (units/second²).
    pub gravity: f32,

    /// Height of the body origin above the surface it rests on.
    pub rest_height: f32,

    /// Movement physics tuning shared by all players.
    pub tuning: MovementTuning,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            gravity: 9.81,
            rest_height: 1.0,
            tuning: MovementTuning::default(),
        }
    }
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Number of fixed ticks run so far.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// All players in the game.
    pub players: Vec<Player>,

    timestep: FixedTimestep,

    /// Next entity ID to assign.
    next_entity_id: EntityId,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Result<Self, SimulationError> {
        config.tuning.validate()?;
        let timestep = FixedTimestep::new(config.tick_rate)?;

        Ok(Self {
            frame: 0,
            config,
            level,
            players: Vec::new(),
            timestep,
            next_entity_id: 1,
        })
    }

    /// Create a simulation with default configuration and test arena.
    pub fn test() -> Result<Self, SimulationError> {
        Self::new(SimulationConfig::default(), Level::test_arena())
    }

    /// Add a player to the simulation.
    ///
    /// Returns the player's ID.
    pub fn add_player(&mut self, name: &str) -> Result<EntityId, SimulationError> {
        let solver = MovementSolver::new(self.config.tuning.clone())?;

        let id = self.next_entity_id;
        self.next_entity_id += 1;

        let spawn_index = self.players.len() % self.level.player_spawn_count().max(1);
        let spawn = self.level.get_player_spawn(spawn_index);

        let position = spawn.map_or(Vec3::new(0.0, self.config.rest_height, 0.0), |s| s.position);
        let facing = spawn.map_or(0.0, |s| s.facing);

        let mut player = Player::new(id, name.to_string(), position, solver);
        player.yaw = facing;

        log::debug!("spawned player {} ({}) at {:?}", id, name, position);
        self.players.push(player);
        Ok(id)
    }

    /// Get a player by ID.
    pub fn get_player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID.
    pub fn get_player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Feed one rendered frame of input for a player.
    pub fn sample_input(
        &mut self,
        player_id: EntityId,
        local_move: Vec2,
        jump_pressed: bool,
    ) -> Result<(), SimulationError> {
        let player = self
            .get_player_mut(player_id)
            .ok_or(SimulationError::UnknownPlayer(player_id))?;
        player.sample_input(local_move, jump_pressed);
        Ok(())
    }

    /// Advance by one rendered frame of `frame_delta` seconds.
    ///
    /// Runs however many fixed ticks the accumulated time allows and returns
    /// that count.
    pub fn advance_frame(&mut self, frame_delta: f32) -> u32 {
        let steps = self.timestep.advance(frame_delta);
        for _ in 0..steps {
            self.tick();
        }
        steps
    }

    /// Fraction of a tick not yet simulated, for render interpolation.
    pub fn interpolation_alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    /// Advance the simulation by one fixed tick.
    pub fn tick(&mut self) {
        let delta_time = self.timestep.step();

        for player in &mut self.players {
            player.solver.advance_fixed_tick_with(
                &self.level.collision,
                player.position,
                delta_time,
                &mut player.locomotion,
            );

            integrate_body(player, &self.level.collision, &self.config, delta_time);
        }

        self.frame += 1;
    }
}

/// Rigid-body step: gravity, position integration and ground contact.
fn integrate_body(player: &mut Player, world: &CollisionWorld, config: &SimulationConfig, delta_time: f32) {
    let state = player.solver.state_mut();

    state.velocity.y -= config.gravity * delta_time;
    player.position += state.velocity * delta_time;

    if state.velocity.y > 0.0 {
        return;
    }

    if let Some(hit) = world.cast_down(player.position, config.rest_height) {
        player.position.y += config.rest_height - hit.distance;
        state.velocity.y = 0.0;
    }
}

// ============================================================================
// Tests
// ============================================================================
