//! Airstrafe - headless movement harness
//!
//! Runs a scripted strafe-jump through the test arena at a variable render
//! rate and logs the locomotion speed. Set `RUST_LOG=debug` to see ground
//! transitions and jumps, `trace` for every tick.

use airstrafe_game::{Level, Player, Simulation, SimulationConfig, SimulationError};
use airstrafe_physics::MovementTuning;
use glam::Vec2;

/// Render frame rate the script samples input at.
const RENDER_HZ: f32 = 144.0;

/// Seconds of straight running before strafing starts.
const RUN_UP_SECONDS: f32 = 1.0;

/// Seconds of strafe-jumping.
const STRAFE_SECONDS: f32 = 4.0;

/// Seconds per strafe direction.
const STRAFE_SWING_SECONDS: f32 = 0.5;

/// Turn rate while strafing (radians/second).
const TURN_RATE: f32 = 2.5;

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimulationConfig {
        tuning: MovementTuning::bhop(),
        ..Default::default()
    };
    let mut simulation = Simulation::new(config, Level::test_arena())?;
    let player_id = simulation.add_player("Player1")?;

    let frame_delta = 1.0 / RENDER_HZ;
    let total_frames = ((RUN_UP_SECONDS + STRAFE_SECONDS) * RENDER_HZ) as u32;
    let report_every = (RENDER_HZ / 4.0) as u32;

    let mut top_speed = 0.0f32;

    for frame in 0..total_frames {
        let time = frame as f32 * frame_delta;

        let (local_move, jump) = if time < RUN_UP_SECONDS {
            (Vec2::new(0.0, 1.0), false)
        } else {
            let swing = ((time - RUN_UP_SECONDS) / STRAFE_SWING_SECONDS) as u32;
            let strafe = if swing % 2 == 0 { 1.0 } else { -1.0 };

            // Turn into the strafe so the wish direction keeps sweeping.
            if let Some(player) = simulation.get_player_mut(player_id) {
                player.yaw += strafe * TURN_RATE * frame_delta;
            }

            let grounded = simulation.get_player(player_id).is_some_and(Player::on_ground);
            (Vec2::new(strafe, 0.0), grounded)
        };

        simulation.sample_input(player_id, local_move, jump)?;
        simulation.advance_frame(frame_delta);

        if let Some(player) = simulation.get_player(player_id) {
            let speed = player.locomotion.speed();
            top_speed = top_speed.max(speed);

            if frame % report_every == 0 {
                log::info!(
                    "t={:5.2}s tick={:4} speed={:6.2} grounded={:5} pos=({:7.2}, {:5.2}, {:7.2})",
                    time,
                    simulation.frame,
                    speed,
                    player.on_ground(),
                    player.position.x,
                    player.position.y,
                    player.position.z,
                );
            }
        }
    }

    log::info!(
        "done: {} ticks, top speed {:.2} (ground cap {:.2})",
        simulation.frame,
        top_speed,
        simulation.config.tuning.max_ground_velocity,
    );

    Ok(())
}
