//! Fixed-timestep accumulator.
//!
//! Turns variable frame deltas into a whole number of fixed physics steps so
//! the movement core always integrates with the same tick duration.

use thiserror::Error;

/// Maximum fixed steps run for one frame. Time beyond this is dropped so a
/// long stall cannot snowball into ever longer frames.
pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestepError {
    #[error("tick rate must be positive")]
    ZeroTickRate,
}

/// Accumulates frame time and hands out fixed steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
}

impl FixedTimestep {
    /// Create an accumulator for `tick_rate` steps per second.
    pub fn new(tick_rate: u32) -> Result<Self, TimestepError> {
        if tick_rate == 0 {
            return Err(TimestepError::ZeroTickRate);
        }
        Ok(Self {
            step: 1.0 / f64::from(tick_rate),
            accumulator: 0.0,
        })
    }

    /// Duration of one fixed step in seconds.
    pub fn step(&self) -> f32 {
        self.step as f32
    }

    /// Add a frame's worth of time and return how many fixed steps to run.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        if !frame_delta.is_finite() || frame_delta < 0.0 {
            log::warn!("ignoring invalid frame delta {}", frame_delta);
            return 0;
        }

        self.accumulator += f64::from(frame_delta);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= self.step {
            log::debug!("dropping {:.3}s of simulation time", self.accumulator);
            self.accumulator %= self.step;
        }

        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_rejected() {
        assert_eq!(FixedTimestep::new(0).unwrap_err(), TimestepError::ZeroTickRate);
    }

    #[test]
    fn test_fast_frames_accumulate() {
        let mut timestep = FixedTimestep::new(60).unwrap();

        // 144 Hz rendering against 60 Hz physics.
        let total: u32 = (0..144).map(|_| timestep.advance(1.0 / 144.0)).sum();
        assert!((59..=60).contains(&total), "got {} steps", total);
    }

    #[test]
    fn test_slow_frame_runs_several_steps() {
        let mut timestep = FixedTimestep::new(60).unwrap();
        assert_eq!(timestep.advance(3.5 / 60.0), 3);
        assert!(timestep.alpha() > 0.4 && timestep.alpha() < 0.6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut timestep = FixedTimestep::new(60).unwrap();
        assert_eq!(timestep.advance(2.0), MAX_STEPS_PER_FRAME);
        assert!(timestep.alpha() < 1.0);
    }

    #[test]
    fn test_invalid_delta_ignored() {
        let mut timestep = FixedTimestep::new(60).unwrap();
        assert_eq!(timestep.advance(-1.0), 0);
        assert_eq!(timestep.advance(f32::NAN), 0);
        assert_eq!(timestep.alpha(), 0.0);
    }
}
