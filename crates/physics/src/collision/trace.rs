//! Ray trace results.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::flags::ContentFlags;

/// Result of a ray trace through the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    /// How far along the ray we got before hitting something.
    ///
    /// - `1.0` = traveled the full distance (no collision)
    /// - `0.0` = hit something immediately at start
    pub fraction: f32,

    /// Distance traveled before the hit (or the full length on a miss).
    pub distance: f32,

    /// Impact point, or the ray end on a miss.
    pub end_position: Vec3,

    /// Surface normal at the impact point. `None` on a miss.
    ///
    /// A ray starting inside a brush reports a zero normal.
    pub hit_normal: Option<Vec3>,

    /// Content flags of what was hit.
    pub hit_contents: ContentFlags,

    /// Id of the brush that was hit.
    pub hit_brush: Option<u32>,
}

impl TraceResult {
    /// Create a trace result indicating no collision occurred.
    pub fn no_hit(end_position: Vec3, distance: f32) -> Self {
        Self {
            fraction: 1.0,
            distance,
            end_position,
            hit_normal: None,
            hit_contents: ContentFlags::EMPTY,
            hit_brush: None,
        }
    }

    /// Check if this trace hit something.
    #[inline]
    pub fn hit_something(&self) -> bool {
        self.hit_normal.is_some()
    }
}
