//! Collision world containing static brushes.
//!
//! The world only answers ray queries. It is the geometry service behind
//! the ground probe; sliding and penetration response belong to the host.

use glam::{Quat, Vec3};
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::na::{Quaternion, Translation3, UnitQuaternion};
use parry3d::query::{PointQuery, Ray, RayCast};
use parry3d::shape::SharedShape;

use crate::movement::{GroundProbe, ProbeHit, WORLD_UP};

use super::flags::ContentFlags;
use super::trace::TraceResult;

/// A piece of collision geometry in the world.
#[derive(Clone)]
pub struct CollisionBrush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position and orientation in world space.
    pub transform: Isometry<Real>,
    /// Content flags (solid, trigger, ...).
    pub contents: ContentFlags,
}

impl std::fmt::Debug for CollisionBrush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionBrush")
            .field("id", &self.id)
            .field("transform", &self.transform)
            .field("contents", &self.contents)
            .finish_non_exhaustive()
    }
}

/// The collision world containing all geometry.
///
/// Immutable during a tick; shareable across threads for parallel probes.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    brushes: Vec<CollisionBrush>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    /// * `contents` - Content flags for probe filtering
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, contents: ContentFlags) -> u32 {
        self.add_oriented_box(center, half_extents, Quat::IDENTITY, contents)
    }

    /// Add a rotated box to the world (ramps, tilted walls).
    pub fn add_oriented_box(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        contents: ContentFlags,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let shape = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);

        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(
            rotation.w, rotation.x, rotation.y, rotation.z,
        ));
        let transform = Isometry::from_parts(Translation3::new(center.x, center.y, center.z), rotation);

        self.brushes.push(CollisionBrush {
            id,
            shape,
            transform,
            contents,
        });

        id
    }

    /// Get the number of collision brushes.
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Cast a ray through the world and report the closest hit.
    ///
    /// Brushes that contain the ray origin are skipped, so a ray starting
    /// inside geometry reports the next surface it reaches.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (will be normalized)
    /// * `max_distance` - Maximum trace distance
    /// * `mask` - Content flags to collide with
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: ContentFlags) -> TraceResult {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return TraceResult::no_hit(origin, 0.0);
        }

        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(dir.x, dir.y, dir.z),
        );

        let mut closest_hit: Option<(f32, Vec3, &CollisionBrush)> = None;

        for brush in &self.brushes {
            if !mask.intersects(brush.contents) {
                continue;
            }

            if brush.shape.contains_point(&brush.transform, &ray.origin) {
                continue;
            }

            let Some(hit) = brush
                .shape
                .cast_ray_and_get_normal(&brush.transform, &ray, max_distance, true)
            else {
                continue;
            };

            let is_closer = closest_hit
                .as_ref()
                .map_or(true, |(dist, _, _)| hit.time_of_impact < *dist);

            if is_closer {
                let normal = Vec3::new(hit.normal.x, hit.normal.y, hit.normal.z);
                closest_hit = Some((hit.time_of_impact, normal, brush));
            }
        }

        match closest_hit {
            Some((distance, normal, brush)) => TraceResult {
                fraction: distance / max_distance,
                distance,
                end_position: origin + dir * distance,
                hit_normal: Some(normal),
                hit_contents: brush.contents,
                hit_brush: Some(brush.id),
            },
            None => TraceResult::no_hit(origin + dir * max_distance, max_distance),
        }
    }
}

impl GroundProbe for CollisionWorld {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<ProbeHit> {
        let trace = self.raycast(origin, -WORLD_UP, max_distance, ContentFlags::MASK_GROUND);
        trace.hit_normal.map(|normal| ProbeHit {
            distance: trace.distance,
            normal,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
