//! Level geometry and spawn points.

use airstrafe_physics::{CollisionWorld, ContentFlags};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A level: collision geometry plus where players appear.
#[derive(Debug)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Collision world answering ground probes.
    pub collision: CollisionWorld,

    /// Player spawn points.
    pub spawn_points: Vec<SpawnPoint>,
}

/// A player spawn point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Entity origin in world space (above the floor by the body rest
    /// height).
    pub position: Vec3,

    /// Initial facing (yaw in radians).
    pub facing: f32,
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            collision: CollisionWorld::new(),
            spawn_points: Vec::new(),
        }
    }

    /// Create a simple test level for development.
    ///
    /// A 100x100 floor with walls, a ramp rising toward -Z in the north half
    /// and a trigger pad that cannot be stood on.
    pub fn test_arena() -> Self {
        let mut level = Self::new("test_arena", "Test Arena");

        // Floor
        level.collision.add_box(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(50.0, 0.5, 50.0),
            ContentFlags::SOLID,
        );

        let wall_height = 5.0;
        let wall_thickness = 0.5;
        let arena_size = 50.0;

        // North / south walls
        for z in [-arena_size, arena_size] {
            level.collision.add_box(
                Vec3::new(0.0, wall_height / 2.0, z),
                Vec3::new(arena_size, wall_height / 2.0, wall_thickness),
                ContentFlags::SOLID,
            );
        }

        // East / west walls
        for x in [-arena_size, arena_size] {
            level.collision.add_box(
                Vec3::new(x, wall_height / 2.0, 0.0),
                Vec3::new(wall_thickness, wall_height / 2.0, arena_size),
                ContentFlags::SOLID,
            );
        }

        // 20 degree ramp
        level.collision.add_oriented_box(
            Vec3::new(0.0, 0.0, -30.0),
            Vec3::new(4.0, 0.5, 8.0),
            Quat::from_rotation_x(20f32.to_radians()),
            ContentFlags::SOLID,
        );

        // Trigger pad: raised, but probes fall through it
        level.collision.add_box(
            Vec3::new(15.0, 0.25, 15.0),
            Vec3::new(2.0, 0.25, 2.0),
            ContentFlags::TRIGGER,
        );

        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(-20.0, 1.0, 0.0),
            facing: 0.0,
        });
        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(20.0, 1.0, 0.0),
            facing: std::f32::consts::PI,
        });

        level
    }

    /// Get a player spawn point.
    pub fn get_player_spawn(&self, index: usize) -> Option<&SpawnPoint> {
        self.spawn_points.get(index)
    }

    /// Get the number of player spawn points.
    pub fn player_spawn_count(&self) -> usize {
        self.spawn_points.len()
    }
}
