//! Entity spawning
//!
//! The spawner is the engine's only source of nondeterminism. It is owned by
//! the world and only consulted when a roamer or pickup is created, so a
//! seeded or scripted spawner makes whole runs reproducible.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::Color;
use super::organism::Roamer;
use super::state::{Pickup, PickupKind};

/// Margin kept between spawned entities and the top/bottom (and pickups' side) edges
pub const SPAWN_MARGIN: i32 = 20;

/// Creates new roamers and pickups for a `width` x `height` world
pub trait Spawner {
    fn roamer(&mut self, width: i32, height: i32) -> Roamer;
    fn pickup(&mut self, width: i32, height: i32) -> Pickup;
}

/// Spawner backed by a seeded PCG generator
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    seed: u64,
    rng: Pcg32,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Coordinate in `[SPAWN_MARGIN, extent - SPAWN_MARGIN)`, or the axis midpoint
    /// when the axis is too short to keep the margin on both sides
    fn inset(&mut self, extent: i32) -> i32 {
        if extent > 2 * SPAWN_MARGIN {
            self.rng.random_range(SPAWN_MARGIN..extent - SPAWN_MARGIN)
        } else {
            extent.max(0) / 2
        }
    }
}

impl Spawner for RandomSpawner {
    /// A roamer entering from the edge behind its direction of travel
    fn roamer(&mut self, width: i32, height: i32) -> Roamer {
        let y = self.inset(height);
        let size = self.rng.random_range(10u32..40);
        let moving_right = self.rng.random_bool(0.5);
        let x = if moving_right {
            -(size as i32)
        } else {
            width + size as i32
        };
        let speed = self.rng.random_range(1..=3);
        let color = Color::rgb(self.rng.random(), self.rng.random(), self.rng.random());

        Roamer {
            pos: IVec2::new(x, y),
            size,
            color,
            speed,
            moving_right,
        }
    }

    fn pickup(&mut self, width: i32, height: i32) -> Pickup {
        let x = self.inset(width);
        let y = self.inset(height);
        let kind = if self.rng.random_bool(0.5) {
            PickupKind::Growth
        } else {
            PickupKind::Boost
        };
        Pickup::new(IVec2::new(x, y), kind)
    }
}
