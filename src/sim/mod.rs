//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per driver tick, no wall-clock time
//! - Randomness only through the world's `Spawner`
//! - Stable iteration order (newest entity first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod list;
pub mod organism;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, PickupResult, resolve_collisions, resolve_pickups};
pub use geometry::{Body, Color, Organism, can_eat, distance, touching};
pub use list::{EntityList, PickupList, RoamerList};
pub use organism::{Key, Player, Roamer};
pub use spawn::{RandomSpawner, Spawner};
pub use state::{GamePhase, Pickup, PickupKind, Snapshot, World};
pub use tick::{key_event, tick};
