//! Collision and pickup resolution
//!
//! Both resolvers walk their list front to back, threading the player through
//! each interaction: whatever happened to the player at element k is visible
//! when testing element k + 1. A single tick can therefore chain several eats
//! as the player outgrows successive roamers.

use super::geometry::{Body, Organism, touching};
use super::list::{PickupList, RoamerList};
use super::organism::Player;
use super::state::PickupKind;
use crate::consts::*;

/// Outcome of resolving the player against the roamer list
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Player after every eat that happened before traversal stopped
    pub player: Player,
    /// Roamers that were not eaten, in list order
    pub remaining: RoamerList,
    pub player_died: bool,
    pub points: u32,
    /// Number of roamers eaten this pass
    pub eaten: usize,
}

/// Outcome of resolving the player against the pickup list
#[derive(Debug, Clone)]
pub struct PickupResult {
    pub player: Player,
    pub remaining: PickupList,
    pub points: u32,
}

/// Resolve eating and death between `player` and every roamer.
///
/// Per roamer, in list order:
/// - not touching, or touching an equal-size roamer: kept
/// - touching and smaller than the player: eaten, player grows by `size / 5`,
///   `size * 2` points
/// - touching and bigger than the player: traversal stops with the player
///   dead; that roamer and everything after it are kept as-is
pub fn resolve_collisions(roamers: &RoamerList, player: Player) -> CollisionResult {
    let mut player = player;
    let mut kept = Vec::new();
    let mut points = 0;
    let mut eaten = 0;
    let mut cursor = roamers.clone();

    while let Some(&roamer) = cursor.first() {
        if touching(&player, &roamer) {
            if player.can_eat(&roamer) {
                player = player.grow(roamer.size() / 5);
                points += roamer.size() * 2;
                eaten += 1;
                cursor = cursor.rest();
                continue;
            }
            if roamer.can_eat(&player) {
                return CollisionResult {
                    player,
                    remaining: RoamerList::from_front(kept, cursor),
                    player_died: true,
                    points,
                    eaten,
                };
            }
        }
        kept.push(roamer);
        cursor = cursor.rest();
    }

    CollisionResult {
        player,
        remaining: RoamerList::from_front(kept, RoamerList::new()),
        player_died: false,
        points,
        eaten,
    }
}

/// Collect every pickup the player touches, applying effects in list order
pub fn resolve_pickups(pickups: &PickupList, player: Player) -> PickupResult {
    let mut player = player;
    let mut kept = Vec::new();
    let mut points = 0;

    for &pickup in pickups {
        if !touching(&pickup, &player) {
            kept.push(pickup);
            continue;
        }
        match pickup.kind {
            PickupKind::Growth => {
                player = player.grow(GROWTH_PICKUP_AMOUNT);
                points += GROWTH_PICKUP_POINTS;
            }
            PickupKind::Boost => {
                player = player.apply_speed_boost();
                points += BOOST_PICKUP_POINTS;
            }
        }
    }

    PickupResult {
        player,
        remaining: kept.into_iter().collect(),
        points,
    }
}
