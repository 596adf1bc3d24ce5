//! Demo autopilot
//!
//! Steers the player for the headless driver: flee the closest roamer that
//! could eat us, otherwise chase the closest thing worth collecting. It only
//! reads the public world view and answers with a key, like a human would.

use glam::DVec2;

use crate::sim::{Body, Key, Organism, World, distance};

/// Roamers closer than this (plus their size) are treated as threats
pub const DANGER_RADIUS: f64 = 120.0;

/// Ignore steering corrections smaller than this (pixels per tick)
const STEER_DEADZONE: f64 = 0.05;

/// Pick the key to press this tick, if any
pub fn choose_key<S>(world: &World<S>) -> Option<Key> {
    if world.is_game_over() {
        return None;
    }
    let player = world.player();
    let here = player.pos.as_dvec2();

    let threat = world
        .roamers()
        .iter()
        .filter(|r| r.can_eat(player))
        .map(|r| (distance(r, player), r))
        .filter(|(d, r)| *d < DANGER_RADIUS + f64::from(r.size()))
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let heading = if let Some((_, roamer)) = threat {
        here - roamer.pos.as_dvec2()
    } else {
        let edible = world
            .roamers()
            .iter()
            .filter(|r| player.can_eat(*r))
            .map(|r| r.pos.as_dvec2());
        let pickups = world.pickups().iter().map(|p| p.pos.as_dvec2());
        let target = edible
            .chain(pickups)
            .min_by(|a, b| a.distance(here).total_cmp(&b.distance(here)))?;
        target - here
    };

    steer(heading, player.vel, player.max_speed)
}

/// Choose the key that best turns `vel` toward `heading` at full speed
fn steer(heading: DVec2, vel: DVec2, max_speed: f64) -> Option<Key> {
    let desired = heading.normalize_or_zero() * max_speed;
    let error = desired - vel;
    if error.abs().max_element() < STEER_DEADZONE {
        return None;
    }
    let key = if error.x.abs() >= error.y.abs() {
        if error.x > 0.0 { Key::Right } else { Key::Left }
    } else if error.y > 0.0 {
        Key::Down
    } else {
        Key::Up
    };
    Some(key)
}
