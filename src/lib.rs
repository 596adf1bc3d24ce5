//! Feeding Frenzy - an eat-or-be-eaten arcade simulation
//!
//! Core modules:
//! - `sim`: Pure simulation engine (motion, collisions, pickups, spawning)
//! - `autopilot`: Demo controller used by the headless driver
//! - `settings`: Driver configuration loaded from JSON
//! - `error`: Construction and settings errors

pub mod autopilot;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World dimensions, shared with any renderer
    pub const WORLD_WIDTH: i32 = 800;
    pub const WORLD_HEIGHT: i32 = 600;

    /// Player defaults
    pub const PLAYER_START_SIZE: u32 = 20;
    pub const PLAYER_ACCELERATION: f64 = 0.8;
    pub const PLAYER_MAX_SPEED: f64 = 8.0;
    /// Velocity components below this magnitude snap to zero
    pub const VELOCITY_EPSILON: f64 = 0.1;

    /// Speed boost: acceleration and max speed multiplier while active
    pub const BOOST_MULTIPLIER: f64 = 1.5;
    pub const BOOST_DURATION_TICKS: u32 = 300;

    /// Pickups
    pub const PICKUP_SIZE: u32 = 10;
    pub const GROWTH_PICKUP_AMOUNT: u32 = 10;
    pub const GROWTH_PICKUP_POINTS: u32 = 50;
    pub const BOOST_PICKUP_POINTS: u32 = 25;

    /// Spawn cadence (ticks)
    pub const ROAMER_SPAWN_INTERVAL: u64 = 60;
    pub const PICKUP_SPAWN_INTERVAL: u64 = 180;
    /// Roamers present when a world is created
    pub const INITIAL_ROAMERS: usize = 5;

    /// Player lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;

    /// Default driver cadence (seconds per tick)
    pub const DEFAULT_TICK_SECONDS: f32 = 0.05;
}
