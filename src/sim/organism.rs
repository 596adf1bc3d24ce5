//! Player and roamer organisms and their motion models
//!
//! Every operation returns a new value; nothing is mutated in place.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::geometry::{Body, Color, Organism};
use crate::consts::*;
use crate::error::{Error, Result};

/// Directional input forwarded by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
        }
    }

    /// Parse a driver key token. Unknown tokens yield `None` and are ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// The player-controlled organism
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct Player {
    pub pos: IVec2,
    size: u32,
    pub vel: DVec2,
    /// Base acceleration per key press
    pub acceleration: f64,
    /// Base max speed per axis (before boost)
    pub max_speed: f64,
    /// Ticks of boosted state remaining
    pub speed_boost_timer: u32,
}

/// Wire form of [`Player`]; decoding goes through [`Player::new`] validation
#[derive(Deserialize)]
struct PlayerFields {
    pos: IVec2,
    size: u32,
    vel: DVec2,
    acceleration: f64,
    max_speed: f64,
    speed_boost_timer: u32,
}

impl TryFrom<PlayerFields> for Player {
    type Error = Error;

    fn try_from(fields: PlayerFields) -> Result<Self> {
        let player = Player::new(fields.pos, fields.size)?;
        Ok(Self {
            vel: fields.vel,
            acceleration: fields.acceleration,
            max_speed: fields.max_speed,
            speed_boost_timer: fields.speed_boost_timer,
            ..player
        })
    }
}

impl Player {
    /// A resting player at `pos`
    pub fn new(pos: IVec2, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            pos,
            size,
            vel: DVec2::ZERO,
            acceleration: PLAYER_ACCELERATION,
            max_speed: PLAYER_MAX_SPEED,
            speed_boost_timer: 0,
        })
    }

    /// Fresh player at the world center (start of each life)
    pub fn spawn() -> Self {
        Self {
            pos: IVec2::new(WORLD_WIDTH / 2, WORLD_HEIGHT / 2),
            size: PLAYER_START_SIZE,
            vel: DVec2::ZERO,
            acceleration: PLAYER_ACCELERATION,
            max_speed: PLAYER_MAX_SPEED,
            speed_boost_timer: 0,
        }
    }

    pub fn with_velocity(self, vel: DVec2) -> Self {
        Self { vel, ..self }
    }

    pub fn is_boosted(&self) -> bool {
        self.speed_boost_timer > 0
    }

    /// Color a renderer should draw the player with
    pub fn display_color(&self) -> Color {
        if self.is_boosted() {
            Color::CYAN
        } else {
            Color::ORANGE
        }
    }

    /// Velocity retained per tick; bigger players carry more momentum
    pub fn inertia_factor(&self) -> f64 {
        (0.98 - (f64::from(self.size) - 20.0) * 0.0008).max(0.92)
    }

    /// Acceleration scale; bigger players respond more sluggishly
    pub fn acceleration_factor(&self) -> f64 {
        (1.0 - (f64::from(self.size) - 20.0) * 0.008).max(0.4)
    }

    fn boost_multiplier(&self) -> f64 {
        if self.is_boosted() { BOOST_MULTIPLIER } else { 1.0 }
    }

    /// Accelerate along the key's axis, then clamp both axes to the current max speed
    pub fn update_velocity(self, key: Key) -> Self {
        let boost = self.boost_multiplier();
        let delta = self.acceleration * self.acceleration_factor() * boost;
        let mut vel = self.vel;
        match key {
            Key::Up => vel.y -= delta,
            Key::Down => vel.y += delta,
            Key::Left => vel.x -= delta,
            Key::Right => vel.x += delta,
        }
        let max = self.max_speed * boost;
        let vel = vel.clamp(DVec2::splat(-max), DVec2::splat(max));
        Self { vel, ..self }
    }

    /// Apply inertia, move by the truncated velocity and tick down the boost
    pub fn move_with_inertia(self) -> Self {
        let mut vel = self.vel * self.inertia_factor();
        if vel.x.abs() < VELOCITY_EPSILON {
            vel.x = 0.0;
        }
        if vel.y.abs() < VELOCITY_EPSILON {
            vel.y = 0.0;
        }
        // `as` truncates toward zero
        let delta = IVec2::new(vel.x as i32, vel.y as i32);
        Self {
            pos: self.pos + delta,
            vel,
            speed_boost_timer: self.speed_boost_timer.saturating_sub(1),
            ..self
        }
    }

    /// Wrap to the opposite edge once strictly outside `[0, width] x [0, height]`
    pub fn wrap_around(self, width: i32, height: i32) -> Self {
        let wrap = |v: i32, bound: i32| {
            if v < 0 {
                bound
            } else if v > bound {
                0
            } else {
                v
            }
        };
        Self {
            pos: IVec2::new(wrap(self.pos.x, width), wrap(self.pos.y, height)),
            ..self
        }
    }

    pub fn grow(self, amount: u32) -> Self {
        Self {
            size: self.size + amount,
            ..self
        }
    }

    /// Reset (never extend) the boost timer
    pub fn apply_speed_boost(self) -> Self {
        Self {
            speed_boost_timer: BOOST_DURATION_TICKS,
            ..self
        }
    }
}

impl Body for Player {
    fn pos(&self) -> IVec2 {
        self.pos
    }

    fn size(&self) -> u32 {
        self.size
    }
}

impl Organism for Player {
    fn color(&self) -> Color {
        self.display_color()
    }
}

/// An autonomous organism swimming horizontally across the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoamerFields")]
pub struct Roamer {
    pub pos: IVec2,
    pub(super) size: u32,
    pub color: Color,
    pub speed: i32,
    pub moving_right: bool,
}

#[derive(Deserialize)]
struct RoamerFields {
    pos: IVec2,
    size: u32,
    color: Color,
    speed: i32,
    moving_right: bool,
}

impl TryFrom<RoamerFields> for Roamer {
    type Error = Error;

    fn try_from(fields: RoamerFields) -> Result<Self> {
        Roamer::new(
            fields.pos,
            fields.size,
            fields.color,
            fields.speed,
            fields.moving_right,
        )
    }
}

impl Roamer {
    pub fn new(
        pos: IVec2,
        size: u32,
        color: Color,
        speed: i32,
        moving_right: bool,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            pos,
            size,
            color,
            speed,
            moving_right,
        })
    }

    pub fn move_step(self) -> Self {
        let dx = if self.moving_right { self.speed } else { -self.speed };
        Self {
            pos: self.pos + IVec2::new(dx, 0),
            ..self
        }
    }

    /// Re-enter from the far side once fully past the edge it swims toward
    pub fn wrap_around(self, width: i32) -> Self {
        let size = self.size as i32;
        if self.moving_right && self.pos.x > width + size {
            Self {
                pos: IVec2::new(-size, self.pos.y),
                ..self
            }
        } else if !self.moving_right && self.pos.x < -size {
            Self {
                pos: IVec2::new(width + size, self.pos.y),
                ..self
            }
        } else {
            self
        }
    }
}

impl Body for Roamer {
    fn pos(&self) -> IVec2 {
        self.pos
    }

    fn size(&self) -> u32 {
        self.size
    }
}

impl Organism for Roamer {
    fn color(&self) -> Color {
        self.color
    }
}
