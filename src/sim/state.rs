//! World state and core simulation types
//!
//! A `World` is a value: ticks and key events consume it and return the next
//! one. Renderers read it through the accessors or a serializable `Snapshot`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Body;
use super::list::{PickupList, RoamerList};
use super::organism::Player;
use super::spawn::{RandomSpawner, Spawner};
use crate::consts::*;
use crate::error::{Error, Result};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal
    GameOver { won: bool },
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Instant growth
    Growth,
    /// Temporary speed boost
    Boost,
}

/// A collectible power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: IVec2,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn new(pos: IVec2, kind: PickupKind) -> Self {
        Self { pos, kind }
    }
}

impl Body for Pickup {
    fn pos(&self) -> IVec2 {
        self.pos
    }

    fn size(&self) -> u32 {
        PICKUP_SIZE
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World<S = RandomSpawner> {
    pub(crate) player: Player,
    /// Newest first
    pub(crate) roamers: RoamerList,
    /// Newest first
    pub(crate) pickups: PickupList,
    pub(crate) spawner: S,
    pub(crate) tick_count: u64,
    pub(crate) phase: GamePhase,
    pub(crate) score: u64,
    pub(crate) lives: u8,
}

impl World<RandomSpawner> {
    /// Create a new world with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_spawner(RandomSpawner::new(seed), INITIAL_ROAMERS)
    }
}

impl<S: Spawner> World<S> {
    /// A fresh world whose first `initial_roamers` roamers come from `spawner`
    pub fn with_spawner(mut spawner: S, initial_roamers: usize) -> Self {
        let roamers = (0..initial_roamers).fold(RoamerList::new(), |list, _| {
            list.prepend(spawner.roamer(WORLD_WIDTH, WORLD_HEIGHT))
        });
        log::debug!("World created with {} roamers", roamers.len());

        Self {
            player: Player::spawn(),
            roamers,
            pickups: PickupList::new(),
            spawner,
            tick_count: 0,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
        }
    }
}

impl<S> World<S> {
    pub fn with_player(self, player: Player) -> Self {
        Self { player, ..self }
    }

    pub fn with_roamers(self, roamers: RoamerList) -> Self {
        Self { roamers, ..self }
    }

    pub fn with_pickups(self, pickups: PickupList) -> Self {
        Self { pickups, ..self }
    }

    pub fn with_score(self, score: u64) -> Self {
        Self { score, ..self }
    }

    pub fn with_tick_count(self, tick_count: u64) -> Self {
        Self { tick_count, ..self }
    }

    /// Fails when `lives` exceeds the starting lives
    pub fn with_lives(self, lives: u8) -> Result<Self> {
        if lives > STARTING_LIVES {
            return Err(Error::InvalidLives {
                lives,
                max: STARTING_LIVES,
            });
        }
        Ok(Self { lives, ..self })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn roamers(&self) -> &RoamerList {
        &self.roamers
    }

    pub fn pickups(&self) -> &PickupList {
        &self.pickups
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub fn has_won(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { won: true })
    }

    /// Everything a renderer or HUD needs, detached from the spawner
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick_count,
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            player: self.player,
            roamers: self.roamers.clone(),
            pickups: self.pickups.clone(),
        }
    }
}

/// Read-only view of a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub player: Player,
    pub roamers: RoamerList,
    pub pickups: PickupList,
}
