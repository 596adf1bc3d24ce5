//! Fixed-cadence simulation tick
//!
//! Core game loop that advances the world one step. Each step is a pure
//! transition from one `World` value to the next.

use super::collision::{resolve_collisions, resolve_pickups};
use super::geometry::Body;
use super::organism::{Key, Player};
use super::spawn::Spawner;
use super::state::{GamePhase, World};
use crate::consts::*;

/// Advance the world by one tick
pub fn tick<S: Spawner>(world: World<S>) -> World<S> {
    if world.is_game_over() {
        return world;
    }

    let World {
        player,
        roamers,
        pickups,
        mut spawner,
        tick_count,
        score,
        lives,
        ..
    } = world;
    let tick_count = tick_count + 1;

    let player = player
        .move_with_inertia()
        .wrap_around(WORLD_WIDTH, WORLD_HEIGHT);
    let roamers = roamers.move_all().wrap_all(WORLD_WIDTH);

    let collected = resolve_pickups(&pickups, player);
    let collision = resolve_collisions(&roamers, collected.player);
    let score = score + u64::from(collected.points + collision.points);

    if collision.eaten > 0 {
        log::debug!(
            "Tick {}: ate {} roamer(s), player size {}",
            tick_count,
            collision.eaten,
            collision.player.size()
        );
    }

    if collision.player_died {
        if lives > 1 {
            log::info!("Player eaten at tick {}, {} lives left", tick_count, lives - 1);
            return World {
                player: Player::spawn(),
                roamers: collision.remaining,
                pickups: collected.remaining,
                spawner,
                tick_count,
                phase: GamePhase::Playing,
                score,
                lives: lives - 1,
            };
        }
        log::info!("Game over at tick {}: final score {}", tick_count, score);
        return World {
            player: collision.player,
            roamers: collision.remaining,
            pickups: collected.remaining,
            spawner,
            tick_count,
            phase: GamePhase::GameOver { won: false },
            score,
            lives,
        };
    }

    let mut roamers = collision.remaining;
    if tick_count % ROAMER_SPAWN_INTERVAL == 0 {
        let roamer = spawner.roamer(WORLD_WIDTH, WORLD_HEIGHT);
        log::debug!("Tick {}: spawned roamer size {} at {}", tick_count, roamer.size(), roamer.pos);
        roamers = roamers.prepend(roamer);
    }

    let mut pickups = collected.remaining;
    if tick_count % PICKUP_SPAWN_INTERVAL == 0 {
        let pickup = spawner.pickup(WORLD_WIDTH, WORLD_HEIGHT);
        log::debug!("Tick {}: spawned {:?} pickup at {}", tick_count, pickup.kind, pickup.pos);
        pickups = pickups.prepend(pickup);
    }

    // Won once the player outgrows every roamer still alive (never with none left)
    let player = collision.player;
    let won = !roamers.is_empty() && roamers.count_smaller_than(player.size()) == roamers.len();
    let phase = if won {
        log::info!(
            "Player won at tick {} with size {}, score {}",
            tick_count,
            player.size(),
            score
        );
        GamePhase::GameOver { won: true }
    } else {
        GamePhase::Playing
    };

    World {
        player,
        roamers,
        pickups,
        spawner,
        tick_count,
        phase,
        score,
        lives,
    }
}

/// Apply a driver key token. Only directional keys during play have an effect.
pub fn key_event<S>(world: World<S>, token: &str) -> World<S> {
    if world.is_game_over() {
        return world;
    }
    match Key::from_token(token) {
        Some(key) => World {
            player: world.player.update_velocity(key),
            ..world
        },
        None => {
            log::trace!("Ignoring key {:?}", token);
            world
        }
    }
}

impl<S: Spawner> World<S> {
    pub fn tick(self) -> Self {
        tick(self)
    }
}

impl<S> World<S> {
    pub fn key_event(self, token: &str) -> Self {
        key_event(self, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sim::geometry::Color;
    use crate::sim::list::{PickupList, RoamerList};
    use crate::sim::organism::Roamer;
    use crate::sim::state::{Pickup, PickupKind};
    use glam::{DVec2, IVec2};

    /// Hands out the same roamer and pickup every time, counting calls
    #[derive(Debug, Clone)]
    struct ScriptedSpawner {
        roamer: Roamer,
        pickup: Pickup,
        roamers_made: usize,
        pickups_made: usize,
    }

    impl ScriptedSpawner {
        fn new() -> Self {
            Self {
                roamer: roamer(-12, 580, 12, true),
                pickup: Pickup::new(IVec2::new(700, 50), PickupKind::Growth),
                roamers_made: 0,
                pickups_made: 0,
            }
        }
    }

    impl Spawner for ScriptedSpawner {
        fn roamer(&mut self, _width: i32, _height: i32) -> Roamer {
            self.roamers_made += 1;
            self.roamer
        }

        fn pickup(&mut self, _width: i32, _height: i32) -> Pickup {
            self.pickups_made += 1;
            self.pickup
        }
    }

    fn roamer(x: i32, y: i32, size: u32, moving_right: bool) -> Roamer {
        Roamer::new(IVec2::new(x, y), size, Color::rgb(10, 20, 30), 1, moving_right).unwrap()
    }

    fn player(x: i32, y: i32, size: u32) -> Player {
        Player::new(IVec2::new(x, y), size).unwrap()
    }

    fn empty_world() -> World<ScriptedSpawner> {
        World::with_spawner(ScriptedSpawner::new(), 0)
    }

    #[test]
    fn test_tick_advances_counter_and_roamers() {
        // Bigger than the player, so the game stays in play
        let world = empty_world().with_roamers([roamer(50, 50, 30, true)].into_iter().collect());
        let world = world.tick();
        assert_eq!(world.tick_count(), 1);
        assert_eq!(world.roamers().first().unwrap().pos.x, 51);
        assert_eq!(world.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_eating_scores_and_grows() {
        let world = empty_world()
            .with_player(player(100, 100, 20))
            .with_roamers(
                [roamer(99, 100, 10, true), roamer(600, 400, 35, false)]
                    .into_iter()
                    .collect(),
            );
        let world = world.tick();
        assert_eq!(world.player().size(), 22);
        assert_eq!(world.score(), 20);
        assert_eq!(world.roamers().len(), 1);
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_last_life_ends_game() {
        let killer = roamer(399, 300, 40, true);
        let world = empty_world()
            .with_roamers([killer].into_iter().collect())
            .with_lives(1)
            .unwrap()
            .tick();

        assert!(world.is_game_over());
        assert!(!world.has_won());
        assert_eq!(world.phase(), GamePhase::GameOver { won: false });
        assert_eq!(world.lives(), 1);
        assert_eq!(world.tick_count(), 1);
        assert_eq!(world.player().size(), PLAYER_START_SIZE);
        assert_eq!(world.roamers().len(), 1);
    }

    #[test]
    fn test_death_with_lives_respawns() {
        let killer = roamer(99, 100, 40, true);
        let bonus = Pickup::new(IVec2::new(100, 100), PickupKind::Growth);
        let far_pickup = Pickup::new(IVec2::new(700, 500), PickupKind::Boost);
        let world = empty_world()
            .with_player(player(100, 100, 20).with_velocity(DVec2::new(5.0, 0.0)))
            .with_roamers([killer].into_iter().collect())
            .with_pickups([far_pickup, bonus].into_iter().collect())
            .tick();

        assert!(!world.is_game_over());
        assert_eq!(world.lives(), 2);
        assert_eq!(*world.player(), Player::spawn());
        assert_eq!(world.score(), 50);
        // Killer stays, collected pickup is gone
        assert_eq!(world.roamers().len(), 1);
        assert_eq!(world.pickups(), &[far_pickup].into_iter().collect::<PickupList>());
    }

    #[test]
    fn test_death_skips_spawning() {
        let killer = roamer(399, 300, 40, true);
        let world = empty_world()
            .with_roamers([killer].into_iter().collect())
            .with_tick_count(179)
            .tick();
        assert_eq!(world.lives(), 2);
        assert_eq!(world.spawner().roamers_made, 0);
        assert_eq!(world.spawner().pickups_made, 0);
    }

    #[test]
    fn test_roamer_spawns_every_60_ticks() {
        let far = roamer(700, 40, 30, false);
        let world = empty_world()
            .with_roamers([far].into_iter().collect())
            .with_tick_count(58)
            .tick();
        assert_eq!(world.roamers().len(), 1);

        let world = world.tick();
        assert_eq!(world.tick_count(), 60);
        assert_eq!(world.roamers().len(), 2);
        assert_eq!(world.roamers().first(), Some(&world.spawner().roamer));
        assert!(world.pickups().is_empty());
    }

    #[test]
    fn test_pickup_spawns_every_180_ticks() {
        let far = roamer(700, 40, 30, false);
        let world = empty_world()
            .with_roamers([far].into_iter().collect())
            .with_tick_count(179)
            .tick();
        assert_eq!(world.spawner().roamers_made, 1);
        assert_eq!(world.spawner().pickups_made, 1);
        assert_eq!(world.pickups().first(), Some(&world.spawner().pickup));
    }

    #[test]
    fn test_win_when_bigger_than_every_roamer() {
        let world = empty_world()
            .with_player(player(100, 100, 50))
            .with_roamers(
                [roamer(600, 500, 10, true), roamer(300, 400, 49, false)]
                    .into_iter()
                    .collect(),
            )
            .tick();
        assert!(world.is_game_over());
        assert!(world.has_won());
    }

    #[test]
    fn test_no_win_while_a_roamer_is_as_big() {
        let world = empty_world()
            .with_player(player(100, 100, 50))
            .with_roamers(
                [roamer(600, 500, 10, true), roamer(300, 400, 50, false)]
                    .into_iter()
                    .collect(),
            )
            .tick();
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_no_win_with_empty_world() {
        let world = empty_world().with_player(player(100, 100, 500)).tick();
        assert!(!world.is_game_over());

        // Eating the last roamer empties the list, which is not a win either
        let world = empty_world()
            .with_player(player(100, 100, 50))
            .with_roamers([roamer(99, 100, 10, true)].into_iter().collect())
            .tick();
        assert!(world.roamers().is_empty());
        assert!(!world.has_won());
    }

    #[test]
    fn test_pickups_resolve_before_collisions() {
        // A growth pickup lifts the player from 20 to 30, enough to eat a 25
        let world = empty_world()
            .with_player(player(100, 100, 20))
            .with_pickups(
                [Pickup::new(IVec2::new(100, 100), PickupKind::Growth)]
                    .into_iter()
                    .collect(),
            )
            .with_roamers(
                [roamer(99, 100, 25, true), roamer(700, 500, 35, true)]
                    .into_iter()
                    .collect::<RoamerList>(),
            )
            .tick();
        assert_eq!(world.lives(), 3);
        assert_eq!(world.player().size(), 35);
        assert_eq!(world.score(), 50 + 50);
    }

    #[test]
    fn test_key_event_only_touches_velocity() {
        let world = empty_world().with_score(7);
        let before = world.snapshot();
        let world = world.key_event("right");
        assert_eq!(world.player().vel.x, 0.8);
        assert_eq!(world.player().pos, before.player.pos);
        assert_eq!(world.score(), 7);
        assert_eq!(world.tick_count(), 0);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let world = empty_world();
        let before = world.snapshot();
        assert_eq!(world.key_event("space").snapshot(), before);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let killer = roamer(399, 300, 40, true);
        let world = empty_world()
            .with_roamers([killer].into_iter().collect())
            .with_lives(1)
            .unwrap()
            .tick();
        let over = world.snapshot();

        let world = world.key_event("up").tick().tick();
        assert_eq!(world.snapshot(), over);
    }

    #[test]
    fn test_lives_out_of_range_rejected() {
        assert!(matches!(
            empty_world().with_lives(9),
            Err(Error::InvalidLives { .. })
        ));
    }

    #[test]
    fn test_player_moves_and_wraps() {
        let world = empty_world()
            .with_player(player(799, 300, 20).with_velocity(DVec2::new(5.0, 0.0)))
            .tick();
        // 799 + trunc(4.9) = 803 > 800 -> 0
        assert_eq!(world.player().pos, IVec2::new(0, 300));
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed produce identical runs
        let mut a = World::new(99999);
        let mut b = World::new(99999);
        let keys = ["up", "left", "left", "down", "noop", "right"];

        for i in 0..720 {
            let key = keys[i % keys.len()];
            a = a.key_event(key).tick();
            b = b.key_event(key).tick();
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.tick_count(), b.tick_count());
    }
}
