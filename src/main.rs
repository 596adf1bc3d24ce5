//! Feeding Frenzy headless driver
//!
//! Plays the role of the animation loop: feeds key events and ticks to the
//! engine at a fixed cadence, then prints the final world as JSON.

use std::path::PathBuf;

use feeding_frenzy::autopilot::choose_key;
use feeding_frenzy::sim::{Body, World};
use feeding_frenzy::{Result, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Feeding Frenzy (headless) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref())?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Started new game with seed: {}", seed);

    let mut world = World::with_spawner(
        feeding_frenzy::sim::RandomSpawner::new(seed),
        settings.initial_roamers,
    );

    while !world.is_game_over() && world.tick_count() < settings.max_ticks {
        if settings.autopilot {
            if let Some(key) = choose_key(&world) {
                world = world.key_event(key.as_str());
            }
        }
        world = world.tick();

        if world.tick_count() % 600 == 0 {
            log::debug!(
                "Tick {}: size {}, score {}, lives {}, roamers {}",
                world.tick_count(),
                world.player().size(),
                world.score(),
                world.lives(),
                world.roamers().len()
            );
        }
        if settings.realtime {
            std::thread::sleep(settings.tick_interval());
        }
    }

    let outcome = match (world.is_game_over(), world.has_won()) {
        (true, true) => "You were the biggest fish!",
        (true, false) => "You were eaten!",
        (false, _) => "Out of time",
    };
    log::info!(
        "{} Final score {} after {} ticks",
        outcome,
        world.score(),
        world.tick_count()
    );

    println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    Ok(())
}
