//! Long-running seeded worlds.

use glam::Vec2;
use sim::entity::EntityKind;
use sim::world::PopulationCounts;
use sim::{Config, GamePhase, Pointer, Session, ShellEvent, TickOutcome, World};

fn seeded(seed: u64) -> Config {
    let mut config = Config::default();
    config.world.rng_seed = Some(seed);
    config
}

/// Pointer that circles around so the player crosses the map.
fn sweeping(tick: u64) -> Pointer {
    let angle = tick as f32 * 0.01;
    Pointer::new(Vec2::new(angle.cos(), angle.sin()) * 300.0)
}

#[test]
fn test_population_is_conserved() {
    let config = seeded(1);
    let mut world = World::new(&config, "Ada");
    let before = world.population();
    let ids: Vec<String> = world.entities().iter().map(|e| e.id.clone()).collect();

    for tick in 0..2_000 {
        if let TickOutcome::GameOver { .. } = world.tick(sweeping(tick)) {
            break;
        }
        assert_eq!(world.population(), before);
    }

    let after: Vec<String> = world.entities().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, after);
    assert_eq!(
        before,
        PopulationCounts {
            food: 800,
            bots: 25,
            viruses: 15
        }
    );
}

#[test]
fn test_everything_stays_inside_the_world() {
    for seed in 0..4 {
        let config = seeded(seed);
        let size = config.world.size;
        let mut world = World::new(&config, "Ada");

        for tick in 0..1_500 {
            if let TickOutcome::GameOver { .. } = world.tick(sweeping(tick)) {
                break;
            }
            assert!(world.player().is_within_world(size), "player out of bounds at tick {tick}");
            for entity in world.entities() {
                assert!(entity.radius() > 0.0);
                assert!(entity.is_within_world(size), "{} out of bounds at tick {tick}", entity.id);
            }
        }
    }
}

#[test]
fn test_player_never_shrinks_below_initial_radius() {
    let config = seeded(7);
    let mut world = World::new(&config, "Ada");
    for tick in 0..2_000 {
        if let TickOutcome::GameOver { final_mass, .. } = world.tick(sweeping(tick)) {
            assert!(final_mass >= 20);
            break;
        }
        assert!(world.player().radius() >= config.player.initial_radius);
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = seeded(11);
    let mut a = World::new(&config, "Ada");
    let mut b = World::new(&config, "Ada");
    for tick in 0..500 {
        let left = a.tick(sweeping(tick));
        let right = b.tick(sweeping(tick));
        assert_eq!(left, right);
        if matches!(left, TickOutcome::GameOver { .. }) {
            break;
        }
    }
    assert_eq!(a.player(), b.player());
    assert_eq!(a.entities(), b.entities());
}

#[test]
fn test_bots_keep_moving() {
    let config = seeded(3);
    let mut world = World::new(&config, "Ada");
    let start: Vec<Vec2> = world
        .entities()
        .iter()
        .filter(|e| e.kind == EntityKind::Bot)
        .map(|e| e.position)
        .collect();
    for _ in 0..30 {
        world.tick(Pointer::default());
    }
    let moved = world
        .entities()
        .iter()
        .filter(|e| e.kind == EntityKind::Bot)
        .zip(&start)
        .filter(|(bot, from)| bot.position != **from)
        .count();
    assert!(moved > 0);
}

#[test]
fn test_session_plays_rounds_until_game_over() {
    let mut config = seeded(21);
    config.world.size = 800.0;
    config.world.food_count = 50;
    config.world.bot_count = 40;
    config.world.virus_count = 2;
    let (mut session, mut rx) = Session::new(config);

    for round in 0..2 {
        session.start(&format!("Round{round}")).unwrap();
        let mut ticks = 0u64;
        while session.phase() == GamePhase::Playing && ticks < 20_000 {
            session.tick(sweeping(ticks));
            ticks += 1;
        }
        let stats = session.stats();
        assert!(stats.time_alive <= ticks);
        assert!(stats.max_mass >= 20);
        session.return_to_menu().unwrap();
        assert_eq!(session.phase(), GamePhase::Menu);
    }

    let mut game_overs = 0;
    while let Ok(event) = rx.try_recv() {
        if let ShellEvent::GameOver { final_mass } = event {
            assert!(final_mass >= 20);
            game_overs += 1;
        }
    }
    assert!(game_overs <= 2);
}
