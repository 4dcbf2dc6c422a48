//! World state and the per-tick simulation.
//!
//! The world owns a fixed population of food, bots and viruses plus the
//! player and the camera. Population members are never removed: an eaten
//! entity is respawned in place and keeps its id.

use crate::ai::Wander;
use crate::camera::Camera;
use crate::collision::{self, EatRule, ThreatRule};
use crate::config::Config;
use crate::entity::{BOT_COLORS, Entity, EntityKind, FOOD_COLORS, Palette};
use crate::input::Pointer;
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Score and threat values handed to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSignal {
    /// Floored player radius.
    pub mass: u32,
    /// Threats seen this tick.
    pub threats: u32,
}

/// What happened during a tick that did not end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub threats: u32,
    /// Food and bots the player ate.
    pub eaten: u32,
    pub virus_hits: u32,
    /// Present only on the ticks that emit a score update.
    pub signal: Option<ScoreSignal>,
}

/// Result of advancing the world by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Continue(TickReport),
    /// The player was eaten. The world must not be ticked again.
    GameOver { final_mass: u32, eaten_by: String },
}

/// Population sizes by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    pub food: usize,
    pub bots: usize,
    pub viruses: usize,
}

/// The game world.
#[derive(Debug)]
pub struct World {
    config: Config,
    rng: SmallRng,

    /// Food, bots and viruses in iteration order.
    entities: Vec<Entity>,
    /// Entity id to position in `entities`.
    index: HashMap<String, usize>,

    player: Entity,
    camera: Camera,

    eat_rule: EatRule,
    threat_rule: ThreatRule,
    wander: Wander,

    tick_count: u64,
}

impl World {
    /// Populate a fresh world and place the player at a random spot.
    pub fn new(config: &Config, player_name: &str) -> Self {
        let seed = config.world.rng_seed.unwrap_or_else(rand::random);
        Self::with_rng(config, player_name, SmallRng::seed_from_u64(seed))
    }

    /// Like [`World::new`] with an explicit RNG.
    pub fn with_rng(config: &Config, player_name: &str, mut rng: SmallRng) -> Self {
        let size = config.world.size;
        let food_palette = config.food.palette().unwrap_or_else(|err| {
            warn!("Food palette unusable ({err}), using built-in colors");
            Palette::from_static(&FOOD_COLORS)
        });
        let bot_palette = config.bot.palette().unwrap_or_else(|err| {
            warn!("Bot palette unusable ({err}), using built-in colors");
            Palette::from_static(&BOT_COLORS)
        });

        let counts = &config.world;
        let mut entities = Vec::with_capacity(counts.food_count + counts.bot_count + counts.virus_count);
        for i in 0..counts.food_count {
            entities.push(Entity::spawn_food(i, &config.food, size, &food_palette, &mut rng));
        }
        for i in 0..counts.bot_count {
            entities.push(Entity::spawn_bot(i, &config.bot, size, &bot_palette, &mut rng));
        }
        for i in 0..counts.virus_count {
            entities.push(Entity::spawn_virus(i, &config.virus, size, &mut rng));
        }

        let player = Entity::spawn_player(player_name, config.player.initial_radius, size, &mut rng);

        info!(
            "World initialized: {} food, {} bots, {} viruses, player {:?} at ({:.0}, {:.0})",
            counts.food_count, counts.bot_count, counts.virus_count, player_name, player.x(), player.y()
        );

        Self::assemble(config, rng, player, entities)
    }

    /// Build a world from explicit entities. Ids must be unique.
    pub fn from_parts(config: &Config, player: Entity, entities: Vec<Entity>, seed: u64) -> Self {
        Self::assemble(config, SmallRng::seed_from_u64(seed), player, entities)
    }

    fn assemble(config: &Config, rng: SmallRng, player: Entity, entities: Vec<Entity>) -> Self {
        let index: HashMap<String, usize> = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        assert_eq!(index.len(), entities.len(), "entity ids must be unique");

        let center = Vec2::splat(config.world.size / 2.0);
        Self {
            rng,
            entities,
            index,
            player,
            camera: Camera::new(center),
            eat_rule: EatRule {
                ratio: config.rules.eat_ratio,
                overlap: config.rules.eat_overlap,
            },
            threat_rule: ThreatRule {
                ratio: config.rules.threat_ratio,
                range: config.rules.threat_range,
            },
            wander: Wander::new(&config.bot, &config.player),
            tick_count: 0,
            config: config.clone(),
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.config.world.size
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn player(&self) -> &Entity {
        &self.player
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Food, bots and viruses in iteration order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up a population member by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn population(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for entity in &self.entities {
            match entity.kind {
                EntityKind::Food => counts.food += 1,
                EntityKind::Bot => counts.bots += 1,
                EntityKind::Virus => counts.viruses += 1,
                EntityKind::Player => {}
            }
        }
        counts
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self, pointer: Pointer) -> TickOutcome {
        self.tick_count += 1;

        self.move_player(pointer);
        self.move_bots();

        let mut report = match self.resolve_collisions() {
            Ok(report) => report,
            Err(eaten_by) => {
                let final_mass = self.player.mass();
                info!("Player eaten by {} at tick {} (mass {})", eaten_by, self.tick_count, final_mass);
                return TickOutcome::GameOver { final_mass, eaten_by };
            }
        };

        // Growth can push the player past the border.
        let size = self.size();
        self.player.clamp_to_world(size);

        self.camera.follow(self.player.position, self.player.radius(), &self.config.camera);

        if self.tick_count % self.config.session.score_interval_ticks == 0 {
            let signal = ScoreSignal {
                mass: self.player.mass(),
                threats: report.threats,
            };
            debug!("Score signal: mass {}, threats {}", signal.mass, signal.threats);
            report.signal = Some(signal);
        }

        TickOutcome::Continue(report)
    }

    fn move_player(&mut self, pointer: Pointer) {
        let player_cfg = &self.config.player;
        let (direction, speed) = match pointer.steering(player_cfg.deadzone) {
            Some(direction) => (
                direction,
                Entity::speed_for_radius(
                    self.player.radius(),
                    player_cfg.base_speed,
                    player_cfg.speed_reference_radius,
                    player_cfg.speed_exponent,
                ),
            ),
            None => (Vec2::ZERO, 0.0),
        };
        let size = self.config.world.size;
        self.player.advance(direction, speed, size);
    }

    fn move_bots(&mut self) {
        let size = self.config.world.size;
        for entity in self.entities.iter_mut().filter(|e| e.kind == EntityKind::Bot) {
            self.wander.steer(entity, size, &mut self.rng);
        }
    }

    /// Single pass over the population, last slot first. Events apply in that
    /// order, so several overlapping prey in one tick are eaten one by one with
    /// the player growing in between. Returns the id of the eater on game over.
    fn resolve_collisions(&mut self) -> Result<TickReport, String> {
        let size = self.config.world.size;
        let initial_radius = self.config.player.initial_radius;
        let virus_divisor = self.config.rules.virus_divisor;
        let mut report = TickReport::default();

        for i in (0..self.entities.len()).rev() {
            let entity = &mut self.entities[i];
            let player = &mut self.player;

            let player_eats = player.eats(entity, &self.eat_rule);
            if player_eats {
                match entity.kind {
                    EntityKind::Virus => {
                        let radius = collision::virus_penalty(player.radius(), virus_divisor, initial_radius);
                        debug!("Player hit {}: radius {:.1} -> {:.1}", entity.id, player.radius(), radius);
                        player.set_radius(radius);
                        report.virus_hits += 1;
                    }
                    _ => {
                        player.set_radius(collision::absorb(player.radius(), entity.radius()));
                        report.eaten += 1;
                    }
                }
            } else if entity.kind.is_hostile() && entity.eats(player, &self.eat_rule) {
                return Err(entity.id.clone());
            }

            if entity.kind.is_hostile()
                && self
                    .threat_rule
                    .is_threat(player.position, player.radius(), entity.position, entity.radius())
            {
                report.threats += 1;
            }

            if player_eats {
                match entity.kind {
                    EntityKind::Food => entity.respawn_food(size, &mut self.rng),
                    EntityKind::Bot => {
                        entity.respawn_bot(&self.config.bot, size, &mut self.rng);
                        debug!("{} respawned with radius {:.1}", entity.id, entity.radius());
                    }
                    EntityKind::Virus => entity.respawn_virus(size, &mut self.rng),
                    EntityKind::Player => {}
                }
            }
        }

        Ok(report)
    }
}
