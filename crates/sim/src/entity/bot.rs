//! Bot blobs.

use super::cell::{Entity, EntityKind};
use super::color::{Color, Palette};
use crate::config::BotConfig;
use crate::math;
use rand::Rng;

/// Bold bot colors.
pub const BOT_COLORS: [Color; 8] = [
    Color::new(0xef, 0x44, 0x44),
    Color::new(0xf9, 0x73, 0x16),
    Color::new(0xea, 0xb3, 0x08),
    Color::new(0x22, 0xc5, 0x5e),
    Color::new(0x06, 0xb6, 0xd4),
    Color::new(0x3b, 0x82, 0xf6),
    Color::new(0xa8, 0x55, 0xf7),
    Color::new(0xec, 0x48, 0x99),
];

impl Entity {
    /// Create the `index`-th bot, named `Bot {index + 1}`, already heading somewhere.
    pub fn spawn_bot<R: Rng + ?Sized>(
        index: usize,
        config: &BotConfig,
        world_size: f32,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let radius = math::random_between(rng, config.min_radius, config.max_radius);
        let position = math::random_point_within(rng, world_size, radius);
        let mut bot = Entity::new(format!("bot-{index}"), EntityKind::Bot, position, radius, palette.pick(rng))
            .with_name(format!("Bot {}", index + 1));
        bot.speed = Some(0.0);
        bot.target = Some(math::random_point(rng, world_size));
        bot
    }

    /// An eaten bot comes back elsewhere with a freshly rolled size.
    /// Its name, color and current target survive.
    pub(crate) fn respawn_bot<R: Rng + ?Sized>(&mut self, config: &BotConfig, world_size: f32, rng: &mut R) {
        let radius = math::random_between(rng, config.min_radius, config.max_radius);
        self.set_radius(radius);
        self.position = math::random_point_within(rng, world_size, radius);
    }
}
