//! Food pellets.

use super::cell::{Entity, EntityKind};
use super::color::{Color, Palette};
use crate::config::FoodConfig;
use crate::math;
use rand::Rng;

/// Pastel food colors.
pub const FOOD_COLORS: [Color; 8] = [
    Color::new(0xfc, 0xa5, 0xa5),
    Color::new(0xfd, 0xba, 0x74),
    Color::new(0xfd, 0xe0, 0x47),
    Color::new(0x86, 0xef, 0xac),
    Color::new(0x67, 0xe8, 0xf9),
    Color::new(0x93, 0xc5, 0xfd),
    Color::new(0xd8, 0xb4, 0xfe),
    Color::new(0xf9, 0xa8, 0xd4),
];

impl Entity {
    /// Create the `index`-th food pellet at a random spot.
    pub fn spawn_food<R: Rng + ?Sized>(
        index: usize,
        config: &FoodConfig,
        world_size: f32,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let radius = math::random_between(rng, config.min_radius, config.max_radius);
        let position = math::random_point_within(rng, world_size, radius);
        Entity::new(format!("food-{index}"), EntityKind::Food, position, radius, palette.pick(rng))
    }

    /// Eaten food reappears elsewhere with the same size.
    pub(crate) fn respawn_food<R: Rng + ?Sized>(&mut self, world_size: f32, rng: &mut R) {
        self.position = math::random_point_within(rng, world_size, self.radius());
    }
}
