//! Virus hazards.

use super::cell::{Entity, EntityKind};
use super::color::Color;
use crate::config::VirusConfig;
use crate::math;
use rand::Rng;

/// Default virus color (bright green).
pub const VIRUS_COLOR: Color = Color::new(0x33, 0xff, 0x00);
/// Number of spikes drawn around a virus.
pub const VIRUS_SPIKES: u32 = 20;
/// Spike valleys sit at this fraction of the radius.
pub const VIRUS_INNER_RATIO: f32 = 0.8;

impl Entity {
    /// Create the `index`-th virus at a random spot with a slightly varied size.
    pub fn spawn_virus<R: Rng + ?Sized>(index: usize, config: &VirusConfig, world_size: f32, rng: &mut R) -> Self {
        let radius = config.base_radius + math::random_between(rng, 0.0, config.radius_jitter);
        let position = math::random_point_within(rng, world_size, radius);
        Entity::new(format!("virus-{index}"), EntityKind::Virus, position, radius, VIRUS_COLOR)
    }

    /// A popped virus moves elsewhere and keeps its size.
    pub(crate) fn respawn_virus<R: Rng + ?Sized>(&mut self, world_size: f32, rng: &mut R) {
        self.position = math::random_point_within(rng, world_size, self.radius());
    }
}
