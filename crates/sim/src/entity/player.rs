//! The player blob.

use super::cell::{Entity, EntityKind};
use super::color::Color;
use crate::math;
use rand::Rng;

/// Player color (cyan).
pub const PLAYER_COLOR: Color = Color::new(0x22, 0xd3, 0xee);
/// The player's entity id.
pub const PLAYER_ID: &str = "player";

impl Entity {
    /// Create the player at a random spot with the starting radius.
    pub fn spawn_player<R: Rng + ?Sized>(name: &str, radius: f32, world_size: f32, rng: &mut R) -> Self {
        let position = math::random_point_within(rng, world_size, radius);
        let mut player = Entity::new(PLAYER_ID, EntityKind::Player, position, radius, PLAYER_COLOR).with_name(name);
        player.speed = Some(0.0);
        player
    }

    /// Movement speed for a blob of `radius`: `base * (radius / reference)^exponent`.
    /// Bigger blobs are slower for a negative exponent.
    #[inline]
    pub fn speed_for_radius(radius: f32, base: f32, reference: f32, exponent: f32) -> f32 {
        base * (radius / reference).powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_spawn_player() {
        let mut rng = SmallRng::seed_from_u64(31);
        let player = Entity::spawn_player("Ada", 20.0, 4000.0, &mut rng);
        assert_eq!(player.id, PLAYER_ID);
        assert_eq!(player.kind, EntityKind::Player);
        assert_eq!(player.name.as_deref(), Some("Ada"));
        assert_eq!(player.radius(), 20.0);
        assert!(player.is_within_world(4000.0));
    }

    #[test]
    fn test_speed_law() {
        assert!((Entity::speed_for_radius(20.0, 6.0, 20.0, -0.4) - 6.0).abs() < 1e-6);
        let big = Entity::speed_for_radius(80.0, 6.0, 20.0, -0.4);
        assert!((big - 6.0 * 4.0_f32.powf(-0.4)).abs() < 1e-5);
        let mut last = f32::MAX;
        for r in [5.0, 10.0, 20.0, 40.0, 160.0] {
            let s = Entity::speed_for_radius(r, 6.0, 20.0, -0.4);
            assert!(s < last);
            last = s;
        }
    }
}
