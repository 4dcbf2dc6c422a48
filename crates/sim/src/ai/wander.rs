use crate::config::{BotConfig, PlayerConfig};
use crate::entity::{Entity, EntityKind};
use crate::math;
use rand::Rng;
use tracing::trace;

/// Target-seeking steering shared by every bot.
#[derive(Debug, Clone, Copy)]
pub struct Wander {
    /// Chance per tick of picking a new target.
    pub retarget_chance: f32,
    pub base_speed: f32,
    pub reference_radius: f32,
    pub speed_exponent: f32,
}

impl Wander {
    pub fn new(bot: &BotConfig, player: &PlayerConfig) -> Self {
        Self {
            retarget_chance: bot.retarget_chance,
            base_speed: player.base_speed,
            reference_radius: player.speed_reference_radius,
            speed_exponent: player.speed_exponent,
        }
    }

    /// Advance one bot by a single tick. Non-bots are left alone.
    pub fn steer<R: Rng + ?Sized>(&self, bot: &mut Entity, world_size: f32, rng: &mut R) {
        if bot.kind != EntityKind::Bot {
            return;
        }

        let retarget = rng.random_bool(self.retarget_chance as f64);
        let target = match bot.target {
            Some(target) if !retarget => target,
            _ => {
                let target = math::random_point(rng, world_size);
                trace!("{} retargets to ({:.0}, {:.0})", bot.id, target.x, target.y);
                bot.target = Some(target);
                target
            }
        };

        let speed = Entity::speed_for_radius(bot.radius(), self.base_speed, self.reference_radius, self.speed_exponent);
        bot.advance(target - bot.position, speed, world_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Color;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn wander(chance: f32) -> Wander {
        Wander {
            retarget_chance: chance,
            base_speed: 6.0,
            reference_radius: 20.0,
            speed_exponent: -0.4,
        }
    }

    fn bot_at(x: f32, y: f32, r: f32) -> Entity {
        Entity::new("bot-0", EntityKind::Bot, Vec2::new(x, y), r, Color::default())
    }

    #[test]
    fn test_moves_toward_target_at_speed_law() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut bot = bot_at(100.0, 100.0, 20.0);
        bot.target = Some(Vec2::new(500.0, 100.0));
        wander(0.0).steer(&mut bot, 1000.0, &mut rng);
        assert!((bot.position.x - 106.0).abs() < 1e-4);
        assert_eq!(bot.position.y, 100.0);
        assert_eq!(bot.target, Some(Vec2::new(500.0, 100.0)));
    }

    #[test]
    fn test_missing_target_is_filled() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut bot = bot_at(100.0, 100.0, 20.0);
        wander(0.0).steer(&mut bot, 1000.0, &mut rng);
        assert!(bot.target.is_some());
    }

    #[test]
    fn test_always_retarget() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut bot = bot_at(100.0, 100.0, 20.0);
        let fixed = Vec2::new(-1.0, -1.0);
        bot.target = Some(fixed);
        wander(1.0).steer(&mut bot, 1000.0, &mut rng);
        assert_ne!(bot.target, Some(fixed));
    }

    #[test]
    fn test_stays_in_bounds_when_target_outside_reach() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut bot = bot_at(21.0, 500.0, 20.0);
        bot.target = Some(Vec2::new(0.0, 500.0));
        wander(0.0).steer(&mut bot, 1000.0, &mut rng);
        assert_eq!(bot.position.x, 20.0);
    }

    #[test]
    fn test_ignores_non_bots() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut food = Entity::new("food-0", EntityKind::Food, Vec2::new(10.0, 10.0), 5.0, Color::default());
        wander(1.0).steer(&mut food, 1000.0, &mut rng);
        assert_eq!(food.position, Vec2::new(10.0, 10.0));
        assert!(food.target.is_none());
    }
}
