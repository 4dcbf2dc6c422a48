//! Eating and threat predicates.
//!
//! Eating is an asymmetric overlap test, not containment: the eater must be
//! noticeably bigger and close enough that most of the prey overlaps it.

use crate::math::distance;
use glam::Vec2;

/// Eater radius must exceed the prey radius by this factor.
pub const EAT_RATIO: f32 = 1.1;
/// Fraction of the prey radius allowed to stick out past the eater's edge.
pub const EAT_OVERLAP: f32 = 0.4;

/// Thresholds for the eating test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EatRule {
    pub ratio: f32,
    pub overlap: f32,
}

impl Default for EatRule {
    fn default() -> Self {
        Self {
            ratio: EAT_RATIO,
            overlap: EAT_OVERLAP,
        }
    }
}

impl EatRule {
    /// True if the circle at `eater` with radius `r1` eats the circle at `prey` with radius `r2`.
    #[inline]
    pub fn eats(&self, eater: Vec2, r1: f32, prey: Vec2, r2: f32) -> bool {
        let bigger = r1 > r2 * self.ratio;
        let close = distance(eater, prey) < r1 - r2 * self.overlap;
        bigger && close
    }
}

/// True iff circle 1 eats circle 2 under the default thresholds.
#[inline]
pub fn eats(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    EatRule::default().eats(Vec2::new(x1, y1), r1, Vec2::new(x2, y2), r2)
}

/// Detection rule for entities that endanger the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatRule {
    pub ratio: f32,
    pub range: f32,
}

impl Default for ThreatRule {
    fn default() -> Self {
        Self {
            ratio: 1.1,
            range: 500.0,
        }
    }
}

impl ThreatRule {
    /// True if a hostile of radius `radius` at `position` threatens the player.
    #[inline]
    pub fn is_threat(&self, player: Vec2, player_radius: f32, position: Vec2, radius: f32) -> bool {
        radius > player_radius * self.ratio && distance(player, position) < self.range
    }
}

/// Radius after absorbing another circle: areas add, so radii add in quadrature.
#[inline]
pub fn absorb(radius: f32, eaten_radius: f32) -> f32 {
    (radius * radius + eaten_radius * eaten_radius).sqrt()
}

/// Radius after hitting a virus, never below `floor`.
#[inline]
pub fn virus_penalty(radius: f32, divisor: f32, floor: f32) -> f32 {
    floor.max(radius / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_eats_nearby_food() {
        // r 20 vs r 5 at distance 5: ratio 4, 5 < 20 - 2
        assert!(eats(500.0, 500.0, 20.0, 505.0, 500.0, 5.0));
        assert!(!eats(505.0, 500.0, 5.0, 500.0, 500.0, 20.0));
    }

    #[test]
    fn test_bigger_entity_eats_player() {
        // ratio 1.25, distance 10 < 25 - 8
        assert!(eats(10.0, 0.0, 25.0, 0.0, 0.0, 20.0));
        assert!(!eats(0.0, 0.0, 20.0, 10.0, 0.0, 25.0));
    }

    #[test]
    fn test_too_far_to_eat() {
        // distance 18 is not < 20 - 0.4 * 5
        assert!(!eats(0.0, 0.0, 20.0, 18.0, 0.0, 5.0));
        assert!(eats(0.0, 0.0, 20.0, 17.9, 0.0, 5.0));
    }

    #[test]
    fn test_ratio_boundary_is_exclusive_both_ways() {
        // 11 is exactly 1.1 x 10: neither eats the other even when concentric
        assert!(!eats(0.0, 0.0, 11.0, 0.0, 0.0, 10.0));
        assert!(!eats(0.0, 0.0, 10.0, 0.0, 0.0, 11.0));
        assert!(eats(0.0, 0.0, 11.1, 0.0, 0.0, 10.0));
    }

    #[test]
    fn test_eating_is_never_mutual() {
        let radii = [1.0, 5.0, 10.0, 11.0, 12.0, 20.0, 33.0, 80.0];
        for &a in &radii {
            for &b in &radii {
                for d in [0.0, 1.0, 5.0, 15.0, 40.0] {
                    assert!(!(eats(0.0, 0.0, a, d, 0.0, b) && eats(d, 0.0, b, 0.0, 0.0, a)));
                }
            }
        }
    }

    #[test]
    fn test_absorb_conserves_area() {
        let r = absorb(20.0, 5.0);
        assert!((r - 425.0_f32.sqrt()).abs() < 1e-4);
        assert!((r - 20.6155).abs() < 1e-3);
        for (rp, re) in [(20.0, 4.0), (35.5, 49.9), (100.0, 0.5)] {
            let r = absorb(rp, re);
            assert!(r > rp);
            let area = std::f32::consts::PI * r * r;
            let sum = std::f32::consts::PI * (rp * rp + re * re);
            assert!((area - sum).abs() / sum < 1e-5);
        }
    }

    #[test]
    fn test_virus_penalty_floor() {
        assert_eq!(virus_penalty(50.0, 2.0, 20.0), 25.0);
        assert_eq!(virus_penalty(30.0, 2.0, 20.0), 20.0);
        assert_eq!(virus_penalty(20.0, 2.0, 20.0), 20.0);
    }

    #[test]
    fn test_threat_rule() {
        let rule = ThreatRule::default();
        let player = Vec2::ZERO;
        assert!(rule.is_threat(player, 20.0, Vec2::new(100.0, 0.0), 23.0));
        assert!(!rule.is_threat(player, 20.0, Vec2::new(100.0, 0.0), 22.0));
        assert!(!rule.is_threat(player, 20.0, Vec2::new(500.0, 0.0), 40.0));
    }
}
