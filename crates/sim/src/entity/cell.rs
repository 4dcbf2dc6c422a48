//! Base entity type and common functionality.

use super::color::Color;
use crate::collision::EatRule;
use crate::math;
use glam::Vec2;

/// What an entity is. Replaces per-kind boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Food,
    Bot,
    Virus,
    Player,
}

impl EntityKind {
    /// Kinds that can eat the player and count as threats.
    #[inline]
    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::Bot | EntityKind::Player)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Food => "food",
            EntityKind::Bot => "bot",
            EntityKind::Virus => "virus",
            EntityKind::Player => "player",
        }
    }
}

/// A circle in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Stable for the entity's lifetime, including respawns.
    pub id: String,
    pub kind: EntityKind,
    /// Center in world coordinates.
    pub position: Vec2,
    radius: f32,
    pub color: Color,
    pub name: Option<String>,
    /// Steering destination (bots only).
    pub target: Option<Vec2>,
    /// Last applied movement speed, kept for display.
    pub speed: Option<f32>,
}

impl Entity {
    /// Create a new entity. Panics on a non-positive radius.
    pub fn new(id: impl Into<String>, kind: EntityKind, position: Vec2, radius: f32, color: Color) -> Self {
        assert!(radius > 0.0, "entity radius must be positive (got {radius})");
        Self {
            id: id.into(),
            kind,
            position,
            radius,
            color,
            name: None,
            target: None,
            speed: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the radius. Panics on a non-positive radius.
    #[inline]
    pub fn set_radius(&mut self, radius: f32) {
        assert!(radius > 0.0, "entity radius must be positive (got {radius})");
        self.radius = radius;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Mass shown to the player: the floored radius.
    #[inline]
    pub fn mass(&self) -> u32 {
        self.radius.floor() as u32
    }

    /// Keep the whole circle inside a square world of side `world_size`.
    #[inline]
    pub fn clamp_to_world(&mut self, world_size: f32) {
        self.position = math::clamp_to_world(self.position, self.radius, world_size);
    }

    #[inline]
    pub fn is_within_world(&self, world_size: f32) -> bool {
        let (lo, hi) = (self.radius, world_size - self.radius);
        (lo..=hi).contains(&self.position.x) && (lo..=hi).contains(&self.position.y)
    }

    /// Check whether this entity eats `other`.
    #[inline]
    pub fn eats(&self, other: &Entity, rule: &EatRule) -> bool {
        rule.eats(self.position, self.radius, other.position, other.radius)
    }

    /// Move `speed` units along `direction` (need not be normalized), then clamp.
    pub fn advance(&mut self, direction: Vec2, speed: f32, world_size: f32) {
        let step = direction.normalize_or_zero() * speed;
        self.position += step;
        self.speed = Some(speed);
        self.clamp_to_world(world_size);
    }
}
