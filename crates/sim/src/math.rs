// Geometry helpers: distance, clamping, random picks

use glam::Vec2;
use rand::Rng;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a value between min and max. Callers guarantee `lo <= hi`.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Clamp a circle's center into a square world so the whole circle stays inside.
#[inline]
pub fn clamp_to_world(position: Vec2, radius: f32, world_size: f32) -> Vec2 {
    Vec2::new(
        clamp(position.x, radius, world_size - radius),
        clamp(position.y, radius, world_size - radius),
    )
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform coordinate in `[0, max)`.
#[inline]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    rng.random_range(0.0..max)
}

/// Uniform point whose circle of `radius` lies fully inside the world.
#[inline]
pub fn random_point_within<R: Rng + ?Sized>(rng: &mut R, world_size: f32, radius: f32) -> Vec2 {
    Vec2::new(
        random_between(rng, radius, world_size - radius),
        random_between(rng, radius, world_size - radius),
    )
}

/// Uniform point anywhere in the world.
#[inline]
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, world_size: f32) -> Vec2 {
    Vec2::new(random_position(rng, world_size), random_position(rng, world_size))
}

/// Uniform pick from a slice. `None` for an empty slice.
#[inline]
pub fn random_choice<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

/// Uniform value in `[min, max)`, or `min` when the range is empty.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
