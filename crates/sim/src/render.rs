//! Render snapshot: what a frame shows, without drawing it.
//!
//! [`RenderSnapshot::capture`] is a pure function of the world and the
//! viewport. Drawing happens in a [`RenderSink`] owned by the front end.

use crate::camera::Camera;
use crate::entity::{Entity, VIRUS_INNER_RATIO, VIRUS_SPIKES};
use crate::world::World;
use glam::Vec2;

/// World units between background grid lines.
pub const GRID_SPACING: f32 = 100.0;

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct RenderSnapshot<'a> {
    pub camera: Camera,
    pub viewport: Vec2,
    pub world_size: f32,
    /// Visible entities including the player, smallest first so bigger ones draw on top.
    pub entities: Vec<&'a Entity>,
    /// Visible vertical grid lines (x coordinates) inside the world.
    pub grid_x: Vec<f32>,
    /// Visible horizontal grid lines (y coordinates) inside the world.
    pub grid_y: Vec<f32>,
    /// Spike count for the virus outline.
    pub virus_spikes: u32,
    /// Spike valleys as a fraction of the virus radius.
    pub virus_inner_ratio: f32,
}

impl<'a> RenderSnapshot<'a> {
    pub fn capture(world: &'a World, viewport: Vec2) -> Self {
        let camera = *world.camera();
        let half = camera.half_extents(viewport);

        let mut entities: Vec<&Entity> = world
            .entities()
            .iter()
            .filter(|e| is_visible(camera.position, half, e))
            .collect();
        // The player is drawn even when the camera lags behind it.
        entities.push(world.player());
        entities.sort_by(|a, b| a.radius().total_cmp(&b.radius()));

        Self {
            camera,
            viewport,
            world_size: world.size(),
            entities,
            grid_x: grid_lines(camera.position.x, half.x, world.size()),
            grid_y: grid_lines(camera.position.y, half.y, world.size()),
            virus_spikes: VIRUS_SPIKES,
            virus_inner_ratio: VIRUS_INNER_RATIO,
        }
    }

    /// The entity drawn last (largest on screen).
    pub fn topmost(&self) -> Option<&'a Entity> {
        self.entities.last().copied()
    }
}

/// Bounding-box cull: the entity overlaps the view rectangle around `center`.
#[inline]
pub fn is_visible(center: Vec2, half_extents: Vec2, entity: &Entity) -> bool {
    (entity.x() - center.x).abs() < half_extents.x + entity.radius()
        && (entity.y() - center.y).abs() < half_extents.y + entity.radius()
}

/// Grid lines inside `[0, world_size]` that fall within `half` of `center`.
/// The span is clipped to the world first, so a huge view stays bounded.
fn grid_lines(center: f32, half: f32, world_size: f32) -> Vec<f32> {
    let start = (((center - half) / GRID_SPACING).floor() * GRID_SPACING).max(0.0);
    let end = (((center + half) / GRID_SPACING).floor() * GRID_SPACING + GRID_SPACING).min(world_size);
    if start.is_nan() || end.is_nan() || start > end {
        return Vec::new();
    }
    let steps = ((end - start) / GRID_SPACING).round() as i64;
    (0..=steps)
        .map(|i| start + i as f32 * GRID_SPACING)
        .filter(|&line| (0.0..=world_size).contains(&line))
        .collect()
}

/// Consumer of frames, e.g. a canvas or terminal renderer.
pub trait RenderSink {
    fn present(&mut self, frame: &RenderSnapshot<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::entity::{Color, EntityKind, PLAYER_ID};

    fn world_with(entities: Vec<Entity>) -> World {
        let mut config = Config::default();
        config.world.size = 4000.0;
        let player = Entity::new(PLAYER_ID, EntityKind::Player, Vec2::new(2000.0, 2000.0), 30.0, Color::default());
        World::from_parts(&config, player, entities, 0)
    }

    fn food(id: &str, x: f32, y: f32, r: f32) -> Entity {
        Entity::new(id, EntityKind::Food, Vec2::new(x, y), r, Color::default())
    }

    #[test]
    fn test_culls_and_sorts() {
        // Camera starts at the world center with scale 1: half extents 960 x 540.
        let world = world_with(vec![
            food("near", 2100.0, 2000.0, 6.0),
            food("far", 3500.0, 2000.0, 6.0),
            food("edge", 2963.0, 2000.0, 5.0),
            Entity::new("virus-0", EntityKind::Virus, Vec2::new(1500.0, 1800.0), 85.0, Color::default()),
        ]);
        let frame = RenderSnapshot::capture(&world, Vec2::new(1920.0, 1080.0));
        let ids: Vec<&str> = frame.entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["edge", "near", PLAYER_ID, "virus-0"]);
        assert_eq!(frame.topmost().map(|e| e.id.as_str()), Some("virus-0"));
    }

    #[test]
    fn test_zoomed_out_sees_more() {
        let mut camera = Camera::new(Vec2::new(2000.0, 2000.0));
        let entity = food("f", 3200.0, 2000.0, 5.0);
        assert!(!is_visible(camera.position, camera.half_extents(Vec2::new(1920.0, 1080.0)), &entity));
        camera.scale = 0.5;
        assert!(is_visible(camera.position, camera.half_extents(Vec2::new(1920.0, 1080.0)), &entity));
    }

    #[test]
    fn test_grid_lines_clipped_to_world() {
        let lines = grid_lines(50.0, 200.0, 4000.0);
        assert_eq!(lines, vec![0.0, 100.0, 200.0, 300.0]);
        let lines = grid_lines(3950.0, 200.0, 4000.0);
        assert_eq!(lines.last(), Some(&4000.0));
        assert!(lines.iter().all(|&l| l >= 3700.0));
    }

    #[test]
    fn test_grid_lines_bounded_by_world_for_huge_view() {
        let lines = grid_lines(2000.0, 1.0e12, 4000.0);
        assert_eq!(lines.len(), 41);
        assert_eq!(lines.first(), Some(&0.0));
        assert_eq!(lines.last(), Some(&4000.0));

        let lines = grid_lines(2000.0, f32::INFINITY, 4000.0);
        assert_eq!(lines.len(), 41);
    }

    struct Counter(usize);

    impl RenderSink for Counter {
        fn present(&mut self, frame: &RenderSnapshot<'_>) {
            self.0 += frame.entities.len();
        }
    }

    #[test]
    fn test_sink_receives_frame() {
        let world = world_with(vec![food("near", 2010.0, 2000.0, 6.0)]);
        let mut sink = Counter(0);
        sink.present(&RenderSnapshot::capture(&world, Vec2::new(1920.0, 1080.0)));
        assert_eq!(sink.0, 2);
    }
}
