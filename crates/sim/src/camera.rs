// Camera: smooth follow and size-dependent zoom
//
// Smoothing is per tick on purpose, not normalised to wall time:
//   position: camera.pos += (player.pos - camera.pos) * follow      (10 % per tick)
//   zoom:     camera.scale += (target - camera.scale) * zoom_ease   (5 % per tick)
//
// Zoom target: zoom_numerator / (radius + zoom_offset) + zoom_floor
use crate::config::CameraConfig;
use crate::math::lerp;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub scale: f32,
}

impl Camera {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: 1.0,
        }
    }

    /// Zoom the camera eases toward for a player of `radius`.
    #[inline]
    pub fn target_scale(radius: f32, config: &CameraConfig) -> f32 {
        config.zoom_numerator / (radius + config.zoom_offset) + config.zoom_floor
    }

    /// Called once per tick with the player's post-tick position and radius.
    pub fn follow(&mut self, target: Vec2, radius: f32, config: &CameraConfig) {
        self.position.x = lerp(self.position.x, target.x, config.follow);
        self.position.y = lerp(self.position.y, target.y, config.follow);
        self.scale = lerp(self.scale, Self::target_scale(radius, config), config.zoom_ease);
    }

    /// Half extents of the visible world area for a viewport in screen units.
    #[inline]
    pub fn half_extents(&self, viewport: Vec2) -> Vec2 {
        viewport / self.scale / 2.0
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_moves_ten_percent() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(Vec2::new(0.0, 0.0));
        camera.follow(Vec2::new(100.0, -50.0), 20.0, &config);
        assert!((camera.position.x - 10.0).abs() < 1e-5);
        assert!((camera.position.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_target_scale() {
        let config = CameraConfig::default();
        // 20 / 60 + 0.3
        assert!((Camera::target_scale(20.0, &config) - (1.0 / 3.0 + 0.3)).abs() < 1e-6);
        assert!(Camera::target_scale(200.0, &config) < Camera::target_scale(20.0, &config));
    }

    #[test]
    fn test_zoom_eases_five_percent() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(Vec2::ZERO);
        let target = Camera::target_scale(20.0, &config);
        camera.follow(Vec2::ZERO, 20.0, &config);
        assert!((camera.scale - (1.0 + (target - 1.0) * 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_converges() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(Vec2::ZERO);
        for _ in 0..500 {
            camera.follow(Vec2::new(300.0, 400.0), 60.0, &config);
        }
        assert!((camera.position - Vec2::new(300.0, 400.0)).length() < 1e-2);
        assert!((camera.scale - Camera::target_scale(60.0, &config)).abs() < 1e-4);
    }
}
