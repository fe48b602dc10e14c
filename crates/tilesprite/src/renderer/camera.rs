use glam::IVec2;

use crate::api::config::EngineConfig;
use crate::api::types::Rect;

/// Screen-space camera for 2D rendering.
/// World coordinates minus `offset` give screen coordinates; the screen
/// spans `[0, viewport.x] x [0, viewport.y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// World position of the screen's top-left corner.
    pub offset: IVec2,
    /// Visible size in pixels.
    pub viewport: IVec2,
}

impl Camera {
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        Self {
            offset: IVec2::ZERO,
            viewport: IVec2::new(viewport_width, viewport_height),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.viewport_width, config.viewport_height)
    }

    pub fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Move the camera so `offset` is the world point at the screen's top-left.
    pub fn look_at(&mut self, offset: IVec2) {
        self.offset = offset;
    }

    /// Center the screen on a world point.
    pub fn center_on(&mut self, target: IVec2) {
        self.offset = target - self.viewport / 2;
    }

    /// Camera-relative destination for a world rectangle.
    pub fn world_to_screen(&self, world: Rect) -> Rect {
        world.translate(-self.offset)
    }

    /// Whether a screen-space rectangle overlaps the viewport with non-zero area.
    /// Rectangles that only touch an edge are culled.
    pub fn is_visible(&self, screen: Rect) -> bool {
        screen.right() > 0
            && screen.bottom() > 0
            && screen.x < self.viewport.x
            && screen.y < self.viewport.y
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_to_screen_subtracts_offset() {
        let cam = Camera::default().with_offset(IVec2::new(50, -20));
        let dst = cam.world_to_screen(Rect::new(100, 100, 32, 32));
        assert_eq!(dst, Rect::new(50, 120, 32, 32));
    }

    #[test]
    fn origin_rect_is_visible() {
        let cam = Camera::default();
        assert!(cam.is_visible(Rect::new(0, 0, 32, 32)));
        assert!(cam.is_visible(Rect::new(-31, -31, 32, 32)));
        assert!(cam.is_visible(Rect::new(1279, 719, 32, 32)));
    }

    #[test]
    fn edge_touching_rects_are_culled() {
        let cam = Camera::default();
        // Right edge at x == 0.
        assert!(!cam.is_visible(Rect::new(-32, 0, 32, 32)));
        // Bottom edge at y == 0.
        assert!(!cam.is_visible(Rect::new(0, -32, 32, 32)));
        // Left edge on the far side of the viewport.
        assert!(!cam.is_visible(Rect::new(1280, 0, 32, 32)));
        assert!(!cam.is_visible(Rect::new(0, 720, 32, 32)));
    }

    #[test]
    fn center_on_places_target_mid_screen() {
        let mut cam = Camera::new(100, 60);
        cam.center_on(IVec2::new(500, 300));
        assert_eq!(cam.offset, IVec2::new(450, 270));
        let screen = cam.world_to_screen(Rect::new(500, 300, 1, 1));
        assert_eq!(screen.pos(), IVec2::new(50, 30));
    }
}
