//! Frame atlas: source rectangles for every frame of every animation.
//!
//! Spritesheets are laid out as stacked horizontal strips, one animation
//! per row and frames left to right, all of the same size.

use glam::IVec2;

use crate::api::types::{AnimationId, Rect};

/// Per-animation frame rectangles. Built once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAtlas {
    animations: Vec<Vec<Rect>>,
}

impl FrameAtlas {
    /// Frame `k` of animation `id` sits at `(w * k, h * id)`.
    pub fn build(frames_in_animation: &[u32], frame_size: IVec2) -> Self {
        let animations = frames_in_animation
            .iter()
            .enumerate()
            .map(|(row, &count)| {
                let y = frame_size.y * row as i32;
                (0..count as i32)
                    .map(|col| Rect::new(frame_size.x * col, y, frame_size.x, frame_size.y))
                    .collect()
            })
            .collect();
        Self { animations }
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn frame_count(&self, id: AnimationId) -> Option<usize> {
        self.animations.get(id.index()).map(Vec::len)
    }

    pub fn frames(&self, id: AnimationId) -> Option<&[Rect]> {
        self.animations.get(id.index()).map(Vec::as_slice)
    }

    pub fn frame(&self, id: AnimationId, index: usize) -> Option<Rect> {
        self.animations.get(id.index())?.get(index).copied()
    }
}
