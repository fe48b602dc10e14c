//! Spritesheet: a texture handle plus per-animation frame counts.
//!
//! The texture type is opaque to the engine. It is only handed back to the
//! render target when blitting, so any backend handle works.

use crate::api::types::AnimationId;

/// A fully loaded spritesheet, owned by the object type built from it.
#[derive(Debug, Clone)]
pub struct Spritesheet<T> {
    texture: T,
    frames_in_animation: Vec<u32>,
    pairs: Option<Vec<(u32, u32)>>,
}

impl<T> Spritesheet<T> {
    pub fn new(texture: T, frames_in_animation: Vec<u32>) -> Self {
        Self {
            texture,
            frames_in_animation,
            pairs: None,
        }
    }

    /// Declare mirror pairs explicitly instead of pairing rows by parity.
    pub fn with_pairs(mut self, pairs: Vec<(u32, u32)>) -> Self {
        self.pairs = Some(pairs);
        self
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn animation_count(&self) -> usize {
        self.frames_in_animation.len()
    }

    /// Number of frames in one animation strip, if the id exists.
    pub fn frames_in_animation(&self, id: AnimationId) -> Option<u32> {
        self.frames_in_animation.get(id.index()).copied()
    }

    pub fn frame_counts(&self) -> &[u32] {
        &self.frames_in_animation
    }

    pub fn declared_pairs(&self) -> Option<&[(u32, u32)]> {
        self.pairs.as_deref()
    }
}
