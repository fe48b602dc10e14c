use glam::IVec2;

use crate::api::error::EngineError;
use crate::api::types::{AnimationId, Rect};
use crate::components::animation::AnimationPairs;
use crate::components::hitbox::Hitboxes;
use crate::core::atlas::FrameAtlas;

/// One live instance of an object type.
///
/// Frame counters are kept per animation, not just for the current one,
/// so a mirrored partner keeps its place while the other half plays.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// World-space bounds. Size always equals the owning type's size.
    position: Rect,
    /// Edge hitboxes derived from `position`.
    hitboxes: Hitboxes,
    /// Thickness used to derive `hitboxes`.
    inset: i32,
    /// Currently playing animation.
    animation: AnimationId,
    /// Animation before the last `set_animation` call.
    last_animation: AnimationId,
    /// Frame counter per animation id. Wraps at `u32::MAX`; the drawn frame
    /// comes from `frame_index`.
    sprite_index: Vec<u32>,
}

impl Object {
    /// Create an instance at `pos` with every frame counter at 0.
    pub fn new(pos: IVec2, size: IVec2, inset: i32, animation_count: usize) -> Self {
        let position = Rect::from_pos_size(pos, size);
        Self {
            position,
            hitboxes: Hitboxes::from_bounds(position, inset),
            inset,
            animation: AnimationId(0),
            last_animation: AnimationId(0),
            sprite_index: vec![0; animation_count],
        }
    }

    pub fn position(&self) -> Rect {
        self.position
    }

    pub fn hitboxes(&self) -> &Hitboxes {
        &self.hitboxes
    }

    pub fn animation(&self) -> AnimationId {
        self.animation
    }

    pub fn last_animation(&self) -> AnimationId {
        self.last_animation
    }

    /// True when the last `set_animation` switched to a different id.
    pub fn animation_changed(&self) -> bool {
        self.animation != self.last_animation
    }

    /// All frame counters, indexed by animation id.
    pub fn sprite_indexes(&self) -> &[u32] {
        &self.sprite_index
    }

    /// Raw (unwrapped) frame counter of one animation.
    pub fn sprite_index(&self, id: AnimationId) -> Option<u32> {
        self.sprite_index.get(id.index()).copied()
    }

    /// Move the instance and re-derive its hitboxes.
    pub fn set_position(&mut self, pos: IVec2) {
        self.position.x = pos.x;
        self.position.y = pos.y;
        self.sync_hitboxes();
    }

    /// Recompute hitboxes from the current position.
    pub fn sync_hitboxes(&mut self) {
        self.hitboxes = Hitboxes::from_bounds(self.position, self.inset);
    }

    /// Switch to `id`. Frame counters are left untouched and switching to
    /// the current id is allowed.
    pub fn set_animation(&mut self, id: AnimationId) -> Result<(), EngineError> {
        if id.index() >= self.sprite_index.len() {
            return Err(EngineError::UnknownAnimation(id));
        }
        self.last_animation = self.animation;
        self.animation = id;
        Ok(())
    }

    /// Step the current animation and its mirror forward by one frame.
    ///
    /// Counters are only reduced to a strip position when a frame is looked
    /// up. At `u32::MAX` they wrap to 0, both halves of a pair together.
    pub fn advance_frame(&mut self, pairs: &AnimationPairs) -> Result<(), EngineError> {
        let current = self.animation;
        let partner = pairs.partner(current)?;
        for id in [current, partner] {
            let counter = &mut self.sprite_index[id.index()];
            *counter = counter.wrapping_add(1);
        }
        Ok(())
    }

    /// Rewind every animation except `active` and its mirror to frame 0.
    pub fn reset_idle_animations(
        &mut self,
        pairs: &AnimationPairs,
        active: AnimationId,
    ) -> Result<(), EngineError> {
        let partner = pairs.partner(active)?;
        for (id, index) in self.sprite_index.iter_mut().enumerate() {
            if id != active.index() && id != partner.index() {
                *index = 0;
            }
        }
        Ok(())
    }

    /// Frame of the current animation to draw, wrapped into the strip's length.
    pub fn frame_index(&self, atlas: &FrameAtlas) -> Option<usize> {
        let frames = atlas.frame_count(self.animation)?;
        let raw = self.sprite_index.get(self.animation.index())?;
        (*raw as usize).checked_rem(frames)
    }

    /// Source rectangle for the current frame.
    pub fn current_frame(&self, atlas: &FrameAtlas) -> Option<Rect> {
        let index = self.frame_index(atlas)?;
        atlas.frame(self.animation, index)
    }
}
