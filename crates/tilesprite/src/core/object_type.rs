//! Object types: one per kind of game object ("player", "slime", ...).
//!
//! An object type owns its spritesheet, the frame atlas cut from it, the
//! mirror pairing of its animations, and every live instance.

use glam::IVec2;

use crate::api::config::EngineConfig;
use crate::api::error::EngineError;
use crate::api::types::{AnimationId, InstanceId};
use crate::assets::spritesheet::Spritesheet;
use crate::components::animation::AnimationPairs;
use crate::components::object::Object;
use crate::core::atlas::FrameAtlas;
use crate::core::store::InstanceStore;

/// A kind of game object and all of its instances.
///
/// Fields drop in declaration order: frame atlas, instances, then the
/// spritesheet (and its texture) last.
pub struct ObjectType<T> {
    atlas: FrameAtlas,
    pairs: AnimationPairs,
    instances: InstanceStore,
    spritesheet: Spritesheet<T>,
    name: String,
    size: IVec2,
    config: EngineConfig,
}

impl<T> ObjectType<T> {
    /// Build an object type with the default engine config.
    pub fn new(spritesheet: Spritesheet<T>, size: IVec2) -> Result<Self, EngineError> {
        Self::with_config(spritesheet, size, EngineConfig::default())
    }

    /// Build an object type. Fails without building anything if the
    /// spritesheet's animations cannot be paired or the size cannot hold
    /// the edge hitboxes.
    pub fn with_config(
        spritesheet: Spritesheet<T>,
        size: IVec2,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let pairs = config
            .validate()
            .and_then(|()| Self::pairs_for(&spritesheet, size, &config))
            .inspect_err(|e| {
                log::warn!("rejected object type: {}", e);
            })?;
        let atlas = FrameAtlas::build(spritesheet.frame_counts(), size);
        log::info!(
            "object type created: {} animations, {}x{} frames",
            atlas.animation_count(),
            size.x,
            size.y
        );
        Ok(Self {
            atlas,
            pairs,
            instances: InstanceStore::with_capacity(config.initial_capacity),
            spritesheet,
            name: String::new(),
            size,
            config,
        })
    }

    fn pairs_for(
        spritesheet: &Spritesheet<T>,
        size: IVec2,
        config: &EngineConfig,
    ) -> Result<AnimationPairs, EngineError> {
        let min = config.min_object_size();
        if size.x < min || size.y < min {
            return Err(EngineError::SizeTooSmall {
                w: size.x,
                h: size.y,
                min,
            });
        }
        let count = spritesheet.animation_count();
        let pairs = match spritesheet.declared_pairs() {
            Some(declared) => AnimationPairs::declared(count, declared)?,
            None => AnimationPairs::consecutive(count)?,
        };
        pairs.validate_frames(spritesheet.frame_counts())?;
        Ok(pairs)
    }

    /// Attach a name used in log messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn atlas(&self) -> &FrameAtlas {
        &self.atlas
    }

    pub fn pairs(&self) -> &AnimationPairs {
        &self.pairs
    }

    pub fn spritesheet(&self) -> &Spritesheet<T> {
        &self.spritesheet
    }

    pub fn animation_count(&self) -> usize {
        self.atlas.animation_count()
    }

    // -- Instances --

    /// Add an instance with its top-left corner at `pos`.
    pub fn add_instance(&mut self, pos: IVec2) -> InstanceId {
        let object = Object::new(
            pos,
            self.size,
            self.config.hitbox_inset,
            self.animation_count(),
        );
        let id = self.instances.insert(object);
        log::debug!(
            "added {} instance at ({}, {}), count: {}, capacity: {}",
            self.label(),
            pos.x,
            pos.y,
            self.instances.len(),
            self.instances.capacity()
        );
        id
    }

    /// Remove an instance. Its slot is reused by a later `add_instance`.
    pub fn remove_instance(&mut self, id: InstanceId) -> Result<Object, EngineError> {
        let object = self
            .instances
            .remove(id)
            .ok_or(EngineError::UnknownInstance(id))?;
        log::debug!(
            "removed {} instance {}, count: {}, capacity: {}",
            self.label(),
            id.index,
            self.instances.len(),
            self.instances.capacity()
        );
        Ok(object)
    }

    pub fn instance(&self, id: InstanceId) -> Result<&Object, EngineError> {
        self.instances.get(id).ok_or(EngineError::UnknownInstance(id))
    }

    fn instance_mut(&mut self, id: InstanceId) -> Result<&mut Object, EngineError> {
        self.instances
            .get_mut(id)
            .ok_or(EngineError::UnknownInstance(id))
    }

    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &Object)> {
        self.instances.iter()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_capacity(&self) -> usize {
        self.instances.capacity()
    }

    /// Move an instance; its hitboxes follow.
    pub fn set_position(&mut self, id: InstanceId, pos: IVec2) -> Result<(), EngineError> {
        self.instance_mut(id)?.set_position(pos);
        Ok(())
    }

    /// Recompute an instance's hitboxes from its current position.
    pub fn sync_hitboxes(&mut self, id: InstanceId) -> Result<(), EngineError> {
        self.instance_mut(id)?.sync_hitboxes();
        Ok(())
    }

    // -- Animation --

    pub fn set_animation(&mut self, id: InstanceId, animation: AnimationId) -> Result<(), EngineError> {
        self.instance_mut(id)?.set_animation(animation)
    }

    /// Step an instance's current animation, and its mirror, by one frame.
    pub fn advance_frame(&mut self, id: InstanceId) -> Result<(), EngineError> {
        let object = self
            .instances
            .get_mut(id)
            .ok_or(EngineError::UnknownInstance(id))?;
        object.advance_frame(&self.pairs)
    }

    /// Rewind every animation of an instance except `active` and its mirror.
    pub fn reset_idle_animations(
        &mut self,
        id: InstanceId,
        active: AnimationId,
    ) -> Result<(), EngineError> {
        let object = self
            .instances
            .get_mut(id)
            .ok_or(EngineError::UnknownInstance(id))?;
        object.reset_idle_animations(&self.pairs, active)
    }

    /// Advance every live instance by `steps` frames.
    pub(crate) fn advance_all(&mut self, steps: u32) -> Result<(), EngineError> {
        for (_, object) in self.instances.iter_mut() {
            for _ in 0..steps {
                object.advance_frame(&self.pairs)?;
            }
        }
        Ok(())
    }

    fn label(&self) -> &str {
        if self.name.is_empty() {
            "object"
        } else {
            &self.name
        }
    }
}

impl<T> Drop for ObjectType<T> {
    fn drop(&mut self) {
        log::info!(
            "destroying {} type with {} instances",
            self.label(),
            self.instances.len()
        );
    }
}
