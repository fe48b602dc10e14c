pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::EngineConfig;
pub use api::error::EngineError;
pub use api::types::{AnimationId, InstanceId, Rect};
pub use assets::manifest::SpritesheetManifest;
pub use assets::spritesheet::Spritesheet;
pub use components::animation::AnimationPairs;
pub use components::hitbox::{HitboxSide, Hitboxes};
pub use components::object::Object;
pub use crate::core::atlas::FrameAtlas;
pub use crate::core::object_type::ObjectType;
pub use crate::core::store::InstanceStore;
pub use crate::core::time::AnimationClock;
pub use renderer::camera::Camera;
pub use renderer::instance::{BlitBuffer, BlitCommand};
pub use renderer::traits::RenderTarget;
pub use systems::animation::{tick_animations, tick_animations_dt};
pub use systems::render::{render_all, render_object};
