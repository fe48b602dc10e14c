pub mod animation;
pub mod hitbox;
pub mod object;
