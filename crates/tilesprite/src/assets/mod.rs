pub mod manifest;
pub mod spritesheet;
