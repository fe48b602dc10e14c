use std::error::Error;
use std::fmt;

use crate::api::types::{AnimationId, InstanceId};

/// Errors reported by object type construction and instance operations.
#[derive(Debug)]
pub enum EngineError {
    /// The spritesheet declares no animations.
    EmptySpritesheet,
    /// Mirror pairs cannot cover an odd number of animations.
    OddAnimationCount(usize),
    /// An animation strip with no frames.
    EmptyAnimation(AnimationId),
    /// A declared pair is malformed or leaves an animation unpaired.
    InvalidPair { id: AnimationId, reason: &'static str },
    /// Mirror partners must have the same number of frames.
    PairFrameMismatch {
        id: AnimationId,
        partner: AnimationId,
        frames: u32,
        partner_frames: u32,
    },
    /// Frame count table does not cover every paired animation.
    AnimationCountMismatch { pairs: usize, frames: usize },
    /// An engine config field is out of range.
    InvalidConfig { field: &'static str, reason: &'static str },
    /// Frame size too small to fit the edge hitboxes.
    SizeTooSmall { w: i32, h: i32, min: i32 },
    /// Animation id outside the object type's animation range.
    UnknownAnimation(AnimationId),
    /// Handle does not refer to a live instance.
    UnknownInstance(InstanceId),
    /// Spritesheet manifest could not be parsed.
    Manifest(serde_json::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::EmptySpritesheet => write!(f, "spritesheet has no animations"),
            EngineError::OddAnimationCount(n) => {
                write!(f, "animation count {} is odd, every animation needs a mirror", n)
            }
            EngineError::EmptyAnimation(id) => write!(f, "animation {} has no frames", id.0),
            EngineError::InvalidPair { id, reason } => {
                write!(f, "invalid pair for animation {}: {}", id.0, reason)
            }
            EngineError::PairFrameMismatch {
                id,
                partner,
                frames,
                partner_frames,
            } => write!(
                f,
                "animation {} has {} frames but its mirror {} has {}",
                id.0, frames, partner.0, partner_frames
            ),
            EngineError::AnimationCountMismatch { pairs, frames } => write!(
                f,
                "{} paired animations but {} frame counts",
                pairs, frames
            ),
            EngineError::InvalidConfig { field, reason } => {
                write!(f, "invalid config `{}`: {}", field, reason)
            }
            EngineError::SizeTooSmall { w, h, min } => {
                write!(f, "object size {}x{} is below the {}px minimum", w, h, min)
            }
            EngineError::UnknownAnimation(id) => write!(f, "unknown animation {}", id.0),
            EngineError::UnknownInstance(id) => write!(
                f,
                "no live instance at slot {} (generation {})",
                id.index, id.generation
            ),
            EngineError::Manifest(e) => write!(f, "bad spritesheet manifest: {}", e),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Manifest(e)
    }
}
