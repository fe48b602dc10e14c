//! Mirror pairing between animation strips.
//!
//! Every animation has exactly one partner (e.g. walk-left / walk-right).
//! Partners share frame timing: advancing one advances the other, so
//! switching direction mid-cycle does not jump.

use crate::api::error::EngineError;
use crate::api::types::AnimationId;

/// Partner lookup for every animation of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationPairs {
    partner: Vec<AnimationId>,
}

impl AnimationPairs {
    /// Pair rows by parity: (0,1), (2,3), ...
    pub fn consecutive(count: usize) -> Result<Self, EngineError> {
        if count == 0 {
            return Err(EngineError::EmptySpritesheet);
        }
        if count % 2 != 0 {
            return Err(EngineError::OddAnimationCount(count));
        }
        let partner = (0..count as u32)
            .map(|id| AnimationId(id ^ 1))
            .collect();
        Ok(Self { partner })
    }

    /// Build from explicitly declared pairs. Each id in `0..count` must
    /// appear in exactly one pair, and never paired with itself.
    pub fn declared(count: usize, pairs: &[(u32, u32)]) -> Result<Self, EngineError> {
        if count == 0 {
            return Err(EngineError::EmptySpritesheet);
        }
        if count % 2 != 0 {
            return Err(EngineError::OddAnimationCount(count));
        }

        let mut partner: Vec<Option<AnimationId>> = vec![None; count];
        for &(a, b) in pairs {
            if a == b {
                return Err(EngineError::InvalidPair {
                    id: AnimationId(a),
                    reason: "paired with itself",
                });
            }
            for id in [a, b] {
                let Some(slot) = partner.get(id as usize) else {
                    return Err(EngineError::InvalidPair {
                        id: AnimationId(id),
                        reason: "out of range",
                    });
                };
                if slot.is_some() {
                    return Err(EngineError::InvalidPair {
                        id: AnimationId(id),
                        reason: "appears in more than one pair",
                    });
                }
            }
            partner[a as usize] = Some(AnimationId(b));
            partner[b as usize] = Some(AnimationId(a));
        }

        let partner = partner
            .into_iter()
            .enumerate()
            .map(|(id, p)| {
                p.ok_or(EngineError::InvalidPair {
                    id: AnimationId(id as u32),
                    reason: "has no mirror",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { partner })
    }

    /// Check that `frames` has one entry per paired animation, partners
    /// agree on frame count, and no strip is empty.
    pub fn validate_frames(&self, frames: &[u32]) -> Result<(), EngineError> {
        if frames.len() != self.len() {
            return Err(EngineError::AnimationCountMismatch {
                pairs: self.len(),
                frames: frames.len(),
            });
        }
        for (id, &count) in frames.iter().enumerate() {
            let id = AnimationId(id as u32);
            if count == 0 {
                return Err(EngineError::EmptyAnimation(id));
            }
            let partner = self.partner(id)?;
            let partner_frames = frames[partner.index()];
            if partner_frames != count {
                return Err(EngineError::PairFrameMismatch {
                    id,
                    partner,
                    frames: count,
                    partner_frames,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.partner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    /// The mirror of `id`.
    pub fn partner(&self, id: AnimationId) -> Result<AnimationId, EngineError> {
        self.partner
            .get(id.index())
            .copied()
            .ok_or(EngineError::UnknownAnimation(id))
    }
}
