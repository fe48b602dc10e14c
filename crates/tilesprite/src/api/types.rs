use bytemuck::{Pod, Zeroable};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Identifies one animation strip of an object type.
/// Index into the frame atlas and into every instance's frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationId(pub u32);

impl AnimationId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a live instance inside an object type's store.
///
/// The generation changes whenever a slot is reused, so a handle kept
/// after its instance was removed never resolves to a newer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId {
    pub index: u32,
    pub generation: u32,
}

/// Axis-aligned integer rectangle in pixels (top-left origin, Y-down).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Same rectangle shifted by `delta`.
    pub fn translate(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// True when the two rectangles share a non-empty area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
