use bytemuck::{Pod, Zeroable};

use crate::api::types::Rect;
use crate::renderer::traits::RenderTarget;

/// One recorded blit: 8 ints = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct BlitCommand {
    /// Source rectangle in the spritesheet texture.
    pub src: Rect,
    /// Destination rectangle on screen.
    pub dst: Rect,
}

impl BlitCommand {
    pub const INTS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::INTS * 4;
}

/// Render target that records blits instead of drawing them.
///
/// Useful for headless runs and for handing a whole frame to a batching
/// backend in one go. The texture handle is ignored; an object type only
/// ever blits from its own spritesheet.
pub struct BlitBuffer {
    pub commands: Vec<BlitCommand>,
}

impl BlitBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Raw bytes of the recorded commands.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.commands)
    }
}

impl Default for BlitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RenderTarget<T> for BlitBuffer {
    fn blit(&mut self, _texture: &T, src: Rect, dst: Rect) {
        self.commands.push(BlitCommand { src, dst });
    }
}
