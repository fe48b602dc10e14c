//! Render target trait.
//!
//! The engine never draws by itself. Backends (SDL canvas, raylib, a GPU
//! sprite batch) implement [`RenderTarget`] and receive one blit per
//! visible instance.

use crate::api::types::Rect;

/// A surface that can copy a region of a texture onto itself.
///
/// `T` is the backend's texture handle, as stored in the spritesheet.
///
/// # Example Implementation
///
/// ```ignore
/// struct SdlTarget<'a> {
///     canvas: &'a mut sdl2::render::WindowCanvas,
/// }
///
/// impl RenderTarget<sdl2::render::Texture<'_>> for SdlTarget<'_> {
///     fn blit(&mut self, texture: &sdl2::render::Texture<'_>, src: Rect, dst: Rect) {
///         let _ = self.canvas.copy(texture, to_sdl(src), to_sdl(dst));
///     }
/// }
/// ```
pub trait RenderTarget<T> {
    /// Copy `src` (texture pixels) to `dst` (screen pixels).
    fn blit(&mut self, texture: &T, src: Rect, dst: Rect);
}

impl<T, R: RenderTarget<T> + ?Sized> RenderTarget<T> for &mut R {
    fn blit(&mut self, texture: &T, src: Rect, dst: Rect) {
        (**self).blit(texture, src, dst);
    }
}
