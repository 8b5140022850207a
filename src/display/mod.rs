mod blend;
mod framebuffer;
mod mask;
mod pixel;
#[cfg(feature = "window")]
mod window;

pub use blend::{additive_blend, alpha_blend, BlendFn, BlendMode};
pub use framebuffer::{FrameBuffer, BYTES_PER_PIXEL};
pub use mask::GlyphMask;
pub use pixel::Pixel;
#[cfg(feature = "window")]
pub use window::{
    Display, InputEvent, MouseButtonKind, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
