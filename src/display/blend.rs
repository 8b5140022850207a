//! Per-pixel compositing operators: `(source, destination) -> result`

use super::Pixel;
use serde::{Deserialize, Serialize};

/// A function that composites a source pixel onto a destination pixel
pub type BlendFn = fn(src: Pixel, dst: Pixel) -> Pixel;

/// Compositing rule selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    /// Standard source-over alpha blending
    #[default]
    Alpha,
    /// Additive: dst + src per colour channel, saturating
    Additive,
}

impl BlendMode {
    pub fn func(self) -> BlendFn {
        match self {
            BlendMode::Alpha => alpha_blend,
            BlendMode::Additive => additive_blend,
        }
    }
}

/// Porter-Duff source-over.
///
/// `a = srcA + dstA * (1 - srcA)` and each colour channel is
/// `(srcC * srcA + dstC * dstA * (1 - srcA)) / a`, in 0-255 integer arithmetic.
pub fn alpha_blend(src: Pixel, dst: Pixel) -> Pixel {
    let src_a = src.a() as u32;
    if src_a == 0 {
        return dst;
    }
    let dst_a = dst.a() as u32;
    let inv_src_a = 255 - src_a;

    let dst_weight = dst_a * inv_src_a / 255;
    let a = (src_a + dst_weight).min(255);
    if a == 0 {
        return Pixel::TRANSPARENT;
    }

    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as u32 * src_a + d as u32 * dst_a * inv_src_a / 255) / a;
        c.min(255) as u8
    };

    Pixel::from_channels(
        channel(src.r(), dst.r()),
        channel(src.g(), dst.g()),
        channel(src.b(), dst.b()),
        a as u8,
    )
}

/// Add the colour channels (saturating at 255), keeping the source alpha.
/// Used for bloom where colours should brighten rather than occlude.
pub fn additive_blend(src: Pixel, dst: Pixel) -> Pixel {
    Pixel::from_channels(
        dst.r().saturating_add(src.r()),
        dst.g().saturating_add(src.g()),
        dst.b().saturating_add(src.b()),
        src.a(),
    )
}
