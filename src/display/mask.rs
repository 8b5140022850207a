//! Pre-rendered glyph masks
//!
//! Text is rasterized outside this crate by a font renderer. What arrives here
//! is a grid of coloured pixels whose alpha carries the glyph coverage, and it
//! is composited like any other shape through `FrameBuffer::set_pixel`.

use super::Pixel;
use crate::colour::Colour;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl GlyphMask {
    /// Wrap row-major pixels; the length must be `width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::MaskSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a mask from an 8-bit coverage map, as font rasterizers emit.
    /// Each pixel takes the colour with alpha `coverage * colour.a / 255`.
    pub fn from_coverage(
        width: u32,
        height: u32,
        coverage: &[u8],
        colour: &impl Colour,
    ) -> Result<Self> {
        let (r, g, b, a) = (colour.r(), colour.g(), colour.b(), colour.a() as u32);
        let pixels = coverage
            .iter()
            .map(|&c| Pixel::from_channels(r, g, b, (c as u32 * a / 255) as u8))
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the mask
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Rgba;

    #[test]
    fn test_size_is_validated() {
        assert!(matches!(
            GlyphMask::new(2, 2, vec![Pixel::TRANSPARENT; 3]),
            Err(Error::MaskSize { expected: 4, actual: 3, .. })
        ));
        assert!(GlyphMask::from_coverage(3, 1, &[0, 1], &Rgba::rgb(1, 2, 3)).is_err());
    }

    #[test]
    fn test_coverage_scales_alpha() {
        let mask =
            GlyphMask::from_coverage(3, 1, &[0, 128, 255], &Rgba::new(9, 8, 7, 128)).unwrap();
        assert_eq!(mask.pixel(0, 0).unwrap().a(), 0);
        assert_eq!(mask.pixel(1, 0).unwrap().a(), 64);
        assert_eq!(mask.pixel(2, 0), Some(Pixel::from_channels(9, 8, 7, 128)));
    }

    #[test]
    fn test_pixel_outside_mask_is_none() {
        let mask = GlyphMask::new(2, 1, vec![Pixel::TRANSPARENT; 2]).unwrap();
        assert!(mask.pixel(1, 0).is_some());
        assert_eq!(mask.pixel(2, 0), None);
        assert_eq!(mask.pixel(0, 1), None);
        assert_eq!(mask.pixel(u32::MAX, u32::MAX), None);
    }
}
