use super::blend::{alpha_blend, BlendFn};
use super::{GlyphMask, Pixel};
use crate::colour::Colour;
use crate::error::{Error, Result};
use crate::math2d::Vec2;

/// Bytes per pixel in the presentation format
pub const BYTES_PER_PIXEL: usize = 4;

// ============================================================================
// FrameBuffer
// ============================================================================

/// Fixed-size grid of packed pixels that all shapes rasterize into.
///
/// Writes outside the buffer are dropped silently, since shapes routinely
/// overhang the edges. Reads outside the buffer are errors.
pub struct FrameBuffer {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a transparent buffer. Both dimensions must be at least 1.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: vec![Pixel::TRANSPARENT; width as usize * height as usize],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of the pixel at (x, y); caller checks bounds
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy of the pixel at (x, y)
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Pixel> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[self.pixel_index(x, y)])
    }

    /// Alpha-blend a pixel onto the buffer (no-op when out of bounds)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        self.set_pixel_with(x, y, pixel, alpha_blend);
    }

    /// Composite a pixel with a caller-chosen blend function (no-op when out of bounds)
    #[inline]
    pub fn set_pixel_with(&mut self, x: i32, y: i32, pixel: Pixel, blend: BlendFn) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            self.pixels[idx] = blend(pixel, self.pixels[idx]);
        }
    }

    /// Overwrite every pixel with a colour, without blending
    pub fn fill(&mut self, colour: &impl Colour) {
        self.pixels.fill(Pixel::new(colour));
    }

    /// Reset every pixel to transparent black
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::TRANSPARENT);
    }

    /// Row-major pixels, top row first
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Serialize for presentation: per pixel `[a, b, g, r]`, row-major.
    ///
    /// This is SDL's RGBA8888 layout on little-endian hosts, the format of the
    /// window's streaming texture.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0; self.pixels.len() * BYTES_PER_PIXEL];
        self.write_bytes(&mut bytes);
        bytes
    }

    /// Same as [`FrameBuffer::to_bytes`], into a reusable buffer.
    /// Writes `min(out.len() / 4, width * height)` pixels.
    pub fn write_bytes(&self, out: &mut [u8]) {
        for (dest, pixel) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(&self.pixels) {
            dest.copy_from_slice(&pixel.to_abgr());
        }
    }

    /// True if `point` lies inside the buffer shrunk by `margin` on every side
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> Result<bool> {
        let w = self.width as f32;
        let h = self.height as f32;
        let limit = w.min(h) / 2.0;
        if !(0.0..=limit).contains(&margin) {
            return Err(Error::MarginTooLarge { margin, limit });
        }
        Ok(point.x >= margin && point.x < w - margin && point.y >= margin && point.y < h - margin)
    }

    // ========================================================================
    // Lines and blits
    // ========================================================================

    /// Draw a one pixel line using Bresenham's algorithm, alpha-blended.
    /// Endpoints are rounded to the nearest pixel.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, colour: &impl Colour) {
        let pixel = Pixel::new(colour);
        let (x0, y0) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, pixel);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Alpha-blend a pre-rendered glyph mask with its top-left corner at (x, y)
    pub fn blit_mask(&mut self, mask: &GlyphMask, x: i32, y: i32) {
        for my in 0..mask.height() as i32 {
            let dy = y.saturating_add(my);
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for mx in 0..mask.width() as i32 {
                if let Some(pixel) = mask.pixel(mx as u32, my as u32).filter(|p| p.a() > 0) {
                    self.set_pixel(x.saturating_add(mx), dy, pixel);
                }
            }
        }
    }
}
