use super::{bloom, clip_span, Bounds, Style};
use crate::display::{FrameBuffer, Pixel};
use crate::math2d::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub style: Style,
}

impl Rect {
    pub fn new(width: f32, height: f32, pos: Vec2) -> Self {
        Self {
            pos,
            width,
            height,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pixel box `(x0, y0, x1, y1)`, inclusive of both rounded edges.
    /// Summed before the cast so far-off corners saturate instead of wrapping.
    #[inline]
    fn pixel_corners(&self) -> (i32, i32, i32, i32) {
        let (x0, y0) = (self.pos.x.round(), self.pos.y.round());
        (
            x0 as i32,
            y0 as i32,
            (x0 + self.width.round()) as i32,
            (y0 + self.height.round()) as i32,
        )
    }

    /// Outlines too thick to leave a hole are filled instead
    #[inline]
    fn draws_solid(&self) -> bool {
        self.style.is_solid() || 2.0 * self.style.thickness >= self.width.min(self.height)
    }

    pub fn draw(&self, buf: &mut FrameBuffer) {
        let pixel = Pixel::new(&self.style.colour);
        let (x0, y0, x1, y1) = self.pixel_corners();
        let solid = self.draws_solid();
        let t = self.style.thickness;

        // Edge distances in float space; the corners may be saturated
        let gap = |a: i32, b: i32| b as f32 - a as f32;
        for y in clip_span(y0, y1, buf.height()) {
            // Rows inside the top or bottom band are drawn in full
            let in_band = gap(y0, y) < t || gap(y, y1) < t;
            for x in clip_span(x0, x1, buf.width()) {
                if solid || in_band || gap(x0, x) < t || gap(x, x1) < t {
                    buf.set_pixel(x, y, pixel);
                }
            }
        }

        if self.style.bloom > 0 {
            self.draw_bloom(buf);
        }
    }

    /// Square rings of fading colour around the rectangle, one per pixel of reach
    fn draw_bloom(&self, buf: &mut FrameBuffer) {
        let (x0, y0, x1, y1) = self.pixel_corners();
        let colour = self.style.colour;
        let reach = self.style.bloom;

        for dist in 1..=reach as i32 {
            let brightness = bloom::brightness(dist as f32, reach);
            if brightness <= 0.0 {
                break;
            }
            let (left, top) = (x0.saturating_sub(dist), y0.saturating_sub(dist));
            let (right, bottom) = (x1.saturating_add(dist), y1.saturating_add(dist));

            // Top and bottom rows, without the corner columns
            for x in clip_span(left.saturating_add(1), right.saturating_sub(1), buf.width()) {
                bloom::glow(buf, x, top, colour, brightness);
                bloom::glow(buf, x, bottom, colour, brightness);
            }
            // Left and right columns, corners included
            for y in clip_span(top, bottom, buf.height()) {
                bloom::glow(buf, left, y, colour, brightness);
                bloom::glow(buf, right, y, colour, brightness);
            }
        }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.pos,
            Vec2::new(self.pos.x + self.width, self.pos.y + self.height),
        )
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.pos = self.pos + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Rgba, BLACK, RED, WHITE};

    fn filled(buf: &FrameBuffer, x: i32, y: i32) -> bool {
        buf.get_pixel(x, y).unwrap() != Pixel::new(&BLACK)
    }

    #[test]
    fn test_solid_fill_is_inclusive() {
        let mut buf = FrameBuffer::new(20, 20).unwrap();
        buf.fill(&BLACK);
        Rect::new(4.0, 3.0, Vec2::new(2.0, 5.0)).draw(&mut buf);

        for y in 0..20 {
            for x in 0..20 {
                let inside = (2..=6).contains(&x) && (5..=8).contains(&y);
                assert_eq!(filled(&buf, x, y), inside, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_outline_leaves_hole() {
        let mut buf = FrameBuffer::new(30, 30).unwrap();
        buf.fill(&BLACK);
        Rect::new(20.0, 20.0, Vec2::new(5.0, 5.0))
            .with_style(Style::outline(RED, 2.0))
            .draw(&mut buf);

        assert_eq!(buf.get_pixel(5, 5).unwrap(), Pixel::new(&RED));
        assert!(filled(&buf, 6, 15));
        assert!(filled(&buf, 15, 24));
        assert!(filled(&buf, 25, 25));
        assert!(!filled(&buf, 7, 15));
        assert!(!filled(&buf, 15, 15));
        assert!(!filled(&buf, 15, 23));
        assert!(!filled(&buf, 26, 15));
    }

    #[test]
    fn test_outline_corners_are_blended_once() {
        let mut buf = FrameBuffer::new(20, 20).unwrap();
        buf.fill(&BLACK);
        let translucent = Rgba::new(255, 255, 255, 128);
        Rect::new(10.0, 10.0, Vec2::new(2.0, 2.0))
            .with_style(Style::outline(translucent, 2.0))
            .draw(&mut buf);
        assert_eq!(buf.get_pixel(2, 2).unwrap(), buf.get_pixel(6, 2).unwrap());
    }

    #[test]
    fn test_thick_outline_falls_back_to_solid() {
        let mut outlined = FrameBuffer::new(20, 20).unwrap();
        let mut solid = FrameBuffer::new(20, 20).unwrap();
        Rect::new(10.0, 6.0, Vec2::new(3.0, 3.0))
            .with_style(Style::outline(WHITE, 3.0))
            .draw(&mut outlined);
        Rect::new(10.0, 6.0, Vec2::new(3.0, 3.0)).draw(&mut solid);
        assert_eq!(outlined.to_bytes(), solid.to_bytes());
    }

    #[test]
    fn test_bloom_fades_outwards() {
        let mut buf = FrameBuffer::new(40, 40).unwrap();
        buf.fill(&BLACK);
        Rect::new(10.0, 10.0, Vec2::new(15.0, 15.0))
            .with_style(Style::solid(RED).with_bloom(5))
            .draw(&mut buf);

        let red_at = |x| buf.get_pixel(x, 20).unwrap().r();
        assert_eq!(red_at(25), 255);
        assert!(red_at(26) > red_at(27));
        assert!(red_at(27) > red_at(28));
        assert!(red_at(29) > 0);
        // Brightness reaches zero at the full reach
        assert_eq!(red_at(30), 0);
        assert_eq!(red_at(31), 0);
        // Corner of the first ring
        assert!(buf.get_pixel(14, 14).unwrap().r() > 0);
    }

    #[test]
    fn test_contains_and_bounds() {
        let r = Rect::new(10.0, 5.0, Vec2::new(1.0, 2.0));
        assert!(r.contains(Vec2::new(1.0, 2.0)));
        assert!(r.contains(Vec2::new(11.0, 7.0)));
        assert!(!r.contains(Vec2::new(11.1, 7.0)));
        assert_eq!(r.bounds().max, Vec2::new(11.0, 7.0));
    }

    #[test]
    fn test_extreme_coordinates_are_clipped() {
        let mut buf = FrameBuffer::new(20, 20).unwrap();
        buf.fill(&BLACK);
        let style = Style::solid(RED).with_bloom(2);
        Rect::new(5.0, 5.0, Vec2::new(-3e10, 0.0)).with_style(style).draw(&mut buf);
        Rect::new(5.0, 5.0, Vec2::new(3e10, 3e10)).with_style(style).draw(&mut buf);
        Rect::new(5.0, 5.0, Vec2::new(0.0, -3e10))
            .with_style(Style::outline(RED, 1.0).with_bloom(2))
            .draw(&mut buf);
        assert!((0..20).all(|x| (0..20).all(|y| !filled(&buf, x, y))));

        // A huge rectangle still covers the screen
        Rect::new(1e12, 1e12, Vec2::new(-5e11, -5e11))
            .with_style(style)
            .draw(&mut buf);
        assert!(filled(&buf, 0, 0) && filled(&buf, 19, 19));
    }
}
