//! Shape rasterizers
//!
//! Every shape follows the same plan: find an integer bounding box, clip it to
//! the frame buffer, test each integer pixel coordinate against the shape and
//! composite the ones that pass. Bloom halos are drawn afterwards
//! with additive blending.

mod bloom;
mod circle;
mod collision;
mod curved_rect;
mod polygon;
mod rect;
mod triangle;

pub use circle::Circle;
pub use collision::is_colliding;
pub use curved_rect::CurvedRect;
pub use polygon::Polygon;
pub use rect::Rect;
pub use triangle::Triangle;

use crate::colour::{Rgba, WHITE};
use crate::display::FrameBuffer;
use crate::error::Result;
use crate::math2d::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Points used to approximate a circle when an outline is needed
const CIRCLE_OUTLINE_POINTS: usize = 32;

// ============================================================================
// Style
// ============================================================================

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub colour: Rgba,
    /// 0 for a solid fill, otherwise the outline width in pixels
    pub thickness: f32,
    /// Halo reach in pixels, 0 for none
    pub bloom: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            colour: WHITE,
            thickness: 0.0,
            bloom: 0,
        }
    }
}

impl Style {
    pub const fn solid(colour: Rgba) -> Self {
        Self {
            colour,
            thickness: 0.0,
            bloom: 0,
        }
    }

    pub const fn outline(colour: Rgba, thickness: f32) -> Self {
        Self {
            colour,
            thickness,
            bloom: 0,
        }
    }

    pub const fn with_bloom(mut self, bloom: u32) -> Self {
        self.bloom = bloom;
        self
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.thickness <= 0.0
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned bounding box, inclusive on every side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box around the points (a zero box at the origin when empty)
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec2::zero(), Vec2::zero());
        };
        points.iter().fold(Self::new(*first, *first), |b, p| {
            Self::new(
                Vec2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                Vec2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            )
        })
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Point of the box nearest to `p`. An inverted box (from a negative
    /// size) pulls every point to its `max` corner.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.min.x).min(self.max.x),
            p.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Corners clockwise on screen, starting top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

// ============================================================================
// Pixel iteration helpers
// ============================================================================

/// Integer span `lo..=hi` clipped to `0..len`
#[inline]
pub(crate) fn clip_span(lo: i32, hi: i32, len: u32) -> RangeInclusive<i32> {
    lo.max(0)..=hi.min(len as i32 - 1)
}

/// Pixel rows and columns covering `bounds`, clipped to the buffer
#[inline]
pub(crate) fn pixel_box(
    buf: &FrameBuffer,
    bounds: &Bounds,
) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    (
        clip_span(
            bounds.min.x.floor() as i32,
            bounds.max.x.ceil() as i32,
            buf.width(),
        ),
        clip_span(
            bounds.min.y.floor() as i32,
            bounds.max.y.ceil() as i32,
            buf.height(),
        ),
    )
}

// ============================================================================
// Shape
// ============================================================================

/// Every drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Triangle(Triangle),
    CurvedRect(CurvedRect),
    Polygon(Polygon),
}

impl Shape {
    pub fn draw(&self, buf: &mut FrameBuffer) {
        match self {
            Self::Rect(s) => s.draw(buf),
            Self::Circle(s) => s.draw(buf),
            Self::Triangle(s) => s.draw(buf),
            Self::CurvedRect(s) => s.draw(buf),
            Self::Polygon(s) => s.draw(buf),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Self::Rect(s) => s.contains(point),
            Self::Circle(s) => s.contains(point),
            Self::Triangle(s) => s.contains(point),
            Self::CurvedRect(s) => s.contains(point),
            Self::Polygon(s) => s.contains(point),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect(s) => s.bounds(),
            Self::Circle(s) => s.bounds(),
            Self::Triangle(s) => s.bounds(),
            Self::CurvedRect(s) => s.bounds(),
            Self::Polygon(s) => s.bounds(),
        }
    }

    /// Move by `offset`. Only polygons can fail, when retriangulation does.
    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        match self {
            Self::Rect(s) => s.translate(offset),
            Self::Circle(s) => s.translate(offset),
            Self::Triangle(s) => s.translate(offset),
            Self::CurvedRect(s) => s.translate(offset),
            Self::Polygon(s) => return s.translate(offset),
        }
        Ok(())
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Rect(s) => s.style,
            Self::Circle(s) => s.style,
            Self::Triangle(s) => s.style,
            Self::CurvedRect(s) => s.style,
            Self::Polygon(s) => s.style(),
        }
    }

    /// Closed outline as a vertex list. Curved rectangles use their box,
    /// circles a regular polygon through their edge points.
    pub fn outline(&self) -> Vec<Vec2> {
        match self {
            Self::Rect(s) => s.bounds().corners().to_vec(),
            Self::Circle(s) => s.outline(CIRCLE_OUTLINE_POINTS),
            Self::Triangle(s) => s.vertices.to_vec(),
            Self::CurvedRect(s) => s.bounds().corners().to_vec(),
            Self::Polygon(s) => s.vertices().to_vec(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(s: Rect) -> Self {
        Self::Rect(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Self::Circle(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Self::Triangle(s)
    }
}

impl From<CurvedRect> for Shape {
    fn from(s: CurvedRect) -> Self {
        Self::CurvedRect(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Self::Polygon(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{BLACK, RED};
    use crate::display::Pixel;

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert_eq!(style.colour, WHITE);
        assert!(style.is_solid());
        assert_eq!(style.bloom, 0);
        assert!(!Style::outline(RED, 2.0).is_solid());
        assert_eq!(Style::solid(RED).with_bloom(4).bloom, 4);
    }

    #[test]
    fn test_bounds() {
        let b = Bounds::from_points(&[
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 5.0),
            Vec2::new(0.0, 0.0),
        ]);
        assert_eq!(b.min, Vec2::new(-2.0, -1.0));
        assert_eq!(b.max, Vec2::new(3.0, 5.0));
        assert_eq!((b.width(), b.height()), (5.0, 6.0));
        assert!(b.contains(Vec2::new(3.0, 5.0)));
        assert_eq!(b.clamp(Vec2::new(10.0, 2.0)), Vec2::new(3.0, 2.0));

        let touching = Bounds::new(Vec2::new(3.0, 5.0), Vec2::new(9.0, 9.0));
        let apart = Bounds::new(Vec2::new(3.5, 0.0), Vec2::new(9.0, 9.0));
        assert!(b.overlaps(&touching));
        assert!(!b.overlaps(&apart));
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(-5, 3, 10), 0..=3);
        assert_eq!(clip_span(8, 20, 10), 8..=9);
        assert!(clip_span(12, 20, 10).is_empty());
    }

    #[test]
    fn test_draw_order_is_call_order() {
        let mut buf = FrameBuffer::new(20, 20).unwrap();
        buf.fill(&BLACK);
        let shapes: Vec<Shape> = vec![
            Rect::new(10.0, 10.0, Vec2::new(0.0, 0.0)).into(),
            Rect::new(10.0, 10.0, Vec2::new(5.0, 5.0))
                .with_style(Style::solid(RED))
                .into(),
        ];
        for shape in &shapes {
            shape.draw(&mut buf);
        }
        assert_eq!(buf.get_pixel(2, 2).unwrap(), Pixel::new(&WHITE));
        assert_eq!(buf.get_pixel(7, 7).unwrap(), Pixel::new(&RED));
    }

    #[test]
    fn test_translate_moves_every_variant() {
        let offset = Vec2::new(100.0, 50.0);
        let mut shapes: Vec<Shape> = vec![
            Rect::new(10.0, 10.0, Vec2::new(0.0, 0.0)).into(),
            Circle::new(10.0, Vec2::new(5.0, 5.0)).into(),
            Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)).into(),
            CurvedRect::new(10.0, 10.0, 2.0, Vec2::new(0.0, 0.0)).into(),
            Polygon::new(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ])
            .unwrap()
            .into(),
        ];
        for shape in &mut shapes {
            assert!(shape.contains(Vec2::new(2.0, 2.0)));
            shape.translate(offset).unwrap();
            assert!(!shape.contains(Vec2::new(2.0, 2.0)));
            assert!(shape.contains(Vec2::new(102.0, 52.0)));
            assert!(shape.bounds().min.x >= 99.0);
        }
    }

    #[test]
    fn test_outline_of_circle() {
        let shape: Shape = Circle::new(20.0, Vec2::new(50.0, 50.0)).into();
        let outline = shape.outline();
        assert_eq!(outline.len(), CIRCLE_OUTLINE_POINTS);
        for p in outline {
            assert!((p.distance(&Vec2::new(50.0, 50.0)) - 10.0).abs() < 1e-3);
        }
    }
}
