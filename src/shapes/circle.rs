use super::{bloom, pixel_box, Bounds, Style};
use crate::display::{FrameBuffer, Pixel};
use crate::math2d::{Vec2, UP};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

fn default_direction() -> Vec2 {
    UP
}

/// Circle anchored at its centre.
///
/// `direction` is the circle's heading. Edge points and segments are measured
/// from it, which lets a chain of circles act as the spine of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub centre: Vec2,
    pub diameter: f32,
    #[serde(default = "default_direction")]
    pub direction: Vec2,
    #[serde(default)]
    pub style: Style,
}

impl Circle {
    pub fn new(diameter: f32, centre: Vec2) -> Self {
        Self {
            centre,
            diameter,
            direction: UP,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Ring thickness, the whole radius when solid
    #[inline]
    fn ring(&self) -> f32 {
        if self.style.is_solid() {
            self.radius()
        } else {
            self.style.thickness
        }
    }

    pub fn draw(&self, buf: &mut FrameBuffer) {
        self.rasterize(buf, |_| true);
        if self.style.bloom > 0 {
            self.draw_bloom(buf);
        }
    }

    /// Draw only the part of the circle at least `limit` radians from the
    /// heading, measured with [`Vec2::angle_between`].
    pub fn draw_segment(&self, buf: &mut FrameBuffer, limit: f32) {
        let direction = self.direction;
        self.rasterize(buf, |offset| direction.angle_between(&offset) >= limit);
    }

    /// Write every pixel of the disc or ring whose offset from the centre passes `keep`
    fn rasterize(&self, buf: &mut FrameBuffer, keep: impl Fn(Vec2) -> bool) {
        let pixel = Pixel::new(&self.style.colour);
        let radius = self.radius();
        let inner = radius - self.ring();
        let (xs, ys) = pixel_box(buf, &self.bounds());

        for y in ys {
            for x in xs.clone() {
                let offset = Vec2::new(x as f32, y as f32) - self.centre;
                let dist = offset.magnitude();
                if dist >= inner && dist <= radius && keep(offset) {
                    buf.set_pixel(x, y, pixel);
                }
            }
        }
    }

    fn draw_bloom(&self, buf: &mut FrameBuffer) {
        let radius = self.radius();
        let reach = self.style.bloom;
        let outer = radius + reach as f32;
        let halo = Bounds::new(
            self.centre - Vec2::new(outer, outer),
            self.centre + Vec2::new(outer, outer),
        );
        let (xs, ys) = pixel_box(buf, &halo);

        for y in ys {
            for x in xs.clone() {
                let dist = Vec2::new(x as f32, y as f32).distance(&self.centre);
                if dist > radius && dist <= outer {
                    let brightness = bloom::brightness(dist - radius, reach);
                    bloom::glow(buf, x, y, self.style.colour, brightness);
                }
            }
        }
    }

    /// Point on the perimeter `theta` radians round from the heading
    pub fn edge_point(&self, theta: f32) -> Vec2 {
        self.centre + self.direction.set_magnitude(self.radius()).rotate(theta)
    }

    /// `points` evenly spaced edge points, starting at the heading
    pub fn outline(&self, points: usize) -> Vec<Vec2> {
        (0..points)
            .map(|i| self.edge_point(i as f32 * TAU / points as f32))
            .collect()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(&self.centre) <= self.radius()
    }

    pub fn bounds(&self) -> Bounds {
        let r = Vec2::new(self.radius(), self.radius());
        Bounds::new(self.centre - r, self.centre + r)
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.centre = self.centre + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{BLACK, RED, WHITE};
    use crate::math2d::{LEFT, RIGHT};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn filled(buf: &FrameBuffer, x: i32, y: i32) -> bool {
        buf.get_pixel(x, y).unwrap() != Pixel::new(&BLACK)
    }

    fn canvas() -> FrameBuffer {
        let mut buf = FrameBuffer::new(100, 100).unwrap();
        buf.fill(&BLACK);
        buf
    }

    #[test]
    fn test_solid_boundary() {
        let mut buf = canvas();
        Circle::new(20.0, Vec2::new(50.0, 50.0)).draw(&mut buf);
        assert_eq!(buf.get_pixel(50, 50).unwrap(), Pixel::new(&WHITE));
        assert!(filled(&buf, 50, 60));
        assert!(filled(&buf, 40, 50));
        assert!(!filled(&buf, 50, 61));
        assert!(!filled(&buf, 58, 58));
    }

    #[test]
    fn test_outline_ring() {
        let mut buf = canvas();
        Circle::new(40.0, Vec2::new(50.0, 50.0))
            .with_style(Style::outline(RED, 3.0))
            .draw(&mut buf);
        assert!(filled(&buf, 50, 70));
        assert!(filled(&buf, 50, 67));
        assert!(!filled(&buf, 50, 66));
        assert!(!filled(&buf, 50, 50));
    }

    #[test]
    fn test_bloom_decays() {
        let mut buf = canvas();
        Circle::new(20.0, Vec2::new(50.0, 50.0))
            .with_style(Style::solid(RED).with_bloom(8))
            .draw(&mut buf);
        let red_at = |x| buf.get_pixel(x, 50).unwrap().r();
        assert_eq!(red_at(60), 255);
        assert!(red_at(61) > red_at(63));
        assert!(red_at(63) > red_at(66));
        assert_eq!(red_at(68), 0);
        assert_eq!(red_at(70), 0);
    }

    #[test]
    fn test_segment_keeps_one_side() {
        let mut buf = canvas();
        let circle = Circle::new(40.0, Vec2::new(50.0, 50.0));

        // Heading up, limit 0 keeps the upper-left quarter
        circle.draw_segment(&mut buf, 0.0);
        assert!(filled(&buf, 40, 40));
        assert!(!filled(&buf, 60, 40));
        assert!(!filled(&buf, 40, 60));
        assert!(!filled(&buf, 60, 60));

        // A lower limit opens the segment towards the right
        let mut buf = canvas();
        circle.draw_segment(&mut buf, -PI);
        assert!(filled(&buf, 40, 40));
        assert!(filled(&buf, 60, 40));
        assert!(filled(&buf, 60, 60));
        assert!(!filled(&buf, 40, 60));
    }

    #[test]
    fn test_edge_point_follows_direction() {
        let circle = Circle::new(20.0, Vec2::new(50.0, 50.0));
        assert!(circle.edge_point(0.0).approx_eq(&Vec2::new(50.0, 40.0), 1e-4));
        assert!(circle
            .edge_point(FRAC_PI_2)
            .approx_eq(&(Vec2::new(50.0, 50.0) + LEFT * 10.0), 1e-4));

        let turned = circle.with_direction(RIGHT * 3.0);
        assert!(turned.edge_point(0.0).approx_eq(&Vec2::new(60.0, 50.0), 1e-4));
    }

    #[test]
    fn test_contains_and_bounds() {
        let circle = Circle::new(10.0, Vec2::new(0.0, 0.0));
        assert!(circle.contains(Vec2::new(3.0, 4.0)));
        assert!(!circle.contains(Vec2::new(4.0, 4.0)));
        assert_eq!(circle.bounds().min, Vec2::new(-5.0, -5.0));
    }
}
