//! Bloom halo compositing shared by the shapes that glow

use crate::colour::{Colour, Rgba};
use crate::display::{additive_blend, FrameBuffer, Pixel};

/// Halo brightness at `dist` pixels beyond the shape boundary.
/// Falls linearly from 1 at the boundary to 0 at `reach`.
#[inline]
pub(super) fn brightness(dist: f32, reach: u32) -> f32 {
    (1.0 - dist / reach as f32).clamp(0.0, 1.0)
}

/// Add one halo pixel with its colour channels scaled by `brightness`.
///
/// The additive operator takes alpha from the source, so the halo carries the
/// colour's own alpha; a faint halo must not thin out an opaque background.
#[inline]
pub(super) fn glow(buf: &mut FrameBuffer, x: i32, y: i32, colour: Rgba, brightness: f32) {
    if brightness <= 0.0 {
        return;
    }
    let scale = |c: u8| (c as f32 * brightness).round() as u8;
    let pixel = Pixel::from_channels(
        scale(colour.r()),
        scale(colour.g()),
        scale(colour.b()),
        colour.a(),
    );
    buf.set_pixel_with(x, y, pixel, additive_blend);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{BLACK, RED};
    use crate::display::alpha_blend;
    use crate::math2d::Vec2;
    use crate::shapes::Circle;
    use crate::Style;

    #[test]
    fn test_brightness_falls_off() {
        assert_eq!(brightness(0.0, 10), 1.0);
        assert_eq!(brightness(5.0, 10), 0.5);
        assert_eq!(brightness(10.0, 10), 0.0);
        assert_eq!(brightness(15.0, 10), 0.0);
    }

    #[test]
    fn test_glow_adds_scaled_colour() {
        let mut buf = FrameBuffer::new(2, 1).unwrap();
        buf.fill(&BLACK);
        glow(&mut buf, 0, 0, RED, 0.5);
        glow(&mut buf, 1, 0, RED, 0.0);
        let p = buf.get_pixel(0, 0).unwrap();
        assert_eq!((p.r(), p.g(), p.b(), p.a()), (128, 0, 0, 255));
        assert_eq!(buf.get_pixel(1, 0).unwrap(), Pixel::new(&BLACK));
    }

    #[test]
    fn test_halo_keeps_background_opaque() {
        let mut buf = FrameBuffer::new(100, 100).unwrap();
        buf.fill(&BLACK);
        Circle::new(20.0, Vec2::new(50.0, 50.0))
            .with_style(Style::solid(RED).with_bloom(8))
            .draw(&mut buf);

        let halo = buf.get_pixel(63, 50).unwrap();
        assert!(halo.r() > 0 && halo.r() < 255);
        assert_eq!(halo.a(), 255);

        // Translucent paint over the halo composites as over any opaque pixel
        let wash = Pixel::new(&Rgba::new(0, 0, 255, 128));
        assert_eq!(alpha_blend(wash, halo).a(), 255);
    }
}
