use super::{bloom, clip_span, Bounds, Style};
use crate::display::{FrameBuffer, Pixel};
use crate::math2d::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle with quarter-circle corners, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvedRect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Corner radius, clamped to half the smaller side when drawn
    pub radius: f32,
    #[serde(default)]
    pub style: Style,
}

/// Rounded box in pixel space: straight edges at `0..=w` and `0..=h`
/// relative to the top-left pixel, corners of radius `r`
struct Profile {
    x0: i32,
    y0: i32,
    w: f32,
    h: f32,
    r: f32,
}

/// Last pixel of a side starting at `lo`, saturating rather than wrapping
#[inline]
fn far_edge(lo: i32, len: f32) -> i32 {
    (lo as f32 + len) as i32
}

impl Profile {
    /// Offset of pixel (x, y) from the top-left pixel, taken in float space
    #[inline]
    fn local(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(x as f32 - self.x0 as f32, y as f32 - self.y0 as f32)
    }

    /// Nearest point of the inner box whose rounding by `r` gives the shape
    #[inline]
    fn core(&self, local: Vec2) -> Vec2 {
        Vec2::new(
            local.x.clamp(self.r, self.w - self.r),
            local.y.clamp(self.r, self.h - self.r),
        )
    }

    /// Distance inwards from the boundary; negative outside
    fn depth(&self, local: Vec2) -> f32 {
        let in_corner = (local.x < self.r || local.x > self.w - self.r)
            && (local.y < self.r || local.y > self.h - self.r);
        if in_corner {
            self.r - local.distance(&self.core(local))
        } else {
            local
                .x
                .min(self.w - local.x)
                .min(local.y)
                .min(self.h - local.y)
        }
    }

    /// Distance outwards from the boundary; zero or less inside
    fn reach(&self, local: Vec2) -> f32 {
        local.distance(&self.core(local)) - self.r
    }
}

/// Corner radius that fits a `w` by `h` box; `w` and `h` must be non-negative
#[inline]
fn fit_radius(radius: f32, w: f32, h: f32) -> f32 {
    // max/min rather than clamp: a NaN radius falls back to square corners
    radius.max(0.0).min(w.min(h) / 2.0)
}

impl CurvedRect {
    pub fn new(width: f32, height: f32, radius: f32, pos: Vec2) -> Self {
        Self {
            pos,
            width,
            height,
            radius,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pixel-space outline, using the same rounding as [`super::Rect`].
    /// Negative or NaN sides collapse to zero.
    fn profile(&self) -> Profile {
        let w = self.width.round().max(0.0);
        let h = self.height.round().max(0.0);
        Profile {
            x0: self.pos.x.round() as i32,
            y0: self.pos.y.round() as i32,
            w,
            h,
            r: fit_radius(self.radius, w, h),
        }
    }

    #[inline]
    fn draws_solid(&self) -> bool {
        self.style.is_solid() || 2.0 * self.style.thickness >= self.width.min(self.height)
    }

    /// Draws nothing unless both sides round to at least one pixel
    pub fn draw(&self, buf: &mut FrameBuffer) {
        let p = self.profile();
        if p.w <= 0.0 || p.h <= 0.0 {
            return;
        }
        let pixel = Pixel::new(&self.style.colour);
        let solid = self.draws_solid();
        let t = self.style.thickness;

        let xs = clip_span(p.x0, far_edge(p.x0, p.w), buf.width());
        for y in clip_span(p.y0, far_edge(p.y0, p.h), buf.height()) {
            for x in xs.clone() {
                let depth = p.depth(p.local(x, y));
                if depth >= 0.0 && (solid || depth < t) {
                    buf.set_pixel(x, y, pixel);
                }
            }
        }

        if self.style.bloom > 0 {
            self.draw_bloom(buf);
        }
    }

    /// Straight bands along the edges and annuli round the corners
    fn draw_bloom(&self, buf: &mut FrameBuffer) {
        let p = self.profile();
        let reach = self.style.bloom;
        let pad = reach as i32;

        let span = |lo: i32, len: f32, limit: u32| {
            clip_span(
                lo.saturating_sub(pad),
                far_edge(lo, len).saturating_add(pad),
                limit,
            )
        };
        let xs = span(p.x0, p.w, buf.width());
        for y in span(p.y0, p.h, buf.height()) {
            for x in xs.clone() {
                let dist = p.reach(p.local(x, y));
                if dist > 0.0 {
                    bloom::glow(buf, x, y, self.style.colour, bloom::brightness(dist, reach));
                }
            }
        }
    }

    /// Inclusive box test; the rounded corners count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.pos,
            Vec2::new(self.pos.x + self.width, self.pos.y + self.height),
        )
    }

    /// Distance from `point` to the rounded outline, in shape space; zero or
    /// less inside
    pub(super) fn distance_outside(&self, point: Vec2) -> f32 {
        let w = self.width.max(0.0);
        let h = self.height.max(0.0);
        let r = fit_radius(self.radius, w, h);
        let local = point - self.pos;
        let core = Vec2::new(local.x.clamp(r, w - r), local.y.clamp(r, h - r));
        local.distance(&core) - r
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.pos = self.pos + offset;
    }
}
