use super::{pixel_box, Bounds, Style};
use crate::display::{FrameBuffer, Pixel};
use crate::geometry::edge_function;
use crate::math2d::Vec2;
use serde::{Deserialize, Serialize};

/// Filled triangle given by its three vertices, in either winding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
    #[serde(default)]
    pub style: Style,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            vertices: [a, b, c],
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Twice the signed area; its sign gives the winding
    #[inline]
    pub fn orientation(&self) -> f32 {
        let [a, b, c] = self.vertices;
        edge_function(a, b, c)
    }

    /// Edge-function test against a precomputed orientation.
    /// Boundary points are inside.
    #[inline]
    fn covers(&self, p: Vec2, orientation: f32) -> bool {
        let [a, b, c] = self.vertices;
        let w0 = edge_function(b, c, p);
        let w1 = edge_function(c, a, p);
        let w2 = edge_function(a, b, p);
        if orientation > 0.0 {
            w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
        } else if orientation < 0.0 {
            w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
        } else {
            false
        }
    }

    /// Fill every pixel inside the triangle. Triangles have no outline mode
    /// or bloom; zero-area triangles draw nothing.
    pub fn draw(&self, buf: &mut FrameBuffer) {
        let orientation = self.orientation();
        if orientation == 0.0 {
            return;
        }
        let pixel = Pixel::new(&self.style.colour);
        let (xs, ys) = pixel_box(buf, &self.bounds());

        for y in ys {
            for x in xs.clone() {
                if self.covers(Vec2::new(x as f32, y as f32), orientation) {
                    buf.set_pixel(x, y, pixel);
                }
            }
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.covers(point, self.orientation())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
    }

    pub fn translate(&mut self, offset: Vec2) {
        for v in &mut self.vertices {
            *v = *v + offset;
        }
    }
}
