use super::{pixel_box, Bounds, Style, Triangle};
use crate::display::{FrameBuffer, Pixel};
use crate::error::{Error, Result};
use crate::geometry::point_in_polygon;
use crate::math2d::Vec2;
use crate::triangulate::{triangulate, Diagnostic, Triangulation};
use crate::util::Rng;
use serde::{Deserialize, Serialize};

/// Simple polygon drawn through its ear-clipping triangulation.
///
/// The triangulation is recomputed by every method that changes the vertices,
/// so it always matches them. A change that fails to triangulate is rejected
/// and leaves the polygon as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonDef", into = "PolygonDef")]
pub struct Polygon {
    vertices: Vec<Vec2>,
    style: Style,
    triangulation: Triangulation,
}

/// Serialized form: the vertices and style only
#[derive(Serialize, Deserialize)]
struct PolygonDef {
    vertices: Vec<Vec2>,
    #[serde(default)]
    style: Style,
}

impl TryFrom<PolygonDef> for Polygon {
    type Error = Error;

    fn try_from(def: PolygonDef) -> Result<Self> {
        Ok(Self::new(def.vertices)?.with_style(def.style))
    }
}

impl From<Polygon> for PolygonDef {
    fn from(polygon: Polygon) -> Self {
        Self {
            vertices: polygon.vertices,
            style: polygon.style,
        }
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        let triangulation = triangulate(&vertices)?;
        Ok(Self {
            vertices,
            style: Style::default(),
            triangulation,
        })
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Cached triangles, in clipping order
    pub fn triangles(&self) -> &[[Vec2; 3]] {
        &self.triangulation.triangles
    }

    /// Problems reported by the last triangulation
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.triangulation.diagnostics
    }

    /// Replace the outline and retriangulate
    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) -> Result<()> {
        self.triangulation = triangulate(&vertices)?;
        self.vertices = vertices;
        Ok(())
    }

    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        let moved = self.vertices.iter().map(|v| *v + offset).collect();
        self.set_vertices(moved)
    }

    /// Fill the polygon. Pixels on edges shared by two triangles are written
    /// once, so translucent fills have no seams.
    pub fn draw(&self, buf: &mut FrameBuffer) {
        let triangles: Vec<Triangle> = self
            .triangles()
            .iter()
            .map(|[a, b, c]| Triangle::new(*a, *b, *c))
            .collect();
        let pixel = Pixel::new(&self.style.colour);
        let (xs, ys) = pixel_box(buf, &self.bounds());

        for y in ys {
            for x in xs.clone() {
                let p = Vec2::new(x as f32, y as f32);
                if triangles.iter().any(|t| t.contains(p)) {
                    buf.set_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Draw each triangle in its own random colour to show the triangulation
    pub fn draw_debug(&self, buf: &mut FrameBuffer, rng: &mut Rng) {
        for [a, b, c] in self.triangles() {
            Triangle::new(*a, *b, *c)
                .with_style(Style::solid(rng.colour()))
                .draw(buf);
        }
    }

    /// Ray-casting containment test against the outline
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
    }
}
