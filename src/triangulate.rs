//! Polygon triangulation by ear clipping
//!
//! The polygon's vertices are linked into a ring. Ears (convex vertices whose
//! triangle holds no other vertex) are clipped one at a time until a single
//! triangle is left, giving `n - 2` triangles for a simple polygon.

use crate::error::{Error, Result};
use crate::geometry::{edge_function, find_self_intersection, point_in_triangle, signed_area};
use crate::math2d::Vec2;

/// Something that went wrong without making the result unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A full pass over the ring found no ear; `remaining` vertices were left
    /// untriangulated.
    NoEarFound { remaining: usize },
}

/// Output of [`triangulate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<[Vec2; 3]>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Triangulation {
    /// Sum of the triangle areas
    pub fn area(&self) -> f32 {
        self.triangles
            .iter()
            .map(|[a, b, c]| edge_function(*a, *b, *c).abs() * 0.5)
            .sum()
    }

    /// True when every vertex was consumed
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ============================================================================
// Vertex ring
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct RingVertex {
    pos: Vec2,
    is_ear: bool,
    prev: usize,
    next: usize,
}

/// Circular doubly linked list over a Vec; unlinked nodes stay in place
struct Ring {
    nodes: Vec<RingVertex>,
    len: usize,
}

impl Ring {
    /// Link the vertices, reversed if needed so the ring winds with positive area
    fn new(vertices: &[Vec2]) -> Self {
        let n = vertices.len();
        let reverse = signed_area(vertices) < 0.0;
        let nodes = (0..n)
            .map(|i| RingVertex {
                pos: if reverse {
                    vertices[n - 1 - i]
                } else {
                    vertices[i]
                },
                is_ear: false,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
        Self { nodes, len: n }
    }

    #[inline]
    fn corners(&self, i: usize) -> (Vec2, Vec2, Vec2) {
        let node = &self.nodes[i];
        (self.nodes[node.prev].pos, node.pos, self.nodes[node.next].pos)
    }

    /// Recompute whether vertex `i` is an ear of the current ring
    fn update_ear(&mut self, i: usize) {
        let (prev, cur, next) = self.corners(i);

        // Ear vertices must be strictly convex
        let convex = (cur - prev).cross(&(next - cur)) > 0.0;

        let is_ear = convex && {
            // No other ring vertex may lie in the candidate triangle
            let stop = self.nodes[i].prev;
            let mut j = self.nodes[self.nodes[i].next].next;
            let mut clear = true;
            while j != stop {
                let p = self.nodes[j].pos;
                let shares_corner = p == prev || p == cur || p == next;
                if !shares_corner && point_in_triangle(p, prev, cur, next) {
                    clear = false;
                    break;
                }
                j = self.nodes[j].next;
            }
            clear
        };

        self.nodes[i].is_ear = is_ear;
    }

    /// Remove vertex `i`, returning its former neighbours
    fn unlink(&mut self, i: usize) -> (usize, usize) {
        let RingVertex { prev, next, .. } = self.nodes[i];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.len -= 1;
        (prev, next)
    }
}

/// Triangulate a simple polygon given as an ordered vertex list (either winding).
///
/// Fewer than 3 vertices and self-intersecting outlines are rejected. If the
/// ring runs out of ears (degenerate input such as collinear runs), the
/// triangles found so far are returned along with a diagnostic.
pub fn triangulate(vertices: &[Vec2]) -> Result<Triangulation> {
    let n = vertices.len();
    if n < 3 {
        return Err(Error::TooFewVertices(n));
    }
    if let Some((a, b)) = find_self_intersection(vertices) {
        return Err(Error::SelfIntersecting(a, b));
    }

    let mut ring = Ring::new(vertices);
    for i in 0..n {
        ring.update_ear(i);
    }

    let mut result = Triangulation {
        triangles: Vec::with_capacity(n - 2),
        diagnostics: Vec::new(),
    };

    let mut current = 0;
    // Vertices visited since the last clip; a whole lap without an ear means no progress
    let mut misses = 0;
    while ring.len > 3 {
        if misses >= ring.len {
            log::warn!(
                "ear clipping stopped with {} of {} vertices left: no ear found",
                ring.len,
                n
            );
            result.diagnostics.push(Diagnostic::NoEarFound {
                remaining: ring.len,
            });
            return Ok(result);
        }

        if ring.nodes[current].is_ear {
            let (prev, cur, next) = ring.corners(current);
            result.triangles.push([cur, prev, next]);

            let (prev, next) = ring.unlink(current);
            ring.update_ear(prev);
            ring.update_ear(next);
            current = next;
            misses = 0;
        } else {
            current = ring.nodes[current].next;
            misses += 1;
        }
    }

    let (prev, cur, next) = ring.corners(current);
    result.triangles.push([cur, prev, next]);

    log::debug!("triangulated {} vertices into {} triangles", n, result.triangles.len());
    Ok(result)
}
