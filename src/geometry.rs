//! Geometry utilities for rasterization, triangulation and collision detection

use crate::math2d::Vec2;

/// Twice the signed area of triangle (a, b, c).
/// The sign tells which side of the directed edge a→b the point c lies on.
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Check if a point is inside triangle (a, b, c) using barycentric coordinates.
/// Points on the boundary count as inside. Degenerate triangles contain nothing.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let denominator = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denominator == 0.0 {
        return false;
    }

    let u = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / denominator;
    let v = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / denominator;
    let w = 1.0 - u - v;

    (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) && (0.0..=1.0).contains(&w)
}

/// Signed polygon area (shoelace formula).
/// Positive when the vertices turn left in x-right/y-up terms, which on screen
/// (y down) is clockwise.
pub fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        twice_area += vertices[j].x * vertices[i].y - vertices[i].x * vertices[j].y;
        j = i;
    }
    twice_area * 0.5
}

/// Check if a point is inside a polygon using ray casting algorithm
pub fn point_in_polygon(p: Vec2, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        // Skip horizontal edges (avoid division by zero)
        let dy = vj.y - vi.y;
        if dy.abs() > f32::EPSILON && ((vi.y > p.y) != (vj.y > p.y)) {
            let x_intersect = (vj.x - vi.x) * (p.y - vi.y) / dy + vi.x;
            if p.x < x_intersect {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Check if two line segments intersect
/// Returns Some((point, t)) where t is the parameter along the first segment
/// Returns None if segments don't intersect or are parallel
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<(Vec2, f32)> {
    let da = a2 - a1;
    let db = b2 - b1;

    let cross = da.cross(&db);

    // Parallel (or degenerate) when the sine of the angle between them is tiny;
    // relative to the lengths so the test holds at any scale
    if cross.abs() <= 1e-6 * da.magnitude() * db.magnitude() {
        return None;
    }

    let d = b1 - a1;
    let t = d.cross(&db) / cross;
    let u = d.cross(&da) / cross;

    // Check if intersection is within both segments
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((a1 + da * t, t))
    } else {
        None
    }
}

/// Closest point to `p` on the segment a→b
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let e = b - a;
    let len_sq = e.dot(&e);
    if len_sq < 0.001 {
        return a;
    }
    let t = ((p - a).dot(&e) / len_sq).clamp(0.0, 1.0);
    a + e * t
}

/// Find the first pair of non-adjacent polygon edges that cross.
/// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping).
pub fn find_self_intersection(vertices: &[Vec2]) -> Option<(usize, usize)> {
    let n = vertices.len();
    if n < 4 {
        return None;
    }
    for i in 0..n {
        let (a1, a2) = (vertices[i], vertices[(i + 1) % n]);
        for j in (i + 2)..n {
            // The last edge shares vertex 0 with the first
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (vertices[j], vertices[(j + 1) % n]);
            if segment_intersection(a1, a2, b1, b2).is_some() {
                return Some((i, j));
            }
        }
    }
    None
}

/// Check if a circle collides with a polygon outline.
/// Returns (normal, penetration_depth) with the normal pointing from the
/// polygon toward the circle centre.
pub fn circle_polygon_collision(
    centre: Vec2,
    radius: f32,
    vertices: &[Vec2],
) -> Option<(Vec2, f32)> {
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    // Find closest point on any polygon edge to circle centre
    let mut closest_dist = f32::MAX;
    let mut closest_normal = Vec2::zero();

    for i in 0..n {
        let near = closest_point_on_segment(centre, vertices[i], vertices[(i + 1) % n]);
        let offset = centre - near;
        let dist = offset.magnitude();
        if dist < closest_dist {
            closest_dist = dist;
            closest_normal = offset.normalise();
        }
    }

    // Centre inside: push out through the nearest edge
    if point_in_polygon(centre, vertices) {
        return Some((-closest_normal, closest_dist + radius));
    }

    if closest_dist <= radius {
        Some((closest_normal, radius - closest_dist))
    } else {
        None
    }
}

/// Check if two polygon outlines overlap: a vertex of one inside the other,
/// or crossing edges.
pub fn polygons_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    if a.iter().any(|&p| point_in_polygon(p, b)) || b.iter().any(|&p| point_in_polygon(p, a)) {
        return true;
    }
    for i in 0..a.len() {
        let (a1, a2) = (a[i], a[(i + 1) % a.len()]);
        for j in 0..b.len() {
            let (b1, b2) = (b[j], b[(j + 1) % b.len()]);
            if segment_intersection(a1, a2, b1, b2).is_some() {
                return true;
            }
        }
    }
    false
}
