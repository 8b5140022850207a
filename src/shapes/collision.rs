//! Overlap tests between any two shapes

use super::{Circle, Shape};
use crate::geometry::{circle_polygon_collision, polygons_overlap};

/// True if the two shapes touch or overlap. Defined for every pair of variants.
///
/// Rectangles and curved rectangles meet as boxes, circles are exact against
/// boxes and rounded boxes, and everything else is compared by outline.
pub fn is_colliding(a: &Shape, b: &Shape) -> bool {
    use Shape::{Circle as C, CurvedRect as CR, Polygon as P, Rect as R, Triangle as T};

    match (a, b) {
        (C(a), C(b)) => a.centre.distance(&b.centre) <= a.radius() + b.radius(),
        (C(c), other @ (R(_) | CR(_) | T(_) | P(_)))
        | (other @ (R(_) | CR(_) | T(_) | P(_)), C(c)) => circle_hits(c, other),
        (R(_) | CR(_), R(_) | CR(_)) => a.bounds().overlaps(&b.bounds()),
        (R(_) | CR(_) | T(_) | P(_), T(_) | P(_)) | (T(_) | P(_), R(_) | CR(_)) => {
            polygons_overlap(&a.outline(), &b.outline())
        },
    }
}

fn circle_hits(circle: &Circle, other: &Shape) -> bool {
    let (centre, radius) = (circle.centre, circle.radius());
    match other {
        Shape::Rect(r) => r.bounds().clamp(centre).distance(&centre) <= radius,
        Shape::CurvedRect(r) => r.distance_outside(centre) <= radius,
        Shape::Triangle(_) | Shape::Polygon(_) => {
            circle_polygon_collision(centre, radius, &other.outline()).is_some()
        },
        Shape::Circle(o) => centre.distance(&o.centre) <= radius + o.radius(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math2d::Vec2;
    use crate::shapes::{CurvedRect, Polygon, Rect, Triangle};

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn circle(d: f32, x: f32, y: f32) -> Shape {
        Circle::new(d, v(x, y)).into()
    }

    fn rect(w: f32, h: f32, x: f32, y: f32) -> Shape {
        Rect::new(w, h, v(x, y)).into()
    }

    fn curved(w: f32, h: f32, r: f32, x: f32, y: f32) -> Shape {
        CurvedRect::new(w, h, r, v(x, y)).into()
    }

    fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Shape {
        Triangle::new(a.into(), b.into(), c.into()).into()
    }

    fn polygon(points: &[(f32, f32)]) -> Shape {
        Polygon::new(points.iter().map(|&p| Vec2::from(p)).collect())
            .unwrap()
            .into()
    }

    fn check(a: &Shape, b: &Shape, expected: bool) {
        assert_eq!(is_colliding(a, b), expected, "{:?} vs {:?}", a, b);
        assert_eq!(is_colliding(b, a), expected, "{:?} vs {:?}", b, a);
    }

    #[test]
    fn test_circle_pairs() {
        check(&circle(10.0, 0.0, 0.0), &circle(10.0, 10.0, 0.0), true);
        check(&circle(10.0, 0.0, 0.0), &circle(10.0, 10.1, 0.0), false);

        let r = rect(10.0, 10.0, 0.0, 0.0);
        check(&circle(4.0, 11.5, 5.0), &r, true);
        check(&circle(4.0, 12.5, 5.0), &r, false);
        // Diagonal off the corner: box distance, not axis distance
        check(&circle(4.0, 11.5, 11.5), &r, false);

        let cr = curved(20.0, 20.0, 8.0, 0.0, 0.0);
        check(&circle(4.0, 21.5, 10.0), &cr, true);
        // Off a rounded corner the box would hit but the shape does not
        check(&circle(4.0, -1.0, -1.0), &cr, false);
        check(&circle(4.0, -1.0, -1.0), &r, true);

        let t = triangle((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        check(&circle(4.0, 6.0, 6.0), &t, true);
        check(&circle(2.0, 8.0, 8.0), &t, false);
        check(&circle(2.0, 2.0, 2.0), &t, true);

        let p = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (4.0, 4.0), (4.0, 10.0), (0.0, 10.0)]);
        check(&circle(2.0, 7.0, 7.0), &p, false);
        check(&circle(2.0, 7.0, 4.5), &p, true);
    }

    #[test]
    fn test_box_pairs() {
        let r = rect(10.0, 10.0, 0.0, 0.0);
        check(&r, &rect(5.0, 5.0, 10.0, 10.0), true);
        check(&r, &rect(5.0, 5.0, 10.5, 0.0), false);
        check(&r, &curved(10.0, 10.0, 3.0, 5.0, 5.0), true);
        check(&curved(4.0, 4.0, 1.0, 0.0, 0.0), &curved(4.0, 4.0, 1.0, 20.0, 20.0), false);
    }

    #[test]
    fn test_outline_pairs() {
        let t = triangle((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        check(&t, &rect(4.0, 4.0, 1.0, 1.0), true);
        check(&t, &rect(4.0, 4.0, 8.0, 8.0), false);
        check(&t, &curved(4.0, 4.0, 1.0, 1.0, 1.0), true);
        check(&t, &triangle((20.0, 0.0), (30.0, 0.0), (20.0, 10.0)), false);
        check(&t, &triangle((5.0, -5.0), (5.0, 20.0), (20.0, 5.0)), true);

        let p = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (4.0, 4.0), (4.0, 10.0), (0.0, 10.0)]);
        check(&p, &rect(3.0, 3.0, 6.0, 6.0), false);
        check(&p, &rect(3.0, 3.0, 6.0, 2.0), true);
        check(&p, &t, true);
        check(&p, &polygon(&[(20.0, 20.0), (30.0, 20.0), (25.0, 30.0)]), false);
    }

    #[test]
    fn test_negative_sizes_do_not_panic() {
        check(&circle(4.0, 0.0, 0.0), &rect(-10.0, 5.0, 20.0, 0.0), false);
        check(&circle(4.0, 0.0, 0.0), &curved(-10.0, 5.0, 2.0, 20.0, 0.0), false);
        check(&circle(f32::NAN, 0.0, 0.0), &rect(-10.0, -5.0, 1.0, 1.0), false);
    }
}
