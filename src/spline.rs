//! Catmull-Rom splines
//!
//! Produces a dense point list that passes through every control point. The
//! first and last control points are repeated to give the end segments a
//! tangent, so the curve covers all `n - 1` segments.

use crate::math2d::Vec2;

/// Sample a Catmull-Rom spline through `points`.
///
/// Each of the `n - 1` segments is sampled at `t = j / steps` for
/// `j in 0..=steps`, so the output holds `(n - 1) * (steps + 1)` points.
/// Fewer than 4 control points give an empty list. `steps == 0` is treated as 1.
pub fn catmull_rom(points: &[Vec2], steps: usize) -> Vec<Vec2> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }
    let steps = steps.max(1);
    let mut out = Vec::with_capacity((n - 1) * (steps + 1));

    let mut sample = |p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2| {
        for j in 0..=steps {
            let t = j as f32 / steps as f32;
            out.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    };

    // Lead-in: p0 doubles as its own predecessor
    sample(points[0], points[0], points[1], points[2]);
    for i in 1..n - 2 {
        sample(points[i - 1], points[i], points[i + 1], points[i + 2]);
    }
    // Lead-out
    sample(points[n - 3], points[n - 2], points[n - 1], points[n - 1]);

    out
}

/// Point at `t` in `[0, 1]` on the segment p1→p2, with p0 and p3 shaping the tangents
#[inline]
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;

    let f0 = -0.5 * t3 + t2 - 0.5 * t;
    let f1 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let f2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let f3 = 0.5 * t3 - 0.5 * t2;

    Vec2::new(
        f0 * p0.x + f1 * p1.x + f2 * p2.x + f3 * p3.x,
        f0 * p0.y + f1 * p1.y + f2 * p2.y + f3 * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(points: &[(f32, f32)]) -> Vec<Vec2> {
        points.iter().map(|&p| Vec2::from(p)).collect()
    }

    #[test]
    fn test_too_few_points() {
        assert!(catmull_rom(&[], 10).is_empty());
        assert!(catmull_rom(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]), 10).is_empty());
    }

    #[test]
    fn test_endpoints() {
        let control = pts(&[(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (20.0, 0.0)]);
        let curve = catmull_rom(&control, 1);
        assert_eq!(curve.len(), 8);
        assert_eq!(curve.first(), Some(&Vec2::new(0.0, 0.0)));
        assert_eq!(curve.last(), Some(&Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_passes_through_control_points() {
        let control = pts(&[(0.0, 0.0), (30.0, 50.0), (60.0, -20.0), (90.0, 40.0), (120.0, 0.0)]);
        let steps = 8;
        let curve = catmull_rom(&control, steps);
        assert_eq!(curve.len(), (control.len() - 1) * (steps + 1));

        // Segment k starts at control[k] and ends at control[k + 1]
        for (k, segment) in curve.chunks(steps + 1).enumerate() {
            assert!(segment[0].approx_eq(&control[k], 1e-4));
            assert!(segment[steps].approx_eq(&control[k + 1], 1e-4));
        }
    }

    #[test]
    fn test_zero_steps_acts_as_one() {
        let control = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(catmull_rom(&control, 0), catmull_rom(&control, 1));
    }

    #[test]
    fn test_straight_line_stays_straight() {
        let control = pts(&[(0.0, 5.0), (10.0, 5.0), (20.0, 5.0), (30.0, 5.0)]);
        for p in catmull_rom(&control, 16) {
            assert!((p.y - 5.0).abs() < 1e-4);
            assert!((-1e-3..=30.001).contains(&p.x));
        }
    }

    #[test]
    fn test_midpoint_of_symmetric_window() {
        let p = catmull_rom_point(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
            0.5,
        );
        assert!(p.approx_eq(&Vec2::new(1.5, 0.0), 1e-6));
    }
}
