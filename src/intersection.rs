//! Intersection predicates shared between shape kinds.

use crate::primitive::rectangle::Rectangle;
use crate::primitive::segment::Segment;
use crate::primitive::vector::Vector2D;
use nalgebra::Point2;

/// Tests whether a segment touches, crosses or lies within a closed rectangle.
///
/// The segment is clipped parametrically against the four sides (Liang–Barsky):
/// each side narrows the range of `t` in `a + t * (b - a)` that lies on its inner
/// side, and the segment meets the rectangle iff some `t` in `[0, 1]` survives
/// all four.
///
/// Before clipping, any rectangle corner within `tolerance` of the segment counts
/// as a hit. This makes the test slightly permissive: for a zero-area rectangle
/// (a point) it answers "is the point within `tolerance` of the segment" rather
/// than an exact on-segment test.
pub fn rectangle_intersects_segment(rectangle: &Rectangle, segment: &Segment, tolerance: f64) -> bool {
    if rectangle
        .corners()
        .iter()
        .any(|corner| segment.distance_to_point(*corner) <= tolerance)
    {
        return true;
    }

    let dir = segment.b - segment.a;
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    // Each pair is (p, q) for the inequality p * t <= q.
    let boundaries = [
        (-dir.x, segment.a.x - rectangle.x1()),
        (dir.x, rectangle.x2() - segment.a.x),
        (-dir.y, segment.a.y - rectangle.y1()),
        (dir.y, rectangle.y2() - segment.a.y),
    ];

    for (p, q) in boundaries {
        if p == 0.0 {
            // Parallel to this side: entirely inside or entirely outside it.
            if q < 0.0 {
                return false;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t_exit {
                    return false;
                }
                t_enter = t_enter.max(t);
            } else {
                if t < t_enter {
                    return false;
                }
                t_exit = t_exit.min(t);
            }
        }
    }

    true
}

/// Tests whether a segment comes within `radius` of `center`, by vector projection.
///
/// The center is projected onto the segment's direction. If the projection lands
/// on the segment, the perpendicular distance decides; otherwise the nearer
/// endpoint does. A degenerate segment is treated as a single point.
pub fn segment_intersects_circle(segment: &Segment, center: Point2<f64>, radius: f64) -> bool {
    let c = Vector2D::from_point(center);
    let a = Vector2D::from_point(segment.a);
    let c_minus_a = c.minus(&a);
    let radius_squared = radius * radius;

    if segment.is_degenerate() {
        return c_minus_a.modulus_squared() <= radius_squared;
    }

    let b = Vector2D::from_point(segment.b);
    let b_minus_a = b.minus(&a);
    let b_minus_a_modulus = b_minus_a.modulus();
    let lambda = c_minus_a.dot(&b_minus_a) / b_minus_a_modulus;

    if (0.0..=b_minus_a_modulus).contains(&lambda) {
        let projection = b_minus_a.times(lambda / b_minus_a_modulus);
        // Pythagoras gives the squared distance from the center to the line.
        c_minus_a.modulus_squared() - projection.modulus_squared() <= radius_squared
    } else {
        c_minus_a.modulus_squared() <= radius_squared || c.minus(&b).modulus_squared() <= radius_squared
    }
}
