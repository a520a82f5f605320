use nalgebra::{Point2, distance};

/// A struct representing a finite line segment in the plane.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Segment {
    /// The starting point of the segment.
    pub a: Point2<f64>,
    /// The ending point of the segment.
    pub b: Point2<f64>,
}

impl Segment {
    /// Creates a new `Segment` with the given starting and ending points.
    ///
    /// # Arguments
    ///
    /// * `a` - The starting point of the segment.
    /// * `b` - The ending point of the segment.
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self { a, b }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// True if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn closest_point(&self, point: Point2<f64>) -> Point2<f64> {
        let edge_dir = self.b - self.a;
        let length_squared = edge_dir.norm_squared();
        if length_squared == 0.0 {
            return self.a;
        }

        // Project the point onto the segment, clamped to its ends.
        let t = (point - self.a).dot(&edge_dir) / length_squared;
        let t = t.clamp(0.0, 1.0);

        self.a + edge_dir * t
    }

    /// Shortest Euclidean distance from `point` to any point of the segment.
    pub fn distance_to_point(&self, point: Point2<f64>) -> f64 {
        distance(&self.closest_point(point), &point)
    }

    pub fn length(&self) -> f64 {
        distance(&self.a, &self.b)
    }

    /// Which side of this segment's supporting line `point` falls on.
    ///
    /// Returns `1` for clockwise, `-1` for counter-clockwise (in a y-down frame)
    /// and `0` when the point lies on the segment itself. Collinear points beyond
    /// either end are reported as `-1` (behind `a`) or `1` (past `b`), which is what
    /// lets [`Segment::intersects`] reject collinear segments that do not overlap.
    fn relative_ccw(&self, point: Point2<f64>) -> i8 {
        let dir = self.b - self.a;
        let rel = point - self.a;

        let mut ccw = rel.x * dir.y - rel.y * dir.x;
        if ccw == 0.0 {
            ccw = rel.dot(&dir);
            if ccw > 0.0 {
                let past_end = point - self.b;
                ccw = past_end.dot(&dir).max(0.0);
            }
        }

        if ccw < 0.0 {
            -1
        } else if ccw > 0.0 {
            1
        } else {
            0
        }
    }

    /// True if the two segments touch, cross, or overlap.
    pub fn intersects(&self, other: &Segment) -> bool {
        // Two single points have no supporting line to orient against.
        if self.is_degenerate() && other.is_degenerate() {
            return self.a == other.a;
        }

        self.relative_ccw(other.a) * self.relative_ccw(other.b) <= 0
            && other.relative_ccw(self.a) * other.relative_ccw(self.b) <= 0
    }

    /// Shortest distance between any two points of the segments.
    ///
    /// For segments that do not intersect the minimum is always attained at an
    /// endpoint of one of them, so only the four endpoint distances are measured.
    pub fn distance_to_segment(&self, other: &Segment) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }

        let mut nearest = f64::INFINITY;
        for (segment, point) in [(other, self.a), (other, self.b), (self, other.a), (self, other.b)] {
            let d = segment.distance_to_point(point);
            if d == 0.0 {
                return 0.0;
            }
            nearest = nearest.min(d);
        }
        nearest
    }

    pub fn geogebra_string(&self) -> String {
        format!(
            "Segment(({:}, {:}), ({:}, {:}))",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}
