use crate::intersection::rectangle_intersects_segment;
use crate::precision::Precision;
use crate::primitive::circle::Circle;
use crate::primitive::point::Point;
use crate::primitive::rectangle::{Rectangle, RectangleEdge};
use crate::primitive::segment::Segment;
use crate::shape::{Geometry, Intersects};
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// A line segment shape between two ordered endpoints.
///
/// The endpoints may coincide, in which case the line behaves as a point.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    segment: Segment,
    precision: Precision,
}

impl Line {
    pub fn create(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            segment: Segment::from_coords(x1, y1, x2, y2),
            precision: Precision::Double,
        }
    }

    pub fn create_f32(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            segment: Segment::from_coords(
                f64::from(x1),
                f64::from(y1),
                f64::from(x2),
                f64::from(y2),
            ),
            precision: Precision::Single,
        }
    }

    pub fn x1(&self) -> f64 {
        self.segment.a.x
    }

    pub fn y1(&self) -> f64 {
        self.segment.a.y
    }

    pub fn x2(&self) -> f64 {
        self.segment.b.x
    }

    pub fn y2(&self) -> f64 {
        self.segment.b.y
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn is_degenerate(&self) -> bool {
        self.segment.is_degenerate()
    }

    pub fn length(&self) -> f64 {
        self.segment.length()
    }

    fn key(&self) -> [OrderedFloat<f64>; 4] {
        [self.x1(), self.y1(), self.x2(), self.y2()].map(OrderedFloat)
    }
}

impl Geometry for Line {
    fn mbr(&self) -> Rectangle {
        Rectangle::from_corners(self.segment.a, self.segment.b).with_precision_of(self.precision)
    }

    /// Shortest distance from the segment to the rectangle.
    ///
    /// An endpoint inside the rectangle gives 0 straight away. Otherwise the
    /// segment is measured against each side in turn, stopping at the first side
    /// it touches.
    fn distance(&self, r: &Rectangle) -> f64 {
        if r.contains_point(self.segment.a) || r.contains_point(self.segment.b) {
            return 0.0;
        }

        let mut nearest = f64::INFINITY;
        for edge in RectangleEdge::ALL {
            let d = self.segment.distance_to_segment(&r.edge(edge));
            if d == 0.0 {
                return 0.0;
            }
            nearest = nearest.min(d);
        }
        nearest
    }

    fn is_double_precision(&self) -> bool {
        self.precision.is_double()
    }
}

impl Intersects<Rectangle> for Line {
    fn intersects(&self, r: &Rectangle) -> bool {
        rectangle_intersects_segment(r, &self.segment, self.precision.tolerance())
    }
}

impl Intersects for Line {
    fn intersects(&self, other: &Line) -> bool {
        self.segment.intersects(&other.segment)
    }
}

impl Intersects<Point> for Line {
    /// Approximate: true when the point is within the line's precision tolerance
    /// of the segment, not only when it lies exactly on it.
    fn intersects(&self, point: &Point) -> bool {
        self.intersects(&point.mbr())
    }
}

impl Intersects<Circle> for Line {
    fn intersects(&self, circle: &Circle) -> bool {
        circle.intersects(self)
    }
}

impl Intersects<Line> for Rectangle {
    fn intersects(&self, line: &Line) -> bool {
        line.intersects(self)
    }
}

impl Intersects<Line> for Point {
    fn intersects(&self, line: &Line) -> bool {
        line.intersects(self)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.precision == other.precision
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.precision.hash(state);
    }
}
