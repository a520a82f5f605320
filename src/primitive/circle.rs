use crate::intersection::segment_intersects_circle;
use crate::precision::Precision;
use crate::primitive::line::Line;
use crate::primitive::point::Point;
use crate::primitive::rectangle::Rectangle;
use crate::shape::{Geometry, Intersects};
use nalgebra::{Point2, distance, distance_squared};
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// A circle given by its center and radius.
///
/// The radius is not validated; a negative radius is accepted as is.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point2<f64>,
    radius: f64,
    precision: Precision,
    /// Derived from the fields above at construction, never recomputed.
    mbr: Rectangle,
}

impl Circle {
    pub fn create(x: f64, y: f64, radius: f64) -> Self {
        Self::with_precision(x, y, radius, Precision::Double)
    }

    pub fn create_f32(x: f32, y: f32, radius: f32) -> Self {
        Self::with_precision(f64::from(x), f64::from(y), f64::from(radius), Precision::Single)
    }

    fn with_precision(x: f64, y: f64, radius: f64, precision: Precision) -> Self {
        let mbr = Rectangle::from_ordered(
            Point2::new(x - radius, y - radius),
            Point2::new(x + radius, y + radius),
            precision,
        );
        Self {
            center: Point2::new(x, y),
            radius,
            precision,
            mbr,
        }
    }

    pub fn x(&self) -> f64 {
        self.center.x
    }

    pub fn y(&self) -> f64 {
        self.center.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn key(&self) -> [OrderedFloat<f64>; 3] {
        [self.center.x, self.center.y, self.radius].map(OrderedFloat)
    }
}

impl Geometry for Circle {
    /// The bounding square of the circle. A negative radius gives an inverted
    /// rectangle (`x1 > x2`, `y1 > y2`) that intersects nothing.
    fn mbr(&self) -> Rectangle {
        self.mbr
    }

    /// Gap between the circle's edge and the rectangle, 0 when they overlap.
    fn distance(&self, r: &Rectangle) -> f64 {
        let gap = r.distance_to_point(self.center) - self.radius;
        // NaN must fall through, so no f64::max here.
        if gap < 0.0 { 0.0 } else { gap }
    }

    fn is_double_precision(&self) -> bool {
        self.precision.is_double()
    }
}

impl Intersects<Rectangle> for Circle {
    fn intersects(&self, r: &Rectangle) -> bool {
        self.distance(r) == 0.0
    }
}

impl Intersects for Circle {
    fn intersects(&self, other: &Circle) -> bool {
        let total = self.radius + other.radius;
        distance_squared(&self.center, &other.center) <= total * total
    }
}

impl Intersects<Point> for Circle {
    fn intersects(&self, point: &Point) -> bool {
        distance(&self.center, &point.coords()) <= self.radius
    }
}

impl Intersects<Line> for Circle {
    fn intersects(&self, line: &Line) -> bool {
        segment_intersects_circle(&line.segment(), self.center, self.radius)
    }
}

impl Intersects<Circle> for Rectangle {
    fn intersects(&self, circle: &Circle) -> bool {
        circle.intersects(self)
    }
}

impl Intersects<Circle> for Point {
    fn intersects(&self, circle: &Circle) -> bool {
        circle.intersects(self)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.precision == other.precision
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.precision.hash(state);
    }
}
