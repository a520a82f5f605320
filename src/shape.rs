//! The contract through which a spatial index consumes shapes.
//!
//! An index only ever needs three things from a stored or query shape: its
//! bounding rectangle, its distance to a rectangle, and whether it intersects
//! another shape. The set of shape kinds is closed, so cross-type intersection
//! is one [`Intersects`] impl per ordered pair, with [`Shape`] dispatching over
//! the variants.

use crate::primitive::circle::Circle;
use crate::primitive::line::Line;
use crate::primitive::point::Point;
use crate::primitive::rectangle::Rectangle;

/// Tests whether this shape touches, contains or is contained in another shape.
///
/// Every cross-type pair is implemented in both directions and the two agree:
/// `a.intersects(&b) == b.intersects(&a)`.
pub trait Intersects<Other: ?Sized = Self> {
    fn intersects(&self, other: &Other) -> bool;
}

/// Capabilities every shape stored in or queried against an index provides.
pub trait Geometry: Intersects<Rectangle> {
    /// The minimum bounding rectangle of the shape.
    fn mbr(&self) -> Rectangle;

    /// Euclidean distance from the shape to the nearest point of `r`; never
    /// negative for finite input.
    fn distance(&self, r: &Rectangle) -> f64;

    /// Whether the shape was constructed from `f64` coordinates.
    fn is_double_precision(&self) -> bool;
}

/// Any of the supported shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Point(Point),
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

/// Intersects a concrete shape with whichever variant `other` holds.
fn intersects_any<T>(shape: &T, other: &Shape) -> bool
where
    T: Intersects<Point> + Intersects<Rectangle> + Intersects<Circle> + Intersects<Line>,
{
    match other {
        Shape::Point(p) => Intersects::<Point>::intersects(shape, p),
        Shape::Rectangle(r) => Intersects::<Rectangle>::intersects(shape, r),
        Shape::Circle(c) => Intersects::<Circle>::intersects(shape, c),
        Shape::Line(l) => Intersects::<Line>::intersects(shape, l),
    }
}

impl Intersects for Shape {
    fn intersects(&self, other: &Shape) -> bool {
        match self {
            Shape::Point(p) => intersects_any(p, other),
            Shape::Rectangle(r) => intersects_any(r, other),
            Shape::Circle(c) => intersects_any(c, other),
            Shape::Line(l) => intersects_any(l, other),
        }
    }
}

impl Intersects<Rectangle> for Shape {
    fn intersects(&self, r: &Rectangle) -> bool {
        match self {
            Shape::Point(p) => p.intersects(r),
            Shape::Rectangle(s) => s.intersects(r),
            Shape::Circle(c) => c.intersects(r),
            Shape::Line(l) => l.intersects(r),
        }
    }
}

impl Geometry for Shape {
    fn mbr(&self) -> Rectangle {
        match self {
            Shape::Point(p) => p.mbr(),
            Shape::Rectangle(r) => r.mbr(),
            Shape::Circle(c) => c.mbr(),
            Shape::Line(l) => l.mbr(),
        }
    }

    fn distance(&self, r: &Rectangle) -> f64 {
        match self {
            Shape::Point(p) => p.distance(r),
            Shape::Rectangle(s) => s.distance(r),
            Shape::Circle(c) => c.distance(r),
            Shape::Line(l) => l.distance(r),
        }
    }

    fn is_double_precision(&self) -> bool {
        match self {
            Shape::Point(p) => p.is_double_precision(),
            Shape::Rectangle(r) => r.is_double_precision(),
            Shape::Circle(c) => c.is_double_precision(),
            Shape::Line(l) => l.is_double_precision(),
        }
    }
}
