use crate::error::{GeometryError, Result};
use crate::precision::Precision;
use crate::primitive::point::Point;
use crate::primitive::segment::Segment;
use crate::shape::{Geometry, Intersects};
use nalgebra::{Point2, Vector2, center};
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// Enum to designate one of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum RectangleEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl RectangleEdge {
    /// All four edges, walking the boundary from the lower left corner.
    pub const ALL: [RectangleEdge; 4] = [
        RectangleEdge::Left,
        RectangleEdge::Top,
        RectangleEdge::Right,
        RectangleEdge::Bottom,
    ];
}

/// An axis-aligned rectangle, used both as the bounding box of stored shapes and
/// as a query window.
///
/// The corners satisfy `x1 <= x2` and `y1 <= y2`; every public constructor either
/// checks or establishes this. The one exception is the MBR of a circle with a
/// negative radius, which comes out inverted and intersects nothing.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    min: Point2<f64>,
    max: Point2<f64>,
    precision: Precision,
}

impl Rectangle {
    /// Creates a rectangle from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedCorners`] if `x1 > x2` or `y1 > y2`.
    pub fn create(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        Self::with_precision(x1, y1, x2, y2, Precision::Double)
    }

    /// Creates a single precision rectangle from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedCorners`] if `x1 > x2` or `y1 > y2`.
    pub fn create_f32(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        Self::with_precision(
            f64::from(x1),
            f64::from(y1),
            f64::from(x2),
            f64::from(y2),
            Precision::Single,
        )
    }

    fn with_precision(x1: f64, y1: f64, x2: f64, y2: f64, precision: Precision) -> Result<Self> {
        if x1 > x2 || y1 > y2 {
            tracing::debug!(x1, y1, x2, y2, "rejecting rectangle with inverted corners");
            return Err(GeometryError::InvertedCorners { x1, y1, x2, y2 });
        }
        Ok(Self::from_ordered(Point2::new(x1, y1), Point2::new(x2, y2), precision))
    }

    /// Callers guarantee `min <= max` componentwise, except [`Circle`] which
    /// passes its corners through unchecked for a negative radius.
    ///
    /// [`Circle`]: crate::primitive::circle::Circle
    pub(crate) fn from_ordered(min: Point2<f64>, max: Point2<f64>, precision: Precision) -> Self {
        Self {
            min,
            max,
            precision,
        }
    }

    /// Creates the rectangle spanned by two opposite corners, given in any order.
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self::around_points([a, b])
    }

    /// Creates a rectangle that encompasses all the given points.
    ///
    /// # Arguments
    ///
    /// * `points` - The points to be enclosed by the rectangle.
    ///
    /// # Returns
    ///
    /// A rectangle that encloses all the given points. For an empty input the
    /// result is inverted (`min` at positive infinity) and contains nothing.
    pub fn around_points(points: impl IntoIterator<Item = Point2<f64>>) -> Self {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        for pt in points {
            min.x = min.x.min(pt.x);
            min.y = min.y.min(pt.y);

            max.x = max.x.max(pt.x);
            max.y = max.y.max(pt.y);
        }

        Self::from_ordered(min, max, Precision::Double)
    }

    /// Creates a zero-area rectangle at a single point.
    pub fn singleton(pt: Point2<f64>) -> Self {
        Self::from_ordered(pt, pt, Precision::Double)
    }

    /// The same rectangle, tagged with a different input precision.
    pub fn with_precision_of(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    pub fn x1(&self) -> f64 {
        self.min.x
    }

    pub fn y1(&self) -> f64 {
        self.min.y
    }

    pub fn x2(&self) -> f64 {
        self.max.x
    }

    pub fn y2(&self) -> f64 {
        self.max.y
    }

    pub fn min(&self) -> Point2<f64> {
        self.min
    }

    pub fn max(&self) -> Point2<f64> {
        self.max
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    /// Calculates the center point of the rectangle.
    pub fn center(&self) -> Point2<f64> {
        center(&self.min, &self.max)
    }

    /// Compute the half-extents of the rectangle.
    pub fn half_extents(&self) -> Vector2<f64> {
        (self.max - self.min) / 2.0
    }

    /// The corners in boundary order: lower left, upper left, upper right, lower right.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            self.min,
            Point2::new(self.min.x, self.max.y),
            self.max,
            Point2::new(self.max.x, self.min.y),
        ]
    }

    pub fn edge(&self, edge: RectangleEdge) -> Segment {
        let [lower_left, upper_left, upper_right, lower_right] = self.corners();
        match edge {
            RectangleEdge::Left => Segment::new(lower_left, upper_left),
            RectangleEdge::Top => Segment::new(upper_left, upper_right),
            RectangleEdge::Right => Segment::new(upper_right, lower_right),
            RectangleEdge::Bottom => Segment::new(lower_right, lower_left),
        }
    }

    pub fn edges(&self) -> [Segment; 4] {
        RectangleEdge::ALL.map(|edge| self.edge(edge))
    }

    /// True if `(x, y)` lies inside or on the boundary.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    pub fn contains_point(&self, pt: Point2<f64>) -> bool {
        self.contains(pt.x, pt.y)
    }

    /// The smallest rectangle covering both `self` and `other`.
    pub fn add(&self, other: &Rectangle) -> Rectangle {
        Self::from_ordered(
            Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
            self.precision.coarsest(other.precision),
        )
    }

    /// Area of the overlap between the two rectangles, 0 if they are disjoint.
    pub fn intersection_area(&self, other: &Rectangle) -> f64 {
        if !self.intersects(other) {
            return 0.0;
        }
        let width = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let height = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        width * height
    }

    /// Euclidean distance from `pt` to the nearest point of the rectangle,
    /// 0 when `pt` is inside or on the boundary.
    pub fn distance_to_point(&self, pt: Point2<f64>) -> f64 {
        let dx = axis_gap(self.min.x - pt.x, pt.x - self.max.x);
        let dy = axis_gap(self.min.y - pt.y, pt.y - self.max.y);
        dx.hypot(dy)
    }

    /// Create a version inflated by a given amount on every side.
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            min: self.min - Vector2::new(amount, amount),
            max: self.max + Vector2::new(amount, amount),
            precision: self.precision,
        }
    }

    fn key(&self) -> [OrderedFloat<f64>; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y].map(OrderedFloat)
    }
}

/// Separation along one axis given the signed gaps on either side, 0 on overlap.
///
/// `f64::max` discards NaN, which would report a NaN coordinate as touching
/// everything; comparisons keep it.
fn axis_gap(before: f64, after: f64) -> f64 {
    let gap = if before > after { before } else { after };
    if before.is_nan() || after.is_nan() {
        f64::NAN
    } else if gap < 0.0 {
        0.0
    } else {
        gap
    }
}

impl Geometry for Rectangle {
    fn mbr(&self) -> Rectangle {
        *self
    }

    /// Euclidean gap between the two rectangles, 0 when they intersect.
    fn distance(&self, other: &Rectangle) -> f64 {
        let dx = axis_gap(self.min.x - other.max.x, other.min.x - self.max.x);
        let dy = axis_gap(self.min.y - other.max.y, other.min.y - self.max.y);
        dx.hypot(dy)
    }

    fn is_double_precision(&self) -> bool {
        self.precision.is_double()
    }
}

impl Intersects for Rectangle {
    /// True if the closed rectangles share at least one point.
    fn intersects(&self, other: &Rectangle) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

impl Intersects<Point> for Rectangle {
    fn intersects(&self, point: &Point) -> bool {
        self.contains_point(point.coords())
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.precision == other.precision
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.precision.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest::{arbitrary_point, arbitrary_rectangle};
    use proptest::prelude::*;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rectangle {
        Rectangle::create(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn create_rejects_inverted_corners() {
        assert_eq!(
            Rectangle::create(2.0, 0.0, 1.0, 1.0),
            Err(GeometryError::InvertedCorners {
                x1: 2.0,
                y1: 0.0,
                x2: 1.0,
                y2: 1.0
            })
        );
        assert!(Rectangle::create(0.0, 2.0, 1.0, 1.0).is_err());
        assert!(Rectangle::create(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn from_corners_normalises() {
        let r = Rectangle::from_corners(Point2::new(5.0, 1.0), Point2::new(2.0, 4.0));
        assert_eq!(r, rect(2.0, 1.0, 5.0, 4.0));
    }

    #[test]
    fn single_precision_is_distinct() {
        let single = Rectangle::create_f32(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(single.precision(), Precision::Single);
        assert_ne!(single, rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(single.with_precision_of(Precision::Double), rect(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn measures() {
        let r = rect(1.0, 2.0, 4.0, 6.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.perimeter(), 14.0);
        assert_eq!(r.center(), Point2::new(2.5, 4.0));
        assert_eq!(r.half_extents(), Vector2::new(1.5, 2.0));
    }

    #[test]
    fn edges_walk_the_boundary() {
        let r = rect(0.0, 0.0, 2.0, 1.0);
        assert_eq!(r.edge(RectangleEdge::Left), Segment::from_coords(0.0, 0.0, 0.0, 1.0));
        assert_eq!(r.edge(RectangleEdge::Top), Segment::from_coords(0.0, 1.0, 2.0, 1.0));
        assert_eq!(r.edge(RectangleEdge::Right), Segment::from_coords(2.0, 1.0, 2.0, 0.0));
        assert_eq!(r.edge(RectangleEdge::Bottom), Segment::from_coords(2.0, 0.0, 0.0, 0.0));
        for pair in r.edges().windows(2) {
            assert_eq!(pair[0].b, pair[1].a);
        }
    }

    #[test]
    fn closed_intersection_and_distance() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let touching = rect(1.0, 1.0, 2.0, 2.0);
        let apart = rect(4.0, 5.0, 6.0, 6.0);
        assert!(a.intersects(&touching));
        assert_eq!(a.distance(&touching), 0.0);
        assert!(!a.intersects(&apart));
        assert_eq!(a.distance(&apart), 5.0);
        assert_eq!(a.intersection_area(&apart), 0.0);
        assert_eq!(a.intersection_area(&rect(0.5, 0.5, 3.0, 3.0)), 0.25);
    }

    #[test]
    fn add_covers_both() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(3.0, -1.0, 4.0, 0.5);
        assert_eq!(a.add(&b), rect(0.0, -1.0, 4.0, 1.0));
    }

    #[test]
    fn rectangle_is_its_own_mbr() {
        let r = rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(r.mbr(), r);
        assert!(r.is_double_precision());
        assert!(!Rectangle::create_f32(0.0, 0.0, 1.0, 1.0).unwrap().is_double_precision());
    }

    #[test]
    fn contains_points_on_boundary() {
        let r = rect(0.0, 0.0, 1.0, 1.0);
        assert!(r.intersects(&Point::create(1.0, 0.5)));
        assert!(!r.intersects(&Point::create(1.0, 1.5)));
    }

    #[test]
    fn inflated_grows_every_side() {
        assert_eq!(rect(0.0, 0.0, 1.0, 1.0).inflated(1.0), rect(-1.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn nan_coordinates_propagate_through_distance() {
        let r = rect(100.0, 0.0, 200.0, 1.0);
        assert!(r.distance_to_point(Point2::new(f64::NAN, 0.5)).is_nan());
        assert_eq!(r.distance_to_point(Point2::new(90.0, 0.5)), 10.0);

        let nan = rect(f64::NAN, 0.0, f64::NAN, 1.0);
        assert!(r.distance(&nan).is_nan());
        assert!(!r.intersects(&nan));
    }

    proptest! {
        #[test]
        fn around_points_contains_every_point(points in prop::collection::vec(arbitrary_point(), 1..20)) {
            let r = Rectangle::around_points(points.iter().copied());
            for pt in &points {
                prop_assert!(r.contains_point(*pt));
            }
        }

        #[test]
        fn distance_to_point_is_zero_iff_contained(r in arbitrary_rectangle(), pt in arbitrary_point()) {
            let d = r.distance_to_point(pt);
            prop_assert!(d >= 0.0);
            prop_assert_eq!(d == 0.0, r.contains_point(pt));
        }

        #[test]
        fn distance_is_zero_iff_intersecting(a in arbitrary_rectangle(), b in arbitrary_rectangle()) {
            prop_assert_eq!(a.distance(&b) == 0.0, a.intersects(&b));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn edges_lie_on_the_boundary(r in arbitrary_rectangle(), edge in any::<RectangleEdge>()) {
            let segment = r.edge(edge);
            prop_assert!(r.contains_point(segment.a));
            prop_assert!(r.contains_point(segment.b));
            let side = match edge {
                RectangleEdge::Left | RectangleEdge::Right => r.height(),
                RectangleEdge::Top | RectangleEdge::Bottom => r.width(),
            };
            prop_assert_eq!(segment.length(), side);
        }

        #[test]
        fn add_contains_both(a in arbitrary_rectangle(), b in arbitrary_rectangle()) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.intersection_area(&a), a.area());
            prop_assert_eq!(sum.intersection_area(&b), b.area());
        }
    }
}
