use crate::primitive::circle::Circle;
use crate::primitive::line::Line;
use crate::primitive::point::Point;
use crate::primitive::rectangle::Rectangle;
use crate::primitive::segment::Segment;
use crate::shape::Shape;
use nalgebra::{Point2, Vector2};
use proptest::prelude::*;

/// A Strategy to generate f64 values within the range [-50.0, 50.0],
/// set up to be likely to produce zeros, round numbers, and edge cases.
///
/// Round numbers matter here: they make coincident endpoints, collinear
/// segments and shapes touching exactly on a boundary common enough to hit.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
            Just(-std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector() -> impl Strategy<Value = Vector2<f64>> {
    (scalar_strategy(), scalar_strategy()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn arbitrary_point() -> BoxedStrategy<Point2<f64>> {
    arbitrary_vector().prop_map(Point2::from).boxed()
}

fn round_scalar() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        Just(-1.0),
        Just(0.5),
        Just(10.0),
        Just(std::f64::consts::PI),
    ]
}

/// Points restricted to a few round scalars, so that many coincide.
pub fn arbitrary_scalar_point() -> impl Strategy<Value = Point2<f64>> {
    (round_scalar(), round_scalar()).prop_map(|(x, y)| Point2::new(x, y))
}

pub fn arbitrary_segment() -> BoxedStrategy<Segment> {
    prop_oneof![
        (arbitrary_point(), arbitrary_point()).prop_map(|(a, b)| Segment::new(a, b)),
        // Degenerate:
        arbitrary_point().prop_map(|a| Segment::new(a, a)),
    ]
    .boxed()
}

pub fn arbitrary_rectangle() -> BoxedStrategy<Rectangle> {
    (arbitrary_point(), arbitrary_point())
        .prop_map(|(a, b)| Rectangle::from_corners(a, b))
        .boxed()
}

pub fn arbitrary_circle() -> BoxedStrategy<Circle> {
    (arbitrary_point(), scalar_strategy().prop_map(f64::abs), any::<bool>()).prop_map(
        |(center, radius, single)| {
            if single {
                Circle::create_f32(center.x as f32, center.y as f32, radius as f32)
            } else {
                Circle::create(center.x, center.y, radius)
            }
        },
    )
    .boxed()
}

pub fn arbitrary_line() -> impl Strategy<Value = Line> {
    arbitrary_segment().prop_map(|s| Line::create(s.a.x, s.a.y, s.b.x, s.b.y))
}

/// Boxed: the unboxed strategy type is deep enough to overflow the default
/// test thread stack in debug builds.
pub fn arbitrary_shape() -> BoxedStrategy<Shape> {
    prop_oneof![
        arbitrary_point().prop_map(|p| Shape::from(Point::from(p))),
        arbitrary_rectangle().prop_map(Shape::from),
        arbitrary_circle().prop_map(Shape::from),
        arbitrary_line().prop_map(Shape::from),
    ]
    .boxed()
}
