use crate::precision::Precision;
use crate::primitive::rectangle::Rectangle;
use crate::shape::{Geometry, Intersects};
use nalgebra::{Point2, distance, distance_squared};
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// A point shape. Its bounding rectangle has zero area.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    coords: Point2<f64>,
    precision: Precision,
}

impl Point {
    pub fn create(x: f64, y: f64) -> Self {
        Self::from_coords(Point2::new(x, y), Precision::Double)
    }

    pub fn create_f32(x: f32, y: f32) -> Self {
        Self::from_coords(Point2::new(f64::from(x), f64::from(y)), Precision::Single)
    }

    pub(crate) fn from_coords(coords: Point2<f64>, precision: Precision) -> Self {
        Self { coords, precision }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn coords(&self) -> Point2<f64> {
        self.coords
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn distance_to_point(&self, other: &Point) -> f64 {
        distance(&self.coords, &other.coords)
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        distance_squared(&self.coords, &other.coords)
    }

    fn key(&self) -> [OrderedFloat<f64>; 2] {
        [OrderedFloat(self.coords.x), OrderedFloat(self.coords.y)]
    }
}

impl Geometry for Point {
    fn mbr(&self) -> Rectangle {
        Rectangle::singleton(self.coords).with_precision_of(self.precision)
    }

    fn distance(&self, r: &Rectangle) -> f64 {
        r.distance_to_point(self.coords)
    }

    fn is_double_precision(&self) -> bool {
        self.precision.is_double()
    }
}

impl Intersects<Rectangle> for Point {
    fn intersects(&self, r: &Rectangle) -> bool {
        r.intersects(self)
    }
}

impl Intersects for Point {
    /// Two points intersect only when their coordinates coincide exactly.
    fn intersects(&self, other: &Point) -> bool {
        self.coords == other.coords
    }
}

impl From<Point2<f64>> for Point {
    fn from(coords: Point2<f64>) -> Self {
        Self::from_coords(coords, Precision::Double)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.precision == other.precision
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.precision.hash(state);
    }
}
