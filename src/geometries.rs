//! Factory functions for every shape kind, in double and single precision.

use crate::error::Result;
use crate::primitive::circle::Circle;
use crate::primitive::line::Line;
use crate::primitive::point::Point;
use crate::primitive::rectangle::Rectangle;

pub fn point(x: f64, y: f64) -> Point {
    Point::create(x, y)
}

pub fn point_f32(x: f32, y: f32) -> Point {
    Point::create_f32(x, y)
}

/// # Errors
///
/// Fails if the corners are inverted, see [`Rectangle::create`].
pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Rectangle> {
    Rectangle::create(x1, y1, x2, y2)
}

/// # Errors
///
/// Fails if the corners are inverted, see [`Rectangle::create_f32`].
pub fn rectangle_f32(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Rectangle> {
    Rectangle::create_f32(x1, y1, x2, y2)
}

pub fn circle(x: f64, y: f64, radius: f64) -> Circle {
    Circle::create(x, y, radius)
}

pub fn circle_f32(x: f32, y: f32, radius: f32) -> Circle {
    Circle::create_f32(x, y, radius)
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::create(x1, y1, x2, y2)
}

pub fn line_f32(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
    Line::create_f32(x1, y1, x2, y2)
}
