//! Geometry primitives for R-tree style spatial indexes.
//!
//! An index stores and queries shapes purely through the [`Geometry`] and
//! [`Intersects`] traits: it asks a shape for its bounding rectangle, its distance
//! to a rectangle (to prune branches), and whether it intersects another shape.
//! Tree structure and traversal live elsewhere.
//!
//! All shapes are immutable `Copy` values compared structurally. Arithmetic is
//! plain `f64`; degenerate shapes (zero radius, coincident endpoints, zero area)
//! are valid values, and non-finite input is not guarded against.

pub mod error;
pub mod geometries;
pub mod intersection;
pub mod precision;
pub mod primitive;
pub mod shape;

#[cfg(test)]
pub mod proptest;

// Re-export commonly used types
pub use error::GeometryError;
pub use precision::Precision;
pub use primitive::circle::Circle;
pub use primitive::line::Line;
pub use primitive::point::Point;
pub use primitive::rectangle::{Rectangle, RectangleEdge};
pub use primitive::segment::Segment;
pub use primitive::vector::Vector2D;
pub use shape::{Geometry, Intersects, Shape};
