//! This module contains the primitive geometry types.
//!
//! We define primitive geometry as any geometry of O(1) complexity: points,
//! segments, circles and axis-aligned rectangles, plus the small vector type
//! their intersection math is written in.

pub mod circle;
pub mod line;
pub mod point;
pub mod rectangle;
pub mod segment;
pub mod vector;
