use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The lower corner lies above or to the right of the upper corner.
    #[error("inverted rectangle corners: ({x1}, {y1}) is not below and left of ({x2}, {y2})")]
    InvertedCorners { x1: f64, y1: f64, x2: f64, y2: f64 },
}
