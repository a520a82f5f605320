//! Numeric precision of the input a shape was built from.
//!
//! All arithmetic happens in `f64`; shapes built from `f32` input are widened on
//! construction but remember where they came from, so that an index can choose
//! comparison tolerances to match.

/// The precision of the coordinates a shape was constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Precision {
    /// Built from `f32` coordinates.
    Single,
    /// Built from `f64` coordinates.
    #[default]
    Double,
}

/// Tolerance used for approximate on-segment tests of double precision shapes.
pub const DOUBLE_TOLERANCE: f64 = 1.0e-8;

/// Tolerance used for approximate on-segment tests of single precision shapes.
pub const SINGLE_TOLERANCE: f64 = f32::EPSILON as f64;

impl Precision {
    pub fn is_double(self) -> bool {
        self == Precision::Double
    }

    /// The absolute distance below which a point is considered to lie on a segment.
    pub fn tolerance(self) -> f64 {
        match self {
            Precision::Single => SINGLE_TOLERANCE,
            Precision::Double => DOUBLE_TOLERANCE,
        }
    }

    /// The coarser of two precisions.
    ///
    /// A comparison between a single and a double precision shape can be no more
    /// exact than the single precision input.
    pub fn coarsest(self, other: Precision) -> Precision {
        if self.is_double() && other.is_double() {
            Precision::Double
        } else {
            Precision::Single
        }
    }
}
