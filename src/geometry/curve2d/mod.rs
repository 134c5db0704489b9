pub mod arc;
pub mod composite;
pub mod cubic;
pub mod line_segment;
pub mod spiral;

pub use arc::*;
pub use composite::*;
pub use cubic::*;
pub use line_segment::*;
pub use spiral::*;

use crate::error::FunctionError;
use crate::function::out_of_domain;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::Pose2D;

/// A positioned parametric curve in the plane, parameterised by arc length.
/// The cubic variants approximate arc length by their curve parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve2D<T: FloatingPoint> {
    LineSegment(LineSegment2D<T>),
    Arc(Arc2D<T>),
    Spiral(Spiral2D<T>),
    Cubic(CubicCurve2D<T>),
    ParametricCubic(ParametricCubicCurve2D<T>),
}

impl<T: FloatingPoint> Curve2D<T> {
    pub fn pose_at(&self, s: T) -> Result<Pose2D<T>, FunctionError> {
        if !self.domain().contains(s) {
            return Err(out_of_domain(s));
        }
        Ok(self.pose_at_unchecked(s))
    }

    pub fn pose_at_fuzzy(&self, s: T, tolerance: T) -> Result<Pose2D<T>, FunctionError> {
        if !self.domain().fuzzy_contains(s, tolerance) {
            return Err(out_of_domain(s));
        }
        Ok(self.pose_at_unchecked(s))
    }

    pub(crate) fn pose_at_unchecked(&self, s: T) -> Pose2D<T> {
        match self {
            Self::LineSegment(c) => c.pose_at_unchecked(s),
            Self::Arc(c) => c.pose_at_unchecked(s),
            Self::Spiral(c) => c.pose_at_unchecked(s),
            Self::Cubic(c) => c.pose_at_unchecked(s),
            Self::ParametricCubic(c) => c.pose_at_unchecked(s),
        }
    }
}

impl<T: FloatingPoint> HasDomain<T> for Curve2D<T> {
    fn domain(&self) -> Range<T> {
        match self {
            Self::LineSegment(c) => c.domain(),
            Self::Arc(c) => c.domain(),
            Self::Spiral(c) => c.domain(),
            Self::Cubic(c) => c.domain(),
            Self::ParametricCubic(c) => c.domain(),
        }
    }
}

impl<T: FloatingPoint> From<LineSegment2D<T>> for Curve2D<T> {
    fn from(c: LineSegment2D<T>) -> Self {
        Self::LineSegment(c)
    }
}

impl<T: FloatingPoint> From<Arc2D<T>> for Curve2D<T> {
    fn from(c: Arc2D<T>) -> Self {
        Self::Arc(c)
    }
}

impl<T: FloatingPoint> From<Spiral2D<T>> for Curve2D<T> {
    fn from(c: Spiral2D<T>) -> Self {
        Self::Spiral(c)
    }
}

impl<T: FloatingPoint> From<CubicCurve2D<T>> for Curve2D<T> {
    fn from(c: CubicCurve2D<T>) -> Self {
        Self::Cubic(c)
    }
}

impl<T: FloatingPoint> From<ParametricCubicCurve2D<T>> for Curve2D<T> {
    fn from(c: ParametricCubicCurve2D<T>) -> Self {
        Self::ParametricCubic(c)
    }
}
