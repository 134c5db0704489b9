use nalgebra::Point2;

use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::super::Pose2D;

/// A straight segment starting at its pose and running along the heading.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment2D<T: FloatingPoint> {
    pose: Pose2D<T>,
    domain: Range<T>,
}

impl<T: FloatingPoint> LineSegment2D<T> {
    pub fn new(pose: Pose2D<T>, domain: Range<T>) -> Self {
        Self { pose, domain }
    }

    pub(crate) fn pose_at_unchecked(&self, s: T) -> Pose2D<T> {
        self.pose
            .transform_pose(&Pose2D::new(Point2::new(s, T::zero()), T::zero()))
    }
}

impl<T: FloatingPoint> HasDomain<T> for LineSegment2D<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}
