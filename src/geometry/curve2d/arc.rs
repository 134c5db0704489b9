use nalgebra::Point2;

use crate::error::GeometryError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::super::Pose2D;

/// A circular arc with constant curvature, positive curving left.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc2D<T: FloatingPoint> {
    pose: Pose2D<T>,
    curvature: T,
    domain: Range<T>,
}

impl<T: FloatingPoint> Arc2D<T> {
    pub fn try_new(pose: Pose2D<T>, curvature: T, domain: Range<T>) -> Result<Self, GeometryError> {
        if curvature == T::zero() {
            return Err(GeometryError::Degenerate(
                "an arc requires a non-zero curvature".into(),
            ));
        }
        Ok(Self {
            pose,
            curvature,
            domain,
        })
    }

    pub(crate) fn pose_at_unchecked(&self, s: T) -> Pose2D<T> {
        let angle = self.curvature * s;
        let local = Pose2D::new(
            Point2::new(
                angle.sin() / self.curvature,
                (T::one() - angle.cos()) / self.curvature,
            ),
            angle,
        );
        self.pose.transform_pose(&local)
    }
}

impl<T: FloatingPoint> HasDomain<T> for Arc2D<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}
