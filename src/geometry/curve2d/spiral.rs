use nalgebra::{Point2, Rotation2};

use crate::error::GeometryError;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::super::{fresnel, Pose2D};

/// A clothoid segment whose curvature changes linearly with arc length.
///
/// The segment is a window of the unit clothoid: evaluation offsets the
/// parameter so that the curvature at the segment start equals
/// `curvature_start`, then maps the window onto the start pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Spiral2D<T: FloatingPoint> {
    pose: Pose2D<T>,
    curvature_start: T,
    curvature_slope: T,
    domain: Range<T>,
}

impl<T: FloatingPoint> Spiral2D<T> {
    pub fn try_new(
        pose: Pose2D<T>,
        curvature_start: T,
        curvature_slope: T,
        domain: Range<T>,
    ) -> Result<Self, GeometryError> {
        if curvature_slope == T::zero() {
            return Err(GeometryError::Degenerate(
                "a spiral requires a non-zero curvature slope".into(),
            ));
        }
        Ok(Self {
            pose,
            curvature_start,
            curvature_slope,
            domain,
        })
    }

    pub(crate) fn pose_at_unchecked(&self, s: T) -> Pose2D<T> {
        let parameter_start = self.curvature_start / self.curvature_slope;
        let base = unit_clothoid_pose(self.curvature_slope, parameter_start);
        let target = unit_clothoid_pose(self.curvature_slope, parameter_start + s);

        let rotation = Rotation2::new(-base.heading);
        let local = Pose2D::new(
            Point2::from(rotation * (target.position - base.position)),
            target.heading - base.heading,
        );
        self.pose.transform_pose(&local)
    }
}

impl<T: FloatingPoint> HasDomain<T> for Spiral2D<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}

/// Pose on the clothoid with curvature `curvature_slope * u` at arc length `u`,
/// starting at the inflection point in the origin.
fn unit_clothoid_pose<T: FloatingPoint>(curvature_slope: T, u: T) -> Pose2D<T> {
    let scale = (T::pi() / curvature_slope.abs()).sqrt();
    let (c, s) = fresnel(u / scale);
    let heading = curvature_slope * u * u / T::from_f64(2.0).unwrap();
    Pose2D::new(
        Point2::new(scale * c, scale * s * curvature_slope.signum()),
        heading,
    )
}
