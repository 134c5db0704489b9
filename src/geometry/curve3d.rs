use std::sync::Arc;

use nalgebra::Point3;

use crate::error::GeometryError;
use crate::function::UnivariateFunction;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::{CompositeCurve2D, Pose3D, SamplePoints};

/// A curve in space given by a plan-view curve, an elevation function and an
/// optional torsion function rolling the frame about the tangent.
///
/// The constituents are shared read-only: a road surface and its torsion-free
/// twin reference the same plan view and elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve3D<T: FloatingPoint> {
    plan: Arc<CompositeCurve2D<T>>,
    elevation: Arc<UnivariateFunction<T>>,
    torsion: Option<Arc<UnivariateFunction<T>>>,
    domain: Range<T>,
    tolerance: T,
}

impl<T: FloatingPoint> Curve3D<T> {
    pub fn try_new(
        plan: Arc<CompositeCurve2D<T>>,
        elevation: Arc<UnivariateFunction<T>>,
        torsion: Option<Arc<UnivariateFunction<T>>>,
        tolerance: T,
    ) -> Result<Self, GeometryError> {
        let mut domain = plan
            .domain()
            .intersection(&elevation.domain())
            .ok_or_else(|| {
                GeometryError::Degenerate(
                    "the plan view and elevation domains do not overlap".into(),
                )
            })?;
        if let Some(torsion) = &torsion {
            domain = domain.intersection(&torsion.domain()).ok_or_else(|| {
                GeometryError::Degenerate(
                    "the torsion domain does not overlap the curve domain".into(),
                )
            })?;
        }
        Ok(Self {
            plan,
            elevation,
            torsion,
            domain,
            tolerance,
        })
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Pose at the curve position `s`, evaluated fuzzily at the domain edges.
    /// The cross-section plane stays vertical: elevation only lifts the pose,
    /// torsion only rolls it.
    pub fn pose_at(&self, s: T) -> Result<Pose3D<T>, GeometryError> {
        let planar = self.plan.pose_at_fuzzy(s, self.tolerance)?;
        let z = self.elevation.value_fuzzy(s, self.tolerance)?;
        let roll = match &self.torsion {
            Some(torsion) => torsion.value_fuzzy(s, self.tolerance)?,
            None => T::zero(),
        };
        Ok(Pose3D::from_planar(&planar, z, roll))
    }

    pub fn point_at(&self, s: T) -> Result<Point3<T>, GeometryError> {
        Ok(self.pose_at(s)?.position)
    }
}

impl<T: FloatingPoint> HasDomain<T> for Curve3D<T> {
    fn domain(&self) -> Range<T> {
        self.domain
    }
}

impl<T: FloatingPoint> SamplePoints<T> for Curve3D<T> {
    fn sample_points(&self, step: T) -> Result<Vec<Point3<T>>, GeometryError> {
        let stations = self.domain.discretize(step).ok_or_else(|| {
            GeometryError::Sampling("cannot discretize an unbounded curve domain".into())
        })?;
        stations.into_iter().map(|s| self.point_at(s)).collect()
    }
}
