use std::sync::Arc;

use nalgebra::Point3;

use crate::error::GeometryError;
use crate::function::{out_of_domain, ShapeFunction, UnivariateFunction};
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::{Affine3D, Curve3D, SamplePoints};

/// A surface parameterised over `(s, t)` relative to a base curve: the point at
/// `(s, t)` is the base pose at `s`, moved laterally by `t` in the rolled
/// cross-section plane. An optional lateral shape adds height over `(s, t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRelativeParametricSurface3D<T: FloatingPoint> {
    base: Curve3D<T>,
    shape: Option<Arc<ShapeFunction<T>>>,
}

impl<T: FloatingPoint> CurveRelativeParametricSurface3D<T> {
    pub fn new(base: Curve3D<T>, shape: Option<Arc<ShapeFunction<T>>>) -> Self {
        Self { base, shape }
    }

    /// The curve-position domain; the lateral parameter is unbounded.
    pub fn domain(&self) -> Range<T> {
        self.base.domain()
    }

    pub fn tolerance(&self) -> T {
        self.base.tolerance()
    }

    /// Point at curve position `s` and lateral offset `t`, lifted by
    /// `height_offset` along the cross-section normal.
    pub fn point_at(&self, s: T, t: T, height_offset: T) -> Result<Point3<T>, GeometryError> {
        let pose = self.base.pose_at(s)?;
        let shape_height = match &self.shape {
            Some(shape) => shape.value_fuzzy(s, t, self.base.tolerance())?,
            None => T::zero(),
        };
        let affine = Affine3D::from_pose(&pose);
        Ok(affine.transform_point(&Point3::new(T::zero(), t, shape_height + height_offset)))
    }
}

/// Restriction of a curve-relative surface to a sub-range of curve positions,
/// re-parameterised to start at zero. The source surface is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionedCurveRelativeParametricSurface3D<T: FloatingPoint> {
    source: Arc<CurveRelativeParametricSurface3D<T>>,
    section_start: T,
    domain: Range<T>,
}

impl<T: FloatingPoint> SectionedCurveRelativeParametricSurface3D<T> {
    pub fn try_new(
        source: Arc<CurveRelativeParametricSurface3D<T>>,
        section: Range<T>,
    ) -> Result<Self, GeometryError> {
        let section_start = section
            .lower_endpoint()
            .ok_or(GeometryError::RestrictionOutsideDomain)?;
        if !source.domain().encloses(&section) {
            return Err(GeometryError::RestrictionOutsideDomain);
        }
        let domain = section.shift_to_origin();
        Ok(Self {
            source,
            section_start,
            domain,
        })
    }

    pub fn domain(&self) -> Range<T> {
        self.domain
    }

    pub fn tolerance(&self) -> T {
        self.source.tolerance()
    }

    pub fn point_at(&self, s: T, t: T, height_offset: T) -> Result<Point3<T>, GeometryError> {
        if !self.domain.fuzzy_contains(s, self.source.tolerance()) {
            return Err(out_of_domain(s).into());
        }
        self.source.point_at(self.section_start + s, t, height_offset)
    }
}

/// A curve on a sectioned surface, defined by a lateral-offset function and an
/// optional height-offset function over the curve position.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveOnParametricSurface3D<T: FloatingPoint> {
    surface: SectionedCurveRelativeParametricSurface3D<T>,
    lateral_offset: UnivariateFunction<T>,
    height_offset: Option<UnivariateFunction<T>>,
}

impl<T: FloatingPoint> CurveOnParametricSurface3D<T> {
    pub fn try_new(
        surface: SectionedCurveRelativeParametricSurface3D<T>,
        lateral_offset: UnivariateFunction<T>,
        height_offset: Option<UnivariateFunction<T>>,
    ) -> Result<Self, GeometryError> {
        if !lateral_offset.domain().encloses(&surface.domain()) {
            return Err(GeometryError::RestrictionOutsideDomain);
        }
        if let Some(height_offset) = &height_offset {
            if !height_offset.domain().encloses(&surface.domain()) {
                return Err(GeometryError::RestrictionOutsideDomain);
            }
        }
        Ok(Self {
            surface,
            lateral_offset,
            height_offset,
        })
    }

    pub fn domain(&self) -> Range<T> {
        self.surface.domain()
    }

    pub fn lateral_offset(&self) -> &UnivariateFunction<T> {
        &self.lateral_offset
    }

    pub fn height_offset(&self) -> Option<&UnivariateFunction<T>> {
        self.height_offset.as_ref()
    }

    pub fn point_at(&self, s: T) -> Result<Point3<T>, GeometryError> {
        let tolerance = self.surface.tolerance();
        let t = self.lateral_offset.value_fuzzy(s, tolerance)?;
        let height_offset = match &self.height_offset {
            Some(f) => f.value_fuzzy(s, tolerance)?,
            None => T::zero(),
        };
        self.surface.point_at(s, t, height_offset)
    }
}

impl<T: FloatingPoint> SamplePoints<T> for CurveOnParametricSurface3D<T> {
    fn sample_points(&self, step: T) -> Result<Vec<Point3<T>>, GeometryError> {
        let stations = self.surface.domain().discretize(step).ok_or_else(|| {
            GeometryError::Sampling("cannot discretize an unbounded surface domain".into())
        })?;
        stations.into_iter().map(|s| self.point_at(s)).collect()
    }
}
