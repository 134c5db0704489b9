use nalgebra::Point3;

use crate::error::GeometryError;
use crate::function::UnivariateFunction;
use crate::misc::FloatingPoint;
use crate::range::HasDomain;

use super::{Affine3D, CompositeSurface3D, Curve3D, Polygon3D, Pose3D};

/// An axis-aligned box placed by a pose, standing on its base plane and
/// centered on the pose in the ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid3D<T: FloatingPoint> {
    pose: Pose3D<T>,
    length: T,
    width: T,
    height: T,
}

impl<T: FloatingPoint> Cuboid3D<T> {
    pub fn try_new(
        pose: Pose3D<T>,
        length: T,
        width: T,
        height: T,
    ) -> Result<Self, GeometryError> {
        if length <= T::zero() || width <= T::zero() || height <= T::zero() {
            return Err(GeometryError::Degenerate(
                "a cuboid requires positive dimensions".into(),
            ));
        }
        Ok(Self {
            pose,
            length,
            width,
            height,
        })
    }

    /// The six boundary faces.
    pub fn polygons(&self, tolerance: T) -> Result<Vec<Polygon3D<T>>, GeometryError> {
        let half = T::from_f64(0.5).unwrap();
        let x = self.length * half;
        let y = self.width * half;
        let z = self.height;
        let affine = Affine3D::from_pose(&self.pose);
        let corner = |cx: T, cy: T, cz: T| affine.transform_point(&Point3::new(cx, cy, cz));

        let faces = [
            // base and top
            vec![
                corner(-x, -y, T::zero()),
                corner(-x, y, T::zero()),
                corner(x, y, T::zero()),
                corner(x, -y, T::zero()),
            ],
            vec![
                corner(-x, -y, z),
                corner(x, -y, z),
                corner(x, y, z),
                corner(-x, y, z),
            ],
            // front and back
            vec![
                corner(x, -y, T::zero()),
                corner(x, y, T::zero()),
                corner(x, y, z),
                corner(x, -y, z),
            ],
            vec![
                corner(-x, -y, T::zero()),
                corner(-x, -y, z),
                corner(-x, y, z),
                corner(-x, y, T::zero()),
            ],
            // sides
            vec![
                corner(-x, y, T::zero()),
                corner(-x, y, z),
                corner(x, y, z),
                corner(x, y, T::zero()),
            ],
            vec![
                corner(-x, -y, T::zero()),
                corner(x, -y, T::zero()),
                corner(x, -y, z),
                corner(-x, -y, z),
            ],
        ];
        faces
            .into_iter()
            .map(|vertices| Polygon3D::try_new(vertices, tolerance))
            .collect()
    }

    pub fn surface(&self, tolerance: T) -> Result<CompositeSurface3D<T>, GeometryError> {
        Ok(CompositeSurface3D::new(self.polygons(tolerance)?))
    }
}

/// A vertical cylinder placed by a pose, approximated by a fixed number of
/// circumference slices.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder3D<T: FloatingPoint> {
    pose: Pose3D<T>,
    radius: T,
    height: T,
    slices: usize,
}

impl<T: FloatingPoint> Cylinder3D<T> {
    pub fn try_new(
        pose: Pose3D<T>,
        radius: T,
        height: T,
        slices: usize,
    ) -> Result<Self, GeometryError> {
        if radius <= T::zero() || height <= T::zero() {
            return Err(GeometryError::Degenerate(
                "a cylinder requires a positive radius and height".into(),
            ));
        }
        if slices < 3 {
            return Err(GeometryError::Degenerate(
                "a cylinder requires at least three slices".into(),
            ));
        }
        Ok(Self {
            pose,
            radius,
            height,
            slices,
        })
    }

    pub fn polygons(&self, tolerance: T) -> Result<Vec<Polygon3D<T>>, GeometryError> {
        let affine = Affine3D::from_pose(&self.pose);
        let tau = T::two_pi();
        let slice_count = T::from_usize(self.slices).unwrap();
        let rim: Vec<(T, T)> = (0..self.slices)
            .map(|i| {
                let angle = tau * T::from_usize(i).unwrap() / slice_count;
                (self.radius * angle.cos(), self.radius * angle.sin())
            })
            .collect();
        let bottom: Vec<Point3<T>> = rim
            .iter()
            .map(|(x, y)| affine.transform_point(&Point3::new(*x, *y, T::zero())))
            .collect();
        let top: Vec<Point3<T>> = rim
            .iter()
            .map(|(x, y)| affine.transform_point(&Point3::new(*x, *y, self.height)))
            .collect();

        let mut polygons = Vec::with_capacity(self.slices + 2);
        let mut base = bottom.clone();
        base.reverse();
        polygons.push(Polygon3D::try_new(base, tolerance)?);
        polygons.push(Polygon3D::try_new(top.clone(), tolerance)?);
        for i in 0..self.slices {
            let next = (i + 1) % self.slices;
            polygons.push(Polygon3D::try_new(
                vec![bottom[i], bottom[next], top[next], top[i]],
                tolerance,
            )?);
        }
        Ok(polygons)
    }

    pub fn surface(&self, tolerance: T) -> Result<CompositeSurface3D<T>, GeometryError> {
        Ok(CompositeSurface3D::new(self.polygons(tolerance)?))
    }
}

/// A solid swept along a reference curve: at each curve position a rectangular
/// cross-section of the given width and height, rotated into the local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricSweep3D<T: FloatingPoint> {
    reference: Curve3D<T>,
    width: UnivariateFunction<T>,
    height: UnivariateFunction<T>,
    step: T,
}

impl<T: FloatingPoint> ParametricSweep3D<T> {
    pub fn try_new(
        reference: Curve3D<T>,
        width: UnivariateFunction<T>,
        height: UnivariateFunction<T>,
        step: T,
    ) -> Result<Self, GeometryError> {
        if step <= T::zero() {
            return Err(GeometryError::Degenerate(
                "a sweep requires a positive step size".into(),
            ));
        }
        if !width.domain().encloses(&reference.domain())
            || !height.domain().encloses(&reference.domain())
        {
            return Err(GeometryError::RestrictionOutsideDomain);
        }
        Ok(Self {
            reference,
            width,
            height,
            step,
        })
    }

    /// The boundary surface of the sweep: four longitudinal strips plus the two
    /// end caps. Patches collapsing to fewer than three distinct vertices, as
    /// produced by zero-width stations, are skipped.
    pub fn surface(&self) -> Result<CompositeSurface3D<T>, GeometryError> {
        let tolerance = self.reference.tolerance();
        let stations = self.reference.domain().discretize(self.step).ok_or_else(|| {
            GeometryError::Sampling("cannot discretize an unbounded sweep domain".into())
        })?;

        let mut sections: Vec<[Point3<T>; 4]> = Vec::with_capacity(stations.len());
        let half = T::from_f64(0.5).unwrap();
        for s in stations {
            let pose = self.reference.pose_at(s)?;
            let affine = Affine3D::from_pose(&pose);
            let w = self.width.value_fuzzy(s, tolerance)? * half;
            let h = self.height.value_fuzzy(s, tolerance)?;
            sections.push([
                affine.transform_point(&Point3::new(T::zero(), -w, T::zero())),
                affine.transform_point(&Point3::new(T::zero(), w, T::zero())),
                affine.transform_point(&Point3::new(T::zero(), w, h)),
                affine.transform_point(&Point3::new(T::zero(), -w, h)),
            ]);
        }

        let mut patches = Vec::new();
        let mut push = |vertices: Vec<Point3<T>>| match Polygon3D::try_new(vertices, tolerance) {
            Ok(polygon) => {
                patches.push(polygon);
                Ok(())
            }
            Err(GeometryError::DegenerateRing(_)) => Ok(()),
            Err(error) => Err(error),
        };

        let first = sections.first().unwrap();
        push(first.to_vec())?;
        for pair in sections.windows(2) {
            let (near, far) = (&pair[0], &pair[1]);
            for k in 0..4 {
                let next = (k + 1) % 4;
                push(vec![near[k], near[next], far[next], far[k]])?;
            }
        }
        let last = sections.last().unwrap();
        let mut cap: Vec<Point3<T>> = last.to_vec();
        cap.reverse();
        push(cap)?;

        Ok(CompositeSurface3D::new(patches))
    }
}
