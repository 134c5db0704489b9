use nalgebra::{IsometryMatrix3, Point2, Point3, Rotation2, Rotation3, Translation3, Vector3};

use crate::misc::FloatingPoint;

/// Position and heading in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D<T: FloatingPoint> {
    pub position: Point2<T>,
    pub heading: T,
}

impl<T: FloatingPoint> Pose2D<T> {
    pub fn new(position: Point2<T>, heading: T) -> Self {
        Self { position, heading }
    }

    pub fn identity() -> Self {
        Self::new(Point2::origin(), T::zero())
    }

    /// Interprets `local` in the frame of this pose and returns it globally.
    pub fn transform_pose(&self, local: &Pose2D<T>) -> Pose2D<T> {
        let rotation = Rotation2::new(self.heading);
        Pose2D::new(
            self.position + rotation * local.position.coords,
            self.heading + local.heading,
        )
    }
}

/// Position and orientation in space. The orientation is stored as heading
/// (about z), pitch (about y) and roll (about the tangent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose3D<T: FloatingPoint> {
    pub position: Point3<T>,
    pub heading: T,
    pub pitch: T,
    pub roll: T,
}

impl<T: FloatingPoint> Pose3D<T> {
    pub fn new(position: Point3<T>, heading: T, pitch: T, roll: T) -> Self {
        Self {
            position,
            heading,
            pitch,
            roll,
        }
    }

    pub fn identity() -> Self {
        Self::new(Point3::origin(), T::zero(), T::zero(), T::zero())
    }

    /// Lifts a planar pose to the given elevation and roll.
    pub fn from_planar(pose: &Pose2D<T>, z: T, roll: T) -> Self {
        Self::new(
            Point3::new(pose.position.x, pose.position.y, z),
            pose.heading,
            T::zero(),
            roll,
        )
    }

    pub fn rotation(&self) -> Rotation3<T> {
        Rotation3::from_euler_angles(self.roll, self.pitch, self.heading)
    }

    pub fn isometry(&self) -> IsometryMatrix3<T> {
        IsometryMatrix3::from_parts(Translation3::from(self.position.coords), self.rotation())
    }
}

/// An affine transform of 3D space, kept as a rigid isometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Affine3D<T: FloatingPoint> {
    isometry: IsometryMatrix3<T>,
}

impl<T: FloatingPoint> Affine3D<T> {
    pub fn identity() -> Self {
        Self {
            isometry: IsometryMatrix3::identity(),
        }
    }

    pub fn new(isometry: IsometryMatrix3<T>) -> Self {
        Self { isometry }
    }

    pub fn from_pose(pose: &Pose3D<T>) -> Self {
        Self::new(pose.isometry())
    }

    pub fn transform_point(&self, point: &Point3<T>) -> Point3<T> {
        self.isometry.transform_point(point)
    }

    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.isometry.transform_vector(vector)
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.isometry.inverse())
    }

    /// `self` applied after `other`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(self.isometry * other.isometry)
    }
}

/// An ordered list of affine transforms, applied first-to-last.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineSequence3D<T: FloatingPoint> {
    transforms: Vec<Affine3D<T>>,
}

impl<T: FloatingPoint> AffineSequence3D<T> {
    pub fn new(transforms: Vec<Affine3D<T>>) -> Self {
        Self { transforms }
    }

    pub fn push(&mut self, transform: Affine3D<T>) {
        self.transforms.push(transform);
    }

    /// Folds the sequence into a single transform applying the members
    /// first-to-last; identity when empty.
    pub fn fold(&self) -> Affine3D<T> {
        self.transforms
            .iter()
            .fold(Affine3D::identity(), |acc, t| t.compose(&acc))
    }
}
