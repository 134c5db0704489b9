pub mod curve2d;
pub mod curve3d;
pub mod fresnel;
pub mod pose;
pub mod ring;
pub mod solid;
pub mod surface;

pub use curve2d::*;
pub use curve3d::*;
pub use fresnel::*;
pub use pose::*;
pub use ring::*;
pub use solid::*;
pub use surface::*;

#[cfg(test)]
mod tests;

use nalgebra::Point3;

use crate::error::GeometryError;
use crate::misc::FloatingPoint;

/// Sampling a curve into an ordered global-coordinate point list at a fixed
/// step size. The implementations always include both curve end points.
pub trait SamplePoints<T: FloatingPoint> {
    fn sample_points(&self, step: T) -> Result<Vec<Point3<T>>, GeometryError>;
}
