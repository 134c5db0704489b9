use crate::error::FunctionError;
use crate::function::ConcatenationContainer;
use crate::misc::FloatingPoint;
use crate::range::{HasDomain, Range};

use super::super::Pose2D;
use super::Curve2D;

/// The plan view of a road: member curves arranged end-to-end along the curve
/// position, sharing the concatenation semantics of the function layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCurve2D<T: FloatingPoint> {
    container: ConcatenationContainer<T, Curve2D<T>>,
}

impl<T: FloatingPoint> CompositeCurve2D<T> {
    pub fn try_new(members: Vec<Curve2D<T>>, origin: T) -> Result<Self, FunctionError> {
        Ok(Self {
            container: ConcatenationContainer::try_new(members, origin)?,
        })
    }

    pub fn container(&self) -> &ConcatenationContainer<T, Curve2D<T>> {
        &self.container
    }

    pub fn pose_at(&self, s: T) -> Result<Pose2D<T>, FunctionError> {
        let (member, local) = self.container.strict_select_member(s)?;
        member.pose_at(local)
    }

    pub fn pose_at_fuzzy(&self, s: T, tolerance: T) -> Result<Pose2D<T>, FunctionError> {
        let (member, local) = self.container.fuzzy_select_member(s, tolerance)?;
        member.pose_at_fuzzy(local, tolerance)
    }
}

impl<T: FloatingPoint> HasDomain<T> for CompositeCurve2D<T> {
    fn domain(&self) -> Range<T> {
        self.container.domain()
    }
}
