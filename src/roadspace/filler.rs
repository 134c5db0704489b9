use crate::geometry::CompositeSurface3D;

use super::LaneIdentifier;

/// A surface bridging the vertical discontinuity between a lane's left
/// boundary and the right boundary of its left neighbor.
#[derive(Debug, Clone, PartialEq)]
pub struct LateralFillerSurface {
    pub lane_id: LaneIdentifier,
    pub neighbor_lane_id: LaneIdentifier,
    pub surface: CompositeSurface3D<f64>,
}
