use std::collections::BTreeMap;

use crate::error::RoadspaceError;
use crate::function::{StackedFunction, UnivariateFunction};

use super::{Lane, LaneSectionIdentifier};

/// A lane section: the lane configuration over a contiguous range of curve
/// positions.
///
/// The lane map is keyed by the signed lane id. Id 0 is the center reference
/// lane and is never present; the remaining ids form an unbroken integer range
/// around it.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSection {
    id: LaneSectionIdentifier,
    lanes: BTreeMap<i32, Lane>,
}

impl LaneSection {
    pub fn try_new(
        id: LaneSectionIdentifier,
        lanes: BTreeMap<i32, Lane>,
    ) -> Result<Self, RoadspaceError> {
        if lanes.is_empty() {
            return Err(RoadspaceError::IllegalState(
                "a lane section requires at least one lane".into(),
            ));
        }
        if lanes.contains_key(&0) {
            return Err(RoadspaceError::IllegalState(
                "lane id 0 is the center lane and must not be part of the lane map".into(),
            ));
        }
        for (key, lane) in &lanes {
            if lane.id().lane_id != *key {
                return Err(RoadspaceError::IllegalState(format!(
                    "lane map key {} does not match the lane identifier {}",
                    key,
                    lane.id().lane_id
                )));
            }
            if lane.id().lane_section_identifier != id {
                return Err(RoadspaceError::IllegalState(format!(
                    "lane {} does not belong to lane section {}",
                    key, id.lane_section_id
                )));
            }
        }
        let min = *lanes.keys().next().unwrap();
        let max = *lanes.keys().last().unwrap();
        for lane_id in min..=max {
            if lane_id != 0 && !lanes.contains_key(&lane_id) {
                return Err(RoadspaceError::IllegalState(format!(
                    "lane ids must form a contiguous range, but {} is missing",
                    lane_id
                )));
            }
        }
        Ok(Self { id, lanes })
    }

    pub fn id(&self) -> &LaneSectionIdentifier {
        &self.id
    }

    /// Curve position at which this section starts.
    pub fn curve_position_start(&self) -> f64 {
        self.id.curve_relative_start
    }

    pub fn lanes(&self) -> &BTreeMap<i32, Lane> {
        &self.lanes
    }

    pub fn lane(&self, lane_id: i32) -> Result<&Lane, RoadspaceError> {
        self.lanes.get(&lane_id).ok_or_else(|| {
            RoadspaceError::NotFound(format!(
                "lane {} in lane section {} of road {}",
                lane_id,
                self.id.lane_section_id,
                self.id.roadspace_id()
            ))
        })
    }

    /// Lateral offset of a point on the queried lane from the lane reference,
    /// within this section.
    ///
    /// The widths of all lanes between the center and the queried lane add up
    /// to the inner boundary; `factor` blends from there across the queried
    /// lane's width (0 inner boundary, 1 outer boundary). The sign of the lane
    /// id orients the result: left lanes offset to positive `t`, right lanes
    /// to negative `t`.
    pub fn lateral_lane_offset(
        &self,
        lane_id: i32,
        factor: f64,
    ) -> Result<UnivariateFunction<f64>, RoadspaceError> {
        let lane = self.lane(lane_id)?;
        let sign = f64::from(lane_id.signum());

        let mut members = Vec::with_capacity(lane_id.unsigned_abs() as usize);
        let mut weights = Vec::with_capacity(members.capacity());
        for inner in 1..lane_id.abs() {
            let inner_lane = self.lane(inner * lane_id.signum())?;
            members.push(inner_lane.width().clone());
            weights.push(sign);
        }
        members.push(lane.width().clone());
        weights.push(sign * factor);

        Ok(StackedFunction::try_new(members, weights)
            .map_err(RoadspaceError::from)?
            .into())
    }

    /// Vertical offset of a point on the queried lane: the inner and outer
    /// border offsets mixed by `factor`.
    pub fn lane_height_offset(
        &self,
        lane_id: i32,
        factor: f64,
    ) -> Result<UnivariateFunction<f64>, RoadspaceError> {
        let lane = self.lane(lane_id)?;
        let members = vec![
            lane.inner_height_offset().clone(),
            lane.outer_height_offset().clone(),
        ];
        let weights = vec![1. - factor, factor];
        Ok(StackedFunction::try_new(members, weights)
            .map_err(RoadspaceError::from)?
            .into())
    }
}
