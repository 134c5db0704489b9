/// Identifier of a road space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadspaceIdentifier {
    pub roadspace_id: String,
}

impl RoadspaceIdentifier {
    pub fn new(roadspace_id: impl Into<String>) -> Self {
        Self {
            roadspace_id: roadspace_id.into(),
        }
    }
}

/// Identifier of a lane section within a road space, carrying the curve
/// position at which the section starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneSectionIdentifier {
    pub lane_section_id: usize,
    pub curve_relative_start: f64,
    pub roadspace_identifier: RoadspaceIdentifier,
}

impl LaneSectionIdentifier {
    pub fn new(
        lane_section_id: usize,
        curve_relative_start: f64,
        roadspace_identifier: RoadspaceIdentifier,
    ) -> Self {
        Self {
            lane_section_id,
            curve_relative_start,
            roadspace_identifier,
        }
    }

    pub fn roadspace_id(&self) -> &str {
        &self.roadspace_identifier.roadspace_id
    }
}

/// Identifier of a lane within a lane section. Positive ids lie left of the
/// reference line, negative ids right of it; id 0 is the center reference lane
/// and never part of a lane map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneIdentifier {
    pub lane_id: i32,
    pub lane_section_identifier: LaneSectionIdentifier,
}

impl LaneIdentifier {
    pub fn new(lane_id: i32, lane_section_identifier: LaneSectionIdentifier) -> Self {
        Self {
            lane_id,
            lane_section_identifier,
        }
    }

    pub fn lane_section_id(&self) -> usize {
        self.lane_section_identifier.lane_section_id
    }

    pub fn roadspace_id(&self) -> &str {
        self.lane_section_identifier.roadspace_id()
    }

    pub fn is_left(&self) -> bool {
        self.lane_id > 0
    }

    pub fn is_right(&self) -> bool {
        self.lane_id < 0
    }
}
