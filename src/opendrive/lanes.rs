/// The lane model of a road: the lateral offset of the lane reference and the
/// lane sections along the reference line.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadLanes {
    pub lane_offset: Vec<LaneOffsetEntry>,
    pub lane_section: Vec<LaneSection>,
}

/// Lateral offset of the lane reference from the road reference line as a
/// cubic polynomial in `s - s_start`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneOffsetEntry {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LaneOffsetEntry {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }
}

/// A lane section: the lane configuration over a contiguous range of curve
/// positions, starting at `s`. Left lanes carry positive ids, right lanes
/// negative ids; the center lane 0 separates the two.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneSection {
    pub s: f64,
    pub left: Vec<Lane>,
    pub center: Vec<Lane>,
    pub right: Vec<Lane>,
}

/// A lane within a lane section.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub id: i32,
    pub lane_type: LaneType,
    /// Lanes on level keep the road surface without superelevation torsion.
    pub level: bool,
    pub width: Vec<LaneWidthEntry>,
    pub height: Vec<LaneHeightEntry>,
}

/// Lane width as a cubic polynomial in `s_offset` relative to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneWidthEntry {
    /// Start position relative to the lane-section start.
    pub s_offset: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LaneWidthEntry {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }
}

/// Vertical offset of the lane surface at its inner and outer border.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneHeightEntry {
    /// Start position relative to the lane-section start.
    pub s_offset: f64,
    pub inner: f64,
    pub outer: f64,
}

/// Purpose of a lane. Unknown types degrade to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneType {
    #[default]
    None,
    Driving,
    Stop,
    Shoulder,
    Biking,
    Sidewalk,
    Border,
    Restricted,
    Parking,
    Median,
    Entry,
    Exit,
    OffRamp,
    OnRamp,
}

impl LaneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Driving => "driving",
            Self::Stop => "stop",
            Self::Shoulder => "shoulder",
            Self::Biking => "biking",
            Self::Sidewalk => "sidewalk",
            Self::Border => "border",
            Self::Restricted => "restricted",
            Self::Parking => "parking",
            Self::Median => "median",
            Self::Entry => "entry",
            Self::Exit => "exit",
            Self::OffRamp => "offRamp",
            Self::OnRamp => "onRamp",
        }
    }
}
