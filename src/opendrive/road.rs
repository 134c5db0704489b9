use super::RoadLanes;

/// A road record: reference-line description plus the lane model.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub id: String,
    /// Total length of the reference line.
    pub length: f64,
    /// Junction id, if the road belongs to one.
    pub junction: Option<String>,
    pub rule: TrafficRule,
    pub plan_view: Vec<PlanViewGeometry>,
    pub elevation_profile: Vec<ElevationEntry>,
    pub lateral_profile: LateralProfile,
    pub lanes: RoadLanes,
}

/// Driving side of the road. Unknown rules degrade to right-hand traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficRule {
    #[default]
    RightHandTraffic,
    LeftHandTraffic,
}

impl TrafficRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RightHandTraffic => "RHT",
            Self::LeftHandTraffic => "LHT",
        }
    }
}

/// One plan-view geometry piece, positioned by its start pose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanViewGeometry {
    /// Curve position of the piece along the reference line.
    pub s: f64,
    pub x: f64,
    pub y: f64,
    /// Start heading in radians.
    pub hdg: f64,
    pub length: f64,
    pub content: PlanViewGeometryContent,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanViewGeometryContent {
    Line,
    Spiral {
        curvature_start: f64,
        curvature_end: f64,
    },
    Arc {
        curvature: f64,
    },
    Poly3 {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    ParamPoly3 {
        a_u: f64,
        b_u: f64,
        c_u: f64,
        d_u: f64,
        a_v: f64,
        b_v: f64,
        c_v: f64,
        d_v: f64,
        /// True for the normalized parameter range, false for arc length.
        normalized: bool,
    },
}

/// Elevation of the reference line as a cubic polynomial in `s - s_start`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationEntry {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ElevationEntry {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }
}

/// Superelevation and lateral shape of the road surface.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LateralProfile {
    pub superelevation: Vec<SuperelevationEntry>,
    pub shape: Vec<ShapeEntry>,
}

impl LateralProfile {
    pub fn contains_shape(&self) -> bool {
        !self.shape.is_empty()
    }
}

/// Superelevation angle (roll about the reference-line tangent) as a cubic
/// polynomial in `s - s_start`, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperelevationEntry {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl SuperelevationEntry {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }
}

/// One entry of the lateral road shape: a height polynomial over `t - t_start`
/// for the lateral cut at curve position `s`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeEntry {
    pub s: f64,
    pub t: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ShapeEntry {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }
}
