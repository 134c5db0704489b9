use std::ops::Bound;
use std::sync::Arc;

use crate::error::RoadspaceError;
use crate::function::{SectionedUnivariateFunction, StackedFunction, UnivariateFunction};
use crate::geometry::{
    fuzzy_point_list_equals, CompositeSurface3D, CurveOnParametricSurface3D,
    CurveRelativeParametricSurface3D, LinearRing3D, SamplePoints,
    SectionedCurveRelativeParametricSurface3D,
};
use crate::range::{HasDomain, Range};

use super::{
    AttributeList, Lane, LaneIdentifier, LaneSection, LateralFillerSurface, RoadspaceIdentifier,
};

/// Default step size for sampling curves and surfaces, in curve positions.
pub const DEFAULT_DISCRETIZATION_STEP: f64 = 0.7;

/// A road of the road-space model: the reconstructed road surfaces, the
/// lateral lane-reference offset and the lane sections.
///
/// The model is immutable after construction; all queries are pure functions
/// of it. Both surfaces and the lane offset are shared read-only with the
/// sectioned views derived from them.
#[derive(Debug, Clone)]
pub struct Road {
    id: RoadspaceIdentifier,
    surface: Arc<CurveRelativeParametricSurface3D<f64>>,
    surface_without_torsion: Arc<CurveRelativeParametricSurface3D<f64>>,
    lane_offset: Arc<UnivariateFunction<f64>>,
    lane_sections: Vec<LaneSection>,
    attributes: AttributeList,
    tolerance: f64,
}

impl Road {
    pub fn try_new(
        id: RoadspaceIdentifier,
        surface: Arc<CurveRelativeParametricSurface3D<f64>>,
        surface_without_torsion: Arc<CurveRelativeParametricSurface3D<f64>>,
        lane_offset: Arc<UnivariateFunction<f64>>,
        lane_sections: Vec<LaneSection>,
        attributes: AttributeList,
        tolerance: f64,
    ) -> Result<Self, RoadspaceError> {
        let domain = surface.domain();
        if domain != surface_without_torsion.domain() {
            return Err(RoadspaceError::IllegalState(
                "both road surfaces must share the same curve-position domain".into(),
            ));
        }
        if !domain.is_bounded() {
            return Err(RoadspaceError::IllegalState(
                "the road surface requires a bounded curve-position domain".into(),
            ));
        }
        if !lane_offset.domain().encloses(&domain) {
            return Err(RoadspaceError::IllegalState(
                "the lane offset must be defined on the whole road domain".into(),
            ));
        }
        if lane_sections.is_empty() {
            return Err(RoadspaceError::IllegalState(
                "a road requires at least one lane section".into(),
            ));
        }
        for (index, section) in lane_sections.iter().enumerate() {
            if section.id().lane_section_id != index {
                return Err(RoadspaceError::IllegalState(
                    "lane sections must be sorted by id, starting at 0 without gaps".into(),
                ));
            }
            if !domain.contains(section.curve_position_start()) {
                return Err(RoadspaceError::IllegalState(format!(
                    "lane section {} starts outside of the road domain",
                    index
                )));
            }
        }
        if lane_sections
            .windows(2)
            .any(|pair| pair[1].curve_position_start() <= pair[0].curve_position_start())
        {
            return Err(RoadspaceError::IllegalState(
                "lane section starts must be strictly ascending".into(),
            ));
        }
        Ok(Self {
            id,
            surface,
            surface_without_torsion,
            lane_offset,
            lane_sections,
            attributes,
            tolerance,
        })
    }

    pub fn id(&self) -> &RoadspaceIdentifier {
        &self.id
    }

    pub fn lane_sections(&self) -> &[LaneSection] {
        &self.lane_sections
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn curve_position_domain(&self) -> Range<f64> {
        self.surface.domain()
    }

    /// The curve-position ranges covered by the lane sections: closed ranges
    /// between adjacent section starts; the last section inherits the upper
    /// bound of the road domain.
    pub fn lane_section_curve_position_domains(&self) -> Vec<Range<f64>> {
        let count = self.lane_sections.len();
        self.lane_sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                if index + 1 < count {
                    Range::closed(
                        section.curve_position_start(),
                        self.lane_sections[index + 1].curve_position_start(),
                    )
                } else {
                    Range::new(
                        Bound::Included(section.curve_position_start()),
                        self.surface.domain().upper_bound(),
                    )
                }
            })
            .collect()
    }

    pub fn lane_section(&self, lane_section_id: usize) -> Result<&LaneSection, RoadspaceError> {
        self.lane_sections.get(lane_section_id).ok_or_else(|| {
            RoadspaceError::NotFound(format!(
                "lane section {} of road {}",
                lane_section_id, self.id.roadspace_id
            ))
        })
    }

    /// The lane section covering the curve position `s`. A boundary position
    /// belongs to two section domains and resolves to the earlier section.
    pub fn lane_section_at(&self, s: f64) -> Result<&LaneSection, RoadspaceError> {
        let index = self
            .lane_section_curve_position_domains()
            .iter()
            .position(|domain| domain.contains(s))
            .ok_or_else(|| {
                RoadspaceError::NotFound(format!(
                    "no lane section at curve position {} of road {}",
                    s, self.id.roadspace_id
                ))
            })?;
        Ok(&self.lane_sections[index])
    }

    fn lane(&self, lane_id: &LaneIdentifier) -> Result<&Lane, RoadspaceError> {
        let section = self.lane_section(lane_id.lane_section_id())?;
        if lane_id.lane_section_identifier != *section.id() {
            return Err(RoadspaceError::NotFound(format!(
                "lane section identifier of lane {} does not match road {}",
                lane_id.lane_id, self.id.roadspace_id
            )));
        }
        section.lane(lane_id.lane_id)
    }

    /// The road surface restricted to one lane section. Lanes on level use the
    /// torsion-free surface.
    fn sectioned_surface(
        &self,
        lane_section_id: usize,
        on_level: bool,
    ) -> Result<SectionedCurveRelativeParametricSurface3D<f64>, RoadspaceError> {
        let domains = self.lane_section_curve_position_domains();
        let domain = domains.get(lane_section_id).ok_or_else(|| {
            RoadspaceError::NotFound(format!(
                "lane section {} of road {}",
                lane_section_id, self.id.roadspace_id
            ))
        })?;
        let source = if on_level {
            self.surface_without_torsion.clone()
        } else {
            self.surface.clone()
        };
        Ok(SectionedCurveRelativeParametricSurface3D::try_new(
            source, *domain,
        )?)
    }

    /// The curve on the queried lane at the given boundary factor: 0 follows
    /// the inner boundary, 1 the outer boundary, 0.5 the center line.
    pub fn curve_on_lane(
        &self,
        lane_id: &LaneIdentifier,
        factor: f64,
    ) -> Result<CurveOnParametricSurface3D<f64>, RoadspaceError> {
        let lane = self.lane(lane_id)?;
        let section = self.lane_section(lane_id.lane_section_id())?;
        let section_domain =
            self.lane_section_curve_position_domains()[lane_id.lane_section_id()];

        let surface = self.sectioned_surface(lane_id.lane_section_id(), lane.level())?;
        let sectioned_lane_offset: UnivariateFunction<f64> =
            SectionedUnivariateFunction::try_new(self.lane_offset.clone(), section_domain)
                .map_err(RoadspaceError::from)?
                .into();
        let lane_lateral = section.lateral_lane_offset(lane_id.lane_id, factor)?;
        let lateral_offset: UnivariateFunction<f64> =
            StackedFunction::of_sum(vec![sectioned_lane_offset, lane_lateral])
                .map_err(RoadspaceError::from)?
                .into();
        let height_offset = section.lane_height_offset(lane_id.lane_id, factor)?;

        Ok(CurveOnParametricSurface3D::try_new(
            surface,
            lateral_offset,
            Some(height_offset),
        )?)
    }

    /// The boundary to the left in traffic direction: the outer boundary for
    /// left lanes, the inner boundary for right lanes.
    pub fn left_lane_boundary(
        &self,
        lane_id: &LaneIdentifier,
    ) -> Result<CurveOnParametricSurface3D<f64>, RoadspaceError> {
        let factor = if lane_id.is_left() { 1. } else { 0. };
        self.curve_on_lane(lane_id, factor)
    }

    /// The boundary to the right in traffic direction.
    pub fn right_lane_boundary(
        &self,
        lane_id: &LaneIdentifier,
    ) -> Result<CurveOnParametricSurface3D<f64>, RoadspaceError> {
        let factor = if lane_id.is_left() { 0. } else { 1. };
        self.curve_on_lane(lane_id, factor)
    }

    /// The lane surface between the left and right boundary, sampled at `step`
    /// and stitched into rings. Boundaries coinciding everywhere produce an
    /// empty surface.
    pub fn lane_surface(
        &self,
        lane_id: &LaneIdentifier,
        step: f64,
    ) -> Result<CompositeSurface3D<f64>, RoadspaceError> {
        let left = self.left_lane_boundary(lane_id)?.sample_points(step)?;
        let right = self.right_lane_boundary(lane_id)?.sample_points(step)?;
        let rings = LinearRing3D::of_two_point_lists(&left, &right, self.tolerance)?;
        Ok(CompositeSurface3D::of_rings(rings))
    }

    fn all_lane_identifiers(&self) -> Vec<LaneIdentifier> {
        self.lane_sections
            .iter()
            .flat_map(|section| {
                section
                    .lanes()
                    .keys()
                    .map(|lane_id| LaneIdentifier::new(*lane_id, section.id().clone()))
            })
            .collect()
    }

    /// All lane surfaces with their identifiers and attributes.
    pub fn all_lane_surfaces(
        &self,
        step: f64,
    ) -> Result<Vec<(LaneIdentifier, CompositeSurface3D<f64>, AttributeList)>, RoadspaceError>
    {
        self.all_lane_identifiers()
            .into_iter()
            .map(|lane_id| {
                let surface = self.lane_surface(&lane_id, step)?;
                let attributes = self.lane(&lane_id)?.attributes().clone();
                Ok((lane_id, surface, attributes))
            })
            .collect()
    }

    pub fn all_left_lane_boundaries(
        &self,
    ) -> Result<Vec<(LaneIdentifier, CurveOnParametricSurface3D<f64>, AttributeList)>, RoadspaceError>
    {
        self.all_lane_identifiers()
            .into_iter()
            .map(|lane_id| {
                let boundary = self.left_lane_boundary(&lane_id)?;
                let attributes = self.lane(&lane_id)?.attributes().clone();
                Ok((lane_id, boundary, attributes))
            })
            .collect()
    }

    pub fn all_right_lane_boundaries(
        &self,
    ) -> Result<Vec<(LaneIdentifier, CurveOnParametricSurface3D<f64>, AttributeList)>, RoadspaceError>
    {
        self.all_lane_identifiers()
            .into_iter()
            .map(|lane_id| {
                let boundary = self.right_lane_boundary(&lane_id)?;
                let attributes = self.lane(&lane_id)?.attributes().clone();
                Ok((lane_id, boundary, attributes))
            })
            .collect()
    }

    /// One curve per lane at the given boundary factor.
    pub fn all_curves_on_lanes(
        &self,
        factor: f64,
    ) -> Result<Vec<(LaneIdentifier, CurveOnParametricSurface3D<f64>, AttributeList)>, RoadspaceError>
    {
        self.all_lane_identifiers()
            .into_iter()
            .map(|lane_id| {
                let curve = self.curve_on_lane(&lane_id, factor)?;
                let attributes = self.lane(&lane_id)?.attributes().clone();
                Ok((lane_id, curve, attributes))
            })
            .collect()
    }

    /// Lateral filler surfaces within each lane section.
    ///
    /// Every lane is paired with its left neighbor, the lane at `lane_id + 1`
    /// skipping the absent center lane 0; the lane with the largest id has no
    /// left neighbor. Where the two adjacent boundaries coincide within the
    /// tolerance, no filler is produced.
    pub fn all_lateral_filler_surfaces(
        &self,
        step: f64,
    ) -> Result<Vec<LateralFillerSurface>, RoadspaceError> {
        let mut fillers = Vec::new();
        for section in &self.lane_sections {
            let lane_ids: Vec<i32> = section.lanes().keys().copied().collect();
            for &lane_id in &lane_ids[..lane_ids.len() - 1] {
                let neighbor_id = if lane_id == -1 { 1 } else { lane_id + 1 };
                let lane = LaneIdentifier::new(lane_id, section.id().clone());
                let neighbor = LaneIdentifier::new(neighbor_id, section.id().clone());

                let left = self.left_lane_boundary(&lane)?.sample_points(step)?;
                let right = self.right_lane_boundary(&neighbor)?.sample_points(step)?;
                if fuzzy_point_list_equals(&left, &right, self.tolerance) {
                    continue;
                }
                let rings = LinearRing3D::of_two_point_lists(&left, &right, self.tolerance)?;
                if rings.is_empty() {
                    continue;
                }
                fillers.push(LateralFillerSurface {
                    lane_id: lane,
                    neighbor_lane_id: neighbor,
                    surface: CompositeSurface3D::of_rings(rings),
                });
            }
        }
        Ok(fillers)
    }
}
