use crate::function::UnivariateFunction;

use super::{AttributeList, LaneIdentifier};

/// A lane of a lane section, described by its width and vertical border
/// offsets over the curve position relative to the lane-section start.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    id: LaneIdentifier,
    width: UnivariateFunction<f64>,
    inner_height_offset: UnivariateFunction<f64>,
    outer_height_offset: UnivariateFunction<f64>,
    level: bool,
    attributes: AttributeList,
}

impl Lane {
    pub fn new(
        id: LaneIdentifier,
        width: UnivariateFunction<f64>,
        inner_height_offset: UnivariateFunction<f64>,
        outer_height_offset: UnivariateFunction<f64>,
        level: bool,
        attributes: AttributeList,
    ) -> Self {
        Self {
            id,
            width,
            inner_height_offset,
            outer_height_offset,
            level,
            attributes,
        }
    }

    pub fn id(&self) -> &LaneIdentifier {
        &self.id
    }

    pub fn width(&self) -> &UnivariateFunction<f64> {
        &self.width
    }

    pub fn inner_height_offset(&self) -> &UnivariateFunction<f64> {
        &self.inner_height_offset
    }

    pub fn outer_height_offset(&self) -> &UnivariateFunction<f64> {
        &self.outer_height_offset
    }

    /// Lanes on level ignore the superelevation torsion of the road surface.
    pub fn level(&self) -> bool {
        self.level
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }
}
