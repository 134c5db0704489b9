//! Builder of the road-space model from an OpenDRIVE road record.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RoadspaceError;
use crate::misc::Reported;
use crate::opendrive;
use crate::roadspace::{
    AttributeList, Lane, LaneIdentifier, LaneSection, LaneSectionIdentifier, Road,
    RoadspaceIdentifier,
};

use super::curves::build_road_surfaces;
use super::functions::{
    build_lane_height_offsets, build_lane_offset, build_lane_width, sorted_strict,
};
use super::TransformerConfig;

/// Pre-check whether a road record is processable at all: the plan-view
/// lengths must sum up to the road length, and a lateral shape excludes a
/// simultaneous lane offset.
pub fn is_processable(road: &opendrive::Road, tolerance: f64) -> Result<(), RoadspaceError> {
    let length_sum: f64 = road.plan_view.iter().map(|geometry| geometry.length).sum();
    if (length_sum - road.length).abs() > tolerance {
        return Err(RoadspaceError::IllegalState(format!(
            "the plan view geometry lengths sum up to {} but the road length is {}",
            length_sum, road.length
        )));
    }
    if road.lateral_profile.contains_shape() && !road.lanes.lane_offset.is_empty() {
        return Err(RoadspaceError::IllegalState(
            "a road must not carry a lateral shape and a lane offset at the same time".into(),
        ));
    }
    Ok(())
}

/// Transforms one road record into the road-space model. Non-fatal input
/// repairs are accumulated as context messages on the result.
pub fn build_roadspace(
    road: &opendrive::Road,
    config: &TransformerConfig,
) -> Result<Reported<Road>, RoadspaceError> {
    is_processable(road, config.tolerance)?;
    let mut messages = Vec::new();

    let surfaces = build_road_surfaces(road, config)?;
    messages.extend(surfaces.messages);
    let (surface, surface_without_torsion) = surfaces.value;

    let lane_offset = build_lane_offset(&road.lanes.lane_offset)?;
    messages.extend(lane_offset.messages);
    let lane_offset = Arc::new(lane_offset.value);

    let roadspace_id = RoadspaceIdentifier::new(road.id.clone());
    let section_records = sorted_strict(
        &road.lanes.lane_section,
        |section| section.s,
        "lane section",
        &mut messages,
    );
    if section_records.is_empty() {
        return Err(RoadspaceError::IllegalState(
            "a road requires at least one lane section".into(),
        ));
    }

    let mut lane_sections = Vec::with_capacity(section_records.len());
    for (index, record) in section_records.iter().enumerate() {
        let section_id = LaneSectionIdentifier::new(index, record.s, roadspace_id.clone());
        lane_sections.push(build_lane_section(record, section_id, config, &mut messages)?);
    }

    let attributes = build_road_attributes(road, config);
    let road = Road::try_new(
        roadspace_id,
        surface,
        surface_without_torsion,
        lane_offset,
        lane_sections,
        attributes,
        config.tolerance,
    )?;
    Ok(Reported::new(road, messages))
}

fn build_lane_section(
    record: &opendrive::LaneSection,
    section_id: LaneSectionIdentifier,
    config: &TransformerConfig,
    messages: &mut Vec<String>,
) -> Result<LaneSection, RoadspaceError> {
    let mut lanes = BTreeMap::new();
    for lane_record in &record.left {
        if lane_record.id <= 0 {
            return Err(RoadspaceError::IllegalState(format!(
                "left lanes require positive ids, but found {}",
                lane_record.id
            )));
        }
        let lane = build_lane(lane_record, section_id.clone(), config, messages)?;
        lanes.insert(lane_record.id, lane);
    }
    for lane_record in &record.right {
        if lane_record.id >= 0 {
            return Err(RoadspaceError::IllegalState(format!(
                "right lanes require negative ids, but found {}",
                lane_record.id
            )));
        }
        let lane = build_lane(lane_record, section_id.clone(), config, messages)?;
        lanes.insert(lane_record.id, lane);
    }
    LaneSection::try_new(section_id, lanes)
}

fn build_lane(
    record: &opendrive::Lane,
    section_id: LaneSectionIdentifier,
    config: &TransformerConfig,
    messages: &mut Vec<String>,
) -> Result<Lane, RoadspaceError> {
    let width = build_lane_width(&record.width, config.tolerance)?;
    messages.extend(width.messages);

    let height_offsets = build_lane_height_offsets(&record.height)?;
    messages.extend(height_offsets.messages);
    let (inner_height_offset, outer_height_offset) = height_offsets.value;

    let prefix = &config.attributes_prefix;
    let mut attributes = AttributeList::new();
    attributes.push_text(format!("{}road_id", prefix), section_id.roadspace_id());
    attributes.push_integer(
        format!("{}lane_section_id", prefix),
        section_id.lane_section_id as i64,
    );
    attributes.push_integer(format!("{}lane_id", prefix), i64::from(record.id));
    attributes.push_text(format!("{}lane_type", prefix), record.lane_type.as_str());
    attributes.push_boolean(format!("{}level", prefix), record.level);

    Ok(Lane::new(
        LaneIdentifier::new(record.id, section_id),
        width.value,
        inner_height_offset,
        outer_height_offset,
        record.level,
        attributes,
    ))
}

fn build_road_attributes(road: &opendrive::Road, config: &TransformerConfig) -> AttributeList {
    let mut attributes = AttributeList::new();
    let prefix = &config.attributes_prefix;
    attributes.push_text(format!("{}road_id", prefix), road.id.clone());
    attributes.push_text(format!("{}traffic_rule", prefix), road.rule.as_str());
    attributes.push_double(format!("{}length", prefix), road.length);
    if let Some(junction) = &road.junction {
        attributes.push_text(format!("{}junction_id", prefix), junction.clone());
    }
    if config.crs_epsg != 0 {
        attributes.push_integer(format!("{}crs_epsg", prefix), i64::from(config.crs_epsg));
    }
    attributes
}
