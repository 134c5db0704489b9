use approx::assert_relative_eq;

use crate::error::RoadspaceError;
use crate::opendrive::{
    ElevationEntry, Lane, LaneHeightEntry, LaneOffsetEntry, LaneSection, LaneWidthEntry,
    LateralProfile, PlanViewGeometry, PlanViewGeometryContent, Road, RoadLanes, ShapeEntry,
};
use crate::range::HasDomain;
use crate::roadspace::AttributeValue;

use super::{
    build_lane_height_offsets, build_lane_offset, build_lane_width, build_plan_view,
    build_roadspace, build_shape, is_processable, TransformerConfig,
};

const EPS: f64 = 1e-7;

fn line_geometry(s: f64, x: f64, length: f64) -> PlanViewGeometry {
    PlanViewGeometry {
        s,
        x,
        y: 0.,
        hdg: 0.,
        length,
        content: PlanViewGeometryContent::Line,
    }
}

fn width_entry(s_offset: f64, a: f64) -> LaneWidthEntry {
    LaneWidthEntry {
        s_offset,
        a,
        ..Default::default()
    }
}

fn lane(id: i32, width: f64) -> Lane {
    Lane {
        id,
        width: vec![width_entry(0., width)],
        ..Default::default()
    }
}

fn single_section_road(length: f64) -> Road {
    Road {
        id: "1".to_string(),
        length,
        plan_view: vec![line_geometry(0., 0., length)],
        lanes: RoadLanes {
            lane_offset: vec![],
            lane_section: vec![LaneSection {
                s: 0.,
                left: vec![lane(1, 3.5)],
                center: vec![],
                right: vec![lane(-1, 3.5)],
            }],
        },
        ..Default::default()
    }
}

#[test]
fn roads_with_a_plan_view_length_mismatch_are_not_processable() {
    let mut road = single_section_road(100.);
    road.plan_view = vec![line_geometry(0., 0., 99.5)];
    assert!(matches!(
        is_processable(&road, EPS),
        Err(RoadspaceError::IllegalState(_))
    ));
    assert!(matches!(
        build_roadspace(&road, &TransformerConfig::default()),
        Err(RoadspaceError::IllegalState(_))
    ));
}

#[test]
fn simultaneous_shape_and_lane_offset_are_not_processable() {
    let mut road = single_section_road(100.);
    road.lateral_profile = LateralProfile {
        superelevation: vec![],
        shape: vec![ShapeEntry {
            s: 0.,
            t: -5.,
            a: 0.1,
            ..Default::default()
        }],
    };
    road.lanes.lane_offset = vec![LaneOffsetEntry {
        s: 0.,
        a: 0.5,
        ..Default::default()
    }];
    assert!(matches!(
        is_processable(&road, EPS),
        Err(RoadspaceError::IllegalState(_))
    ));

    road.lanes.lane_offset.clear();
    assert!(is_processable(&road, EPS).is_ok());
}

#[test]
fn empty_piecewise_records_build_zero_functions() {
    let lane_offset = build_lane_offset(&[]).unwrap();
    assert!(lane_offset.messages.is_empty());
    assert_eq!(lane_offset.value.value(25.).unwrap(), 0.);

    let width = build_lane_width(&[], EPS).unwrap();
    assert_eq!(width.value.value(10.).unwrap(), 0.);

    let (inner, outer) = build_lane_height_offsets(&[]).unwrap().value;
    assert_eq!(inner.value(3.).unwrap(), 0.);
    assert_eq!(outer.value(3.).unwrap(), 0.);
}

#[test]
fn duplicated_width_entries_are_removed_with_a_report() {
    let entries = [
        width_entry(0., 3.0),
        width_entry(10., 3.5),
        width_entry(10., 9.9),
        width_entry(20., 3.25),
    ];
    let built = build_lane_width(&entries, EPS).unwrap();
    assert_eq!(built.messages.len(), 1);
    assert!(built.messages[0].starts_with("Removing width entries"));

    // the first of the two equal-key entries wins
    assert_relative_eq!(built.value.value(15.).unwrap(), 3.5);
    assert_relative_eq!(built.value.value(25.).unwrap(), 3.25);
}

#[test]
fn late_first_width_entries_default_to_zero_width_before() {
    let built = build_lane_width(&[width_entry(5., 3.5)], EPS).unwrap();
    assert_eq!(built.messages.len(), 1);
    assert_relative_eq!(built.value.value(2.).unwrap(), 0.);
    assert_relative_eq!(built.value.value(5.).unwrap(), 3.5);
}

#[test]
fn unsorted_records_build_the_same_function_as_sorted_ones() {
    let sorted = [width_entry(0., 3.0), width_entry(10., 3.5)];
    let unsorted = [width_entry(10., 3.5), width_entry(0., 3.0)];
    let a = build_lane_width(&sorted, EPS).unwrap();
    let b = build_lane_width(&unsorted, EPS).unwrap();
    assert_eq!(a.value, b.value);
}

#[test]
fn lane_height_offsets_become_step_functions() {
    let entries = [
        LaneHeightEntry {
            s_offset: 5.,
            inner: 0.1,
            outer: 0.2,
        },
        LaneHeightEntry {
            s_offset: 20.,
            inner: 0.3,
            outer: 0.4,
        },
    ];
    let built = build_lane_height_offsets(&entries).unwrap();
    // the first entry is extended back to the lane-section start
    assert_eq!(built.messages.len(), 1);
    let (inner, outer) = built.value;
    assert_relative_eq!(inner.value(0.).unwrap(), 0.1);
    assert_relative_eq!(inner.value(19.).unwrap(), 0.1);
    assert_relative_eq!(inner.value(20.).unwrap(), 0.3);
    assert_relative_eq!(outer.value(0.).unwrap(), 0.2);
    assert_relative_eq!(outer.value(100.).unwrap(), 0.4);
}

#[test]
fn shape_entries_are_grouped_by_curve_position() {
    let entries = [
        ShapeEntry {
            s: 0.,
            t: -5.,
            a: 0.1,
            ..Default::default()
        },
        ShapeEntry {
            s: 0.,
            t: 0.,
            a: 0.2,
            ..Default::default()
        },
        ShapeEntry {
            s: 50.,
            t: -5.,
            a: 0.3,
            ..Default::default()
        },
    ];
    let shape = build_shape(&entries).unwrap().unwrap().value;
    assert_eq!(shape.cuts().len(), 2);
    assert_relative_eq!(shape.value_fuzzy(0., -2., EPS).unwrap(), 0.1);
    assert_relative_eq!(shape.value_fuzzy(0., 1., EPS).unwrap(), 0.2);
    assert_relative_eq!(shape.value_fuzzy(60., 0., EPS).unwrap(), 0.3);

    assert!(build_shape(&[]).unwrap().is_none());
}

#[test]
fn plan_view_drops_zero_length_geometry() {
    let geometries = [
        line_geometry(0., 0., 50.),
        line_geometry(50., 50., 0.),
        line_geometry(50., 50., 50.),
    ];
    let built = build_plan_view(&geometries, EPS).unwrap();
    assert!(!built.messages.is_empty());
    assert_eq!(built.value.domain().length().unwrap(), 100.);
}

#[test]
fn degenerate_spirals_fall_back_to_simpler_geometry() {
    let mut geometry = line_geometry(0., 0., 100.);
    geometry.content = PlanViewGeometryContent::Spiral {
        curvature_start: 0.01,
        curvature_end: 0.01,
    };
    let built = build_plan_view(&[geometry], EPS).unwrap();
    assert_eq!(built.messages.len(), 1);
    // the arc fallback bends with the constant curvature
    let pose = built.value.pose_at(100.).unwrap();
    assert_relative_eq!(pose.heading, 1.0, epsilon = 1e-9);
}

#[test]
fn roadspace_attributes_carry_the_configured_prefix() {
    let road = single_section_road(100.);
    let config = TransformerConfig {
        crs_epsg: 32632,
        ..Default::default()
    };
    let built = build_roadspace(&road, &config).unwrap().value;

    assert_eq!(
        built.attributes().find("opendrive_road_id"),
        Some(&AttributeValue::Text("1".to_string()))
    );
    assert_eq!(
        built.attributes().find("opendrive_crs_epsg"),
        Some(&AttributeValue::Integer(32632))
    );
    let lane = built.lane_sections()[0].lane(1).unwrap();
    assert_eq!(
        lane.attributes().find("opendrive_lane_type"),
        Some(&AttributeValue::Text("none".to_string()))
    );
    assert_eq!(
        lane.attributes().find("opendrive_lane_id"),
        Some(&AttributeValue::Integer(1))
    );
    assert_eq!(
        lane.attributes().find("opendrive_level"),
        Some(&AttributeValue::Boolean(false))
    );
}

#[test]
fn elevation_records_lift_the_reference_line() {
    let mut road = single_section_road(100.);
    road.elevation_profile = vec![ElevationEntry {
        s: 0.,
        a: 10.,
        b: 0.1,
        ..Default::default()
    }];
    let built = build_roadspace(&road, &TransformerConfig::default())
        .unwrap()
        .value;
    let lane_id = crate::roadspace::LaneIdentifier::new(
        1,
        built.lane_sections()[0].id().clone(),
    );
    let curve = built.curve_on_lane(&lane_id, 0.).unwrap();
    let point = curve.point_at(50.).unwrap();
    assert_relative_eq!(point.z, 15., epsilon = 1e-9);
}
