#![cfg(feature = "serde")]

use roadspace::prelude::*;

#[test]
fn test_road_record_serialization() {
    let road = opendrive::Road {
        id: "1".to_string(),
        length: 100.,
        plan_view: vec![opendrive::PlanViewGeometry {
            s: 0.,
            x: 0.,
            y: 0.,
            hdg: 0.,
            length: 100.,
            content: opendrive::PlanViewGeometryContent::Spiral {
                curvature_start: 0.,
                curvature_end: 0.01,
            },
        }],
        lanes: opendrive::RoadLanes {
            lane_offset: vec![],
            lane_section: vec![opendrive::LaneSection {
                s: 0.,
                left: vec![opendrive::Lane {
                    id: 1,
                    lane_type: opendrive::LaneType::Driving,
                    width: vec![opendrive::LaneWidthEntry {
                        s_offset: 0.,
                        a: 3.5,
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                center: vec![],
                right: vec![opendrive::Lane {
                    id: -1,
                    ..Default::default()
                }],
            }],
        },
        ..Default::default()
    };

    let json = serde_json::to_string_pretty(&road).unwrap();
    let der: opendrive::Road = serde_json::from_str(&json).unwrap();
    assert_eq!(road, der);
}
