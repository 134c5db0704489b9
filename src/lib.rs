//! Roadspace is a road-geometry reconstruction library for Rust.
//!
//! The library transforms OpenDRIVE road-network descriptions (parametric, curve-relative)
//! into a geometric road-space model whose lane surfaces and boundary curves are addressable
//! in 3D Euclidean space. It reconstructs the univariate functions that define reference
//! curves, superelevation, lane offset and per-lane width from piecewise polynomial records,
//! binds them to the lane-section / lane topology, and answers geometry queries such as
//! "the outer boundary curve of lane -2" or "the lateral filler surface between two lanes".
//!
//! A tolerance-based fuzzy numeric discipline runs through all evaluations, so queries at
//! lane-section boundaries and piecewise seams stay well defined.
//!
//! ## Example
//!
//! ```
//! use roadspace::prelude::*;
//!
//! fn main() {
//!     // A straight road of 100 m with one 3.5 m lane on each side of the reference line.
//!     let road = opendrive::Road {
//!         id: "1".to_string(),
//!         length: 100.0,
//!         plan_view: vec![opendrive::PlanViewGeometry {
//!             s: 0.0,
//!             x: 0.0,
//!             y: 0.0,
//!             hdg: 0.0,
//!             length: 100.0,
//!             content: opendrive::PlanViewGeometryContent::Line,
//!         }],
//!         lanes: opendrive::RoadLanes {
//!             lane_offset: vec![],
//!             lane_section: vec![opendrive::LaneSection {
//!                 s: 0.0,
//!                 left: vec![opendrive::Lane {
//!                     id: 1,
//!                     width: vec![opendrive::LaneWidthEntry {
//!                         a: 3.5,
//!                         ..Default::default()
//!                     }],
//!                     ..Default::default()
//!                 }],
//!                 center: vec![],
//!                 right: vec![opendrive::Lane {
//!                     id: -1,
//!                     width: vec![opendrive::LaneWidthEntry {
//!                         a: 3.5,
//!                         ..Default::default()
//!                     }],
//!                     ..Default::default()
//!                 }],
//!             }],
//!         },
//!         ..Default::default()
//!     };
//!
//!     let config = TransformerConfig::default();
//!     let roadspace = build_roadspace(&road, &config).unwrap().value;
//!
//!     // The outer boundary of the left lane runs 3.5 m to the left of the reference line.
//!     let lane = LaneIdentifier::new(1, roadspace.lane_sections()[0].id().clone());
//!     let boundary = roadspace.left_lane_boundary(&lane).unwrap();
//!     let point = boundary.point_at(50.0).unwrap();
//!     assert!((point.x - 50.0).abs() < 1e-9);
//!     assert!((point.y - 3.5).abs() < 1e-9);
//! }
//! ```

mod error;
mod function;
mod geometry;
mod misc;
pub mod opendrive;
mod range;
mod roadspace;
mod transformer;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::function::*;
    pub use crate::geometry::*;
    pub use crate::misc::*;
    pub use crate::opendrive;
    pub use crate::range::*;
    pub use crate::roadspace::*;
    pub use crate::transformer::*;
}
