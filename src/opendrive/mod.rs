//! Plain-data representation of validated OpenDRIVE records.
//!
//! The records mirror the subset of the OpenDRIVE road description consumed by
//! the road-space transformer: reference-line geometry, elevation and lateral
//! profiles, and the lane model. Schema binding and XML parsing are the
//! concern of an external reader.

pub mod lanes;
pub mod road;

pub use lanes::*;
pub use road::*;
