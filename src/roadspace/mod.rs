pub mod attribute;
pub mod filler;
pub mod identifier;
pub mod lane;
pub mod lane_section;
pub mod road;

pub use attribute::*;
pub use filler::*;
pub use identifier::*;
pub use lane::*;
pub use lane_section::*;
pub use road::*;
