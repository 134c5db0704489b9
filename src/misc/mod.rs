pub mod floating_point;
pub mod fuzzy;
pub mod report;

pub use floating_point::*;
pub use fuzzy::*;
pub use report::*;
