use crate::misc::DEFAULT_TOLERANCE;

/// Configuration of the OpenDRIVE to road-space transformer. Missing values
/// fall back to the defaults; there is no process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformerConfig {
    /// Tolerance for fuzzy comparisons and evaluations.
    pub tolerance: f64,
    /// Prefix prepended to the attribute keys carried over from the records.
    pub attributes_prefix: String,
    /// EPSG code of the coordinate reference system; 0 means unset.
    pub crs_epsg: u32,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            attributes_prefix: "opendrive_".to_string(),
            crs_epsg: 0,
        }
    }
}
