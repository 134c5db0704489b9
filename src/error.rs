use thiserror::Error;

/// Errors of the univariate function layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error("value {value} is outside of the function domain")]
    OutOfDomain { value: f64 },

    #[error("illegal function construction: {0}")]
    IllegalConstruction(String),
}

/// Errors of the 3D geometry layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate linear ring with {0} distinct vertices")]
    DegenerateRing(usize),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("curve relative range is not contained in the source domain")]
    RestrictionOutsideDomain,

    #[error("point sampling failed: {0}")]
    Sampling(String),

    #[error(transparent)]
    Function(#[from] FunctionError),
}

/// Top-level error type of the road-space model and its transformer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoadspaceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
