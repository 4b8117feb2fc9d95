use thiserror::Error;

/// Top-level error type for the Crease geometry kernel.
///
/// Geometric absence (parallel lines, a segment outside a polygon) is never
/// an error; the core reports it as `None`. These errors cover invalid input
/// at the typed boundary and operations that cannot produce a result.
#[derive(Debug, Error)]
pub enum CreaseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite coordinate in {what}")]
    NonFinite { what: &'static str },

    #[error("polygon needs at least {min} vertices, got {count}")]
    TooFewVertices { count: usize, min: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon is not convex")]
    NotConvex,
}

/// Errors related to geometric operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no convergence after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Convenience type alias for results using [`CreaseError`].
pub type Result<T> = std::result::Result<T, CreaseError>;
