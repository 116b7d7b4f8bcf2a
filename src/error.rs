use thiserror::Error;

/// Top-level error type for the archipelago geometry kernel.
#[derive(Debug, Error)]
pub enum ArchipelagoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Island(#[from] IslandError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while building or looking up islands.
#[derive(Debug, Error)]
pub enum IslandError {
    #[error("an island needs at least one point")]
    EmptyPointSet,

    #[error("expansion radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("island points must share one type: expected {expected}, found {found}")]
    MixedTypes { expected: i32, found: i32 },

    #[error("expansion radius {radius} is too large for the bend path")]
    RadiusTooLarge { radius: f64 },

    #[error("point not found in point set")]
    PointNotFound,

    #[error("island not found in store")]
    IslandNotFound,
}

/// Convenience type alias for results using [`ArchipelagoError`].
pub type Result<T> = std::result::Result<T, ArchipelagoError>;
