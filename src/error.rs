use thiserror::Error;

/// Top-level error type for the loftline kernel.
#[derive(Debug, Error)]
pub enum LoftlineError {
    #[error(transparent)]
    Spline(#[from] SplineError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Sweep(#[from] SweepError),
}

/// Errors raised by spline construction and editing.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("control point index {index} is out of range (point count {count})")]
    OutOfRange { index: usize, count: usize },

    #[error("control point count {count} is not of the form 3k+1")]
    InvalidPointCount { count: usize },

    #[error("expected {expected} continuity modes, found {found}")]
    ModeCountMismatch { expected: usize, found: usize },

    #[error("zero-length velocity at t = {t}")]
    DegenerateTangent { t: f64 },
}

/// Errors raised by cross-section profile construction.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("line index list has odd length {count}")]
    OddIndexCount { count: usize },

    #[error("line index {index} exceeds vertex count {vertex_count}")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Errors raised by sweep-mesh generation.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep requires at least 2 rings, got {0}")]
    TooFewRings(usize),

    #[error("cross-section profile has zero edge length")]
    ZeroPerimeter,
}

/// Convenience type alias for results using [`LoftlineError`].
pub type Result<T> = std::result::Result<T, LoftlineError>;
