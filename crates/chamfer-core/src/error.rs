use thiserror::Error;

/// Error type returned by collaborators (samplers and clearance oracles).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("cutoff ratio {ratio} must be > 0 and <= 0.5")]
    CutoffRatio { ratio: f64 },
    #[error("at least one cutoff ratio is required")]
    NoCutoffRatios,
    #[error("angle threshold {angle} must be > 0 and < pi")]
    AngleThreshold { angle: f64 },
    #[error("distance threshold {distance} must be finite and >= 0")]
    DistanceThreshold { distance: f64 },
    #[error("step resolution {resolution} must be finite and > 0")]
    StepResolution { resolution: f64 },
    #[error("waypoint {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    #[error("object {id:?} not found")]
    NotFound { id: String },
    /// The sampler could not materialize a candidate cut.
    #[error("sampler failed: {0}")]
    Sampler(#[source] BoxError),
    /// The clearance oracle could not evaluate a candidate cut.
    #[error("clearance check failed: {0}")]
    Oracle(#[source] BoxError),
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
