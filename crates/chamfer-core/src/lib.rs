//! Corner-cutting path smoother for n-dimensional waypoint paths.
//!
//! This crate has no I/O of its own. The object registry, clearance
//! oracle, and sampler it consults are passed in through
//! [`Collaborators`].

pub mod collaborators;
pub mod error;
pub mod params;
pub mod sampler;
pub mod smoother;
pub mod vector;
pub mod waypoint;

pub use collaborators::{ClearanceOracle, Collaborators, ObjectRegistry};
pub use error::{BoxError, Error, ParameterError, Result};
pub use params::CutCornersParams;
pub use sampler::{LinearSampler, LinearTrajectory, SampleError, SampleLimits, TrapezoidSampler};
pub use smoother::cut_corners;
pub use waypoint::Waypoint;
