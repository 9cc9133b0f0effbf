//! Straight-line trajectory sampling.
//!
//! A point-to-point move is modelled the same way a single toolhead move is:
//! a symmetric trapezoid made of accel, cruise and decel phases, each with a
//! start velocity and a constant (half) acceleration. When the segment is
//! too short to reach the velocity limit the cruise phase is dropped and the
//! profile becomes a triangle.
//!
//! The smoother only cares about geometry, so it samples with effectively
//! unbounded limits; the timing is still exposed for callers that want it.

use crate::{
    error::BoxError,
    vector::{add, distance, lerp, normalize, scale, sub},
    waypoint::Waypoint,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("endpoint dimensions differ: {from} vs {to}")]
    DimensionMismatch { from: usize, to: usize },
    #[error("endpoints must be finite")]
    NonFiniteEndpoint,
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidLimit { name: &'static str, value: f64 },
    #[error("sampling a segment of length {length} every {step_resolution} needs too many points")]
    TooManySamples { length: f64, step_resolution: f64 },
}

/// Upper bound on the points produced for a single segment.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Bounds handed to a [`LinearSampler`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleLimits {
    /// Maximum spacing between consecutive samples, in waypoint units.
    pub step_resolution: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
}

impl SampleLimits {
    /// Velocity/acceleration bound large enough to never shape the result.
    pub const UNCONSTRAINED: f64 = 1.0e9;

    /// Limits for purely geometric sampling.
    pub fn geometric(step_resolution: f64) -> Self {
        Self {
            step_resolution,
            max_velocity: Self::UNCONSTRAINED,
            max_acceleration: Self::UNCONSTRAINED,
        }
    }
}

/// Materializes the straight segment between two waypoints as a dense
/// sequence of points.
///
/// Implementations must be restartable: sampling the same segment twice
/// yields the same points.
pub trait LinearSampler {
    fn sample(
        &self,
        from: &Waypoint,
        to: &Waypoint,
        limits: &SampleLimits,
    ) -> Result<Vec<Waypoint>, BoxError>;
}

/// Default sampler backed by [`LinearTrajectory`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TrapezoidSampler;

impl LinearSampler for TrapezoidSampler {
    fn sample(
        &self,
        from: &Waypoint,
        to: &Waypoint,
        limits: &SampleLimits,
    ) -> Result<Vec<Waypoint>, BoxError> {
        let trajectory = LinearTrajectory::new(
            from.clone(),
            to.clone(),
            limits.max_velocity,
            limits.max_acceleration,
        )?;
        Ok(trajectory.sample(limits.step_resolution)?)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Phase {
    start_time: f64,
    duration: f64,
    start_v: f64,
    half_accel: f64,
    start_distance: f64,
}

impl Phase {
    fn distance(&self, local_time: f64) -> f64 {
        (self.start_v + self.half_accel * local_time) * local_time
    }

    fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    fn end_distance(&self) -> f64 {
        self.start_distance + self.distance(self.duration)
    }

    // Invert `distance` for a travelled distance inside this phase.
    fn local_time_at(&self, travelled: f64) -> f64 {
        if self.half_accel == 0.0 {
            if self.start_v > 0.0 {
                return travelled / self.start_v;
            }
            return 0.0;
        }
        let disc = (self.start_v * self.start_v + 4.0 * self.half_accel * travelled).max(0.0);
        let t = (disc.sqrt() - self.start_v) / (2.0 * self.half_accel);
        t.clamp(0.0, self.duration)
    }
}

/// A straight move between two waypoints with a trapezoidal velocity
/// profile.
#[derive(Clone, Debug)]
pub struct LinearTrajectory {
    from: Waypoint,
    to: Waypoint,
    axes_r: Waypoint,
    length: f64,
    phases: Vec<Phase>,
}

impl LinearTrajectory {
    pub fn new(
        from: Waypoint,
        to: Waypoint,
        max_velocity: f64,
        max_acceleration: f64,
    ) -> Result<Self, SampleError> {
        if from.dim() != to.dim() {
            return Err(SampleError::DimensionMismatch {
                from: from.dim(),
                to: to.dim(),
            });
        }
        if !from.is_finite() || !to.is_finite() {
            return Err(SampleError::NonFiniteEndpoint);
        }
        check_limit("max_velocity", max_velocity)?;
        check_limit("max_acceleration", max_acceleration)?;

        let length = distance(&from, &to);
        let axes_r = normalize(&sub(&to, &from))
            .unwrap_or_else(|| Waypoint::new(vec![0.0; from.dim()]));

        let mut phases = Vec::with_capacity(3);
        if length > 0.0 {
            let accel_d = max_velocity * max_velocity / (2.0 * max_acceleration);
            let (cruise_v, accel_d) = if 2.0 * accel_d <= length {
                (max_velocity, accel_d)
            } else {
                // too short to reach cruise speed
                ((max_acceleration * length).sqrt(), 0.5 * length)
            };
            let accel_t = cruise_v / max_acceleration;
            let cruise_d = length - 2.0 * accel_d;
            let cruise_t = cruise_d / cruise_v;

            let accel = Phase {
                start_time: 0.0,
                duration: accel_t,
                start_v: 0.0,
                half_accel: 0.5 * max_acceleration,
                start_distance: 0.0,
            };
            phases.push(accel);

            if cruise_t > 0.0 {
                phases.push(Phase {
                    start_time: accel.end_time(),
                    duration: cruise_t,
                    start_v: cruise_v,
                    half_accel: 0.0,
                    start_distance: accel_d,
                });
            }

            let cruise_end = phases.last().map(Phase::end_time).unwrap_or_default();
            phases.push(Phase {
                start_time: cruise_end,
                duration: accel_t,
                start_v: cruise_v,
                half_accel: -0.5 * max_acceleration,
                start_distance: accel_d + cruise_d,
            });
        }

        Ok(Self {
            from,
            to,
            axes_r,
            length,
            phases,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Total move time
    pub fn duration(&self) -> f64 {
        self.phases.last().map(Phase::end_time).unwrap_or_default()
    }

    /// Distance travelled along the segment at time `t` (clamped to the move).
    pub fn distance_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, self.duration());
        let Some(phase) = self
            .phases
            .iter()
            .find(|p| t < p.end_time())
            .or(self.phases.last())
        else {
            return 0.0;
        };
        let local = (t - phase.start_time).min(phase.duration);
        (phase.start_distance + phase.distance(local)).clamp(0.0, self.length)
    }

    pub fn position_at(&self, t: f64) -> Waypoint {
        add(&self.from, &scale(&self.axes_r, self.distance_at(t)))
    }

    fn time_at_distance(&self, d: f64) -> f64 {
        let Some(phase) = self
            .phases
            .iter()
            .find(|p| d <= p.end_distance())
            .or(self.phases.last())
        else {
            return 0.0;
        };
        phase.start_time + phase.local_time_at(d - phase.start_distance)
    }

    /// Points along the segment no further apart than `step_resolution`,
    /// including both endpoints exactly.
    pub fn sample(&self, step_resolution: f64) -> Result<Vec<Waypoint>, SampleError> {
        let intervals = self.intervals(step_resolution)?;
        if intervals == 0 {
            return Ok(vec![self.from.clone()]);
        }
        Ok((0..=intervals)
            .map(|k| lerp(&self.from, &self.to, k as f64 / intervals as f64))
            .collect())
    }

    /// Like [`Self::sample`], paired with the time each point is reached.
    pub fn sample_timed(&self, step_resolution: f64) -> Result<Vec<(f64, Waypoint)>, SampleError> {
        let intervals = self.intervals(step_resolution)?;
        if intervals == 0 {
            return Ok(vec![(0.0, self.from.clone())]);
        }
        Ok((0..=intervals)
            .map(|k| {
                let fraction = k as f64 / intervals as f64;
                let time = if k == intervals {
                    self.duration()
                } else {
                    self.time_at_distance(fraction * self.length)
                };
                (time, lerp(&self.from, &self.to, fraction))
            })
            .collect())
    }

    // Number of equal steps needed to keep samples within `step_resolution`;
    // zero for a degenerate segment.
    fn intervals(&self, step_resolution: f64) -> Result<usize, SampleError> {
        check_limit("step_resolution", step_resolution)?;
        if self.length == 0.0 {
            return Ok(0);
        }
        let intervals = (self.length / step_resolution).ceil().max(1.0);
        // `intervals + 1` points are produced
        if intervals >= MAX_SAMPLES as f64 {
            return Err(SampleError::TooManySamples {
                length: self.length,
                step_resolution,
            });
        }
        Ok(intervals as usize)
    }
}

fn check_limit(name: &'static str, value: f64) -> Result<(), SampleError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SampleError::InvalidLimit { name, value })
    }
}
