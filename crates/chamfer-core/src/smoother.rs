//! Corner cutting for already-planned waypoint paths.
//!
//! Every interior waypoint whose direction change is at least
//! `angle_threshold` is a candidate for a chamfer: the corner is replaced by
//! two points pulled back along the adjacent segments, joined by a straight
//! line. Cutoff ratios are tried from the largest down. A ratio is only
//! accepted if it saves at least `distance_threshold` of travel and the
//! clearance oracle approves the sampled cut; the first ratio to fail the
//! saving test ends the search for that corner, since smaller ratios save
//! strictly less.
//!
//! Corners are evaluated independently against the input path. Cuts that
//! were accepted earlier never influence the angle or saving computed for a
//! later corner.

use crate::{
    collaborators::{ClearanceOracle, Collaborators, ObjectRegistry},
    error::{Error, ParameterError, Result},
    params::CutCornersParams,
    sampler::{LinearSampler, SampleLimits},
    vector::{distance, dot, lerp, normalize, sub},
    waypoint::Waypoint,
};

/// Points closer than this are treated as the same output waypoint.
pub const COINCIDENT_TOLERANCE: f64 = 1e-9;

/// Replace sharp corners of `waypoints` with collision-free chamfers.
///
/// The first and last waypoints are returned untouched, and the resulting
/// path is never longer than the input. Parameters are validated before any
/// collaborator is consulted; registry, sampler, and oracle failures are
/// returned as-is and no partial path is produced.
pub fn cut_corners<R, O, S>(
    ctx: &Collaborators<'_, R, O, S>,
    object_id: &str,
    waypoints: &[Waypoint],
    params: &CutCornersParams,
) -> Result<Vec<Waypoint>>
where
    R: ObjectRegistry,
    O: ClearanceOracle<R::Handle>,
    S: LinearSampler,
{
    params.validate()?;
    let object = ctx.registry.resolve(object_id)?;

    let smoothed = if waypoints.len() <= 2 {
        waypoints.to_vec()
    } else {
        check_dimensions(waypoints)?;
        let cutter = CornerCutter {
            object: &object,
            oracle: ctx.oracle,
            sampler: ctx.sampler,
            ratios: params.sorted_ratios(),
            cos_threshold: params.angle_threshold.cos(),
            distance_threshold: params.distance_threshold,
            limits: SampleLimits::geometric(params.step_resolution),
        };
        cutter.smooth(waypoints)?
    };

    tracing::debug!(
        object_id,
        cutoff_ratios = ?params.cutoff_ratios,
        angle_threshold = params.angle_threshold,
        distance_threshold = params.distance_threshold,
        input = waypoints.len(),
        output = smoothed.len(),
        "cut corners"
    );
    Ok(smoothed)
}

fn check_dimensions(waypoints: &[Waypoint]) -> Result<()> {
    let expected = waypoints.first().map(Waypoint::dim).unwrap_or_default();
    match waypoints.iter().position(|w| w.dim() != expected) {
        Some(index) => Err(ParameterError::DimensionMismatch {
            index,
            expected,
            found: waypoints[index].dim(),
        }
        .into()),
        None => Ok(()),
    }
}

struct CornerCutter<'a, H, O, S> {
    object: &'a H,
    oracle: &'a O,
    sampler: &'a S,
    ratios: Vec<f64>,
    cos_threshold: f64,
    distance_threshold: f64,
    limits: SampleLimits,
}

impl<H, O, S> CornerCutter<'_, H, O, S>
where
    O: ClearanceOracle<H>,
    S: LinearSampler,
{
    fn smooth(&self, waypoints: &[Waypoint]) -> Result<Vec<Waypoint>> {
        let mut smoothed = Vec::with_capacity(waypoints.len() + 2);
        smoothed.extend(waypoints.first().cloned());

        for window in waypoints.windows(3) {
            let [prev, at, next] = window else {
                unreachable!("windows(3) yields three waypoints");
            };

            match self.cut(prev, at, next)? {
                Some((from, to)) => {
                    // with r = 0.5 the previous cut may already end here
                    if smoothed
                        .last()
                        .is_none_or(|last| distance(last, &from) > COINCIDENT_TOLERANCE)
                    {
                        smoothed.push(from);
                    }
                    smoothed.push(to);
                }
                None => smoothed.push(at.clone()),
            }
        }

        smoothed.extend(waypoints.last().cloned());
        Ok(smoothed)
    }

    /// Returns the accepted `(from, to)` pair for this corner, if any.
    fn cut(
        &self,
        prev: &Waypoint,
        at: &Waypoint,
        next: &Waypoint,
    ) -> Result<Option<(Waypoint, Waypoint)>> {
        if !self.is_sharp(prev, at, next) {
            return Ok(None);
        }

        for &r in &self.ratios {
            let from = lerp(at, prev, r);
            let to = lerp(at, next, r);

            let saved = distance(&from, at) + distance(at, &to) - distance(&from, &to);
            if saved < self.distance_threshold {
                break;
            }

            let sampled = self
                .sampler
                .sample(&from, &to, &self.limits)
                .map_err(Error::Sampler)?;

            if self
                .oracle
                .is_clear(self.object, &sampled)
                .map_err(Error::Oracle)?
            {
                return Ok(Some((from, to)));
            }
        }

        Ok(None)
    }

    fn is_sharp(&self, prev: &Waypoint, at: &Waypoint, next: &Waypoint) -> bool {
        // A zero-length neighbour segment has no direction. Such a corner is
        // deliberately kept as-is instead of being cut on a NaN angle.
        let (Some(dir_in), Some(dir_out)) = (normalize(&sub(at, prev)), normalize(&sub(next, at)))
        else {
            return false;
        };
        dot(&dir_in, &dir_out) <= self.cos_threshold
    }
}
