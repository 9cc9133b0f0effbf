//! Command line front end for the corner smoother: configuration, a static
//! obstacle scene, and path file handling.

use anyhow::{Context, Result};
use chamfer_core::{
    ClearanceOracle, Collaborators, LinearTrajectory, ObjectRegistry, TrapezoidSampler, Waypoint,
    cut_corners,
};

pub mod config;
pub mod path;
pub mod world;

use config::Config;
use world::World;

/// Smooth `waypoints` for an object of the configured scene.
pub fn smooth_path(
    config: &Config,
    object: Option<&str>,
    waypoints: &[Waypoint],
) -> Result<Vec<Waypoint>> {
    let object = config.object_name(object)?;
    let world = World::from_config(config);
    let ctx = Collaborators::new(&world, &world, &TrapezoidSampler);
    cut_corners(&ctx, object, waypoints, &config.smoothing)
        .with_context(|| format!("failed to smooth path for {object:?}"))
}

/// Clearance verdict for one segment of a path
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentReport {
    pub index: usize,
    pub length: f64,
    /// Time to traverse the segment under the configured motion limits
    pub duration: f64,
    /// Time into the segment at which the first colliding sample is reached
    pub blocked_at: Option<f64>,
}

impl SegmentReport {
    pub fn is_clear(&self) -> bool {
        self.blocked_at.is_none()
    }
}

/// Check every segment of `waypoints` against the configured scene.
pub fn check_path(
    config: &Config,
    object: Option<&str>,
    waypoints: &[Waypoint],
) -> Result<Vec<SegmentReport>> {
    let name = config.object_name(object)?;
    let world = World::from_config(config);
    let object = world.resolve(name)?;

    let mut reports = Vec::with_capacity(waypoints.len().saturating_sub(1));
    for (index, pair) in waypoints.windows(2).enumerate() {
        let trajectory = LinearTrajectory::new(
            pair[0].clone(),
            pair[1].clone(),
            config.motion.max_velocity,
            config.motion.max_acceleration,
        )
        .with_context(|| format!("failed to plan segment {index}"))?;
        let samples = trajectory
            .sample_timed(config.smoothing.step_resolution)
            .with_context(|| format!("failed to sample segment {index}"))?;

        let mut blocked_at = None;
        for (time, point) in &samples {
            let clear = world
                .is_clear(&object, std::slice::from_ref(point))
                .map_err(chamfer_core::Error::Oracle)
                .with_context(|| format!("failed to check segment {index}"))?;
            if !clear {
                blocked_at = Some(*time);
                break;
            }
        }

        reports.push(SegmentReport {
            index,
            length: trajectory.length(),
            duration: trajectory.duration(),
            blocked_at,
        });
    }
    Ok(reports)
}
