//! A static scene of spherical obstacles.
//!
//! Objects are treated as spheres centred on their configuration point, so a
//! sampled path is clear when every sample keeps the summed radii away from
//! every obstacle centre.

use crate::config::Config;
use chamfer_core::{
    BoxError, ClearanceOracle, Error, ObjectRegistry, Waypoint, vector::distance,
};
use std::collections::BTreeMap;

/// Handle for a registered object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    pub name: String,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Waypoint,
    pub radius: f64,
}

#[derive(Debug, Clone, Default)]
pub struct World {
    objects: BTreeMap<String, ObjectSpec>,
    obstacles: Vec<Sphere>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let mut world = Self::new();
        for object in &config.objects {
            world.add_object(&object.name, object.radius);
        }
        for obstacle in &config.obstacles {
            world.add_obstacle(obstacle.center.clone(), obstacle.radius);
        }
        world
    }

    pub fn add_object(&mut self, name: &str, radius: f64) -> &mut Self {
        self.objects.insert(
            name.to_string(),
            ObjectSpec {
                name: name.to_string(),
                radius,
            },
        );
        self
    }

    pub fn add_obstacle(&mut self, center: impl Into<Waypoint>, radius: f64) -> &mut Self {
        self.obstacles.push(Sphere {
            center: center.into(),
            radius,
        });
        self
    }

    fn point_is_clear(&self, object: &ObjectSpec, point: &Waypoint) -> Result<bool, BoxError> {
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if obstacle.center.dim() != point.dim() {
                return Err(format!(
                    "obstacle {i} has {} coordinates but the path has {}",
                    obstacle.center.dim(),
                    point.dim()
                )
                .into());
            }
            if distance(point, &obstacle.center) <= object.radius + obstacle.radius {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl ObjectRegistry for World {
    type Handle = ObjectSpec;

    fn resolve(&self, id: &str) -> chamfer_core::Result<ObjectSpec> {
        self.objects
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }
}

impl ClearanceOracle<ObjectSpec> for World {
    fn is_clear(&self, object: &ObjectSpec, path: &[Waypoint]) -> Result<bool, BoxError> {
        for point in path {
            if !self.point_is_clear(object, point)? {
                tracing::trace!(object = %object.name, ?point, "collision");
                return Ok(false);
            }
        }
        Ok(true)
    }
}
