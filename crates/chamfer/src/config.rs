use anyhow::{Context, Result};
use chamfer_core::CutCornersParams;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Scene and tuning for a smoothing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Corner cutting parameters
    #[serde(default)]
    pub smoothing: CutCornersParams,

    /// Object used when none is given on the command line
    #[serde(default)]
    pub default_object: Option<String>,

    /// Objects that paths can be smoothed for
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,

    /// Static spherical obstacles
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,

    /// Speed limits used to time segments when checking a path
    #[serde(default)]
    pub motion: MotionConfig,
}

/// A moving object, approximated by a sphere around its configuration point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub name: String,

    /// Clearance radius
    #[serde(default = "default_radius")]
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub center: Vec<f64>,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,

    #[serde(default = "default_max_acceleration")]
    pub max_acceleration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            max_velocity: default_max_velocity(),
            max_acceleration: default_max_acceleration(),
        }
    }
}

fn default_radius() -> f64 {
    0.0
}

fn default_max_velocity() -> f64 {
    1.0
}

fn default_max_acceleration() -> f64 {
    1.0
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.smoothing
            .validate()
            .context("invalid [smoothing] section")?;

        for (i, object) in self.objects.iter().enumerate() {
            if object.name.is_empty() {
                anyhow::bail!("objects[{i}].name cannot be empty");
            }
            if !(object.radius >= 0.0 && object.radius.is_finite()) {
                anyhow::bail!("objects[{i}].radius must be finite and >= 0");
            }
            if self.objects[..i].iter().any(|o| o.name == object.name) {
                anyhow::bail!("duplicate object name {:?}", object.name);
            }
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if obstacle.center.is_empty() {
                anyhow::bail!("obstacles[{i}].center cannot be empty");
            }
            if !obstacle.center.iter().all(|c| c.is_finite()) {
                anyhow::bail!("obstacles[{i}].center must be finite");
            }
            if !(obstacle.radius >= 0.0 && obstacle.radius.is_finite()) {
                anyhow::bail!("obstacles[{i}].radius must be finite and >= 0");
            }
        }

        if !(self.motion.max_velocity > 0.0 && self.motion.max_velocity.is_finite()) {
            anyhow::bail!("motion.max_velocity must be finite and > 0");
        }
        if !(self.motion.max_acceleration > 0.0 && self.motion.max_acceleration.is_finite()) {
            anyhow::bail!("motion.max_acceleration must be finite and > 0");
        }

        if let Some(name) = &self.default_object {
            if !self.objects.iter().any(|o| &o.name == name) {
                anyhow::bail!("default_object {name:?} is not listed in objects");
            }
        }

        Ok(())
    }

    /// Pick the object to smooth for: an explicit name, the configured
    /// default, or the only object when there is exactly one.
    pub fn object_name<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str> {
        if let Some(name) = requested.or(self.default_object.as_deref()) {
            return Ok(name);
        }
        match self.objects.as_slice() {
            [only] => Ok(&only.name),
            [] => anyhow::bail!("no objects configured"),
            _ => anyhow::bail!("several objects configured, pass --object"),
        }
    }
}
