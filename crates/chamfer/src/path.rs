//! Reading and writing waypoint paths as JSON arrays of coordinate arrays.

use anyhow::{Context, Result};
use chamfer_core::Waypoint;
use std::{fs, path::Path};

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Waypoint>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read path file {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse path file {}", path.display()))
}

pub fn parse(content: &str) -> Result<Vec<Waypoint>> {
    let waypoints: Vec<Waypoint> = serde_json::from_str(content)?;
    if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
        anyhow::bail!("waypoint {index} has non-finite coordinates");
    }
    Ok(waypoints)
}

/// Render a path as JSON, one waypoint per line.
pub fn render(waypoints: &[Waypoint]) -> Result<String> {
    let mut out = String::from("[");
    for (i, waypoint) in waypoints.iter().enumerate() {
        out.push_str(if i == 0 { "\n  " } else { ",\n  " });
        out.push_str(&serde_json::to_string(waypoint)?);
    }
    if !waypoints.is_empty() {
        out.push('\n');
    }
    out.push_str("]\n");
    Ok(out)
}
