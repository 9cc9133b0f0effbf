use anyhow::{Context, Result};
use chamfer::{config::Config, path, smooth_path};
use chamfer_core::vector::path_length;
use clap::Args;
use std::{fs, path::PathBuf};

#[derive(Args)]
pub struct SmoothArgs {
    /// Scene and smoothing configuration (TOML or JSON).
    pub config: PathBuf,

    /// Waypoint path to smooth, as a JSON array of coordinate arrays.
    pub path: PathBuf,

    /// Object to smooth the path for.
    ///
    /// Defaults to `default_object` from the config, or the only configured
    /// object.
    #[arg(long)]
    pub object: Option<String>,

    /// Where to write the smoothed path. Printed to stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl SmoothArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)?;
        config.validate()?;

        let waypoints = path::load(&self.path)?;
        let smoothed = smooth_path(&config, self.object.as_deref(), &waypoints)?;

        tracing::info!(
            "Smoothed {} waypoints into {} (length {:.4} -> {:.4})",
            waypoints.len(),
            smoothed.len(),
            path_length(&waypoints),
            path_length(&smoothed)
        );

        let rendered = path::render(&smoothed)?;
        match &self.output {
            Some(output) => {
                if let Some(parent) = output.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                fs::write(output, rendered)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                tracing::info!("Wrote smoothed path to {}", output.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
