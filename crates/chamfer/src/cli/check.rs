use anyhow::Result;
use chamfer::{check_path, config::Config, path};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Scene and smoothing configuration (TOML or JSON).
    pub config: PathBuf,

    /// Waypoint path to check.
    pub path: PathBuf,

    /// Object to check the path for.
    #[arg(long)]
    pub object: Option<String>,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)?;
        config.validate()?;

        let waypoints = path::load(&self.path)?;
        let reports = check_path(&config, self.object.as_deref(), &waypoints)?;

        let mut total = 0.0;
        let mut elapsed = 0.0;
        let mut blocked = 0;
        for report in &reports {
            total += report.length;
            let verdict = match report.blocked_at {
                None => "clear".to_string(),
                Some(t) => {
                    blocked += 1;
                    format!("blocked at t={:.3}s", elapsed + t)
                }
            };
            println!(
                "segment {:>3}: length {:.4}, {:.3}s, {verdict}",
                report.index, report.length, report.duration
            );
            elapsed += report.duration;
        }
        println!("total length {total:.4}, {elapsed:.3}s, {blocked} blocked segment(s)");

        if blocked > 0 {
            anyhow::bail!("{blocked} segment(s) are not clear");
        }
        Ok(())
    }
}
