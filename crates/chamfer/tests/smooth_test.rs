/// End-to-end tests for smoothing paths against a configured scene
use anyhow::Result;
use chamfer::{check_path, config::Config, path, smooth_path};
use chamfer_core::{Waypoint, vector::path_length};
use std::fs;

const SCENE: &str = r#"
default_object = "arm"

[smoothing]
cutoff_ratios = [0.25, 0.5]

[[objects]]
name = "arm"
radius = 0.05

[[objects]]
name = "base"
radius = 1.0

# sits just inside the half-segment chamfer of the corner at (2, 0)
[[obstacles]]
center = [1.4, 0.6]
radius = 0.1
"#;

fn waypoints(points: &[[f64; 2]]) -> Vec<Waypoint> {
    points.iter().map(|p| Waypoint::from(*p)).collect()
}

#[test]
fn test_blocked_cut_falls_back_to_smaller_ratio() -> Result<()> {
    let config = Config::from_toml(SCENE)?;
    config.validate()?;

    let input = waypoints(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
    let smoothed = smooth_path(&config, None, &input)?;

    assert_eq!(
        smoothed,
        waypoints(&[[0.0, 0.0], [1.5, 0.0], [2.0, 0.5], [2.0, 2.0]])
    );
    assert!(path_length(&smoothed) < path_length(&input));
    Ok(())
}

#[test]
fn test_large_object_keeps_corner() -> Result<()> {
    let config = Config::from_toml(SCENE)?;
    let input = waypoints(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
    let smoothed = smooth_path(&config, Some("base"), &input)?;
    assert_eq!(smoothed, input);
    Ok(())
}

#[test]
fn test_unknown_object_is_reported() -> Result<()> {
    let config = Config::from_toml(SCENE)?;
    let input = waypoints(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
    let err = smooth_path(&config, Some("gripper"), &input).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<chamfer_core::Error>(),
        Some(chamfer_core::Error::NotFound { .. })
    ));
    Ok(())
}

#[test]
fn test_files_round_trip_through_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("scene.toml");
    let input_path = dir.path().join("path.json");
    let output_path = dir.path().join("out/smoothed.json");

    fs::write(&config_path, SCENE)?;
    fs::write(&input_path, "[[0, 0], [2, 0], [2, 2], [0, 2]]")?;

    let config = Config::from_file(&config_path)?;
    config.validate()?;
    let input = path::load(&input_path)?;
    let smoothed = smooth_path(&config, None, &input)?;

    fs::create_dir_all(output_path.parent().unwrap())?;
    fs::write(&output_path, path::render(&smoothed)?)?;
    let reloaded = path::load(&output_path)?;

    assert_eq!(reloaded, smoothed);
    assert_eq!(reloaded.first(), input.first());
    assert_eq!(reloaded.last(), input.last());
    Ok(())
}

#[test]
fn test_json_config_is_detected_by_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("scene.json");
    fs::write(
        &config_path,
        r#"{ "objects": [{ "name": "arm" }], "smoothing": { "cutoff_ratios": [0.5] } }"#,
    )?;

    let config = Config::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.smoothing.cutoff_ratios, vec![0.5]);
    assert_eq!(config.object_name(None)?, "arm");
    Ok(())
}

#[test]
fn test_check_uses_motion_limits() -> Result<()> {
    let config = Config::from_toml(&format!("{SCENE}\n[motion]\nmax_velocity = 2.0\n"))?;
    config.validate()?;
    let input = waypoints(&[[0.0, 0.0], [10.0, 0.0]]);
    let reports = check_path(&config, None, &input)?;
    // 2s accel, 3s cruise, 2s decel
    assert_eq!(reports[0].duration, 7.0);
    assert!(reports[0].is_clear());
    Ok(())
}

#[test]
fn test_check_reports_blocked_segments() -> Result<()> {
    let config = Config::from_toml(SCENE)?;
    let input = waypoints(&[[0.0, 0.0], [2.0, 0.0], [1.0, 1.0], [1.0, 3.0]]);
    let reports = check_path(&config, None, &input)?;

    let verdicts: Vec<bool> = reports.iter().map(|r| r.is_clear()).collect();
    // the diagonal passes straight through the obstacle
    assert_eq!(verdicts, vec![true, false, true]);
    assert_eq!(reports[0].length, 2.0);
    // 1s accel, 1s cruise and 1s decel at the default limits
    assert_eq!(reports[0].duration, 3.0);

    let blocked_at = reports[1].blocked_at.unwrap();
    assert!(blocked_at > 0.0 && blocked_at < reports[1].duration);
    Ok(())
}
