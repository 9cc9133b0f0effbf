use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tuning knobs for [`crate::cut_corners`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutCornersParams {
    /// Fractions of the adjacent segment lengths to cut back from a corner.
    /// Each must lie in `(0, 0.5]`; larger ratios are tried first.
    #[serde(default = "default_cutoff_ratios")]
    pub cutoff_ratios: Vec<f64>,

    /// Corners whose direction change is below this angle (radians) are left
    /// alone. Must lie in `(0, pi)`.
    #[serde(default = "default_angle_threshold")]
    pub angle_threshold: f64,

    /// Minimum path length a cut has to save to be worth checking.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,

    /// Spacing of the points handed to the clearance oracle, in waypoint
    /// units.
    #[serde(default = "default_step_resolution")]
    pub step_resolution: f64,
}

impl Default for CutCornersParams {
    fn default() -> Self {
        Self {
            cutoff_ratios: default_cutoff_ratios(),
            angle_threshold: default_angle_threshold(),
            distance_threshold: default_distance_threshold(),
            step_resolution: default_step_resolution(),
        }
    }
}

fn default_cutoff_ratios() -> Vec<f64> {
    vec![0.5, 0.25]
}

fn default_angle_threshold() -> f64 {
    60f64.to_radians()
}

fn default_distance_threshold() -> f64 {
    0.2
}

fn default_step_resolution() -> f64 {
    0.01
}

impl CutCornersParams {
    pub fn with_cutoff_ratios(mut self, ratios: impl Into<Vec<f64>>) -> Self {
        self.cutoff_ratios = ratios.into();
        self
    }

    pub fn with_angle_threshold(mut self, radians: f64) -> Self {
        self.angle_threshold = radians;
        self
    }

    pub fn with_distance_threshold(mut self, distance: f64) -> Self {
        self.distance_threshold = distance;
        self
    }

    pub fn with_step_resolution(mut self, resolution: f64) -> Self {
        self.step_resolution = resolution;
        self
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.cutoff_ratios.is_empty() {
            return Err(ParameterError::NoCutoffRatios);
        }
        // written so that NaN fails every check
        for &ratio in &self.cutoff_ratios {
            if !(ratio > 0.0 && ratio <= 0.5) {
                return Err(ParameterError::CutoffRatio { ratio });
            }
        }
        if !(self.angle_threshold > 0.0 && self.angle_threshold < PI) {
            return Err(ParameterError::AngleThreshold {
                angle: self.angle_threshold,
            });
        }
        if !(self.distance_threshold >= 0.0 && self.distance_threshold.is_finite()) {
            return Err(ParameterError::DistanceThreshold {
                distance: self.distance_threshold,
            });
        }
        if !(self.step_resolution > 0.0 && self.step_resolution.is_finite()) {
            return Err(ParameterError::StepResolution {
                resolution: self.step_resolution,
            });
        }
        Ok(())
    }

    /// Cutoff ratios, most aggressive first.
    pub fn sorted_ratios(&self) -> Vec<f64> {
        let mut ratios = self.cutoff_ratios.clone();
        ratios.sort_by(|a, b| b.total_cmp(a));
        ratios
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = CutCornersParams::default();
        assert_eq!(params.cutoff_ratios, vec![0.5, 0.25]);
        assert!((params.angle_threshold.cos() - 0.5).abs() < 1e-12);
        assert_eq!(params.distance_threshold, 0.2);
        params.validate().unwrap();
    }

    #[test]
    fn ratio_bounds() {
        for ratio in [0.0, -0.1, 0.5000001, 1.0, f64::NAN] {
            let params = CutCornersParams::default().with_cutoff_ratios([0.25, ratio]);
            assert!(
                matches!(params.validate(), Err(ParameterError::CutoffRatio { .. })),
                "ratio {ratio} should be rejected"
            );
        }
        CutCornersParams::default()
            .with_cutoff_ratios([0.5, 1e-6])
            .validate()
            .unwrap();
        assert_eq!(
            CutCornersParams::default()
                .with_cutoff_ratios(Vec::<f64>::new())
                .validate(),
            Err(ParameterError::NoCutoffRatios)
        );
    }

    #[test]
    fn angle_bounds() {
        for angle in [0.0, -1.0, PI, 4.0, f64::NAN] {
            let params = CutCornersParams::default().with_angle_threshold(angle);
            assert!(matches!(
                params.validate(),
                Err(ParameterError::AngleThreshold { .. })
            ));
        }
        CutCornersParams::default()
            .with_angle_threshold(PI - 1e-9)
            .validate()
            .unwrap();
    }

    #[test]
    fn distance_and_resolution_bounds() {
        assert!(
            CutCornersParams::default()
                .with_distance_threshold(-0.1)
                .validate()
                .is_err()
        );
        CutCornersParams::default()
            .with_distance_threshold(0.0)
            .validate()
            .unwrap();
        assert!(
            CutCornersParams::default()
                .with_step_resolution(0.0)
                .validate()
                .is_err()
        );
        assert!(
            CutCornersParams::default()
                .with_step_resolution(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn ratios_sort_descending() {
        let params = CutCornersParams::default().with_cutoff_ratios([0.1, 0.5, 0.25]);
        assert_eq!(params.sorted_ratios(), vec![0.5, 0.25, 0.1]);
    }
}
