use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A point in n-dimensional configuration space.
///
/// Serializes as a plain array of numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waypoint(Vec<f64>);

impl Waypoint {
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Deref for Waypoint {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Waypoint {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Waypoint {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Waypoint {
    fn from(coords: [f64; N]) -> Self {
        Self(coords.to_vec())
    }
}

impl FromIterator<f64> for Waypoint {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derefs_to_slice() {
        let w = Waypoint::from([1.0, 2.0, 3.0]);
        assert_eq!(w.dim(), 3);
        assert_eq!(w[1], 2.0);
        assert_eq!(w.iter().sum::<f64>(), 6.0);
    }

    #[test]
    fn finite_check() {
        assert!(Waypoint::from([0.0, 1.0]).is_finite());
        assert!(!Waypoint::from([0.0, f64::INFINITY]).is_finite());
    }
}
