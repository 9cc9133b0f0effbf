// Small n-dimensional vector helpers shared by the smoother and sampler.
//
// All binary operations zip their inputs, so callers are expected to check
// dimensions up front.

use crate::waypoint::Waypoint;

pub fn add(a: &[f64], b: &[f64]) -> Waypoint {
    a.iter().zip(b).map(|(a, b)| a + b).collect()
}

pub fn sub(a: &[f64], b: &[f64]) -> Waypoint {
    a.iter().zip(b).map(|(a, b)| a - b).collect()
}

pub fn scale(a: &[f64], s: f64) -> Waypoint {
    a.iter().map(|a| a * s).collect()
}

/// Blend `a * (1 - t) + b * t`.
pub fn lerp(a: &[f64], b: &[f64], t: f64) -> Waypoint {
    a.iter().zip(b).map(|(a, b)| a * (1.0 - t) + b * t).collect()
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

pub fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

/// Unit vector along `a`, or `None` when `a` has no usable length.
pub fn normalize(a: &[f64]) -> Option<Waypoint> {
    let len = norm(a);
    if len > 0.0 && len.is_finite() {
        Some(a.iter().map(|a| a / len).collect())
    } else {
        None
    }
}

/// Euclidean distance between two points
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// Sum of the distances between consecutive waypoints.
pub fn path_length(path: &[Waypoint]) -> f64 {
    path.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(add(&[1.0, 2.0], &[3.0, 4.0]).as_slice(), &[4.0, 6.0]);
        assert_eq!(sub(&[1.0, 2.0], &[3.0, 4.0]).as_slice(), &[-2.0, -2.0]);
        assert_eq!(scale(&[1.0, -2.0], 3.0).as_slice(), &[3.0, -6.0]);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = [0.0, 2.0];
        let b = [4.0, 6.0];
        assert_eq!(lerp(&a, &b, 0.0).as_slice(), &a);
        assert_eq!(lerp(&a, &b, 1.0).as_slice(), &b);
        assert_eq!(lerp(&a, &b, 0.5).as_slice(), &[2.0, 4.0]);
    }

    #[test]
    fn normalize_rejects_zero_length() {
        assert!(normalize(&[0.0, 0.0, 0.0]).is_none());
        assert!(normalize(&[f64::NAN, 1.0]).is_none());
        let unit = normalize(&[3.0, 4.0]).unwrap();
        assert!((norm(&unit) - 1.0).abs() < 1e-12);
        assert_eq!(unit.as_slice(), &[0.6, 0.8]);
    }

    #[test]
    fn distance_and_length() {
        assert_eq!(distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        let path = vec![
            Waypoint::from([0.0, 0.0]),
            Waypoint::from([1.0, 0.0]),
            Waypoint::from([1.0, 1.0]),
        ];
        assert_eq!(path_length(&path), 2.0);
        assert_eq!(path_length(&path[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
