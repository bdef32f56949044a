//! Sampling curves into polylines.

use balltraj_math::Point3;

use crate::curve::Curve;

/// Sample `count` points evenly spaced in parameter across the curve domain.
///
/// The first sample is the domain start and the last is the domain end.
/// A `count` of 1 yields only the start point.
pub fn sample_uniform(curve: &dyn Curve, count: usize) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    if count < 2 {
        return (0..count).map(|_| curve.point_at(t_min)).collect();
    }
    let divs = (count - 1) as f64;
    (0..count)
        .map(|i| curve.point_at(t_min + (t_max - t_min) * i as f64 / divs))
        .collect()
}
