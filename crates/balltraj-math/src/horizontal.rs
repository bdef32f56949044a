//! Projections onto the horizontal (x, z) plane.

use crate::{Point3, Vector3};

/// Drop the vertical (y) component of a vector.
pub fn horizontal_component(v: Vector3) -> Vector3 {
    Vector3::new(v.x, 0.0, v.z)
}

/// Distance between two points measured in the horizontal plane.
///
/// Uses `hypot`, so very large finite coordinates do not overflow.
pub fn horizontal_distance(a: Point3, b: Point3) -> f64 {
    (b.x - a.x).hypot(b.z - a.z)
}
