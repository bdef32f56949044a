//! Ballistic parabola in a vertical plane.

use balltraj_math::{horizontal_component, horizontal_distance, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A downward-opening parabola `y(x) = x·slope − A·x²` laid out in 3D.
///
/// The parameter is horizontal distance from `origin` along `direction`,
/// over `[0, range]`. `slope` is the tangent of the launch angle and `A` is
/// the shape coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parabola {
    pub origin: Point3,
    /// Unit horizontal direction from origin towards the far end.
    pub direction: Vector3,
    pub range: f64,
    pub slope: f64,
    pub shape_coefficient: f64,
}

impl Parabola {
    pub fn new(
        origin: Point3,
        direction: Vector3,
        range: f64,
        slope: f64,
        shape_coefficient: f64,
    ) -> Self {
        Self {
            origin,
            direction: horizontal_component(direction).normalize(),
            range,
            slope,
            shape_coefficient,
        }
    }

    /// Fit the parabola leaving `start` with the given slope and passing
    /// through `finish`.
    ///
    /// Returns `None` when the two points share a horizontal position.
    pub fn through(start: Point3, finish: Point3, slope: f64) -> Option<Self> {
        let range = horizontal_distance(start, finish);
        if range == 0.0 {
            return None;
        }
        let rise = finish.y - start.y;
        // (d·slope − rise) / d², divided twice by d to stay finite for huge d.
        let shape_coefficient = (slope - rise / range) / range;
        Some(Self {
            origin: start,
            direction: horizontal_component(finish - start) / range,
            range,
            slope,
            shape_coefficient,
        })
    }

    /// Height above the origin after travelling `x` horizontally.
    pub fn height_at(&self, x: f64) -> f64 {
        x * self.slope - self.shape_coefficient * x * x
    }

    /// Highest point reached within the domain.
    pub fn apex(&self) -> Point3 {
        let x = if self.shape_coefficient > 0.0 {
            (self.slope / (2.0 * self.shape_coefficient)).clamp(0.0, self.range)
        } else if self.slope > 0.0 {
            self.range
        } else {
            0.0
        };
        self.point_at(x)
    }

    /// Unit tangent at the origin.
    pub fn launch_tangent(&self) -> Vector3 {
        self.tangent_at(0.0).normalize()
    }
}

impl Curve for Parabola {
    fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t + Vector3::Y * self.height_at(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.direction + Vector3::Y * (self.slope - 2.0 * self.shape_coefficient * t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.range)
    }
}
