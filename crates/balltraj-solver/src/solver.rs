//! Fixed-angle trajectory solver.
//!
//! Fits the parabola `y = x·tanθ − A·x²` in the vertical plane through start
//! and finish, samples it evenly in horizontal distance, and derives the
//! launch speed `sqrt(g·(1 + tan²θ) / (2A))`.

use balltraj_core::error::{Result, SolveError, SolveResult};
use balltraj_core::traits::{BoundingBox, Validate};
use balltraj_core::Tolerance;
use balltraj_geometry::{sample_uniform, Curve, Parabola};
use balltraj_math::{horizontal_distance, Aabb3, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{encode_json, TrajectoryConfig};
use crate::polyline::PolylineSink;

/// One start/finish pair for batch solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub start: Point3,
    pub finish: Point3,
}

impl LaunchRequest {
    pub fn new(start: Point3, finish: Point3) -> Self {
        Self { start, finish }
    }
}

/// A solved trajectory: sampled polyline plus launch kinematics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResult {
    pub start: Point3,
    pub finish: Point3,
    /// `sample_count` points, first = start, last = finish.
    pub points: Vec<Point3>,
    /// Quadratic coefficient `A` of the vertical-plane parabola.
    pub shape_coefficient: f64,
    pub launch_velocity: Vector3,
    pub launch_speed: f64,
    pub curve: Parabola,
}

impl TrajectoryResult {
    /// Horizontal distance between start and finish.
    pub fn horizontal_range(&self) -> f64 {
        self.curve.range
    }

    /// Highest point of the arc between start and finish.
    pub fn apex(&self) -> Point3 {
        self.curve.apex()
    }

    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_points(&self.points).unwrap_or_else(|| {
            Aabb3::new(self.start.min(self.finish), self.start.max(self.finish))
        })
    }

    /// Hand the polyline to a renderer.
    pub fn emit(&self, sink: &mut dyn PolylineSink) {
        sink.set_positions(&self.points);
    }

    pub fn to_json(&self) -> Result<String> {
        encode_json(self, false)
    }
}

impl BoundingBox for TrajectoryResult {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let b = self.bounds();
        (b.min, b.max)
    }
}

/// Stateless solver. Construct one and pass it to whoever needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrajectorySolver {
    tolerance: Tolerance,
}

impl TrajectorySolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal distances within `tolerance.linear` count as zero.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Fit the arc through both points without sampling it.
    pub fn curve(
        &self,
        start: Point3,
        finish: Point3,
        config: &TrajectoryConfig,
    ) -> SolveResult<Parabola> {
        config.validate()?;
        ensure_finite("start", start)?;
        ensure_finite("finish", finish)?;

        let range = horizontal_distance(start, finish);
        if self.tolerance.is_zero(range) {
            return Err(degenerate(start, finish, range));
        }
        Parabola::through(start, finish, config.slope())
            .ok_or_else(|| degenerate(start, finish, range))
    }

    /// Solve the trajectory from `start` through `finish`.
    pub fn solve(
        &self,
        start: Point3,
        finish: Point3,
        config: &TrajectoryConfig,
    ) -> SolveResult<TrajectoryResult> {
        let curve = self.curve(start, finish, config)?;

        let a = curve.shape_coefficient;
        // NaN or infinite A comes from overflowing inputs.
        if a.is_nan() || a.is_infinite() || a <= 0.0 {
            return Err(SolveError::NoPhysicalSolution {
                shape_coefficient: a,
            });
        }

        let n = config.sample_count;
        let mut points = sample_uniform(&curve, n);
        points[0] = start;
        points[n - 1] = finish;

        let slope = curve.slope;
        let launch_speed = (config.gravity * (1.0 + slope * slope) / (2.0 * a)).sqrt();
        if !launch_speed.is_finite() {
            return Err(SolveError::NoPhysicalSolution {
                shape_coefficient: a,
            });
        }

        // Aim along the chord to the first sample after the start.
        let step = curve.range / (n - 1) as f64;
        let chord = curve.point_at(step) - start;
        // Rescale first so the squared length cannot overflow.
        let aim = (chord / chord.abs().max_element()).normalize();
        let launch_velocity = aim * launch_speed;

        Ok(TrajectoryResult {
            start,
            finish,
            points,
            shape_coefficient: a,
            launch_velocity,
            launch_speed,
            curve,
        })
    }

    /// Solve independent requests in parallel, preserving input order.
    pub fn solve_batch(
        &self,
        requests: &[LaunchRequest],
        config: &TrajectoryConfig,
    ) -> Vec<SolveResult<TrajectoryResult>> {
        requests
            .par_iter()
            .map(|r| self.solve(r.start, r.finish, config))
            .collect()
    }
}

fn ensure_finite(label: &str, p: Point3) -> SolveResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(SolveError::Configuration(format!(
            "{label} point is not finite: {p}"
        )))
    }
}

fn degenerate(start: Point3, finish: Point3, range: f64) -> SolveError {
    SolveError::DegenerateGeometry(format!(
        "degenerate horizontal distance {range} between start {start} and finish {finish}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use balltraj_math::dvec3;

    fn boundary() -> TrajectoryResult {
        TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                dvec3(10.0, 0.0, 0.0),
                &TrajectoryConfig::new(3, 45.0, 10.0),
            )
            .unwrap()
    }

    #[test]
    fn test_boundary_scenario() {
        let r = boundary();
        assert_abs_diff_eq!(r.shape_coefficient, 0.1, epsilon = 1e-12);
        assert_eq!(r.points.len(), 3);
        assert!(r.points[1].abs_diff_eq(dvec3(5.0, 2.5, 0.0), 1e-12));
        assert_abs_diff_eq!(r.launch_speed, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_velocity_aims_at_first_sample() {
        let r = boundary();
        let aim = r.points[1].normalize();
        assert!(r.launch_velocity.abs_diff_eq(aim * 10.0, 1e-9));
        assert_abs_diff_eq!(r.launch_velocity.length(), r.launch_speed, epsilon = 1e-9);
    }

    #[test]
    fn test_endpoints_exact() {
        let start = dvec3(0.3, 1.7, -2.1);
        let finish = dvec3(13.9, -4.2, 8.6);
        let r = TrajectorySolver::new()
            .solve(start, finish, &TrajectoryConfig::new(37, 52.0, 9.81))
            .unwrap();
        assert_eq!(r.points[0], start);
        assert_eq!(r.points[36], finish);
        assert_eq!(r.start, start);
        assert_eq!(r.finish, finish);
    }

    #[test]
    fn test_stacked_endpoints_are_degenerate() {
        let err = TrajectorySolver::new()
            .solve(
                dvec3(1.0, 0.0, 2.0),
                dvec3(1.0, 5.0, 2.0),
                &TrajectoryConfig::default(),
            )
            .unwrap_err();
        assert!(matches!(err, SolveError::DegenerateGeometry(_)));
    }

    #[test]
    fn test_tolerance_widens_degenerate_band() {
        let config = TrajectoryConfig::default();
        let finish = dvec3(1e-5, -3.0, 0.0);
        let strict = TrajectorySolver::new();
        let loose = TrajectorySolver::with_tolerance(Tolerance::loose());
        assert!(strict.solve(Point3::ZERO, finish, &config).is_ok());
        assert!(matches!(
            loose.solve(Point3::ZERO, finish, &config),
            Err(SolveError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_single_sample_is_configuration_error() {
        let err = TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                dvec3(10.0, 0.0, 0.0),
                &TrajectoryConfig::new(1, 45.0, 10.0),
            )
            .unwrap_err();
        assert!(matches!(err, SolveError::Configuration(_)));
    }

    #[test]
    fn test_configuration_checked_before_geometry() {
        // Both problems present; configuration wins.
        let err = TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                Point3::ZERO,
                &TrajectoryConfig::new(10, 45.0, -1.0),
            )
            .unwrap_err();
        assert!(matches!(err, SolveError::Configuration(_)));
    }

    #[test]
    fn test_non_finite_endpoint() {
        let err = TrajectorySolver::new()
            .solve(
                dvec3(f64::NAN, 0.0, 0.0),
                dvec3(10.0, 0.0, 0.0),
                &TrajectoryConfig::default(),
            )
            .unwrap_err();
        assert!(matches!(err, SolveError::Configuration(_)));
    }

    #[test]
    fn test_unreachable_height_has_no_solution() {
        let err = TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                dvec3(10.0, 50.0, 0.0),
                &TrajectoryConfig::new(20, 10.0, 9.8),
            )
            .unwrap_err();
        match err {
            SolveError::NoPhysicalSolution { shape_coefficient } => {
                assert!(shape_coefficient < 0.0)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_finish_on_launch_line_has_no_solution() {
        // A = 0 exactly: the straight launch line passes through the finish.
        let err = TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                dvec3(4.0, 0.0, 0.0),
                &TrajectoryConfig::new(5, 0.0, 9.8),
            )
            .unwrap_err();
        assert_eq!(err, SolveError::NoPhysicalSolution { shape_coefficient: 0.0 });
    }

    #[test]
    fn test_horizontal_launch_downhill() {
        let r = TrajectorySolver::new()
            .solve(
                dvec3(0.0, 5.0, 0.0),
                dvec3(10.0, 0.0, 0.0),
                &TrajectoryConfig::new(11, 0.0, 10.0),
            )
            .unwrap();
        // A = 5 / 100, speed = sqrt(10 / 0.1) = 10
        assert_abs_diff_eq!(r.shape_coefficient, 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(r.launch_speed, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.apex().y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_cover_apex() {
        let r = TrajectorySolver::new()
            .solve(
                Point3::ZERO,
                dvec3(0.0, 0.0, 20.0),
                &TrajectoryConfig::new(21, 45.0, 9.8),
            )
            .unwrap();
        let (min, max) = r.bounding_box();
        assert_eq!(min, Point3::ZERO);
        assert_abs_diff_eq!(max.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(max.z, 20.0);
        assert_abs_diff_eq!(r.horizontal_range(), 20.0);
        assert_eq!(r.bounds(), Aabb3::new(min, max));
        assert_abs_diff_eq!(r.apex().y, max.y, epsilon = 1e-12);
    }

    #[test]
    fn test_huge_range_still_solves() {
        let finish = dvec3(1e160, 0.0, 0.0);
        let r = TrajectorySolver::new()
            .solve(Point3::ZERO, finish, &TrajectoryConfig::new(3, 45.0, 10.0))
            .unwrap();
        assert_relative_eq!(r.shape_coefficient, 1e-160, max_relative = 1e-12);
        assert_relative_eq!(r.points[1].y, 2.5e159, max_relative = 1e-12);
        assert!(r.launch_speed.is_finite());
        assert!(r.launch_velocity.is_finite());
        let aim = r.launch_velocity / r.launch_speed;
        assert_relative_eq!(aim.length(), 1.0, max_relative = 1e-12);
        assert_eq!(r.points[2], finish);
    }

    #[test]
    fn test_emit_hands_over_points() {
        let r = boundary();
        let mut line: Vec<Point3> = vec![Point3::ONE; 7];
        r.emit(&mut line);
        assert_eq!(line, r.points);
    }

    #[test]
    fn test_batch_preserves_order() {
        let requests = vec![
            LaunchRequest::new(Point3::ZERO, dvec3(10.0, 0.0, 0.0)),
            LaunchRequest::new(Point3::ZERO, dvec3(0.0, 3.0, 0.0)),
            LaunchRequest::new(Point3::ZERO, dvec3(0.0, 0.0, 4.0)),
        ];
        let config = TrajectoryConfig::new(3, 45.0, 10.0);
        let results = TrajectorySolver::new().solve_batch(&requests, &config);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &boundary());
        assert!(matches!(results[1], Err(SolveError::DegenerateGeometry(_))));
        assert_abs_diff_eq!(results[2].as_ref().unwrap().horizontal_range(), 4.0);
    }

    #[test]
    fn test_result_json_names_fields() {
        let json = boundary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["points"].as_array().map(Vec::len), Some(3));
        assert_abs_diff_eq!(value["launch_speed"].as_f64().unwrap(), 10.0, epsilon = 1e-9);
    }
}
