//! Host-side driver that re-solves the trajectory whenever asked.
//!
//! The host decides the cadence (once per frame, on input, in a test) and
//! calls [`TrajectoryTracker::update`]. The accessors report the outcome of
//! the latest update and never stand in a zero value for a missing one.

use balltraj_core::error::{Result, SolveError, TrajError};
use balltraj_math::{Point3, Vector3};

use crate::config::TrajectoryConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::endpoint::EndpointSource;
use crate::solver::{TrajectoryResult, TrajectorySolver};

#[derive(Debug, Clone)]
enum SolveState {
    Pending,
    Solved(TrajectoryResult),
    Failed(SolveError),
}

#[derive(Debug, Clone)]
pub struct TrajectoryTracker {
    solver: TrajectorySolver,
    config: TrajectoryConfig,
    start: EndpointSource,
    finish: EndpointSource,
    state: SolveState,
}

impl TrajectoryTracker {
    pub fn new(
        solver: TrajectorySolver,
        config: TrajectoryConfig,
        start: EndpointSource,
        finish: EndpointSource,
    ) -> Self {
        Self {
            solver,
            config,
            start,
            finish,
            state: SolveState::Pending,
        }
    }

    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Read both endpoints and solve again.
    ///
    /// Failures are reported to `diagnostics` and replace any earlier result.
    pub fn update(&mut self, diagnostics: &mut dyn DiagnosticSink) -> Result<&TrajectoryResult> {
        match self.compute() {
            Ok(result) => self.state = SolveState::Solved(result),
            Err(err) => {
                diagnostics.report(Diagnostic::from_error(&err));
                self.state = SolveState::Failed(err);
            }
        }
        self.result()
    }

    fn compute(&self) -> std::result::Result<TrajectoryResult, SolveError> {
        let start = resolve(&self.start, "start")?;
        let finish = resolve(&self.finish, "finish")?;
        self.solver.solve(start, finish, &self.config)
    }

    /// Outcome of the latest update.
    pub fn result(&self) -> Result<&TrajectoryResult> {
        match &self.state {
            SolveState::Pending => Err(TrajError::NotComputed(
                "trajectory has not been updated yet".into(),
            )),
            SolveState::Solved(result) => Ok(result),
            SolveState::Failed(err) => Err(err.clone().into()),
        }
    }

    /// Start position used by the latest successful update.
    pub fn start_point(&self) -> Result<Point3> {
        self.result().map(|r| r.start)
    }

    /// Finish position used by the latest successful update.
    pub fn finish_point(&self) -> Result<Point3> {
        self.result().map(|r| r.finish)
    }

    pub fn launch_velocity(&self) -> Result<Vector3> {
        self.result().map(|r| r.launch_velocity)
    }

    pub fn launch_speed(&self) -> Result<f64> {
        self.result().map(|r| r.launch_speed)
    }

    /// Move a fixed start point. Tracked endpoints cannot be overridden.
    pub fn set_start_point(&mut self, position: Point3) -> Result<()> {
        set_fixed(&mut self.start, position, "start")
    }

    /// Move a fixed finish point. Tracked endpoints cannot be overridden.
    pub fn set_finish_point(&mut self, position: Point3) -> Result<()> {
        set_fixed(&mut self.finish, position, "finish")
    }
}

fn resolve(source: &EndpointSource, label: &str) -> std::result::Result<Point3, SolveError> {
    source
        .position()
        .ok_or_else(|| SolveError::Configuration(format!("{label} point not provided")))
}

fn set_fixed(source: &mut EndpointSource, position: Point3, label: &str) -> Result<()> {
    if source.is_tracked() {
        return Err(TrajError::InvalidOperation(format!(
            "{label} point follows a scene object and cannot be set directly"
        )));
    }
    *source = EndpointSource::Fixed(position);
    Ok(())
}
