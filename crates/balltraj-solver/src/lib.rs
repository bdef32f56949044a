//! BallTraj solver: the arc a ball follows from a start point through a
//! finish point when launched at a fixed angle under uniform gravity.
//!
//! ```
//! use balltraj_math::dvec3;
//! use balltraj_solver::{TrajectoryConfig, TrajectorySolver};
//!
//! let solver = TrajectorySolver::new();
//! let config = TrajectoryConfig::new(3, 45.0, 10.0);
//! let result = solver
//!     .solve(dvec3(0.0, 0.0, 0.0), dvec3(10.0, 0.0, 0.0), &config)
//!     .unwrap();
//!
//! assert_eq!(result.points.len(), 3);
//! assert!((result.launch_speed - 10.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod diagnostics;
pub mod endpoint;
pub mod polyline;
pub mod solver;
pub mod tracker;

pub use balltraj_core::{Result, SolveError, SolveResult, Tolerance, TrajError};
pub use config::TrajectoryConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, StderrSink};
pub use endpoint::{scene_node, EndpointSource, SceneHandle};
pub use polyline::PolylineSink;
pub use solver::{LaunchRequest, TrajectoryResult, TrajectorySolver};
pub use tracker::TrajectoryTracker;
