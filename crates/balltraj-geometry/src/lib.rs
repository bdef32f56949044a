//! BallTraj geometry: the ballistic parabola and polyline sampling.

pub mod curve;
pub mod tessellate;

pub use curve::{Curve, Parabola};
pub use tessellate::sample_uniform;
