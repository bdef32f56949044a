pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SolveError, SolveResult, TrajError};
pub use tolerance::Tolerance;
