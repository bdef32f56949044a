use crate::error::SolveResult;

/// Validate parameters before any computation uses them.
pub trait Validate {
    fn validate(&self) -> SolveResult<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
