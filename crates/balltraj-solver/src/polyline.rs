use balltraj_math::Point3;

/// Consumer of a sampled trajectory, typically a line renderer.
pub trait PolylineSink {
    /// Replace the drawn line with `points`, in order.
    fn set_positions(&mut self, points: &[Point3]);
}

impl PolylineSink for Vec<Point3> {
    fn set_positions(&mut self, points: &[Point3]) {
        self.clear();
        self.extend_from_slice(points);
    }
}
