/// Numeric thresholds used when classifying trajectory geometry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in scene units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }

    pub fn loose() -> Self {
        Self::new(1e-4)
    }

    /// Only an exact zero counts as zero.
    pub fn exact() -> Self {
        Self::new(0.0)
    }

    /// Check if a distance is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
