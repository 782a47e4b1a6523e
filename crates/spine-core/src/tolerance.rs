/// Numeric tolerance for deciding when a spine vector has no direction.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Shortest vector length that can still be normalized (in scene units)
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

    /// Suited to hand-authored scene data stored in single precision.
    pub fn loose() -> Self {
        Self::new(1e-5)
    }

    /// A vector of this length cannot be given a direction.
    pub fn is_degenerate_length(self, length: f64) -> bool {
        !length.is_finite() || length < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
