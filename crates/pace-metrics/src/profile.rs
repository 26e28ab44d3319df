//! Pass-wide physiological parameters.

/// The runner a pass is annotating for.  Shared, read-only parameters for
/// every edge of the graph.
///
/// The fields are not validated at construction.  An out-of-scale effort
/// or an unsustainable capacity surfaces as a missing travel time on each
/// affected edge when the pass runs, the same way a bad per-edge grade
/// does.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunnerProfile {
    /// Aerobic capacity in ml·kg⁻¹·min⁻¹ (a VO₂max-style figure).
    pub capacity: f64,
    /// Sustained effort level on the 1..=5 scale.
    pub effort: u8,
}

impl RunnerProfile {
    #[inline]
    pub fn new(capacity: f64, effort: u8) -> Self {
        Self { capacity, effort }
    }
}
