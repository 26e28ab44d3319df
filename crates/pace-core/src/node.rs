//! Node record.

/// A node of the path network.
///
/// The acquisition pipeline samples `elevation` from a raster; nodes that
/// fall outside the raster (or on nodata cells) carry `None`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Elevation above sea level in metres, if sampled.
    pub elevation: Option<f64>,
}

impl PathNode {
    #[inline]
    pub fn new(elevation: Option<f64>) -> Self {
        Self { elevation }
    }
}
