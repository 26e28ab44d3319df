//! Cost-model error type.
//!
//! One variant per failure condition.  These are data-quality or parameter
//! errors surfaced to the immediate caller; nothing here is transient, so
//! there is no retry story.

use thiserror::Error;

/// Errors produced by `pace-cost`.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CostError {
    /// Effort level outside the defined 1..=5 scale.
    #[error("effort level {0} is not on the 1..=5 scale")]
    UnknownEffortLevel(u8),

    /// The requested effort does not exceed resting cost for this
    /// capacity; no sustainable forward speed exists.
    #[error(
        "capacity {capacity:.1} at intensity {fraction:.3} leaves no net capacity ({net:.2})"
    )]
    CapacityExhausted {
        capacity: f64,
        fraction: f64,
        net: f64,
    },

    /// Grade magnitude beyond the fitted domain of the cost polynomial.
    #[error("grade {0:.3} outside the model domain [-0.45, +0.45]")]
    GradeOutOfRange(f64),

    /// Non-positive cost of transport.  Cannot occur for in-domain grades
    /// given the polynomial's shape.
    #[error("cost of transport {0:.2} J/(kg*m) is non-positive")]
    NonPositiveCost(f64),

    /// Non-positive running speed.
    #[error("estimated speed {0:.2} m/min is non-positive")]
    NonPositiveSpeed(f64),
}

pub type CostResult<T> = Result<T, CostError>;
