//! Grade-dependent cost of transport.
//!
//! Energy expended per unit body mass per metre travelled, as a function of
//! the signed grade `i` (rise over run).  The polynomial is a fit over
//! treadmill measurements and is only meaningful on `-0.45 <= i <= 0.45`;
//! it is not validated to stay positive outside that interval.  The domain
//! check lives here, next to the polynomial it protects.

use crate::error::{CostError, CostResult};

/// Largest slope magnitude the model accepts, as a decimal fraction.
pub const MAX_GRADE: f64 = 0.45;

/// Energy cost on flat ground, J·kg⁻¹·m⁻¹.  The polynomial's constant
/// term; `cost_of_transport(0.0)` returns exactly this value.
pub const FLAT_COST: f64 = 4.02;

/// Cost of transport in J·kg⁻¹·m⁻¹ for a signed `grade` fraction.
///
/// Fails with [`CostError::GradeOutOfRange`] when `|grade| > MAX_GRADE`
/// (NaN grades are rejected by the same check).
pub fn cost_of_transport(grade: f64) -> CostResult<f64> {
    if !(-MAX_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(CostError::GradeOutOfRange(grade));
    }

    let i = grade;
    Ok(155.4 * i.powi(5) - 30.4 * i.powi(4) - 43.3 * i.powi(3)
        + 46.3 * i.powi(2)
        + 19.5 * i
        + FLAT_COST)
}
