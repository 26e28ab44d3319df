//! Travel-time estimation from effort, capacity, and grade.
//!
//! # Units
//!
//! `capacity` and the derived net capacity are oxygen uptake rates in
//! ml·kg⁻¹·min⁻¹ (a VO₂max-style figure).  Speeds are metres per minute,
//! times are minutes.

use crate::cot::cost_of_transport;
use crate::error::{CostError, CostResult};

/// Resting oxygen uptake (1 MET), ml·kg⁻¹·min⁻¹.  Subtracted from the
/// sustained uptake; only capacity above this moves the runner forward.
const RESTING_RATE: f64 = 3.5;

/// Energy yield of oxygen, J per ml.  Converts net uptake into mechanical
/// supply that the cost of transport divides into speed.
const JOULES_PER_ML_O2: f64 = 20.1;

/// Fraction of total capacity sustainable at an ordinal effort level.
///
/// The five levels are midpoints of common training-intensity bands.
/// Any value outside `1..=5` is [`CostError::UnknownEffortLevel`].
pub fn intensity_fraction(effort: u8) -> CostResult<f64> {
    match effort {
        1 => Ok(0.575),
        2 => Ok(0.730),
        3 => Ok(0.840),
        4 => Ok(0.905),
        5 => Ok(0.970),
        other => Err(CostError::UnknownEffortLevel(other)),
    }
}

/// Estimated running time in minutes over `distance_m` metres at the given
/// sustained `effort` (1..=5) and signed `grade` fraction.
///
/// The checks run in a fixed order so the first offending parameter is the
/// one reported: effort scale, net capacity, grade domain, cost sign,
/// speed sign.
pub fn estimate_travel_time(
    distance_m: f64,
    capacity: f64,
    effort: u8,
    grade: f64,
) -> CostResult<f64> {
    let fraction = intensity_fraction(effort)?;

    let net = capacity * fraction - RESTING_RATE;
    if net <= 0.0 {
        return Err(CostError::CapacityExhausted {
            capacity,
            fraction,
            net,
        });
    }

    // Carries the grade-domain check.
    let cost = cost_of_transport(grade)?;
    if cost <= 0.0 {
        return Err(CostError::NonPositiveCost(cost));
    }

    let speed_m_per_min = net * JOULES_PER_ML_O2 / cost;
    if speed_m_per_min <= 0.0 {
        return Err(CostError::NonPositiveSpeed(speed_m_per_min));
    }

    Ok(distance_m / speed_m_per_min)
}
