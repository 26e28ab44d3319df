//! `pace-cost`: grade-adjusted physiological travel-time model.
//!
//! Pure functions mapping (distance, aerobic capacity, effort level, signed
//! grade) to an estimated running time.  The model is strict: every invalid
//! parameter or degenerate intermediate is a caller-visible [`CostError`].
//! Graceful degradation over a whole graph is the caller's job
//! (`pace-metrics` maps per-edge errors to missing values).
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`cot`]      | Grade-dependent cost of transport (energy per kg·m)  |
//! | [`estimate`] | Effort mapping, net capacity, speed, travel time     |
//! | [`error`]    | `CostError`, `CostResult<T>`                         |

pub mod cot;
pub mod error;
pub mod estimate;


pub use cot::{FLAT_COST, MAX_GRADE, cost_of_transport};
pub use error::{CostError, CostResult};
pub use estimate::{estimate_travel_time, intensity_fraction};
