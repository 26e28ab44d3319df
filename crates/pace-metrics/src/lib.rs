//! `pace-metrics`: per-edge travel-cost annotation for path networks.
//!
//! Consumes a [`PathGraph`](pace_core::PathGraph) whose input attributes
//! (`length_m`, `grade`, node elevations) were populated by the acquisition
//! pipeline, and the strict cost model from `pace-cost`, and writes the
//! derived [`EdgeMetrics`](pace_core::EdgeMetrics) onto every edge in
//! place.
//!
//! The passes are resilient where the cost model is strict: an edge with
//! missing or out-of-domain inputs keeps `None` in the affected metric
//! fields and its neighbours are annotated normally.  A failed edge never
//! aborts a pass.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`profile`]   | `RunnerProfile` pass parameters                       |
//! | [`annotate`]  | `annotate_edge_metrics`, `merit_score`, summary       |
//! | [`steepness`] | `annotate_percent_steepness`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Rayon-parallel per-edge loop (order-independent writes). |

pub mod annotate;
pub mod profile;
pub mod steepness;


pub use annotate::{AnnotationSummary, annotate_edge_metrics, merit_score};
pub use profile::RunnerProfile;
pub use steepness::annotate_percent_steepness;
