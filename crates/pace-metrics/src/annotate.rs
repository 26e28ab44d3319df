//! The edge-metrics annotation pass.
//!
//! Each edge's derived attributes depend only on that edge's own inputs
//! and its two endpoint elevations, never on another edge's outputs.  The
//! pass is therefore a flat map over the edge slice; with the `parallel`
//! feature it runs on Rayon's pool with each worker owning a disjoint
//! chunk of edges and reading the shared node table.
//!
//! Presence rules for the written fields:
//!
//! | Field         | `Some` when                                          |
//! |---------------|------------------------------------------------------|
//! | `dist_km`     | `length_m` present                                   |
//! | `time_min`    | `length_m` and `grade` present, cost model accepted  |
//! | `elev_gain_m` | always (missing elevations count as zero gain)       |
//! | `merit`       | `time_min` present                                   |

use log::{debug, trace};

use pace_core::{NodeId, PathEdge, PathGraph, PathNode};
use pace_cost::estimate_travel_time;

use crate::profile::RunnerProfile;

// Merit weights: kilometres, minutes, and metres of climb are blended
// into one positive score per edge.
const DIST_WEIGHT: f64 = 1.1;
const TIME_WEIGHT: f64 = 0.11;
const GAIN_WEIGHT: f64 = 0.02;

/// Composite cost score of an edge from its derived metrics.
///
/// Exposed so route-optimization consumers can recompute or re-weight the
/// blend without re-running a pass.
#[inline]
pub fn merit_score(dist_km: f64, time_min: f64, elev_gain_m: f64) -> f64 {
    DIST_WEIGHT * dist_km + TIME_WEIGHT * time_min + GAIN_WEIGHT * elev_gain_m
}

/// Coverage report of one annotation pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct AnnotationSummary {
    /// Edges visited.
    pub edges: usize,
    /// Edges that received a travel time (and therefore a merit score).
    pub timed: usize,
    /// Edges left with `time_min = None`: missing inputs or a cost-model
    /// rejection.
    pub untimed: usize,
}

/// Annotate every edge of `graph` with the derived metrics for `profile`.
///
/// Mutates the graph in place and never adds or removes nodes or edges.
/// Per-edge failures are isolated: a cost-model rejection leaves `None` in
/// that edge's `time_min`/`merit` and the pass continues.  An empty graph
/// is a no-op yielding a zero summary.
///
/// Re-running with unchanged inputs rewrites identical values; the pass is
/// a pure function of the input attributes.
pub fn annotate_edge_metrics(
    graph: &mut PathGraph,
    profile: &RunnerProfile,
) -> AnnotationSummary {
    let edge_count = graph.edge_count();
    debug!(
        "annotating {edge_count} edges (capacity {:.1}, effort {})",
        profile.capacity, profile.effort
    );

    let (edges, nodes) = graph.edges_mut_with_nodes();

    #[cfg(not(feature = "parallel"))]
    let timed = edges
        .iter_mut()
        .map(|edge| usize::from(annotate_one(edge, nodes, profile)))
        .sum::<usize>();

    #[cfg(feature = "parallel")]
    let timed = {
        use rayon::prelude::*;

        edges
            .par_iter_mut()
            .map(|edge| usize::from(annotate_one(edge, nodes, profile)))
            .sum::<usize>()
    };

    debug!("annotation complete: {timed}/{edge_count} edges received a travel time");

    AnnotationSummary {
        edges: edge_count,
        timed,
        untimed: edge_count - timed,
    }
}

/// Annotate a single edge record.  Returns whether it received a travel
/// time.
fn annotate_one(edge: &mut PathEdge, nodes: &[PathNode], profile: &RunnerProfile) -> bool {
    edge.metrics.dist_km = edge.length_m.map(|m| m / 1000.0);

    // Missing elevations count as zero gain, not as a missing value.
    let gain = match (elevation(nodes, edge.from), elevation(nodes, edge.to)) {
        (Some(from), Some(to)) => (to - from).max(0.0),
        _ => 0.0,
    };
    edge.metrics.elev_gain_m = Some(gain);

    edge.metrics.time_min = match (edge.length_m, edge.grade) {
        (Some(length_m), Some(grade)) => {
            match estimate_travel_time(length_m, profile.capacity, profile.effort, grade) {
                Ok(minutes) => Some(minutes),
                Err(err) => {
                    trace!("edge {} -> {} key {}: {err}", edge.from, edge.to, edge.key);
                    None
                }
            }
        }
        _ => None,
    };

    // time_min implies length_m, so dist_km is present whenever time is.
    edge.metrics.merit = match (edge.metrics.dist_km, edge.metrics.time_min) {
        (Some(dist), Some(time)) => Some(merit_score(dist, time, gain)),
        _ => None,
    };

    edge.metrics.time_min.is_some()
}

fn elevation(nodes: &[PathNode], id: NodeId) -> Option<f64> {
    nodes.get(id.index()).and_then(|n| n.elevation)
}
