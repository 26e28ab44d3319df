//! Edge records: input attributes and derived per-edge metrics.
//!
//! Every attribute that can be absent in the source data is an
//! `Option<f64>`.  `None` is the missing-value sentinel throughout the
//! workspace: it separates "could not be computed" from "computed as zero",
//! which matters when the annotated graph later feeds route optimization.

use crate::ids::NodeId;

/// Input attributes of an edge, as delivered by the acquisition pipeline.
///
/// All fields are optional at the type level; malformed source data shows
/// up as `None` rather than a parse failure.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAttributes {
    /// Segment length in metres.
    pub length_m: Option<f64>,
    /// Signed slope as a decimal fraction, rise over run (0.05 = +5 %).
    pub grade: Option<f64>,
    /// Unsigned magnitude of `grade`, when the pipeline provides it.
    pub grade_abs: Option<f64>,
}

/// Derived per-edge metrics, written by the annotation passes in
/// `pace-metrics`.  All fields start as `None` on a freshly built graph.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeMetrics {
    /// Segment length in kilometres.  `Some` iff `length_m` is present.
    pub dist_km: Option<f64>,
    /// Estimated traversal time in minutes.  `Some` iff both `length_m`
    /// and `grade` are present and the cost model accepted them.
    pub time_min: Option<f64>,
    /// Non-negative elevation increase from `from` to `to`, metres.
    /// Descents and missing elevations both yield `Some(0.0)`; an
    /// annotation pass always writes this field.
    pub elev_gain_m: Option<f64>,
    /// Composite cost score for route optimization.  `Some` iff
    /// `time_min` is; never a partial value.
    pub merit: Option<f64>,
    /// `grade_abs` expressed in percent.  `Some` iff `grade_abs` is.
    pub grade_abs_pct: Option<f64>,
}

/// An edge of the path network.
///
/// Parallel edges between the same node pair are legal; `(from, to, key)`
/// is the multigraph identity, with `key` counting parallel edges from 0.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Discriminator among parallel `from -> to` edges.
    pub key: u32,
    /// Segment length in metres.
    pub length_m: Option<f64>,
    /// Signed slope as a decimal fraction.
    pub grade: Option<f64>,
    /// Unsigned slope magnitude.
    pub grade_abs: Option<f64>,
    /// Derived metrics; all `None` until an annotation pass runs.
    pub metrics: EdgeMetrics,
}

impl PathEdge {
    pub(crate) fn new(from: NodeId, to: NodeId, key: u32, attrs: EdgeAttributes) -> Self {
        Self {
            from,
            to,
            key,
            length_m: attrs.length_m,
            grade: attrs.grade,
            grade_abs: attrs.grade_abs,
            metrics: EdgeMetrics::default(),
        }
    }
}
