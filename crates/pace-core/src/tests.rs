//! Unit tests for pace-core.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_cast() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(EdgeId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }
}

#[cfg(test)]
mod graph {
    use crate::{EdgeAttributes, GraphError, NodeId, PathGraph};

    fn attrs(length_m: f64, grade: f64) -> EdgeAttributes {
        EdgeAttributes {
            length_m: Some(length_m),
            grade: Some(grade),
            ..Default::default()
        }
    }

    #[test]
    fn empty_graph() {
        let g = PathGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn add_nodes_and_edges() {
        let mut g = PathGraph::new();
        let a = g.add_node(Some(100.0));
        let b = g.add_node(None);
        let e = g.add_edge(a, b, attrs(500.0, 0.05)).unwrap();

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.is_empty());

        let edge = g.edge(e).unwrap();
        assert_eq!(edge.from, a);
        assert_eq!(edge.to, b);
        assert_eq!(edge.length_m, Some(500.0));
        assert_eq!(edge.grade, Some(0.05));
        assert_eq!(edge.grade_abs, None);
    }

    #[test]
    fn fresh_edges_carry_no_metrics() {
        let mut g = PathGraph::new();
        let a = g.add_node(None);
        let b = g.add_node(None);
        let e = g.add_edge(a, b, attrs(100.0, 0.0)).unwrap();

        let m = g.edge(e).unwrap().metrics;
        assert_eq!(m.dist_km, None);
        assert_eq!(m.time_min, None);
        assert_eq!(m.elev_gain_m, None);
        assert_eq!(m.merit, None);
        assert_eq!(m.grade_abs_pct, None);
    }

    #[test]
    fn parallel_edges_get_consecutive_keys() {
        let mut g = PathGraph::new();
        let a = g.add_node(None);
        let b = g.add_node(None);

        let e0 = g.add_edge(a, b, attrs(100.0, 0.0)).unwrap();
        let e1 = g.add_edge(a, b, attrs(120.0, 0.01)).unwrap();
        // Reverse direction counts separately.
        let r0 = g.add_edge(b, a, attrs(100.0, 0.0)).unwrap();

        assert_eq!(g.edge(e0).unwrap().key, 0);
        assert_eq!(g.edge(e1).unwrap().key, 1);
        assert_eq!(g.edge(r0).unwrap().key, 0);
    }

    #[test]
    fn edge_between_resolves_multigraph_identity() {
        let mut g = PathGraph::new();
        let a = g.add_node(None);
        let b = g.add_node(None);
        g.add_edge(a, b, attrs(100.0, 0.0)).unwrap();
        g.add_edge(a, b, attrs(250.0, 0.02)).unwrap();

        assert_eq!(g.edge_between(a, b, 1).unwrap().length_m, Some(250.0));
        assert!(g.edge_between(a, b, 2).is_none());
        assert!(g.edge_between(b, a, 0).is_none());
    }

    #[test]
    fn add_edge_rejects_unknown_endpoint() {
        let mut g = PathGraph::new();
        let a = g.add_node(None);
        let ghost = NodeId(99);

        let err = g.add_edge(a, ghost, attrs(100.0, 0.0)).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound(ghost));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn elevation_accessor() {
        let mut g = PathGraph::new();
        let a = g.add_node(Some(120.5));
        let b = g.add_node(None);

        assert_eq!(g.elevation(a), Some(120.5));
        assert_eq!(g.elevation(b), None);
        assert_eq!(g.elevation(NodeId(17)), None);
    }

    #[test]
    fn split_borrow_mutates_in_place() {
        let mut g = PathGraph::new();
        let a = g.add_node(Some(10.0));
        let b = g.add_node(Some(20.0));
        g.add_edge(a, b, attrs(100.0, 0.1)).unwrap();

        {
            let (edges, nodes) = g.edges_mut_with_nodes();
            assert_eq!(nodes.len(), 2);
            edges[0].metrics.dist_km = Some(0.1);
        }
        assert_eq!(g.edges()[0].metrics.dist_km, Some(0.1));
    }
}
