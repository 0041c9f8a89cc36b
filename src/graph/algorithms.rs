//! Graph algorithms: complement, random generation and petgraph interop

use itertools::Itertools;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::Rng;

use crate::error::InvalidGraphError;
use crate::graph::encoding::edge_dictionary;
use crate::graph::{Graph, GraphBuilder};

/// Graph on the same nodes whose edges are exactly the distinct pairs absent from `graph`
pub fn complement(graph: &Graph) -> Graph {
    let node_count = graph.node_count();
    let mut builder = GraphBuilder::new(node_count);

    for (u, v) in (0..node_count).tuple_combinations() {
        if !graph.has_edge(u, v) {
            builder.connect(u, v);
        }
    }

    builder.build()
}

/// Number of distinct unordered pairs on `node_count` nodes
pub fn max_edges(node_count: usize) -> usize {
    node_count * node_count.saturating_sub(1) / 2
}

/// Random graph with exactly `edge_count` distinct edges.
///
/// Without an explicit count one is drawn uniformly from `[n, C(n, 2)]`.
/// Requests above `C(n, 2)` are clamped to the complete graph.
pub fn random_graph<R: Rng + ?Sized>(node_count: usize, edge_count: Option<usize>, rng: &mut R) -> Graph {
    let total = max_edges(node_count);
    let wanted = match edge_count {
        Some(m) => m.min(total),
        None if node_count <= total => rng.random_range(node_count..=total),
        None => total,
    };

    log::debug!("Sampling {} of {} possible edges on {} nodes", wanted, total, node_count);

    let dictionary = edge_dictionary(node_count);
    let mut builder = GraphBuilder::new(node_count);
    for index in rand::seq::index::sample(rng, total, wanted) {
        let (u, v) = dictionary[index];
        builder.connect(u, v);
    }
    builder.build()
}

/// G(n, p) random graph: every pair is an edge independently with probability `p`.
///
/// `p` is clamped to `[0, 1]`; NaN counts as 0.
pub fn erdos_renyi<R: Rng + ?Sized>(node_count: usize, probability: f64, rng: &mut R) -> Graph {
    let p = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    let mut builder = GraphBuilder::new(node_count);
    for (u, v) in (0..node_count).tuple_combinations() {
        if rng.random_bool(p) {
            builder.connect(u, v);
        }
    }
    builder.build()
}

impl<N, E> TryFrom<&UnGraph<N, E>> for Graph {
    type Error = InvalidGraphError;

    /// Parallel edges are merged; self-loops are rejected
    fn try_from(source: &UnGraph<N, E>) -> Result<Self, Self::Error> {
        let mut builder = GraphBuilder::new(source.node_count());
        for edge in source.edge_references() {
            builder.add_edge(edge.source().index(), edge.target().index())?;
        }
        Ok(builder.build())
    }
}

impl From<&Graph> for UnGraph<(), ()> {
    fn from(graph: &Graph) -> Self {
        let mut out = UnGraph::with_capacity(graph.node_count(), graph.edge_count());
        let nodes: Vec<_> = (0..graph.node_count()).map(|_| out.add_node(())).collect();
        for (u, v) in graph.edges() {
            out.add_edge(nodes[u], nodes[v], ());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn complement_partitions_all_pairs() {
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let dual = complement(&graph);
        assert_eq!(graph.edge_count() + dual.edge_count(), max_edges(5));
        for (u, v) in (0..5).tuple_combinations() {
            assert_ne!(graph.has_edge(u, v), dual.has_edge(u, v));
        }
        for v in 0..5 {
            assert!(!dual.has_edge(v, v));
        }
    }

    #[test]
    fn complement_is_an_involution() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for n in 0..9 {
            let graph = erdos_renyi(n, 0.4, &mut rng);
            assert_eq!(complement(&complement(&graph)), graph);
        }
    }

    #[test]
    fn complement_of_tiny_graphs_is_edgeless() {
        assert_eq!(complement(&Graph::empty(0)).edge_count(), 0);
        assert_eq!(complement(&Graph::empty(1)).edge_count(), 0);
        assert_eq!(complement(&Graph::complete(4)), Graph::empty(4));
    }

    #[test]
    fn random_graph_has_requested_edge_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_graph(10, Some(17), &mut rng).edge_count(), 17);
        assert_eq!(random_graph(4, Some(100), &mut rng).edge_count(), 6);

        let graph = random_graph(8, None, &mut rng);
        assert!((8..=28).contains(&graph.edge_count()));
    }

    #[test]
    fn erdos_renyi_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(erdos_renyi(6, 0.0, &mut rng), Graph::empty(6));
        assert_eq!(erdos_renyi(6, 1.0, &mut rng), Graph::complete(6));
        assert_eq!(erdos_renyi(6, f64::NAN, &mut rng), Graph::empty(6));
        assert_eq!(erdos_renyi(6, -3.0, &mut rng), Graph::empty(6));
        assert_eq!(erdos_renyi(6, 7.5, &mut rng), Graph::complete(6));
    }

    #[test]
    fn petgraph_round_trip() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let pg = UnGraph::<(), ()>::from(&graph);
        assert_eq!(pg.edge_count(), 4);
        assert_eq!(Graph::try_from(&pg).unwrap(), graph);
    }

    #[test]
    fn petgraph_self_loops_are_rejected() {
        let mut pg = UnGraph::<(), ()>::new_undirected();
        let a = pg.add_node(());
        pg.add_edge(a, a, ());
        assert_eq!(Graph::try_from(&pg).unwrap_err(), InvalidGraphError::SelfLoop(0));
    }
}
