//! Dense relation engine.
//!
//! Let `A_k` be the k-dimensional boolean tensor whose entry `(i_1, ..., i_k)`
//! holds iff those nodes are distinct and pairwise adjacent. `A_2` is the
//! adjacency matrix with a false diagonal. A tuple of `k + 1` nodes is a clique
//! iff every tuple obtained by deleting one coordinate is a k-clique, so
//!
//! ```text
//! A_{k+1} = AND over i in 0..=k of A_k with a unit axis inserted at i
//! ```
//!
//! where each insertion is broadcast to `N^(k+1)`. Tuples with a repeated
//! node always lose one of the deletions that keeps both copies, so the
//! diagonal stays false at every level.
//!
//! Memory at level k is `N^k` cells; use this engine for small graphs and as a
//! reference for `InductiveCliqueEngine`.

use ndarray::{ArrayD, Axis, IxDyn, Zip};

use crate::clique::{effective_cap, CliqueCounts, CliqueEngine};
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, Default)]
pub struct DenseCliqueEngine;

impl DenseCliqueEngine {
    /// Level-2 relation: the adjacency matrix
    pub fn adjacency_relation(graph: &Graph) -> ArrayD<bool> {
        let n = graph.node_count();
        ArrayD::from_shape_fn(IxDyn(&[n, n]), |index| graph.has_edge(index[0], index[1]))
    }

    /// Derive the (k+1)-ary clique relation from the k-ary one
    pub fn next_relation(relation: &ArrayD<bool>) -> ArrayD<bool> {
        let k = relation.ndim();
        let n = relation.shape().first().copied().unwrap_or(0);
        let mut next = ArrayD::from_elem(IxDyn(&vec![n; k + 1]), true);

        for axis in 0..=k {
            let missing_node = relation.view().insert_axis(Axis(axis));
            Zip::from(&mut next)
                .and_broadcast(&missing_node)
                .for_each(|cell, &held| *cell &= held);
        }

        next
    }

    /// Per-node count of k-cliques encoded in a k-ary relation.
    ///
    /// Each clique containing `v` appears once per ordering of its other
    /// `k - 1` members in the slice `relation[v, ...]`.
    fn node_counts(relation: &ArrayD<bool>) -> Vec<u64> {
        let orderings = factorial(relation.ndim() as u64 - 1);
        relation
            .axis_iter(Axis(0))
            .map(|slice| slice.iter().filter(|&&held| held).count() as u64 / orderings)
            .collect()
    }
}

fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

impl CliqueEngine for DenseCliqueEngine {
    fn name(&self) -> &'static str {
        "dense"
    }

    fn count_cliques(&self, graph: &Graph, max_clique_size: Option<usize>) -> CliqueCounts {
        let node_count = graph.node_count();
        let cap = effective_cap(graph, max_clique_size);
        let mut counts = CliqueCounts::new(node_count, cap);
        if cap < 2 {
            return counts;
        }

        // only the current level is retained once the next one is built
        let mut relation = Self::adjacency_relation(graph);
        let mut clique_size = 2;
        loop {
            if !relation.iter().any(|&held| held) {
                log::debug!("No {}-cliques, stopping dense relation growth", clique_size);
                break;
            }
            counts.record_level(clique_size, Self::node_counts(&relation));
            if clique_size >= cap || clique_size >= node_count {
                break;
            }
            relation = Self::next_relation(&relation);
            clique_size += 1;
        }

        log::debug!(
            "Dense engine: largest clique size {} on {} nodes",
            counts.clique_number(),
            node_count
        );
        counts
    }
}
