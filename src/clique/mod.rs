//! Per-node clique counting engines

pub mod dense;
pub mod inductive;

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::Graph;

pub use dense::DenseCliqueEngine;
pub use inductive::InductiveCliqueEngine;

/// A strategy for computing, for every node, how many k-cliques contain it.
///
/// Implementations must return identical counts for the same graph and cap;
/// they differ only in cost. `max_clique_size` bounds the largest k computed,
/// `None` meaning "until no clique of the next size exists".
pub trait CliqueEngine {
    fn name(&self) -> &'static str;

    fn count_cliques(&self, graph: &Graph, max_clique_size: Option<usize>) -> CliqueCounts;
}

/// Per-node clique counts for sizes `2..=max_clique_size`
#[derive(Debug, Clone, PartialEq)]
pub struct CliqueCounts {
    /// counts[[k - 2, v]] is the number of k-cliques containing node v
    counts: Array2<u64>,

    /// Requested (or implied) largest clique size
    max_clique_size: usize,

    /// Largest clique size actually observed
    clique_number: usize,
}

impl CliqueCounts {
    /// All-zero counts for a graph with no computed levels yet
    pub(crate) fn new(node_count: usize, max_clique_size: usize) -> Self {
        Self {
            counts: Array2::zeros((max_clique_size.saturating_sub(1), node_count)),
            max_clique_size,
            // any single node is a 1-clique
            clique_number: node_count.min(1),
        }
    }

    /// Store the per-node counts of level `clique_size`
    pub(crate) fn record_level<I>(&mut self, clique_size: usize, per_node: I)
    where
        I: IntoIterator<Item = u64>,
    {
        debug_assert!(clique_size >= 2 && clique_size <= self.max_clique_size);
        let mut row = self.counts.row_mut(clique_size - 2);
        for (cell, count) in row.iter_mut().zip(per_node) {
            *cell = count;
        }
        if row.iter().any(|&count| count > 0) {
            self.clique_number = self.clique_number.max(clique_size);
        }
    }

    pub fn node_count(&self) -> usize {
        self.counts.ncols()
    }

    pub fn max_clique_size(&self) -> usize {
        self.max_clique_size
    }

    /// Largest clique size found, capped by `max_clique_size` when it is at least 2
    pub fn clique_number(&self) -> usize {
        self.clique_number
    }

    /// Number of `clique_size`-cliques containing `node`; zero outside the computed range
    pub fn count(&self, node: usize, clique_size: usize) -> u64 {
        if clique_size < 2 || node >= self.node_count() {
            return 0;
        }
        self.counts
            .get((clique_size - 2, node))
            .copied()
            .unwrap_or(0)
    }

    /// Counts for one node, indexed by clique size starting at 2
    pub fn node_vector(&self, node: usize) -> Vec<u64> {
        self.counts.column(node).to_vec()
    }

    /// Number of distinct cliques of the given size in the whole graph
    pub fn total(&self, clique_size: usize) -> u64 {
        if clique_size < 2 || clique_size > self.max_clique_size {
            return 0;
        }
        // every k-clique is seen once from each of its k members
        self.counts.row(clique_size - 2).sum() / clique_size as u64
    }

    /// Raw matrix, one row per clique size and one column per node
    pub fn matrix(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Rows as nested vectors, the layout used for JSON export
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.counts.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
    }
}

/// Selects a clique engine at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Tensor relation engine, O(N^k) memory
    Dense,
    /// Per-node set engine
    #[default]
    Inductive,
}

impl EngineKind {
    pub fn engine(self) -> Box<dyn CliqueEngine> {
        match self {
            EngineKind::Dense => Box::new(DenseCliqueEngine),
            EngineKind::Inductive => Box::new(InductiveCliqueEngine),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Dense => f.write_str("dense"),
            EngineKind::Inductive => f.write_str("inductive"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(EngineKind::Dense),
            "inductive" => Ok(EngineKind::Inductive),
            other => Err(format!("unknown engine '{}', expected 'dense' or 'inductive'", other)),
        }
    }
}

/// Cap used when the caller gives none: no clique can exceed the node count
pub(crate) fn effective_cap(graph: &Graph, max_clique_size: Option<usize>) -> usize {
    max_clique_size.unwrap_or_else(|| graph.node_count())
}
