//! Graph construction module

use std::collections::BTreeSet;

use crate::error::InvalidGraphError;
use crate::graph::Graph;

/// Builder for incrementally constructing a validated `Graph`
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Reject edges that were already added instead of merging them
    strict: bool,

    /// Adjacency sets for each node
    adjacency: Vec<BTreeSet<u32>>,
}

impl GraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            strict: false,
            adjacency: vec![BTreeSet::new(); node_count],
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add an undirected edge after validating its endpoints
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<&mut Self, InvalidGraphError> {
        if u >= self.node_count || v >= self.node_count {
            return Err(InvalidGraphError::NodeOutOfRange {
                u,
                v,
                node_count: self.node_count,
            });
        }
        if u == v {
            return Err(InvalidGraphError::SelfLoop(u));
        }
        if !self.connect(u, v) && self.strict {
            return Err(InvalidGraphError::DuplicateEdge(u, v));
        }
        Ok(self)
    }

    /// Insert an edge between two known-valid distinct nodes, returning whether it was new
    pub(crate) fn connect(&mut self, u: usize, v: usize) -> bool {
        debug_assert!(u != v && u < self.node_count && v < self.node_count);
        let inserted = self.adjacency[u].insert(v as u32);
        self.adjacency[v].insert(u as u32);
        inserted
    }

    /// Build the compressed graph
    pub fn build(self) -> Graph {
        let edge_slots: usize = self.adjacency.iter().map(|set| set.len()).sum();

        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);
        let mut neighbors = Vec::with_capacity(edge_slots);

        // BTreeSet iteration keeps every list sorted for binary search
        for set in &self.adjacency {
            neighbors.extend(set.iter().copied());
            offsets.push(neighbors.len() as u32);
        }

        Graph {
            node_count: self.node_count,
            offsets,
            neighbors,
        }
    }
}
