//! Compressed undirected simple graph

use serde::{Deserialize, Serialize};

use crate::error::InvalidGraphError;
use crate::graph::GraphBuilder;

/// Largest node count accepted from serialized input
pub const DEFAULT_MAX_NODES: usize = 1 << 16;

/// Compressed sparse representation of an undirected simple graph.
///
/// Every edge is stored in both directions, so `neighbors(v)` is the full
/// neighbourhood of `v`. Adjacency lists are sorted and free of duplicates
/// and self-loops; `GraphBuilder` is the only way to produce one.
/// Serialized graphs travel as a `GraphRecord` and are rebuilt through the
/// builder on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord", into = "GraphRecord")]
pub struct Graph {
    /// Number of nodes in the graph
    pub(crate) node_count: usize,

    /// offsets[i] to offsets[i+1] defines the neighbour range for node i
    pub(crate) offsets: Vec<u32>,

    /// Concatenated sorted neighbour lists
    pub(crate) neighbors: Vec<u32>,
}

/// Serialized form of a `Graph`: node count and each edge once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub node_count: usize,
    pub edges: Vec<(u32, u32)>,
}

impl From<Graph> for GraphRecord {
    fn from(graph: Graph) -> Self {
        let edges = graph.edges().map(|(u, v)| (u as u32, v as u32)).collect();
        Self {
            node_count: graph.node_count,
            edges,
        }
    }
}

impl TryFrom<GraphRecord> for Graph {
    type Error = InvalidGraphError;

    fn try_from(record: GraphRecord) -> Result<Self, Self::Error> {
        if record.node_count > DEFAULT_MAX_NODES {
            return Err(InvalidGraphError::TooManyNodes {
                node_count: record.node_count,
                limit: DEFAULT_MAX_NODES,
            });
        }
        let mut builder = GraphBuilder::new(record.node_count).strict(true);
        for (u, v) in record.edges {
            builder.add_edge(u as usize, v as usize)?;
        }
        Ok(builder.build())
    }
}

impl Graph {
    /// Graph on `node_count` isolated nodes
    pub fn empty(node_count: usize) -> Self {
        Self {
            node_count,
            offsets: vec![0; node_count + 1],
            neighbors: Vec::new(),
        }
    }

    /// Graph on `node_count` nodes with every distinct pair connected
    pub fn complete(node_count: usize) -> Self {
        let mut builder = GraphBuilder::new(node_count);
        for u in 0..node_count {
            for v in (u + 1)..node_count {
                builder.connect(u, v);
            }
        }
        builder.build()
    }

    /// Build from an edge list, merging duplicate edges
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, InvalidGraphError> {
        let mut builder = GraphBuilder::new(node_count);
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    /// Build from an edge list, rejecting duplicate edges
    pub fn from_edges_strict(
        node_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, InvalidGraphError> {
        let mut builder = GraphBuilder::new(node_count).strict(true);
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    /// Sorted neighbours of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.neighbors[start..end]
    }

    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Check if nodes `u` and `v` are adjacent
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.node_count || v >= self.node_count {
            return false;
        }
        self.neighbors(u).binary_search(&(v as u32)).is_ok()
    }

    /// Each undirected edge once as `(u, v)` with `u < v`, in lexicographic order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.node_count).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .map(|&v| v as usize)
                .filter(move |&v| v > u)
                .map(move |v| (u, v))
        })
    }
}
