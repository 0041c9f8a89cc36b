//! Fixed-length edge encoding of graphs.
//!
//! A graph on `n` nodes has at most `n(n-1)/2` edges. Enumerating the pairs of
//! the complete graph in lexicographic order gives every possible edge a stable
//! index, so a graph becomes a boolean vector of that length:
//!
//! | index         | edge         |
//! |---------------|--------------|
//! | 0             | (0, 1)       |
//! | n - 2         | (0, n - 1)   |
//! | n - 1         | (1, 2)       |
//! | n(n-1)/2 - 1  | (n - 2, n - 1) |

use itertools::Itertools;

use crate::error::InvalidGraphError;
use crate::graph::{Graph, GraphBuilder};

/// All distinct pairs `(u, v)` with `u < v`, in lexicographic order
pub fn edge_dictionary(node_count: usize) -> Vec<(usize, usize)> {
    (0..node_count).tuple_combinations().collect()
}

/// Index of `(u, v)` in `edge_dictionary(node_count)`
pub fn edge_index(node_count: usize, u: usize, v: usize) -> Option<usize> {
    let (u, v) = if u < v { (u, v) } else { (v, u) };
    if u == v || v >= node_count {
        return None;
    }
    // pairs whose first node is below u, then the offset inside row u
    let before = u * node_count - u * (u + 1) / 2;
    Some(before + (v - u - 1))
}

pub fn one_hot_encode(graph: &Graph) -> Vec<bool> {
    edge_dictionary(graph.node_count())
        .into_iter()
        .map(|(u, v)| graph.has_edge(u, v))
        .collect()
}

pub fn one_hot_decode(node_count: usize, bits: &[bool]) -> Result<Graph, InvalidGraphError> {
    let dictionary = edge_dictionary(node_count);
    if bits.len() != dictionary.len() {
        return Err(InvalidGraphError::EncodingLength {
            node_count,
            expected: dictionary.len(),
            actual: bits.len(),
        });
    }

    let mut builder = GraphBuilder::new(node_count);
    for (&(u, v), _) in dictionary.iter().zip(bits).filter(|(_, bit)| **bit) {
        builder.connect(u, v);
    }
    Ok(builder.build())
}
