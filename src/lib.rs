//! Exact per-node clique counting for small graphs and their complements.
//!
//! Given an undirected simple graph, the crate counts for every node and every
//! clique size `k >= 2` how many k-cliques contain that node, does the same for
//! the complement graph, and reports the graph's Ramsey number: the largest
//! clique size found in either of the two.
//!
//! ```
//! use clique_counter::prelude::*;
//!
//! let triangle = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! let analyzer = RamseyAnalyzer::new(AnalyzerConfig::default()).unwrap();
//! let analysis = analyzer.analyze(&triangle);
//!
//! assert_eq!(analysis.graph_counts.node_vector(0), vec![2, 1, 0]);
//! assert_eq!(analysis.ramsey_number, 3);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod clique;
pub mod ramsey;
pub mod storage;

pub use error::{Error, InvalidGraphError, Result};

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::clique::{
        CliqueCounts, CliqueEngine, DenseCliqueEngine, EngineKind, InductiveCliqueEngine,
    };
    pub use crate::config::AnalyzerConfig;
    pub use crate::graph::{complement, Graph, GraphBuilder};
    pub use crate::ramsey::{analyze_with, normalize, RamseyAnalysis, RamseyAnalyzer};
}
