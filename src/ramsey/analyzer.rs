//! Clique analysis of a graph and its complement

use ndarray::{s, Array3};

use crate::clique::{CliqueCounts, CliqueEngine};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::graph::{complement, Graph};
use crate::ramsey::normalize::normalize;

/// Clique counts of a graph and its complement together with derived scores
#[derive(Debug, Clone, PartialEq)]
pub struct RamseyAnalysis {
    /// Name of the engine that produced the counts
    pub engine: &'static str,

    pub node_count: usize,

    pub graph_counts: CliqueCounts,

    pub complement_counts: CliqueCounts,

    /// Largest clique size found in either the graph or its complement, at least 1
    pub ramsey_number: usize,

    /// Largest clique in the graph minus largest clique in the complement
    pub balance_score: i64,
}

impl RamseyAnalysis {
    fn from_counts(engine: &'static str, graph_counts: CliqueCounts, complement_counts: CliqueCounts) -> Self {
        let own = graph_counts.clique_number();
        let dual = complement_counts.clique_number();
        Self {
            engine,
            node_count: graph_counts.node_count(),
            ramsey_number: own.max(dual).max(1),
            balance_score: own as i64 - dual as i64,
            graph_counts,
            complement_counts,
        }
    }

    /// Node feature tensor of shape `(N, 2, sizes)`: side 0 is the graph, side 1 the complement
    pub fn node_features(&self, normalized: bool) -> Array3<f64> {
        let (own, dual) = if normalized {
            (normalize(&self.graph_counts), normalize(&self.complement_counts))
        } else {
            (
                self.graph_counts.matrix().mapv(|count| count as f64),
                self.complement_counts.matrix().mapv(|count| count as f64),
            )
        };

        let sizes = own.nrows();
        let mut features = Array3::<f64>::zeros((self.node_count, 2, sizes));
        features.slice_mut(s![.., 0, ..]).assign(&own.t());
        features.slice_mut(s![.., 1, ..]).assign(&dual.t());
        features
    }

    /// True when the graph or its complement holds a clique of `clique_size`
    pub fn has_monochromatic_clique(&self, clique_size: usize) -> bool {
        self.ramsey_number >= clique_size
    }
}

/// Drives one clique engine over a graph and its complement
pub struct RamseyAnalyzer {
    config: AnalyzerConfig,
    engine: Box<dyn CliqueEngine>,
}

impl RamseyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let engine = config.engine.engine();
        Ok(Self { config, engine })
    }

    pub fn analyze(&self, graph: &Graph) -> RamseyAnalysis {
        analyze_with(self.engine.as_ref(), graph, self.config.max_clique_size)
    }
}

/// Count cliques of `graph` and of its complement with `engine`
pub fn analyze_with(engine: &dyn CliqueEngine, graph: &Graph, max_clique_size: Option<usize>) -> RamseyAnalysis {
    let dual = complement(graph);
    log::debug!(
        "Analyzing graph with {} nodes, {} edges ({} complement edges) using {} engine",
        graph.node_count(),
        graph.edge_count(),
        dual.edge_count(),
        engine.name()
    );

    let graph_counts = engine.count_cliques(graph, max_clique_size);
    let complement_counts = engine.count_cliques(&dual, max_clique_size);
    let analysis = RamseyAnalysis::from_counts(engine.name(), graph_counts, complement_counts);

    log::debug!(
        "Clique numbers: graph {}, complement {}, Ramsey number {}",
        analysis.graph_counts.clique_number(),
        analysis.complement_counts.clique_number(),
        analysis.ramsey_number
    );
    analysis
}
