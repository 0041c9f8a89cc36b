use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use clique_counter::clique::EngineKind;
use clique_counter::config::AnalyzerConfig;
use clique_counter::graph::algorithms::{erdos_renyi, random_graph};
use clique_counter::graph::Graph;
use clique_counter::ramsey::RamseyAnalyzer;
use clique_counter::storage;

#[derive(Parser, Debug)]
#[clap(
    name = "clique-counter",
    about = "Per-node clique counts and Ramsey number of a graph and its complement"
)]
struct Cli {
    /// Edge list to analyze; a random graph is generated when omitted
    #[clap(long)]
    input: Option<String>,

    /// Number of nodes of the random graph
    #[clap(long, default_value = "10")]
    nodes: usize,

    /// Exact number of edges of the random graph
    #[clap(long, conflicts_with = "probability")]
    edges: Option<usize>,

    /// Edge probability of the random graph (Erdős–Rényi)
    #[clap(long)]
    probability: Option<f64>,

    /// Seed for random graph generation
    #[clap(long)]
    seed: Option<u64>,

    /// JSON configuration file; flags below override it
    #[clap(long)]
    config: Option<String>,

    /// Clique engine: dense or inductive
    #[clap(long)]
    engine: Option<EngineKind>,

    /// Largest clique size to compute
    #[clap(long)]
    max_clique_size: Option<usize>,

    /// Include normalized counts in the output
    #[clap(long)]
    normalized: bool,

    /// Reject duplicate edges in the input
    #[clap(long)]
    strict: bool,

    /// Directory for analysis.json
    #[clap(long)]
    output_dir: Option<String>,

    /// Write the analyzed graph as an edge list
    #[clap(long)]
    save_graph: Option<String>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("loading configuration {}", path))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(engine) = args.engine {
        config.engine = engine;
    }
    if args.max_clique_size.is_some() {
        config.max_clique_size = args.max_clique_size;
    }
    config.normalize |= args.normalized;
    config.strict |= args.strict;

    let graph = load_graph(&args, config.strict)?;
    log::info!(
        "Analyzing graph with {} nodes and {} edges using the {} engine",
        graph.node_count(),
        graph.edge_count(),
        config.engine
    );

    if let Some(path) = &args.save_graph {
        storage::save_edge_list(&graph, path)?;
    }

    let normalized = config.normalize;
    let analyzer = RamseyAnalyzer::new(config)?;
    let analysis = analyzer.analyze(&graph);

    log::info!("Largest clique in graph: {}", analysis.graph_counts.clique_number());
    log::info!("Largest clique in complement: {}", analysis.complement_counts.clique_number());
    log::info!("Ramsey number: {}", analysis.ramsey_number);
    log::info!("Balance score: {}", analysis.balance_score);

    match &args.output_dir {
        Some(dir) => storage::save_analysis(&analysis, normalized, dir)?,
        None => println!(
            "{}",
            serde_json::to_string_pretty(&storage::analysis_to_json(&analysis, normalized))?
        ),
    }

    Ok(())
}

fn load_graph(args: &Cli, strict: bool) -> Result<Graph> {
    if let Some(path) = &args.input {
        return storage::load_edge_list(path, strict)
            .with_context(|| format!("reading edge list {}", path));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Generating random graph on {} nodes (seed {})", args.nodes, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    match args.probability {
        Some(p) if !(0.0..=1.0).contains(&p) => bail!("edge probability {} is outside [0, 1]", p),
        Some(p) => Ok(erdos_renyi(args.nodes, p, &mut rng)),
        None => Ok(random_graph(args.nodes, args.edges, &mut rng)),
    }
}
