//! Graph and results persistence module
//!
//! Edge lists are plain text:
//!
//! ```text
//! # optional comments
//! n 5
//! 0 1
//! 1 2
//! ```

use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::clique::CliqueCounts;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder, GraphRecord, DEFAULT_MAX_NODES};
use crate::ramsey::{normalize, RamseyAnalysis};

/// Parse an edge list, validating every edge against the declared node count.
///
/// Headers declaring more than `DEFAULT_MAX_NODES` nodes are rejected before
/// anything is allocated.
pub fn read_edge_list<R: BufRead>(reader: R, strict: bool) -> Result<Graph> {
    let mut builder: Option<GraphBuilder> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match builder.as_mut() {
            None => match fields.as_slice() {
                ["n", count] => {
                    let node_count = parse_index(count, line_number)?;
                    if node_count > DEFAULT_MAX_NODES {
                        return Err(Error::Parse {
                            line: line_number,
                            reason: format!(
                                "node count {} exceeds the limit of {}",
                                node_count, DEFAULT_MAX_NODES
                            ),
                        });
                    }
                    builder = Some(GraphBuilder::new(node_count).strict(strict));
                }
                _ => {
                    return Err(Error::Parse {
                        line: line_number,
                        reason: "expected node count header 'n <count>'".to_string(),
                    });
                }
            },
            Some(edges) => match fields.as_slice() {
                [u, v] => {
                    let u = parse_index(u, line_number)?;
                    let v = parse_index(v, line_number)?;
                    edges.add_edge(u, v)?;
                }
                _ => {
                    return Err(Error::Parse {
                        line: line_number,
                        reason: format!("expected two node indices, found '{}'", line),
                    });
                }
            },
        }
    }

    builder.map(GraphBuilder::build).ok_or_else(|| Error::Parse {
        line: 0,
        reason: "missing node count header".to_string(),
    })
}

fn parse_index(field: &str, line: usize) -> Result<usize> {
    field.parse().map_err(|_| Error::Parse {
        line,
        reason: format!("'{}' is not a node index", field),
    })
}

pub fn write_edge_list<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    writeln!(writer, "n {}", graph.node_count())?;
    for (u, v) in graph.edges() {
        writeln!(writer, "{} {}", u, v)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_edge_list<P: AsRef<Path>>(path: P, strict: bool) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());
    let graph = read_edge_list(BufReader::new(File::open(path)?), strict)?;
    log::info!("Loaded graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
    Ok(graph)
}

pub fn save_edge_list<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing edge list: {}", path.display());
    write_edge_list(graph, BufWriter::new(File::create(path)?))
}

/// Compact binary snapshot of a graph
pub fn save_graph_snapshot<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let bytes = bincode::serialize(graph)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a snapshot, rebuilding the graph so corrupt files surface as `Error::InvalidGraph`
pub fn load_graph_snapshot<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let bytes = fs::read(path)?;
    let record: GraphRecord = bincode::deserialize(&bytes)?;
    Ok(Graph::try_from(record)?)
}

/// JSON document describing one analysis
pub fn analysis_to_json(analysis: &RamseyAnalysis, normalized: bool) -> serde_json::Value {
    let mut value = json!({
        "engine": analysis.engine,
        "node_count": analysis.node_count,
        "ramsey_number": analysis.ramsey_number,
        "balance_score": analysis.balance_score,
        "max_clique_size": analysis.graph_counts.max_clique_size(),
        "graph": {
            "clique_number": analysis.graph_counts.clique_number(),
            "counts": analysis.graph_counts.to_rows(),
        },
        "complement": {
            "clique_number": analysis.complement_counts.clique_number(),
            "counts": analysis.complement_counts.to_rows(),
        },
    });

    if normalized {
        value["graph"]["normalized"] = json!(normalized_rows(&analysis.graph_counts));
        value["complement"]["normalized"] = json!(normalized_rows(&analysis.complement_counts));
    }

    value
}

fn normalized_rows(counts: &CliqueCounts) -> Vec<Vec<f64>> {
    normalize(counts).outer_iter().map(|row| row.to_vec()).collect()
}

/// Save an analysis as `analysis.json` in the specified directory
pub fn save_analysis(analysis: &RamseyAnalysis, normalized: bool, output_dir: &str) -> Result<()> {
    log::info!("Saving analysis to {}", output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("analysis.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&analysis_to_json(analysis, normalized))?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidGraphError;
    use std::io::Cursor;

    #[test]
    fn parses_comments_and_edges() {
        let text = "# square\n\nn 4\n0 1\n1 2\n2 3\n3 0\n";
        let graph = read_edge_list(Cursor::new(text), false).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge(0, 3));
    }

    #[test]
    fn reports_line_numbers() {
        let err = read_edge_list(Cursor::new("n 3\n0 1\n1 x\n"), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));

        let err = read_edge_list(Cursor::new("0 1\n"), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = read_edge_list(Cursor::new(""), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 0, .. }));
    }

    #[test]
    fn oversized_headers_are_rejected() {
        let err = read_edge_list(Cursor::new("# huge\nn 18446744073709551615\n"), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let header = format!("n {}\n", DEFAULT_MAX_NODES + 1);
        let err = read_edge_list(Cursor::new(header), false).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn invalid_edges_surface_as_graph_errors() {
        let err = read_edge_list(Cursor::new("n 3\n1 1\n"), false).unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(InvalidGraphError::SelfLoop(1))));

        let err = read_edge_list(Cursor::new("n 3\n0 1\n1 0\n"), true).unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(InvalidGraphError::DuplicateEdge(1, 0))));
    }

    #[test]
    fn written_edge_list_reads_back() {
        let graph = Graph::from_edges(6, &[(0, 5), (1, 2), (2, 4)]).unwrap();
        let mut buffer = Vec::new();
        write_edge_list(&graph, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "n 6\n0 5\n1 2\n2 4\n");
        assert_eq!(read_edge_list(Cursor::new(buffer), true).unwrap(), graph);
    }
}
