//! Inductive per-node clique engine.
//!
//! For each node `v` and size `k` the engine keeps the set of canonical
//! (sorted) `(k-1)`-tuples `C` such that `{v} ∪ C` is a k-clique. Level 2 is
//! the neighbour list. A `(k+1)`-clique through `v` is found by taking a
//! neighbour `u` and a tuple `C` present in both `v`'s and `u`'s k-level sets:
//! then `{v} ∪ C`, `{u} ∪ C` and the edge `(v, u)` make `{v, u} ∪ C` a clique,
//! and `sort(C + [u])` joins `v`'s next level.

use std::collections::HashSet;

use crate::clique::{effective_cap, CliqueCounts, CliqueEngine};
use crate::graph::Graph;

/// Sorted node indices naming the other members of a clique
pub type Combination = Vec<u32>;

/// Clique-membership sets of one level, indexed by node
pub type Level = Vec<HashSet<Combination>>;

#[derive(Debug, Clone, Copy, Default)]
pub struct InductiveCliqueEngine;

impl InductiveCliqueEngine {
    /// Level 2: every neighbour as a singleton tuple
    pub fn base_level(graph: &Graph) -> Level {
        (0..graph.node_count())
            .map(|v| graph.neighbors(v).iter().map(|&u| vec![u]).collect())
            .collect()
    }

    /// Grow level k into level k+1
    pub fn next_level(graph: &Graph, level: &Level) -> Level {
        (0..graph.node_count())
            .map(|v| {
                let mut grown = HashSet::new();
                for &u in graph.neighbors(v) {
                    for combination in level[v].intersection(&level[u as usize]) {
                        let position = combination.partition_point(|&w| w < u);
                        let mut extended = Vec::with_capacity(combination.len() + 1);
                        extended.extend_from_slice(&combination[..position]);
                        extended.push(u);
                        extended.extend_from_slice(&combination[position..]);
                        // several (neighbour, tuple) pairs reach the same clique
                        grown.insert(extended);
                    }
                }
                grown
            })
            .collect()
    }

    /// Membership sets for one clique size, or `None` when `clique_size < 2`
    pub fn memberships(graph: &Graph, clique_size: usize) -> Option<Level> {
        if clique_size < 2 {
            return None;
        }
        let mut level = Self::base_level(graph);
        for _ in 2..clique_size {
            if level.iter().all(HashSet::is_empty) {
                break;
            }
            level = Self::next_level(graph, &level);
        }
        Some(level)
    }

    /// Every distinct clique of the given size as a sorted node list
    pub fn enumerate_cliques(graph: &Graph, clique_size: usize) -> Vec<Combination> {
        let Some(level) = Self::memberships(graph, clique_size) else {
            return Vec::new();
        };

        // report each clique from its smallest member only
        let mut cliques: Vec<Combination> = level
            .iter()
            .enumerate()
            .flat_map(|(v, set)| {
                set.iter()
                    .filter(move |others| others.first().map_or(false, |&w| w as usize > v))
                    .map(move |others| {
                        let mut clique = Vec::with_capacity(others.len() + 1);
                        clique.push(v as u32);
                        clique.extend_from_slice(others);
                        clique
                    })
            })
            .collect();
        cliques.sort_unstable();
        cliques
    }
}

impl CliqueEngine for InductiveCliqueEngine {
    fn name(&self) -> &'static str {
        "inductive"
    }

    fn count_cliques(&self, graph: &Graph, max_clique_size: Option<usize>) -> CliqueCounts {
        let node_count = graph.node_count();
        let cap = effective_cap(graph, max_clique_size);
        let mut counts = CliqueCounts::new(node_count, cap);
        if cap < 2 {
            return counts;
        }

        // current level only; the next one replaces it once built
        let mut level = Self::base_level(graph);
        let mut clique_size = 2;
        loop {
            if level.iter().all(HashSet::is_empty) {
                log::debug!("No {}-cliques, stopping induction", clique_size);
                break;
            }
            counts.record_level(clique_size, level.iter().map(|set| set.len() as u64));
            if clique_size >= cap || clique_size >= node_count {
                break;
            }
            level = Self::next_level(graph, &level);
            clique_size += 1;
        }

        log::debug!(
            "Inductive engine: largest clique size {} on {} nodes",
            counts.clique_number(),
            node_count
        );
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_isolated() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn base_level_is_neighbourhood() {
        let level = InductiveCliqueEngine::base_level(&triangle_plus_isolated());
        assert!(level[0].contains(&vec![1]) && level[0].contains(&vec![2]));
        assert!(level[3].is_empty());
    }

    #[test]
    fn level_members_are_canonical_cliques() {
        let graph = Graph::complete(5);
        let level = InductiveCliqueEngine::memberships(&graph, 4).unwrap();
        for (v, set) in level.iter().enumerate() {
            assert_eq!(set.len(), 4);
            for others in set {
                assert_eq!(others.len(), 3);
                assert!(!others.contains(&(v as u32)));
                assert!(others.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn triangle_counts() {
        let counts = InductiveCliqueEngine.count_cliques(&triangle_plus_isolated(), None);
        for v in 0..3 {
            assert_eq!(counts.node_vector(v), vec![2, 1, 0]);
        }
        assert_eq!(counts.node_vector(3), vec![0, 0, 0]);
        assert_eq!(counts.clique_number(), 3);
    }

    #[test]
    fn enumerates_each_clique_once() {
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (3, 4)]).unwrap();
        assert_eq!(
            InductiveCliqueEngine::enumerate_cliques(&graph, 3),
            vec![vec![0, 1, 2], vec![1, 2, 3]]
        );
        assert!(InductiveCliqueEngine::enumerate_cliques(&graph, 4).is_empty());
        assert!(InductiveCliqueEngine::enumerate_cliques(&graph, 1).is_empty());
        assert_eq!(InductiveCliqueEngine::enumerate_cliques(&graph, 2).len(), 6);
    }

    #[test]
    fn zero_cap_computes_nothing() {
        let counts = InductiveCliqueEngine.count_cliques(&Graph::complete(3), Some(1));
        assert_eq!(counts.matrix().nrows(), 0);
        assert_eq!(counts.clique_number(), 1);
    }
}
