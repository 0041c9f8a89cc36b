//! Rescaling of raw clique counts into bounded features

use ndarray::Array2;
use statrs::function::factorial::binomial;

use crate::clique::CliqueCounts;

/// Divide each k-clique count by `C(N-1, k-1)`.
///
/// The result is the fraction of `(k-1)`-subsets of the other nodes that form
/// a clique together with the node, so it lies in `[0, 1]`. Sizes for which
/// no such subset exists map to 0.
pub fn normalize(counts: &CliqueCounts) -> Array2<f64> {
    let node_count = counts.node_count() as u64;
    let mut normalized = counts.matrix().mapv(|count| count as f64);

    for (row_index, mut row) in normalized.outer_iter_mut().enumerate() {
        let clique_size = row_index as u64 + 2;
        let coefficient = if node_count == 0 {
            0.0
        } else {
            binomial(node_count - 1, clique_size - 1)
        };

        if coefficient > 0.0 {
            row.mapv_inplace(|count| count / coefficient);
        } else {
            row.fill(0.0);
        }
    }

    normalized
}
