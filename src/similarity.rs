//! Vector similarity utilities for entity comparison and clustering.
//!
//! Diversity scoring works on cosine similarity between span embeddings:
//! pairwise within a label for distribution scoring, and within a cluster
//! for cluster scoring.

/// Cosine similarity between two dense vectors.
///
/// Returns a value in [-1.0, 1.0]. Mismatched dimensions or a zero-norm
/// vector yield 0.0 rather than an error: such pairs carry no usable
/// similarity signal.
///
/// # Examples
///
/// ```
/// use seqsel::similarity::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-12);
/// assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-12);
/// assert!((cosine_similarity(&[0.1, 0.1], &[-0.1, -0.1]) + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Symmetric cosine-similarity matrix over a set of vectors.
///
/// Entry `[i][j]` is the similarity between vectors `i` and `j`; the
/// diagonal is exactly 1.0.
#[must_use]
pub fn similarity_matrix(vectors: &[&[f64]]) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let sim = cosine_similarity(vectors[i], vectors[j]);
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }
    matrix
}
