//! Deterministic k-means clustering over entity embeddings.
//!
//! Lloyd's algorithm with farthest-first initialization: the first center is
//! the vector with the largest squared norm, each further center is the
//! vector farthest from its nearest chosen center, and all ties break toward
//! the lowest index. The same inputs therefore always produce the same
//! centroids and assignments, which is what lets cluster-based scoring be
//! reproduced in tests without a seeded RNG.

use crate::config::KMeansParams;
use crate::error::{Error, Result};

/// Cluster a set of vectors.
///
/// Returns `(centroids, assignments)`: one centroid per cluster, and for
/// each input vector the index of its cluster. The cluster count is capped
/// at the number of input vectors.
///
/// # Errors
///
/// Fails with [`Error::MissingParam`] when `params.n_clusters` is absent,
/// and with [`Error::InvalidInput`] when there are no vectors to cluster.
pub fn kmeans(vectors: &[&[f64]], params: &KMeansParams) -> Result<(Vec<Vec<f64>>, Vec<usize>)> {
    let n_clusters = params.n_clusters.ok_or(Error::MissingParam("n_clusters"))?;
    if vectors.is_empty() {
        return Err(Error::invalid_input("no vectors to cluster"));
    }
    if n_clusters == 0 {
        return Err(Error::invalid_input("n_clusters must be at least 1"));
    }

    let k = n_clusters.min(vectors.len());
    let mut centroids = initial_centroids(vectors, k);
    let mut assignments = vec![0usize; vectors.len()];

    for _ in 0..params.max_iterations {
        let mut changed = false;
        for (i, vector) in vectors.iter().enumerate() {
            let nearest = nearest_centroid(vector, &centroids);
            if assignments[i] != nearest {
                assignments[i] = nearest;
                changed = true;
            }
        }

        let dim = vectors[0].len();
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&[f64]> = vectors
                .iter()
                .zip(&assignments)
                .filter(|(_, &a)| a == c)
                .map(|(v, _)| *v)
                .collect();
            // An empty cluster keeps its previous center.
            if members.is_empty() {
                continue;
            }
            let mut mean = vec![0.0; dim];
            for member in &members {
                for (m, x) in mean.iter_mut().zip(member.iter()) {
                    *m += x;
                }
            }
            for m in mean.iter_mut() {
                *m /= members.len() as f64;
            }
            *centroid = mean;
        }

        if !changed {
            break;
        }
    }

    // One final assignment pass so the returned labels match the returned
    // centroids even when the loop exits on max_iterations.
    for (i, vector) in vectors.iter().enumerate() {
        assignments[i] = nearest_centroid(vector, &centroids);
    }

    Ok((centroids, assignments))
}

/// Farthest-first seeding, ties toward the lowest index.
fn initial_centroids(vectors: &[&[f64]], k: usize) -> Vec<Vec<f64>> {
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);

    let mut first = 0;
    let mut first_norm = f64::NEG_INFINITY;
    for (i, vector) in vectors.iter().enumerate() {
        let norm = squared_norm(vector);
        if norm > first_norm {
            first_norm = norm;
            first = i;
        }
    }
    centroids.push(vectors[first].to_vec());

    while centroids.len() < k {
        let mut best = 0;
        let mut best_dist = f64::NEG_INFINITY;
        for (i, vector) in vectors.iter().enumerate() {
            let nearest = centroids
                .iter()
                .map(|c| squared_distance(vector, c))
                .fold(f64::INFINITY, f64::min);
            if nearest > best_dist {
                best_dist = nearest;
                best = i;
            }
        }
        centroids.push(vectors[best].to_vec());
    }

    centroids
}

fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut nearest = 0;
    let mut nearest_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(vector, centroid);
        if dist < nearest_dist {
            nearest_dist = dist;
            nearest = c;
        }
    }
    nearest
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn squared_norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum()
}
