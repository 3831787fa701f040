//! Baseline scorer: a seeded uniform permutation of the pool.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Result;
use crate::scorer::{Scorer, ScorerContext, SortOrder};
use crate::sentence::Sentence;

/// Uniform random permutation of pool indices, fresh per call.
///
/// `None` draws from OS entropy; a fixed seed makes the ordering
/// reproducible. The diversity scorers reuse this to fall back to the exact
/// permutation random selection would have produced under the same seed.
pub(crate) fn permutation(n: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);
    indices
}

/// Selects sentences uniformly at random.
///
/// The baseline every informed strategy is measured against. Needs no model
/// signal: `predict` is a no-op and the tagger is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

impl RandomScorer {
    /// Create a random scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for RandomScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    fn predict(&self, _sentences: &mut [Sentence], _ctx: &ScorerContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Each sentence scores its position in a seeded permutation, so ranking
    /// ascending reproduces the permutation itself.
    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let order = permutation(sentences.len(), ctx.config.seed);
        let mut scores = vec![0.0; sentences.len()];
        for (position, &idx) in order.iter().enumerate() {
            scores[idx] = position as f64;
        }
        Ok(scores)
    }
}
