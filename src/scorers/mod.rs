//! The six selection strategies.
//!
//! | Scorer | Signal | Rank |
//! |--------|--------|------|
//! | [`RandomScorer`] | none (seeded permutation) | — |
//! | [`LeastConfidenceScorer`] | `1 − exp(log_prob)` | descending |
//! | [`MaxNormLogProbScorer`] | `log_prob / token_count` | ascending |
//! | [`DistributeSimilarityScorer`] | per-label pairwise entity similarity | ascending |
//! | [`ClusterSimilarityScorer`] | within-cluster entity similarity | ascending |
//! | [`CombinedMultipleScorer`] | one uncertainty + one diversity scorer | per mode |
//!
//! Diversity scorers rank ascending because their scores measure
//! *redundancy*: a sentence whose entities closely resemble entities seen
//! elsewhere in the pool scores high and is queried last.

mod cluster;
mod combined;
mod distribute;
mod random;
mod uncertainty;

pub use cluster::ClusterSimilarityScorer;
pub use combined::CombinedMultipleScorer;
pub use distribute::DistributeSimilarityScorer;
pub use random::RandomScorer;
pub use uncertainty::{LeastConfidenceScorer, MaxNormLogProbScorer};

use crate::entity::{Entities, Entity};
use crate::error::{Error, Result};
use crate::scorer::ScorerContext;
use crate::sentence::Sentence;

/// Extract the pool's predicted entities with their embeddings.
///
/// Runs the embedding provider over the pool, then collects one [`Entity`]
/// per predicted span in pool order. Requires prediction to have run; a
/// span still lacking a vector after embedding is a precondition violation
/// ([`Error::MissingEmbedding`]) and propagates to the caller.
///
/// An empty result is valid: it means the pool holds no predicted entities
/// and the calling scorer degrades to random selection.
pub fn get_entities(sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Entities> {
    ctx.embeddings.embed(sentences)?;

    let mut entities = Entities::new();
    for (sentence_id, sentence) in sentences.iter().enumerate() {
        for (id, span) in sentence.spans.iter().enumerate() {
            let vector = span
                .vector
                .clone()
                .ok_or_else(|| Error::missing_embedding(sentence_id, span.text.clone()))?;
            entities.push(Entity::new(id, sentence_id, span.label.clone(), vector));
        }
    }
    Ok(entities)
}

/// Spread per-sentence diversity values into a full pool score vector.
/// Sentences with no entities keep a score of 0.0.
pub(crate) fn scores_from_diversities(
    pool_size: usize,
    diversities: &std::collections::BTreeMap<usize, f64>,
) -> Vec<f64> {
    let mut scores = vec![0.0; pool_size];
    for (&sentence_id, &score) in diversities {
        if sentence_id < pool_size {
            scores[sentence_id] = score;
        }
    }
    scores
}
