//! Diversity sampling by per-label entity similarity.

use std::collections::BTreeMap;

use crate::budget::{select_by_budget, Budget};
use crate::entity::Entities;
use crate::error::Result;
use crate::scorer::{rank_by_score, Scorer, ScorerContext, SortOrder};
use crate::scorers::{get_entities, random::permutation, scores_from_diversities};
use crate::sentence::Sentence;
use crate::similarity::similarity_matrix;

/// Per-sentence diversity from pairwise same-label similarity.
///
/// For each label, a symmetric cosine-similarity matrix is built over that
/// label's entities in stable order. An entity's contribution is the sum of
/// its similarities to lower-indexed entities of the same label, so each
/// unordered pair is counted exactly once across the pool. A sentence's
/// diversity is the sum of its entities' contributions divided by its entity
/// count.
pub(crate) fn sentence_diversities(entities: &Entities) -> BTreeMap<usize, f64> {
    let mut sums: BTreeMap<usize, (f64, usize)> = BTreeMap::new();

    for group in entities.group_by_label().values() {
        let vectors: Vec<&[f64]> = group.iter().map(|e| e.vector.as_slice()).collect();
        let matrix = similarity_matrix(&vectors);
        for (row, entity) in group.iter().enumerate() {
            let contribution: f64 = matrix[row][..row].iter().sum();
            let slot = sums.entry(entity.sentence_id).or_insert((0.0, 0));
            slot.0 += contribution;
            slot.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(sentence_id, (total, count))| (sentence_id, total / count as f64))
        .collect()
}

pub(crate) fn diversity_scores(pool_size: usize, entities: &Entities) -> Vec<f64> {
    scores_from_diversities(pool_size, &sentence_diversities(entities))
}

/// Selects sentences whose entities resemble the rest of the pool least.
///
/// A sentence full of entities similar to entities seen elsewhere scores
/// high and is queried last; rank is ascending. Requires embeddings on every
/// predicted span. A pool with no predicted entities degrades to seeded
/// random selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributeSimilarityScorer;

impl DistributeSimilarityScorer {
    /// Create a distribute-similarity scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for DistributeSimilarityScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let entities = get_entities(sentences, ctx)?;
        Ok(diversity_scores(sentences.len(), &entities))
    }

    fn select(
        &self,
        sentences: &mut [Sentence],
        budget: Budget,
        ctx: &ScorerContext<'_>,
    ) -> Result<Vec<usize>> {
        self.predict(sentences, ctx)?;
        let entities = get_entities(sentences, ctx)?;
        if entities.is_empty() {
            log::info!("pool has no predicted entities; falling back to random selection");
            let ranking = permutation(sentences.len(), ctx.config.seed);
            return Ok(select_by_budget(sentences, &ranking, budget));
        }

        let scores = diversity_scores(sentences.len(), &entities);
        let ranking = rank_by_score(&scores, self.sort_order());
        Ok(select_by_budget(sentences, &ranking, budget))
    }
}
