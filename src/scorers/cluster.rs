//! Diversity sampling by within-cluster entity similarity.

use std::collections::BTreeMap;

use crate::budget::{select_by_budget, Budget};
use crate::config::KMeansParams;
use crate::entity::Entities;
use crate::error::{Error, Result};
use crate::kmeans::kmeans;
use crate::scorer::{rank_by_score, Scorer, ScorerContext, SortOrder};
use crate::scorers::{get_entities, random::permutation, scores_from_diversities};
use crate::sentence::Sentence;
use crate::similarity::cosine_similarity;

/// Per-sentence diversity from cluster cohesion.
///
/// Each entity scores the minimum cosine similarity between itself and the
/// members of its own cluster (itself included, so a singleton cluster
/// scores 1). A sentence's diversity is the mean over its entities. Entities
/// deep inside a tight cluster score high; entities at the fringe of a loose
/// cluster score low and are queried first under ascending rank.
///
/// Valid only after cluster assignments have been written.
pub(crate) fn sentence_diversities(entities: &Entities) -> BTreeMap<usize, f64> {
    let mut sums: BTreeMap<usize, (f64, usize)> = BTreeMap::new();

    for group in entities.group_by_cluster().values() {
        for entity in group {
            let cohesion = group
                .iter()
                .map(|member| cosine_similarity(&entity.vector, &member.vector))
                .fold(f64::INFINITY, f64::min);
            let slot = sums.entry(entity.sentence_id).or_insert((0.0, 0));
            slot.0 += cohesion;
            slot.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(sentence_id, (total, count))| (sentence_id, total / count as f64))
        .collect()
}

/// Cluster the entities and compute the pool score vector.
pub(crate) fn diversity_scores(
    pool_size: usize,
    entities: &mut Entities,
    params: &KMeansParams,
) -> Result<Vec<f64>> {
    let assignments = {
        let vectors = entities.vectors();
        kmeans(&vectors, params)?.1
    };
    entities.assign_clusters(&assignments);
    Ok(scores_from_diversities(pool_size, &sentence_diversities(entities)))
}

/// Selects sentences whose entities sit loosest in the embedding clusters.
///
/// Runs deterministic k-means over all entity vectors, then scores cluster
/// cohesion per sentence. Requires clustering parameters in the config and
/// embeddings on every predicted span. A pool with no predicted entities
/// degrades to seeded random selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterSimilarityScorer;

impl ClusterSimilarityScorer {
    /// Create a cluster-similarity scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for ClusterSimilarityScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let params = ctx.config.kmeans.ok_or(Error::MissingParam("kmeans"))?;
        let mut entities = get_entities(sentences, ctx)?;
        diversity_scores(sentences.len(), &mut entities, &params)
    }

    fn select(
        &self,
        sentences: &mut [Sentence],
        budget: Budget,
        ctx: &ScorerContext<'_>,
    ) -> Result<Vec<usize>> {
        let params = ctx.config.kmeans.ok_or(Error::MissingParam("kmeans"))?;
        self.predict(sentences, ctx)?;
        let mut entities = get_entities(sentences, ctx)?;
        if entities.is_empty() {
            log::info!("pool has no predicted entities; falling back to random selection");
            let ranking = permutation(sentences.len(), ctx.config.seed);
            return Ok(select_by_budget(sentences, &ranking, budget));
        }

        let scores = diversity_scores(sentences.len(), &mut entities, &params)?;
        let ranking = rank_by_score(&scores, self.sort_order());
        Ok(select_by_budget(sentences, &ranking, budget))
    }
}
