//! Composition of one uncertainty scorer with one diversity scorer.

use crate::budget::{select_by_budget, Budget};
use crate::config::{CombinedType, ScorerType};
use crate::error::{Error, Result};
use crate::scorer::{rank_by_score, Scorer, ScorerContext, SortOrder};
use crate::scorers::{cluster, distribute, get_entities};
use crate::scorers::{LeastConfidenceScorer, MaxNormLogProbScorer};
use crate::sentence::Sentence;

/// Composes an uncertainty scorer with a diversity scorer.
///
/// The pair is picked by `scorer_type` (`lc_ds`, `lc_cs`, `mnlp_ds`,
/// `mnlp_cs`) and the composition mode by `combined_type`:
///
/// - **series**: the uncertainty half ranks the pool, a candidate set twice
///   the final budget survives, and the diversity half re-ranks the
///   candidates before budget selection.
/// - **parallel**: both score vectors are min-max normalized, oriented so
///   higher means higher annotation priority, and blended with the
///   configured uncertainty weight into a single descending ranking.
///
/// A pool with no predicted entities leaves the diversity half uncomputable;
/// the combiner degrades to the pure uncertainty ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedMultipleScorer;

impl CombinedMultipleScorer {
    /// Create a combined scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate the composition config. `scorer_type` is checked before
    /// `combined_type`.
    fn configured(ctx: &ScorerContext<'_>) -> Result<(ScorerType, CombinedType)> {
        let scorer_type: ScorerType = ctx
            .config
            .scorer_type
            .as_deref()
            .ok_or(Error::MissingParam("scorer_type"))?
            .parse()?;
        let combined_type: CombinedType = ctx
            .config
            .combined_type
            .as_deref()
            .ok_or(Error::MissingParam("combined_type"))?
            .parse()?;
        Ok((scorer_type, combined_type))
    }

    fn uncertainty_half(scorer_type: ScorerType) -> &'static dyn Scorer {
        match scorer_type {
            ScorerType::LcDs | ScorerType::LcCs => &LeastConfidenceScorer,
            ScorerType::MnlpDs | ScorerType::MnlpCs => &MaxNormLogProbScorer,
        }
    }

    fn diversity_half(
        scorer_type: ScorerType,
        sentences: &mut [Sentence],
        ctx: &ScorerContext<'_>,
    ) -> Result<Option<Vec<f64>>> {
        let mut entities = get_entities(sentences, ctx)?;
        if entities.is_empty() {
            return Ok(None);
        }
        if scorer_type.uses_clustering() {
            let params = ctx.config.kmeans.ok_or(Error::MissingParam("kmeans"))?;
            Ok(Some(cluster::diversity_scores(
                sentences.len(),
                &mut entities,
                &params,
            )?))
        } else {
            Ok(Some(distribute::diversity_scores(sentences.len(), &entities)))
        }
    }
}

/// A budget twice the size of the final one, used to gate the series
/// candidate set.
fn doubled(budget: Budget) -> Budget {
    match budget {
        Budget::Sentences(n) => Budget::Sentences(2 * n.max(1)),
        Budget::Tokens(t) => Budget::Tokens(2 * t),
    }
}

/// Min-max normalize a score vector into [0, 1]. A constant vector maps to
/// 0.5 everywhere so it neither boosts nor penalizes any sentence.
fn normalize(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return vec![0.5; scores.len()];
    }
    scores.iter().map(|s| (s - min) / range).collect()
}

/// Orient a normalized score so that higher means higher priority.
fn priority(normalized: f64, order: SortOrder) -> f64 {
    match order {
        SortOrder::Descending => normalized,
        SortOrder::Ascending => 1.0 - normalized,
    }
}

impl Scorer for CombinedMultipleScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    /// The parallel-mode blend: uncertainty and diversity priorities mixed
    /// by the configured weight. Series mode never consults a single score
    /// vector and is handled entirely in [`Scorer::select`].
    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let (scorer_type, _) = Self::configured(ctx)?;
        let uncertainty = Self::uncertainty_half(scorer_type);
        let u_scores = uncertainty.score(sentences, ctx)?;
        let u_norm = normalize(&u_scores);

        let weight = ctx.config.uncertainty_weight;
        match Self::diversity_half(scorer_type, sentences, ctx)? {
            Some(d_scores) => {
                let d_norm = normalize(&d_scores);
                Ok(u_norm
                    .iter()
                    .zip(&d_norm)
                    .map(|(&u, &d)| {
                        weight * priority(u, uncertainty.sort_order())
                            + (1.0 - weight) * priority(d, SortOrder::Ascending)
                    })
                    .collect())
            }
            None => {
                log::info!("pool has no predicted entities; using pure uncertainty ranking");
                Ok(u_norm
                    .iter()
                    .map(|&u| priority(u, uncertainty.sort_order()))
                    .collect())
            }
        }
    }

    fn select(
        &self,
        sentences: &mut [Sentence],
        budget: Budget,
        ctx: &ScorerContext<'_>,
    ) -> Result<Vec<usize>> {
        let (scorer_type, combined_type) = Self::configured(ctx)?;
        self.predict(sentences, ctx)?;

        match combined_type {
            CombinedType::Parallel => {
                let priorities = self.score(sentences, ctx)?;
                let ranking = rank_by_score(&priorities, self.sort_order());
                Ok(select_by_budget(sentences, &ranking, budget))
            }
            CombinedType::Series => {
                let uncertainty = Self::uncertainty_half(scorer_type);
                let u_scores = uncertainty.score(sentences, ctx)?;
                let u_ranking = rank_by_score(&u_scores, uncertainty.sort_order());

                match Self::diversity_half(scorer_type, sentences, ctx)? {
                    Some(d_scores) => {
                        let mut candidates =
                            select_by_budget(sentences, &u_ranking, doubled(budget));
                        // Stable sort: diversity ties keep uncertainty order.
                        candidates.sort_by(|&a, &b| {
                            d_scores[a]
                                .partial_cmp(&d_scores[b])
                                .unwrap_or(std::cmp::Ordering::Equal)
                        });
                        Ok(select_by_budget(sentences, &candidates, budget))
                    }
                    None => {
                        log::info!(
                            "pool has no predicted entities; using pure uncertainty ranking"
                        );
                        Ok(select_by_budget(sentences, &u_ranking, budget))
                    }
                }
            }
        }
    }
}
