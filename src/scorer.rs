//! The scorer contract shared by all selection strategies.
//!
//! A scorer turns a pool of unlabeled sentences into an ordered annotation
//! batch in three steps: predict (run the tagger where the strategy needs
//! model output), score (one float per sentence), and rank-and-trim (order
//! the pool by score and apply the query budget). [`Scorer::select`] is the
//! orchestration entry point; strategies that cannot express themselves as
//! a plain score vector (random fallback, combined composition) override it.

use crate::budget::{select_by_budget, Budget};
use crate::config::ScorerConfig;
use crate::error::Result;
use crate::sentence::Sentence;
use crate::tagger::{Embeddings, Tagger};

/// Everything a scoring call may consume besides the pool itself.
///
/// Each scorer variant reads only the parts it needs; supplying the rest is
/// always accepted and never an error.
pub struct ScorerContext<'a> {
    /// The sequence tagging model.
    pub tagger: &'a dyn Tagger,
    /// The span embedding provider.
    pub embeddings: &'a dyn Embeddings,
    /// Tag layer to predict, e.g. "ner".
    pub tag_type: &'a str,
    /// Scorer parameters.
    pub config: &'a ScorerConfig,
}

/// Direction a score vector is ranked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest score first.
    Ascending,
    /// Highest score first.
    Descending,
}

/// Order pool indices by score. The sort is stable: ties keep pool order.
#[must_use]
pub fn rank_by_score(scores: &[f64], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        let cmp = scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    indices
}

/// A sentence selection strategy.
pub trait Scorer {
    /// Direction [`Scorer::score`]'s output is ranked in.
    fn sort_order(&self) -> SortOrder;

    /// Run model inference over the pool, attaching predictions as a side
    /// effect. Strategies that need no model signal make this a no-op.
    fn predict(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<()> {
        ctx.tagger.predict(sentences, ctx.tag_type)
    }

    /// Compute one score per pool sentence. Requires [`Scorer::predict`] to
    /// have run for strategies that consume model output.
    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>>;

    /// Select the next annotation batch: predict, score, rank, and trim to
    /// the budget. Returns pool indices in priority order.
    fn select(
        &self,
        sentences: &mut [Sentence],
        budget: Budget,
        ctx: &ScorerContext<'_>,
    ) -> Result<Vec<usize>> {
        self.predict(sentences, ctx)?;
        let scores = self.score(sentences, ctx)?;
        let ranking = rank_by_score(&scores, self.sort_order());
        Ok(select_by_budget(sentences, &ranking, budget))
    }
}
