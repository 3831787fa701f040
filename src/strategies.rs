//! One-shot sampling entry points.
//!
//! Thin wrappers over the scorer types for callers that run a single query
//! round and do not need to hold a scorer value. Each returns pool indices
//! in priority order, trimmed to the budget.

use crate::budget::Budget;
use crate::error::Result;
use crate::scorer::{Scorer, ScorerContext};
use crate::scorers::{LeastConfidenceScorer, MaxNormLogProbScorer, RandomScorer};
use crate::sentence::Sentence;

/// Select a batch uniformly at random (seed from the config).
pub fn random_sampling(
    sentences: &mut [Sentence],
    budget: Budget,
    ctx: &ScorerContext<'_>,
) -> Result<Vec<usize>> {
    RandomScorer::new().select(sentences, budget, ctx)
}

/// Select the batch the tagger is least confident about.
pub fn least_confidence_sampling(
    sentences: &mut [Sentence],
    budget: Budget,
    ctx: &ScorerContext<'_>,
) -> Result<Vec<usize>> {
    LeastConfidenceScorer::new().select(sentences, budget, ctx)
}

/// Select the batch with the lowest length-normalized log-probability.
pub fn max_norm_log_prob_sampling(
    sentences: &mut [Sentence],
    budget: Budget,
    ctx: &ScorerContext<'_>,
) -> Result<Vec<usize>> {
    MaxNormLogProbScorer::new().select(sentences, budget, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScorerConfig;
    use crate::tagger::{MockEmbeddings, MockTagger};

    #[test]
    fn test_zero_budget_still_returns_one_sentence() {
        let tagger = MockTagger::new().with_log_probs(vec![-0.2, -0.1]);
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::new().with_seed(0);
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        let mut pool: Vec<Sentence> = (0..2).map(|_| Sentence::from_text("a b")).collect();
        assert_eq!(random_sampling(&mut pool, Budget::Sentences(0), &ctx).unwrap().len(), 1);
        assert_eq!(
            least_confidence_sampling(&mut pool, Budget::Sentences(0), &ctx).unwrap(),
            vec![0]
        );
        assert_eq!(
            max_norm_log_prob_sampling(&mut pool, Budget::Sentences(0), &ctx).unwrap(),
            vec![0]
        );
    }
}
