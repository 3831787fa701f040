//! Uncertainty sampling: score sentences by how unsure the tagger is.

use crate::error::Result;
use crate::scorer::{Scorer, ScorerContext, SortOrder};
use crate::sentence::Sentence;

/// Least-confidence sampling.
///
/// `score = 1 − exp(log_probability)`, i.e. one minus the probability the
/// tagger assigns its own best tag sequence. High scores mean low confidence,
/// so the ranking is descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConfidenceScorer;

impl LeastConfidenceScorer {
    /// Create a least-confidence scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for LeastConfidenceScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let log_probs = ctx.tagger.log_probability(sentences)?;
        Ok(log_probs.iter().map(|lp| 1.0 - lp.exp()).collect())
    }
}

/// Maximum normalized log-probability sampling.
///
/// `score = log_probability / token_count`, which removes the length bias of
/// raw sequence probabilities (longer sequences are always less probable).
/// The most negative normalized score is the least confident, so the ranking
/// is ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxNormLogProbScorer;

impl MaxNormLogProbScorer {
    /// Create a normalized log-probability scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for MaxNormLogProbScorer {
    fn sort_order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    fn score(&self, sentences: &mut [Sentence], ctx: &ScorerContext<'_>) -> Result<Vec<f64>> {
        let log_probs = ctx.tagger.log_probability(sentences)?;
        Ok(log_probs
            .iter()
            .zip(sentences.iter())
            .map(|(lp, s)| lp / s.token_count().max(1) as f64)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use crate::config::ScorerConfig;
    use crate::tagger::{MockEmbeddings, MockTagger};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn pool(token_counts: &[usize]) -> Vec<Sentence> {
        token_counts
            .iter()
            .map(|&n| Sentence::new((0..n).map(|i| format!("t{i}")).collect::<Vec<_>>()))
            .collect()
    }

    #[test]
    fn test_least_confidence_formula() {
        let tagger = MockTagger::new().with_log_probs(vec![-0.4, -0.3, -0.2, -0.1]);
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::default();
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        let mut sentences = pool(&[5, 5, 5, 5]);
        let scores = LeastConfidenceScorer::new().score(&mut sentences, &ctx).unwrap();

        for (score, lp) in scores.iter().zip([-0.4f64, -0.3, -0.2, -0.1]) {
            assert_close(*score, 1.0 - lp.exp());
        }
    }

    #[test]
    fn test_least_confidence_selects_least_probable_first() {
        // Ascending log probs: sentence 0 is least confident.
        let tagger = MockTagger::new().with_log_probs(vec![-0.4, -0.3, -0.2, -0.1]);
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::default();
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        let mut sentences = pool(&[5, 5, 5, 5]);
        let selected = LeastConfidenceScorer::new()
            .select(&mut sentences, Budget::Sentences(4), &ctx)
            .unwrap();
        assert_eq!(selected, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_max_norm_log_prob_normalizes_by_length() {
        let tagger = MockTagger::new().with_log_probs(vec![-2.0, -2.0]);
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::default();
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        // Same raw log prob; the shorter sentence is more surprising per
        // token and must be queried first under ascending rank.
        let mut sentences = pool(&[4, 8]);
        let scores = MaxNormLogProbScorer::new().score(&mut sentences, &ctx).unwrap();
        assert_close(scores[0], -0.5);
        assert_close(scores[1], -0.25);

        let selected = MaxNormLogProbScorer::new()
            .select(&mut sentences, Budget::Sentences(1), &ctx)
            .unwrap();
        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn test_uncertainty_propagates_inference_failure() {
        let tagger = MockTagger::new(); // no log probs configured or attached
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::default();
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        let mut sentences = pool(&[3]);
        assert!(LeastConfidenceScorer::new().score(&mut sentences, &ctx).is_err());
        assert!(MaxNormLogProbScorer::new().score(&mut sentences, &ctx).is_err());
    }
}
