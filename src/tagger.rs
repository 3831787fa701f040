//! Collaborator contracts: the sequence tagger and the embedding provider.
//!
//! The scoring core does not train or run models itself; it consumes these
//! two narrow traits. Failures from either collaborator propagate unchanged
//! to the caller — the core performs no retry and no suppression.
//!
//! [`MockTagger`] and [`MockEmbeddings`] are exported so downstream test
//! suites (and this crate's own) can drive scorers without a real model.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::sentence::{Sentence, Span};

/// The underlying sequence tagging model.
pub trait Tagger {
    /// Run inference over the pool, attaching predicted spans and the
    /// sequence log-probability to each sentence as a side effect.
    fn predict(&self, sentences: &mut [Sentence], tag_type: &str) -> Result<()>;

    /// Natural-log joint probability of the predicted tag sequence, one per
    /// sentence, aligned by pool order. Requires `predict` to have run.
    fn log_probability(&self, sentences: &[Sentence]) -> Result<Vec<f64>>;
}

/// The span embedding provider.
pub trait Embeddings {
    /// Attach a dense vector to every predicted span in the pool.
    fn embed(&self, sentences: &mut [Sentence]) -> Result<()>;
}

// =============================================================================
// Mock collaborators
// =============================================================================

/// A mock tagger that replays preset predictions.
///
/// `predict` attaches the configured spans and log-probabilities by pool
/// position; `log_probability` returns the preset values, falling back to
/// whatever is attached to the sentences.
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    log_probs: Vec<f64>,
    spans: Vec<Vec<Span>>,
}

impl MockTagger {
    /// Create a mock tagger that predicts nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-sentence log-probabilities to replay.
    #[must_use]
    pub fn with_log_probs(mut self, log_probs: Vec<f64>) -> Self {
        self.log_probs = log_probs;
        self
    }

    /// Set the per-sentence spans to attach during `predict`.
    #[must_use]
    pub fn with_spans(mut self, spans: Vec<Vec<Span>>) -> Self {
        self.spans = spans;
        self
    }
}

impl Tagger for MockTagger {
    fn predict(&self, sentences: &mut [Sentence], _tag_type: &str) -> Result<()> {
        for (i, sentence) in sentences.iter_mut().enumerate() {
            if let Some(spans) = self.spans.get(i) {
                sentence.spans = spans.clone();
            }
            if let Some(&p) = self.log_probs.get(i) {
                sentence.log_probability = Some(p);
            }
        }
        Ok(())
    }

    fn log_probability(&self, sentences: &[Sentence]) -> Result<Vec<f64>> {
        if !self.log_probs.is_empty() {
            return Ok(self.log_probs.clone());
        }
        sentences
            .iter()
            .enumerate()
            .map(|(i, s)| {
                s.log_probability
                    .ok_or_else(|| Error::inference(format!("sentence {i} has no log-probability")))
            })
            .collect()
    }
}

/// A mock embedding provider backed by a text → vector table.
///
/// Spans whose text has no table entry are left without a vector, which lets
/// tests exercise the missing-embedding precondition.
#[derive(Debug, Clone, Default)]
pub struct MockEmbeddings {
    vectors: HashMap<String, Vec<f64>>,
}

impl MockEmbeddings {
    /// Create a provider that embeds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vector for a span text.
    #[must_use]
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f64>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }
}

impl Embeddings for MockEmbeddings {
    fn embed(&self, sentences: &mut [Sentence]) -> Result<()> {
        for sentence in sentences.iter_mut() {
            for span in sentence.spans.iter_mut() {
                if span.vector.is_none() {
                    if let Some(v) = self.vectors.get(&span.text) {
                        span.vector = Some(v.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tagger_attaches_predictions() {
        let tagger = MockTagger::new()
            .with_log_probs(vec![-0.5])
            .with_spans(vec![vec![Span::new("Alice", "PER")]]);

        let mut pool = vec![Sentence::from_text("Alice runs")];
        tagger.predict(&mut pool, "ner").unwrap();

        assert_eq!(pool[0].spans.len(), 1);
        assert_eq!(pool[0].log_probability, Some(-0.5));
        assert_eq!(tagger.log_probability(&pool).unwrap(), vec![-0.5]);
    }

    #[test]
    fn test_log_probability_fails_without_prediction() {
        let tagger = MockTagger::new();
        let pool = vec![Sentence::from_text("Alice runs")];
        assert!(tagger.log_probability(&pool).is_err());
    }

    #[test]
    fn test_mock_embeddings_only_fills_known_spans() {
        let provider = MockEmbeddings::new().with_vector("Alice", vec![0.1, 0.2]);

        let mut pool = vec![Sentence::from_text("Alice met Bob")];
        pool[0].spans = vec![Span::new("Alice", "PER"), Span::new("Bob", "PER")];
        provider.embed(&mut pool).unwrap();

        assert_eq!(pool[0].spans[0].vector, Some(vec![0.1, 0.2]));
        assert!(pool[0].spans[1].vector.is_none());
    }
}
