//! Sentence pool types.
//!
//! The scoring core treats the pool as an ordered slice of [`Sentence`]s,
//! each identified by its position. Sentences are read-only inputs to a
//! scoring call except for the side effects the call itself requests:
//! the tagger attaches predicted spans and a sequence log-probability, and
//! the embedding provider attaches a vector to each predicted span.

use serde::{Deserialize, Serialize};

/// A predicted labeled span inside a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Surface text of the span.
    pub text: String,
    /// Tag class, e.g. "PER" or "LOC".
    pub label: String,
    /// Dense embedding of the span, attached by the embedding provider.
    /// `None` until the provider has run.
    pub vector: Option<Vec<f64>>,
}

impl Span {
    /// Create a span with no embedding attached.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            vector: None,
        }
    }

    /// Create a span with an embedding already attached.
    pub fn with_vector(text: impl Into<String>, label: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            vector: Some(vector),
        }
    }
}

/// One unlabeled sentence in the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Tokens of the sentence.
    pub tokens: Vec<String>,
    /// Predicted spans, attached by the tagger. Empty until prediction runs
    /// (and possibly after: a sentence may contain no entities).
    pub spans: Vec<Span>,
    /// Natural-log joint probability of the predicted tag sequence,
    /// attached by the tagger.
    pub log_probability: Option<f64>,
}

impl Sentence {
    /// Create a sentence from its tokens.
    pub fn new<S: Into<String>>(tokens: Vec<S>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            spans: Vec::new(),
            log_probability: None,
        }
    }

    /// Create a sentence by whitespace-splitting raw text.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().collect::<Vec<_>>())
    }

    /// Number of tokens in the sentence.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
