//! Error types for seqsel.

use thiserror::Error;

/// Result type for seqsel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for seqsel operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A predicted span has no embedding vector attached.
    ///
    /// Diversity scorers require the embedding provider to have run before
    /// entities are extracted. This is a precondition violation and is never
    /// recovered from.
    #[error("span \"{span}\" in sentence {sentence_id} has no embedding; run the embedding provider before scoring")]
    MissingEmbedding {
        /// Index of the sentence in the pool.
        sentence_id: usize,
        /// Surface text of the span that lacked a vector.
        span: String,
    },

    /// A required scorer parameter was not supplied.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// The configured scorer type is not one of the recognized names.
    #[error("unknown scorer type: {0:?} (expected one of lc_ds, lc_cs, mnlp_ds, mnlp_cs)")]
    UnknownScorerType(String),

    /// The configured combination mode is not one of the recognized names.
    #[error("unknown combined type: {0:?} (expected series or parallel)")]
    UnknownCombinedType(String),

    /// The tagger failed during prediction or log-probability computation.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The embedding provider failed.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a missing-embedding precondition error.
    pub fn missing_embedding(sentence_id: usize, span: impl Into<String>) -> Self {
        Error::MissingEmbedding {
            sentence_id,
            span: span.into(),
        }
    }

    /// Create a missing-parameter error.
    pub fn missing_param(name: &'static str) -> Self {
        Error::MissingParam(name)
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Error::Inference(msg.into())
    }

    /// Create an embedding error.
    pub fn embedding(msg: impl Into<String>) -> Self {
        Error::Embedding(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_embedding_message_names_sentence_and_span() {
        let err = Error::missing_embedding(3, "Berlin");
        let msg = err.to_string();
        assert!(msg.contains("Berlin"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_missing_param_message() {
        let err = Error::missing_param("n_clusters");
        assert!(err.to_string().contains("n_clusters"));
    }
}
