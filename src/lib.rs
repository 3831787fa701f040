//! # seqsel
//!
//! Active-learning query selection for sequence labeling.
//!
//! Given a pool of unlabeled sentences, a tagging model, and a span
//! embedding provider, `seqsel` decides which sentences a human annotator
//! should label next:
//!
//! - **Uncertainty**: least confidence, length-normalized log-probability
//! - **Diversity**: per-label similarity, cluster cohesion (deterministic k-means)
//! - **Composition**: series or parallel blends of one of each
//! - **Budgets**: by sentence count or by cumulative token count
//!
//! ## Quick Start
//!
//! ```rust
//! use seqsel::{
//!     Budget, LeastConfidenceScorer, MockEmbeddings, MockTagger, Scorer,
//!     ScorerConfig, ScorerContext, Sentence,
//! };
//!
//! let tagger = MockTagger::new().with_log_probs(vec![-0.9, -0.1, -0.5]);
//! let embeddings = MockEmbeddings::new();
//! let config = ScorerConfig::new();
//! let ctx = ScorerContext {
//!     tagger: &tagger,
//!     embeddings: &embeddings,
//!     tag_type: "ner",
//!     config: &config,
//! };
//!
//! let mut pool: Vec<Sentence> = ["one two", "three four", "five six"]
//!     .iter()
//!     .map(|t| Sentence::from_text(t))
//!     .collect();
//!
//! // The model is least sure about sentence 0: annotate it first.
//! let batch = LeastConfidenceScorer::new()
//!     .select(&mut pool, Budget::Sentences(1), &ctx)
//!     .unwrap();
//! assert_eq!(batch, vec![0]);
//! ```
//!
//! ## Design
//!
//! - **Trait-based**: the tagging model and embedding provider are consumed
//!   through the narrow [`Tagger`] and [`Embeddings`] traits; `seqsel` never
//!   trains or runs a model itself
//! - **Deterministic**: random selection is seeded, k-means uses
//!   farthest-first initialization, rankings break ties by pool order
//! - **Graceful degradation**: diversity scorers fall back to seeded random
//!   selection when the pool has no predicted entities
//! - **Fresh per call**: every query builds its own scores and entity
//!   groupings; nothing is cached across rounds

#![warn(missing_docs)]

pub mod budget;
pub mod config;
mod entity;
mod error;
pub mod kmeans;
pub mod scorer;
pub mod scorers;
pub mod sentence;
pub mod similarity;
pub mod strategies;
pub mod tagger;

pub use budget::{select_by_budget, Budget};
pub use config::{CombinedType, KMeansParams, ScorerConfig, ScorerType};
pub use entity::{Entities, Entity};
pub use error::{Error, Result};
pub use scorer::{rank_by_score, Scorer, ScorerContext, SortOrder};
pub use scorers::{
    get_entities, ClusterSimilarityScorer, CombinedMultipleScorer, DistributeSimilarityScorer,
    LeastConfidenceScorer, MaxNormLogProbScorer, RandomScorer,
};
pub use sentence::{Sentence, Span};
pub use strategies::{least_confidence_sampling, max_norm_log_prob_sampling, random_sampling};
pub use tagger::{Embeddings, MockEmbeddings, MockTagger, Tagger};
