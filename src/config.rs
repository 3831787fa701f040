//! Scorer configuration.
//!
//! Scorer parameters travel as one explicit structure rather than an open
//! keyword bag. Every scorer receives the same
//! [`ScorerConfig`] and reads only the fields it needs — unset fields a
//! scorer does not consume are simply ignored, while a field a scorer does
//! require produces [`MissingParam`](crate::Error::MissingParam) when
//! absent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Parameters shared by all scorer variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Tag classes of interest, e.g. `["PER", "LOC"]`. Accepted by every
    /// scorer; currently informational.
    pub label_names: Vec<String>,
    /// Seed for random selection and for the diversity scorers' random
    /// fallback. `None` draws from entropy; tests should always set it.
    pub seed: Option<u64>,
    /// Clustering parameters, required by the cluster-similarity scorer.
    pub kmeans: Option<KMeansParams>,
    /// Which uncertainty/diversity pair a combined scorer composes
    /// (`lc_ds`, `lc_cs`, `mnlp_ds`, `mnlp_cs`). Required by the combined
    /// scorer only.
    pub scorer_type: Option<String>,
    /// How a combined scorer composes its pair (`series` or `parallel`).
    /// Required by the combined scorer only.
    pub combined_type: Option<String>,
    /// Weight of the uncertainty half in parallel combination, in [0, 1].
    pub uncertainty_weight: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            label_names: Vec::new(),
            seed: None,
            kmeans: None,
            scorer_type: None,
            combined_type: None,
            uncertainty_weight: 0.5,
        }
    }
}

impl ScorerConfig {
    /// Create a config with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the clustering parameters.
    #[must_use]
    pub fn with_kmeans(mut self, kmeans: KMeansParams) -> Self {
        self.kmeans = Some(kmeans);
        self
    }

    /// Set the combined scorer's pair selection.
    #[must_use]
    pub fn with_scorer_type(mut self, scorer_type: impl Into<String>) -> Self {
        self.scorer_type = Some(scorer_type.into());
        self
    }

    /// Set the combined scorer's composition mode.
    #[must_use]
    pub fn with_combined_type(mut self, combined_type: impl Into<String>) -> Self {
        self.combined_type = Some(combined_type.into());
        self
    }

    /// Set the label names.
    #[must_use]
    pub fn with_label_names<S: Into<String>>(mut self, labels: Vec<S>) -> Self {
        self.label_names = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// K-means parameters for the cluster-similarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KMeansParams {
    /// Number of clusters. Required: clustering without a cluster count
    /// fails with a missing-parameter error.
    pub n_clusters: Option<usize>,
    /// Maximum Lloyd iterations before giving up on convergence.
    pub max_iterations: usize,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            n_clusters: None,
            max_iterations: 300,
        }
    }
}

impl KMeansParams {
    /// Parameters with the given cluster count.
    #[must_use]
    pub fn with_clusters(n_clusters: usize) -> Self {
        Self {
            n_clusters: Some(n_clusters),
            ..Self::default()
        }
    }
}

/// The uncertainty/diversity pairs a combined scorer can compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorerType {
    /// Least confidence + distribute similarity.
    LcDs,
    /// Least confidence + cluster similarity.
    LcCs,
    /// Max normalized log-probability + distribute similarity.
    MnlpDs,
    /// Max normalized log-probability + cluster similarity.
    MnlpCs,
}

impl ScorerType {
    /// Whether the diversity half is the cluster-similarity scorer.
    #[must_use]
    pub fn uses_clustering(self) -> bool {
        matches!(self, ScorerType::LcCs | ScorerType::MnlpCs)
    }
}

impl FromStr for ScorerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lc_ds" => Ok(ScorerType::LcDs),
            "lc_cs" => Ok(ScorerType::LcCs),
            "mnlp_ds" => Ok(ScorerType::MnlpDs),
            "mnlp_cs" => Ok(ScorerType::MnlpCs),
            other => Err(Error::UnknownScorerType(other.to_string())),
        }
    }
}

/// How a combined scorer composes its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinedType {
    /// Uncertainty gates a candidate set, diversity re-ranks it.
    Series,
    /// Normalized score vectors are blended into one ranking.
    Parallel,
}

impl FromStr for CombinedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "series" => Ok(CombinedType::Series),
            "parallel" => Ok(CombinedType::Parallel),
            other => Err(Error::UnknownCombinedType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_type_parsing() {
        for (name, expected) in [
            ("lc_ds", ScorerType::LcDs),
            ("lc_cs", ScorerType::LcCs),
            ("mnlp_ds", ScorerType::MnlpDs),
            ("mnlp_cs", ScorerType::MnlpCs),
        ] {
            assert_eq!(name.parse::<ScorerType>().unwrap(), expected);
        }

        assert!(matches!(
            "lcc_ds".parse::<ScorerType>(),
            Err(Error::UnknownScorerType(_))
        ));
    }

    #[test]
    fn test_combined_type_parsing() {
        assert_eq!("series".parse::<CombinedType>().unwrap(), CombinedType::Series);
        assert_eq!("parallel".parse::<CombinedType>().unwrap(), CombinedType::Parallel);
        assert!(matches!(
            "mix".parse::<CombinedType>(),
            Err(Error::UnknownCombinedType(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ScorerConfig::default();
        assert!(config.seed.is_none());
        assert!(config.kmeans.is_none());
        assert!((config.uncertainty_weight - 0.5).abs() < f64::EPSILON);
    }
}
