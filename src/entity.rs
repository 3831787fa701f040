//! Predicted entities and their derived groupings.
//!
//! An [`Entities`] collection is rebuilt from scratch on every scoring call
//! from the current prediction pass; nothing is cached across calls. The
//! groupings (`by_sentence`, `by_label`, `by_cluster`) are computed on
//! demand and keyed by stable entity order, so iteration over them is
//! deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One predicted labeled span with its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Index of this entity among the entities of its sentence, in span
    /// order. Not globally unique.
    pub id: usize,
    /// Index of the owning sentence in the pool.
    pub sentence_id: usize,
    /// Tag class, e.g. "PER" or "LOC".
    pub label: String,
    /// Dense embedding of the span. All entities scored together share one
    /// dimensionality.
    pub vector: Vec<f64>,
    /// Cluster assignment, written once per scoring pass by the clustering
    /// scorer. Absent until clustering runs.
    cluster: Option<usize>,
}

impl Entity {
    /// Create an unclustered entity.
    #[must_use]
    pub fn new(id: usize, sentence_id: usize, label: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            id,
            sentence_id,
            label: label.into(),
            vector,
            cluster: None,
        }
    }

    /// The cluster this entity was assigned to, if clustering has run.
    #[must_use]
    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }

    /// Assign the cluster. Write-once per scoring pass; entities are rebuilt
    /// fresh each call, so an existing assignment is a logic error.
    pub(crate) fn assign_cluster(&mut self, cluster: usize) {
        debug_assert!(self.cluster.is_none(), "cluster assigned twice in one pass");
        self.cluster = Some(cluster);
    }
}

/// Ordered collection of predicted entities for one scoring pass.
///
/// An empty collection is a valid state meaning "no information available":
/// diversity scorers fall back to random selection rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    entities: Vec<Entity>,
}

impl Entities {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a vector of entities.
    #[must_use]
    pub fn from_vec(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Append an entity, preserving insertion order.
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Whether the collection holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over the entities in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Embedding vectors in stable entity order.
    #[must_use]
    pub fn vectors(&self) -> Vec<&[f64]> {
        self.entities.iter().map(|e| e.vector.as_slice()).collect()
    }

    /// Group entities by owning sentence, preserving entity order within
    /// each group.
    #[must_use]
    pub fn group_by_sentence(&self) -> BTreeMap<usize, Vec<&Entity>> {
        let mut groups: BTreeMap<usize, Vec<&Entity>> = BTreeMap::new();
        for entity in &self.entities {
            groups.entry(entity.sentence_id).or_default().push(entity);
        }
        groups
    }

    /// Group entities by label, preserving entity order within each group.
    #[must_use]
    pub fn group_by_label(&self) -> BTreeMap<&str, Vec<&Entity>> {
        let mut groups: BTreeMap<&str, Vec<&Entity>> = BTreeMap::new();
        for entity in &self.entities {
            groups.entry(entity.label.as_str()).or_default().push(entity);
        }
        groups
    }

    /// Group entities by cluster. Valid only after clustering has run;
    /// unclustered entities are not represented.
    #[must_use]
    pub fn group_by_cluster(&self) -> BTreeMap<usize, Vec<&Entity>> {
        let mut groups: BTreeMap<usize, Vec<&Entity>> = BTreeMap::new();
        for entity in &self.entities {
            if let Some(cluster) = entity.cluster {
                groups.entry(cluster).or_default().push(entity);
            }
        }
        groups
    }

    /// Write the per-entity cluster assignments, aligned by stable entity
    /// order. `assignments` must have one entry per entity.
    pub(crate) fn assign_clusters(&mut self, assignments: &[usize]) {
        debug_assert_eq!(assignments.len(), self.entities.len());
        for (entity, &cluster) in self.entities.iter_mut().zip(assignments) {
            entity.assign_cluster(cluster);
        }
    }
}
