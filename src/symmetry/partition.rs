use crate::error::DecyclingError;
use crate::graph::{DeBruijnGraph, Vertex};
use crate::symmetry::Complementer;
use std::collections::BTreeMap;

/// A partition of the vertex set into classes with dense class ids.
///
/// Classes are plain index lists; `class_of` maps every vertex to the id of its class.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    class_of: Vec<usize>,
    classes: Vec<Vec<Vertex>>,
}

impl Partition {
    /// Build a partition from one label per vertex: vertices with equal labels share a class.
    ///
    /// Class ids follow the increasing order of the distinct labels. Fails if the label
    /// vector does not have exactly `vertex_count` entries.
    pub fn from_labels(labels: &[usize], vertex_count: usize) -> Result<Partition, DecyclingError> {
        if labels.len() != vertex_count {
            return Err(DecyclingError::PartitionSizeMismatch {
                expected: vertex_count,
                found: labels.len(),
            });
        }

        Ok(Partition::group(labels))
    }

    fn group(labels: &[usize]) -> Partition {
        let mut ids = BTreeMap::new();
        for label in labels {
            ids.insert(*label, 0usize);
        }
        for (id, slot) in ids.values_mut().enumerate() {
            *slot = id;
        }

        let mut classes = vec![Vec::new(); ids.len()];
        let mut class_of = Vec::with_capacity(labels.len());
        for (vertex, label) in labels.iter().enumerate() {
            let id = ids[label];
            classes[id].push(vertex);
            class_of.push(id);
        }

        Partition { class_of, classes }
    }

    /// Build a partition from explicit classes. Fails if classes are empty, overlap,
    /// contain vertices outside `[0, vertex_count)`, or do not cover every vertex.
    pub fn from_classes(
        classes: impl IntoIterator<Item = Vec<Vertex>>,
        vertex_count: usize,
    ) -> Result<Partition, DecyclingError> {
        const UNASSIGNED: usize = usize::MAX;
        let mut class_of = vec![UNASSIGNED; vertex_count];
        let mut result = Vec::new();
        for (id, class) in classes.into_iter().enumerate() {
            if class.is_empty() {
                return Err(DecyclingError::MalformedPartition(format!(
                    "class {} is empty",
                    id
                )));
            }
            for &v in &class {
                if v >= vertex_count {
                    return Err(DecyclingError::MalformedPartition(format!(
                        "vertex {} of class {} is out of range",
                        v, id
                    )));
                }
                if class_of[v] != UNASSIGNED {
                    return Err(DecyclingError::MalformedPartition(format!(
                        "vertex {} appears in classes {} and {}",
                        v, class_of[v], id
                    )));
                }
                class_of[v] = id;
            }
            result.push(class);
        }

        if let Some(missing) = class_of.iter().position(|it| *it == UNASSIGNED) {
            return Err(DecyclingError::MalformedPartition(format!(
                "vertex {} is not covered",
                missing
            )));
        }

        Ok(Partition {
            class_of,
            classes: result,
        })
    }

    /// Identify every vertex with its reverse complement (label `min(x, rc(x))`).
    pub fn reverse_complement(graph: &DeBruijnGraph) -> Partition {
        let complementer = Complementer::from(graph);
        let labels: Vec<usize> = graph.vertices().map(|v| complementer.canonical(v)).collect();
        Partition::group(&labels)
    }

    /// The id of the class containing `vertex`.
    pub fn class_of(&self, vertex: Vertex) -> usize {
        self.class_of[vertex]
    }

    pub fn classes(&self) -> &[Vec<Vertex>] {
        &self.classes
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of partitioned vertices.
    pub fn vertex_count(&self) -> usize {
        self.class_of.len()
    }
}
