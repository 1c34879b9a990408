use crate::example_store::{ClassId, ExampleStore, StoreError};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: ClassId,
    pub confidences: BTreeMap<ClassId, f32>,
}

impl Prediction {
    pub fn confidence(&self) -> f32 {
        self.confidences.get(&self.label).copied().unwrap_or(0.0)
    }
}

/// Nearest-neighbor vote over the whole store. Each class is scored by the
/// mean cosine similarity between the query and ALL of that class's stored
/// examples (no k subset), clamped to [0, 1]; confidences are the scores
/// normalized to sum to 1. Ties break toward the lowest class id.
///
/// Returns `Ok(None)` when no class holds an example yet; that is the normal
/// untrained state, not an error.
pub fn predict(store: &ExampleStore, query: &[f32]) -> Result<Option<Prediction>, StoreError> {
    if query.len() != store.width() {
        return Err(StoreError::InvalidEmbeddingWidth {
            expected: store.width(),
            actual: query.len(),
        });
    }
    if !store.has_examples() {
        return Ok(None);
    }

    let mut scores: Vec<(ClassId, f32)> = Vec::with_capacity(store.class_count());
    for (class_id, examples) in store.examples_by_class() {
        let score = if examples.is_empty() {
            0.0
        } else {
            let total: f32 = examples
                .iter()
                .map(|example| cosine_similarity(query, example))
                .sum();
            (total / examples.len() as f32).clamp(0.0, 1.0)
        };
        scores.push((class_id, score));
    }

    let total: f32 = scores.iter().map(|(_, score)| score).sum();
    let confidences: BTreeMap<ClassId, f32> = if total > 0.0 {
        scores
            .iter()
            .map(|(class_id, score)| (*class_id, score / total))
            .collect()
    } else {
        // Every score clamped to zero: fall back to a uniform distribution
        // so the confidences still sum to 1.
        let uniform = 1.0 / scores.len() as f32;
        scores
            .iter()
            .map(|(class_id, _)| (*class_id, uniform))
            .collect()
    };

    // BTreeMap iterates in ascending id order, so keeping the first strict
    // maximum breaks ties toward the lowest id.
    let mut label = 0;
    let mut best = f32::NEG_INFINITY;
    for (class_id, confidence) in &confidences {
        if *confidence > best {
            label = *class_id;
            best = *confidence;
        }
    }

    Ok(Some(Prediction { label, confidences }))
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
