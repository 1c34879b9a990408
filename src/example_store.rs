use crate::dataset_codec::SerializedDataset;
use serde::Serialize;
use thiserror::Error;

pub type ClassId = u32;
pub type Embedding = Vec<f32>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("embedding width {actual} does not match store width {expected}")]
    InvalidEmbeddingWidth { expected: usize, actual: usize },
    #[error("no class with id {0}")]
    UnknownClass(ClassId),
    #[error("class name {0:?} already exists")]
    DuplicateClassName(String),
    #[error("class name must not be empty")]
    EmptyClassName,
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRecord {
    pub id: ClassId,
    pub name: String,
    pub example_count: usize,
}

#[derive(Debug, Clone)]
struct ClassEntry {
    id: ClassId,
    name: String,
    examples: Vec<Embedding>,
}

/// Ordered collection of (class, embeddings) pairs. Class order is the order
/// of first creation; example order within a class is acquisition order.
/// Every embedding has the width fixed at construction time.
#[derive(Debug, Clone)]
pub struct ExampleStore {
    width: usize,
    next_id: ClassId,
    classes: Vec<ClassEntry>,
}

impl ExampleStore {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            next_id: 1,
            classes: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn add_class(&mut self, name: &str) -> Result<ClassRecord, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyClassName);
        }
        if self.classes.iter().any(|c| c.name == name) {
            return Err(StoreError::DuplicateClassName(name.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.classes.push(ClassEntry {
            id,
            name: name.to_string(),
            examples: Vec::new(),
        });

        Ok(ClassRecord {
            id,
            name: name.to_string(),
            example_count: 0,
        })
    }

    /// Appends an embedding to a class and returns the new example count.
    pub fn add_example(
        &mut self,
        class_id: ClassId,
        embedding: Embedding,
    ) -> Result<usize, StoreError> {
        if embedding.len() != self.width {
            return Err(StoreError::InvalidEmbeddingWidth {
                expected: self.width,
                actual: embedding.len(),
            });
        }

        let entry = self
            .classes
            .iter_mut()
            .find(|c| c.id == class_id)
            .ok_or(StoreError::UnknownClass(class_id))?;

        entry.examples.push(embedding);
        Ok(entry.examples.len())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[allow(dead_code)]
    pub fn example_count(&self, class_id: ClassId) -> usize {
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.examples.len())
            .unwrap_or(0)
    }

    pub fn classes(&self) -> Vec<ClassRecord> {
        self.classes
            .iter()
            .map(|c| ClassRecord {
                id: c.id,
                name: c.name.clone(),
                example_count: c.examples.len(),
            })
            .collect()
    }

    pub fn class_name(&self, class_id: ClassId) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.name.as_str())
    }

    /// True when at least one class holds at least one example.
    pub fn has_examples(&self) -> bool {
        self.classes.iter().any(|c| !c.examples.is_empty())
    }

    /// Classes in creation order with their stored embeddings.
    pub fn examples_by_class(&self) -> impl Iterator<Item = (ClassId, &[Embedding])> {
        self.classes.iter().map(|c| (c.id, c.examples.as_slice()))
    }

    /// Replaces the whole store with the decoded snapshot. Every entry is
    /// validated before anything is mutated, so a failed load leaves the
    /// prior contents intact. Class ids are reassigned 1..n in entry order.
    pub fn load_dataset(&mut self, dataset: &SerializedDataset) -> Result<(), StoreError> {
        for (name, values) in &dataset.classes {
            if name.is_empty() {
                return Err(StoreError::MalformedDataset(
                    "empty class name".to_string(),
                ));
            }
            if dataset.classes.iter().filter(|(n, _)| n == name).count() > 1 {
                return Err(StoreError::MalformedDataset(format!(
                    "class {:?} appears more than once",
                    name
                )));
            }
            if values.len() % self.width != 0 {
                return Err(StoreError::MalformedDataset(format!(
                    "class {:?} holds {} values, not a multiple of width {}",
                    name,
                    values.len(),
                    self.width
                )));
            }
        }

        self.classes = dataset
            .classes
            .iter()
            .enumerate()
            .map(|(index, (name, values))| ClassEntry {
                id: index as ClassId + 1,
                name: name.clone(),
                examples: values.chunks(self.width).map(|row| row.to_vec()).collect(),
            })
            .collect();
        self.next_id = self.classes.len() as ClassId + 1;

        Ok(())
    }

    /// Flattens each class's embeddings row-major, in class creation order.
    pub fn export_dataset(&self) -> SerializedDataset {
        SerializedDataset {
            classes: self
                .classes
                .iter()
                .map(|c| (c.name.clone(), c.examples.concat()))
                .collect(),
        }
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.classes.clear();
        self.next_id = 1;
    }
}
