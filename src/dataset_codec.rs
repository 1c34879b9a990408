use crate::example_store::ExampleStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),
}

/// Decoded form of the snapshot: one `(class name, flat value array)` entry
/// per class, in document order. Each array concatenates that class's
/// embeddings row-major; its length must be a multiple of the store width.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedDataset {
    pub classes: Vec<(String, Vec<f32>)>,
}

/// Renders the store as the snapshot JSON object, class name → flat numeric
/// array, keyed in class creation order.
pub fn encode(store: &ExampleStore) -> Result<String, CodecError> {
    let dataset = store.export_dataset();

    let mut object = serde_json::Map::new();
    for (name, values) in &dataset.classes {
        let mut row = Vec::with_capacity(values.len());
        for value in values {
            let number = serde_json::Number::from_f64(f64::from(*value)).ok_or_else(|| {
                CodecError::MalformedDataset(format!("non-finite value in class {:?}", name))
            })?;
            row.push(serde_json::Value::Number(number));
        }
        object.insert(name.clone(), serde_json::Value::Array(row));
    }

    Ok(serde_json::to_string(&serde_json::Value::Object(object))?)
}

/// Parses snapshot text and validates its schema. The reshape into rows
/// happens later, in `ExampleStore::load_dataset`, against the store width.
pub fn decode(text: &str) -> Result<SerializedDataset, CodecError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let object = value.as_object().ok_or_else(|| {
        CodecError::MalformedDataset("top-level value is not an object".to_string())
    })?;

    let mut classes = Vec::with_capacity(object.len());
    for (name, entry) in object {
        let array = entry.as_array().ok_or_else(|| {
            CodecError::MalformedDataset(format!("class {:?} is not an array", name))
        })?;

        let mut values = Vec::with_capacity(array.len());
        for element in array {
            let number = element.as_f64().ok_or_else(|| {
                CodecError::MalformedDataset(format!("non-numeric entry in class {:?}", name))
            })?;
            values.push(number as f32);
        }
        classes.push((name.clone(), values));
    }

    Ok(SerializedDataset { classes })
}
