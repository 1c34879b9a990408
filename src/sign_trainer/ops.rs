use crate::classifier::Prediction;
use crate::dataset_codec::{self, CodecError};
use crate::example_store::{ClassId, ClassRecord, StoreError};
use crate::label_mapper;
use crate::sign_trainer::core::Event;
use crate::sign_trainer::main::SignTrainer;
use thiserror::Error;

/// Error surface of the discrete, user-triggered operations. Every failure
/// is reported synchronously and leaves prior state unmodified.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SignTrainer {
    pub fn add_class(&self, name: &str) -> Result<ClassRecord, TrainerError> {
        let record = self.store.lock().unwrap().add_class(name)?;
        let _ = self
            .logger
            .info(&format!("Added class {:?} with id {}", record.name, record.id));
        Ok(record)
    }

    pub fn classes(&self) -> Vec<ClassRecord> {
        self.store.lock().unwrap().classes()
    }

    /// Queues a training capture: the next captured frame is embedded and
    /// stored under `class_id` instead of being classified.
    pub fn request_training_capture(&self, class_id: ClassId) -> Result<(), TrainerError> {
        if self.store.lock().unwrap().class_name(class_id).is_none() {
            return Err(StoreError::UnknownClass(class_id).into());
        }
        self.send(Event::TrainExampleRequested(class_id));
        Ok(())
    }

    pub fn save_dataset(&self) -> Result<String, TrainerError> {
        Ok(dataset_codec::encode(&self.store.lock().unwrap())?)
    }

    /// Replaces the store with a decoded snapshot; a failed decode or a
    /// width-incompatible snapshot leaves the current store untouched.
    pub fn load_dataset(&self, text: &str) -> Result<(), TrainerError> {
        let dataset = dataset_codec::decode(text)?;
        self.store.lock().unwrap().load_dataset(&dataset)?;
        Ok(())
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.model.lock().unwrap().last_prediction.clone()
    }

    /// Display symbol for the current prediction, empty for codes outside
    /// the alphabet.
    #[allow(dead_code)]
    pub fn predicted_symbol(&self) -> Option<String> {
        let prediction = self.prediction()?;
        let store = self.store.lock().unwrap();
        let code = store.class_name(prediction.label)?;
        Some(label_mapper::symbol_for(code).to_string())
    }

    /// Appends the current prediction's symbol to the running text.
    pub fn confirm_prediction(&self) {
        if let Some(prediction) = self.prediction() {
            let code = self
                .store
                .lock()
                .unwrap()
                .class_name(prediction.label)
                .map(str::to_string);
            if let Some(code) = code {
                self.text_buffer.lock().unwrap().append_confirmed(&code);
            }
        }
    }

    pub fn append_space(&self) {
        self.text_buffer.lock().unwrap().append_space();
    }

    pub fn delete_last(&self) {
        self.text_buffer.lock().unwrap().delete_last();
    }

    pub fn clear_text(&self) {
        self.text_buffer.lock().unwrap().clear();
    }

    pub fn text(&self) -> String {
        self.text_buffer.lock().unwrap().text().to_string()
    }

    /// Stops the capture loop at the next event boundary.
    pub fn stop(&self) {
        self.send(Event::StopRequested);
    }
}
