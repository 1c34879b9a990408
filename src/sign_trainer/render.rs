use crate::label_mapper;
use crate::sign_trainer::core::{CameraState, ExtractorState, Model, RunState};
use crate::sign_trainer::main::SignTrainer;

impl SignTrainer {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        device_display.clear()?;

        let status = match &model.run {
            RunState::Initializing => {
                if model.devices.camera != CameraState::Started {
                    "Camera connecting..."
                } else if model.devices.extractor != ExtractorState::Loaded {
                    "Extractor loading..."
                } else {
                    "Starting..."
                }
            }
            RunState::Capturing | RunState::Embedding | RunState::Classifying | RunState::Idle => {
                "Watching..."
            }
            RunState::Recording { .. } => "Capturing example...",
            RunState::Stopped => "Stopped",
        };
        device_display.write_line(0, status)?;

        let prediction_line = match &model.last_prediction {
            Some(prediction) => {
                let store = self.store.lock().unwrap();
                let code = store.class_name(prediction.label).unwrap_or("");
                let symbol = label_mapper::symbol_for(code);
                let shown = if symbol.is_empty() { code } else { symbol };
                let percent = (prediction.confidence() * 100.0).floor();
                format!("Predicted: {} ({}%)", shown, percent)
            }
            None => String::new(),
        };
        device_display.write_line(1, &prediction_line)?;

        let classes = self.store.lock().unwrap().classes();
        let classes_line = if classes.is_empty() {
            "No classes yet".to_string()
        } else {
            classes
                .iter()
                .map(|class| format!("{}:{}", class.name, class.example_count))
                .collect::<Vec<_>>()
                .join(" ")
        };
        device_display.write_line(2, &classes_line)?;

        let text = self.text_buffer.lock().unwrap().text().to_string();
        device_display.write_line(3, &text)?;

        Ok(())
    }
}
