use crate::classifier;
use crate::sign_trainer::core::{Effect, Event};
use crate::sign_trainer::main::SignTrainer;
use std::sync::mpsc::Sender;

impl SignTrainer {
    pub fn run_effect(&self, effect: Effect, event_queue: Sender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeToCameraEvents => {
                let events = self.device_camera.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if event_queue.send(Event::CameraEvent(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::SubscribeToExtractorEvents => {
                let events = self.feature_extractor.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if event_queue.send(Event::ExtractorEvent(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = event_queue.send(Event::CameraStartDone(started));
            }
            Effect::LoadExtractor => {
                let loaded = self.feature_extractor.load();
                let _ = event_queue.send(Event::ExtractorLoadDone(loaded));
            }
            Effect::CaptureFrame => {
                let frame = self.device_camera.capture_frame();
                if let Err(error) = &frame {
                    let _ = self.logger.error(&format!("Frame capture failed: {}", error));
                }
                let _ = event_queue.send(Event::FrameCaptureDone(frame));
            }
            // The frame is consumed here; nothing from the iteration
            // outlives the completion event.
            Effect::EmbedFrame { frame } => {
                let embedding = self.feature_extractor.embed(&frame);
                if let Err(error) = &embedding {
                    let _ = self.logger.error(&format!("Embedding failed: {}", error));
                }
                let _ = event_queue.send(Event::FrameEmbedDone(embedding));
            }
            Effect::RecordExample {
                class_id,
                embedding,
            } => {
                let result = self.store.lock().unwrap().add_example(class_id, embedding);
                match &result {
                    Ok(count) => {
                        let _ = self
                            .logger
                            .info(&format!("Class {} now holds {} examples", class_id, count));
                    }
                    Err(error) => {
                        let _ = self
                            .logger
                            .error(&format!("Recording example failed: {}", error));
                    }
                }
                let _ = event_queue.send(Event::ExampleRecordDone(result));
            }
            Effect::ClassifyEmbedding { embedding } => {
                let result = classifier::predict(&self.store.lock().unwrap(), &embedding);
                if let Err(error) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Classification failed: {}", error));
                }
                let _ = event_queue.send(Event::ClassifyDone(result));
            }
            Effect::Delay => {
                std::thread::sleep(self.config.capture_rate);
                let _ = event_queue.send(Event::DelayDone);
            }
        }
    }
}
