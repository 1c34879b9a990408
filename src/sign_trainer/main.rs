use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::example_store::ExampleStore;
use crate::feature_extractor::interface::FeatureExtractor;
use crate::label_mapper::TextBuffer;
use crate::library::logger::interface::Logger;
use crate::sign_trainer::core::{Event, Model};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SignTrainer {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub feature_extractor: Arc<dyn FeatureExtractor + Send + Sync>,
    pub store: Arc<Mutex<ExampleStore>>,
    pub text_buffer: Arc<Mutex<TextBuffer>>,
    pub model: Arc<Mutex<Model>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl SignTrainer {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        feature_extractor: Arc<dyn FeatureExtractor + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let store = ExampleStore::new(feature_extractor.width());

        Self {
            config,
            logger,
            device_camera,
            device_display,
            feature_extractor,
            store: Arc::new(Mutex::new(store)),
            text_buffer: Arc::new(Mutex::new(TextBuffer::new())),
            model: Arc::new(Mutex::new(Model::default())),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    pub fn send(&self, event: Event) {
        let _ = self.event_sender.send(event);
    }
}
