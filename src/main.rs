use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use feature_extractor::impl_fake::FeatureExtractorFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use sign_trainer::main::SignTrainer;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

mod classifier;
mod config;
mod dataset_codec;
mod device_camera;
mod device_display;
mod example_store;
mod feature_extractor;
mod label_mapper;
mod library;
mod sign_trainer;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let feature_extractor = Arc::new(FeatureExtractorFake::new(
        config.embedding_width,
        logger.clone(),
    ));

    let trainer = SignTrainer::new(
        config,
        logger,
        device_camera,
        device_display,
        feature_extractor,
    );

    let driver = {
        let trainer = trainer.clone();
        thread::spawn(move || demo_session(&trainer))
    };

    trainer.run()?;
    let _ = driver.join();

    Ok(())
}

/// Stands in for the UI: trains two classes from live captures, lets the
/// loop classify for a moment, confirms a prediction, and exports the
/// snapshot.
fn demo_session(trainer: &SignTrainer) {
    thread::sleep(Duration::from_millis(300));

    let ah = match trainer.add_class("ah") {
        Ok(record) => record,
        Err(_) => return,
    };
    let ee = match trainer.add_class("ee") {
        Ok(record) => record,
        Err(_) => return,
    };

    for _ in 0..5 {
        let _ = trainer.request_training_capture(ah.id);
        thread::sleep(Duration::from_millis(200));
    }
    for _ in 0..5 {
        let _ = trainer.request_training_capture(ee.id);
        thread::sleep(Duration::from_millis(200));
    }

    thread::sleep(Duration::from_secs(2));
    trainer.confirm_prediction();

    if let Ok(snapshot) = trainer.save_dataset() {
        println!("snapshot: {} bytes", snapshot.len());
    }
    if let Ok(json) = serde_json::to_string_pretty(&trainer.classes()) {
        println!("classes: {}", json);
    }
    if let Some(prediction) = trainer.prediction() {
        if let Ok(json) = serde_json::to_string(&prediction) {
            println!("prediction: {}", json);
        }
    }
    println!("text: {:?}", trainer.text());

    trainer.stop();
}
