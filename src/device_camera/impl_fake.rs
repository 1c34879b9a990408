use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, RgbImage};
use rand::Rng;
use std::sync::Arc;

const FRAME_WIDTH: u32 = 224;
const FRAME_HEIGHT: u32 = 224;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let mut frame = RgbImage::new(FRAME_WIDTH, FRAME_HEIGHT);
        for pixel in frame.pixels_mut() {
            pixel.0 = [rng.random(), rng.random(), rng.random()];
        }
        Ok(DynamicImage::ImageRgb8(frame))
    }

    fn events(&self) -> std::sync::mpsc::Receiver<DeviceCameraEvent> {
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = sender.send(DeviceCameraEvent::Connected);
        });
        receiver
    }
}
