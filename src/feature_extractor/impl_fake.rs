use crate::example_store::Embedding;
use crate::feature_extractor::interface::{FeatureExtractor, FeatureExtractorEvent};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

/// Stands in for the real frozen network: folds pixel luminance into `width`
/// buckets and L2-normalizes, so identical frames embed identically.
pub struct FeatureExtractorFake {
    width: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FeatureExtractorFake {
    pub fn new(width: usize, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            width,
            logger: logger.with_namespace("extractor").with_namespace("fake"),
        }
    }
}

impl FeatureExtractor for FeatureExtractorFake {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Loading embedding model...")?;
        Ok(())
    }

    fn embed(
        &self,
        frame: &DynamicImage,
    ) -> Result<Embedding, Box<dyn std::error::Error + Send + Sync>> {
        let rgb = frame.to_rgb8();

        let mut buckets = vec![0.0f32; self.width];
        for (index, pixel) in rgb.pixels().enumerate() {
            let [r, g, b] = pixel.0;
            let luminance = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
            buckets[index % self.width] += luminance;
        }

        let norm = buckets.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut buckets {
                *value /= norm;
            }
        }

        Ok(buckets)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn events(&self) -> std::sync::mpsc::Receiver<FeatureExtractorEvent> {
        let (sender, receiver) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = sender.send(FeatureExtractorEvent::Connected);
        });
        receiver
    }
}
