use crate::example_store::Embedding;
use image::DynamicImage;

#[derive(Debug, Clone)]
pub enum FeatureExtractorEvent {
    Disconnected,
    Connected,
}

/// Frozen pretrained image-embedding backend. `embed` must be deterministic
/// for a given backend and always produce vectors of `width` length; callers
/// wait for `Connected` and a successful `load` before the first `embed`.
pub trait FeatureExtractor: Send + Sync {
    fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn embed(
        &self,
        frame: &DynamicImage,
    ) -> Result<Embedding, Box<dyn std::error::Error + Send + Sync>>;
    fn width(&self) -> usize;
    fn events(&self) -> std::sync::mpsc::Receiver<FeatureExtractorEvent>;
}
