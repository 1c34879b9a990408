use std::error::Error;

/// Four-line status panel: 0 = engine status, 1 = prediction, 2 = classes,
/// 3 = accumulated text. The read-only UI surface of the engine.
pub trait DeviceDisplay: Send + Sync {
    /// Clear all lines.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Errors on a line outside the panel.
    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> usize {
        4
    }
}
