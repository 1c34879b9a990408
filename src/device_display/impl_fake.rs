use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every written line so tests can assert on the rendered output.
pub struct DeviceDisplayFake {
    lines: Arc<Mutex<Vec<(usize, String)>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the recorded writes, usable after the fake is boxed.
    pub fn lines_handle(&self) -> Arc<Mutex<Vec<(usize, String)>>> {
        self.lines.clone()
    }
}

impl Default for DeviceDisplayFake {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.lock().unwrap().clear();
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.lines.lock().unwrap().push((line, text.to_string()));
        Ok(())
    }
}
