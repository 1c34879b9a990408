use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); 4],
        }
    }

    fn render_panel(&self) {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(24);

        println!("┌{}┐", "─".repeat(width));
        for line in &self.lines {
            let padding = width - line.chars().count();
            println!("│{}{}│", line, " ".repeat(padding));
        }
        println!("└{}┘", "─".repeat(width));
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in &mut self.lines {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: usize, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.lines.len() {
            return Err("Invalid line number".into());
        }

        self.lines[line] = text.to_string();
        if line == self.lines.len() - 1 {
            self.render_panel();
        }
        Ok(())
    }
}
