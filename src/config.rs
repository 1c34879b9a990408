use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub capture_rate: Duration,
    pub embedding_width: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_rate: Duration::from_millis(100),
            embedding_width: 1024,
            logger_timezone: sri_lanka_time(),
        }
    }
}

fn sri_lanka_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}
