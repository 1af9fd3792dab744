//! Runtime configuration, read from command-line flags or the environment.

use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "item-service")]
#[command(about = "CRUD over items plus a concurrent process-all endpoint")]
pub struct AppConfig {
    /// Address to bind.
    #[arg(long, env = "ITEM_SERVICE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "ITEM_SERVICE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Size of the batch worker pool.
    #[arg(long, env = "ITEM_SERVICE_WORKERS", default_value_t = 10)]
    pub workers: usize,

    /// Pause each batch job takes before touching the store, in milliseconds.
    #[arg(long, env = "ITEM_SERVICE_TASK_DELAY_MS", default_value_t = 100)]
    pub task_delay_ms: u64,

    /// Capacity of the item actor's mailbox.
    #[arg(long, env = "ITEM_SERVICE_MAILBOX_CAPACITY", default_value_t = 32)]
    pub mailbox_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: 10,
            task_delay_ms: 100,
            mailbox_capacity: 32,
        }
    }
}

impl AppConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn task_delay(&self) -> Duration {
        Duration::from_millis(self.task_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = AppConfig::parse_from(["item-service", "--port", "9000", "--workers", "4"]);
        assert_eq!(config.address(), "0.0.0.0:9000");
        assert_eq!(config.workers, 4);
        assert_eq!(config.task_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_default_matches_parser_defaults() {
        let parsed = AppConfig::parse_from(["item-service"]);
        let default = AppConfig::default();
        assert_eq!(parsed.address(), default.address());
        assert_eq!(parsed.workers, default.workers);
        assert_eq!(parsed.task_delay_ms, default.task_delay_ms);
        assert_eq!(parsed.mailbox_capacity, default.mailbox_capacity);
    }
}
