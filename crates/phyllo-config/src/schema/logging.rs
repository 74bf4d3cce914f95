//! Logging configuration.

use serde::{Deserialize, Serialize};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive: the level for our crates, HTTP internals kept quiet.
    pub fn directive(&self) -> String {
        format!("{},hyper=warn,reqwest=warn", self.level)
    }
}
