//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for memstash
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote memory-storage service settings
    #[serde(default)]
    pub mem0: Mem0Config,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the hosted Mem0 service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mem0Config {
    /// API key authorizing access to one account's records.
    /// Usually supplied via the MEM0_API_KEY environment variable.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the service API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.mem0.ai/v1".to_string()
}

impl Default for Mem0Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Module-specific overrides
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            overrides: HashMap::new(),
        }
    }
}
