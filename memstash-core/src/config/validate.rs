//! Configuration validation rules.

use super::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.mem0.api_base.trim().is_empty() {
        errors.push("mem0.api_base must not be empty".to_string());
    } else if !config.mem0.api_base.starts_with("http://")
        && !config.mem0.api_base.starts_with("https://")
    {
        errors.push("mem0.api_base must start with http:// or https://".to_string());
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level must be one of {} (got '{}')",
            LOG_LEVELS.join("/"),
            config.logging.level
        ));
    }
    if config.logging.format != "text" && config.logging.format != "json" {
        errors.push(format!(
            "logging.format must be 'text' or 'json' (got '{}')",
            config.logging.format
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}
