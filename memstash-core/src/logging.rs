use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::schema::LoggingConfig;

/// Initialize the logging system.
///
/// Diagnostics go to stderr so stdout carries only the records the commands
/// print. `RUST_LOG` overrides the configured level, `LOG_FORMAT` the format.
pub fn init_logging(config: &LoggingConfig) {
    let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());

    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level_str));

    // Apply module overrides from config
    for (module, level) in &config.overrides {
        // Directives must be valid
        if let Ok(directive) = format!("{}={}", module, level).parse() {
            filter = filter.add_directive(directive);
        } else {
            eprintln!("Invalid log directive: {}={}", module, level);
        }
    }

    let format_str = std::env::var("LOG_FORMAT").unwrap_or_else(|_| config.format.clone());
    let is_json = format_str.to_lowercase() == "json";

    // is_json is runtime state, so the layer type is unified by boxing.
    let stderr_layer = if is_json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    Registry::default().with(filter).with(stderr_layer).init();
}
