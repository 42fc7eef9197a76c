//! Logging and tracing initialization.

use std::fs::File;
use std::sync::Arc;

use crate::config::LoggingConfig;

/// Build a subscriber for the given configuration.
///
/// Kept separate from [`init_logging`] so tests can install the
/// subscriber for a scope instead of globally.
fn build_subscriber(config: &LoggingConfig) -> Box<dyn tracing::Subscriber + Send + Sync> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // A log file that cannot be opened falls back to stderr output; this
    // runs before any subscriber exists, so the problem is reported
    // directly.
    let file = config.file.as_ref().and_then(|path| {
        match File::options().create(true).append(true).open(path) {
            Ok(file) => Some(Arc::new(file)),
            Err(e) => {
                eprintln!("Failed to open log file {}: {e}", path.display());
                None
            }
        }
    });

    match (config.json, file) {
        (true, Some(file)) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .with_writer(file)
                .finish(),
        ),
        (true, None) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .finish(),
        ),
        (false, Some(file)) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .finish(),
        ),
        (false, None) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        ),
    }
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) {
    tracing::subscriber::set_global_default(build_subscriber(config)).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_log_file_receives_events() {
        let path = std::env::temp_dir().join(format!("targetkit-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = LoggingConfig {
            level: "info".to_string(),
            json: false,
            file: Some(path.clone()),
        };
        tracing::subscriber::with_default(build_subscriber(&config), || {
            tracing::info!("target loaded");
        });

        let content = std::fs::read_to_string(&path).expect("log file should exist");
        assert!(content.contains("target loaded"), "got: {content}");
        let _ = std::fs::remove_file(&path);
    }
}
