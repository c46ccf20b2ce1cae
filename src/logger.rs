use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::errors::Result;

fn filter(level: &str, verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "refinance=debug,info".to_string()
    } else {
        format!("refinance={level}")
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Log to the configured file. Used while the terminal form is on screen.
pub fn init_file_logger(cfg: &LoggingConfig, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.file)?;

    tracing_subscriber::registry()
        .with(filter(&cfg.level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();
    Ok(())
}

/// Log compactly to stderr, leaving stdout to the command's output.
pub fn init_cli_logger(cfg: &LoggingConfig, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(&cfg.level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
