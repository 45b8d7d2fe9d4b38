use std::io;

use anyhow::Result;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::domain::models::{LogFormat, LoggingConfig};

/// File name used inside `log_dir`.
const LOG_FILE_NAME: &str = "issue-roulette.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger implementation using tracing
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber described by `config`.
    ///
    /// `RUST_LOG` takes precedence over the configured level. If a global
    /// subscriber is already installed the call is a no-op, so tests may
    /// call it more than once.
    ///
    /// The returned value must be kept alive for file output to flush.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let level = parse_log_level(&config.level)?;

        let console: BoxedLayer = match config.format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter(level))
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter(level))
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter(level))
                .boxed(),
        };
        let mut layers = vec![console];

        // File output is always JSON for structured logging
        let guard = if let Some(ref log_dir) = config.log_dir {
            let (non_blocking_file, guard) =
                tracing_appender::non_blocking(rolling::never(log_dir, LOG_FILE_NAME));
            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter(level))
                    .boxed(),
            );
            Some(guard)
        } else {
            None
        };

        if let Err(err) = tracing_subscriber::registry().with(layers).try_init() {
            tracing::debug!(error = %err, "global subscriber already installed");
        }

        tracing::debug!(
            level = %config.level,
            format = ?config.format,
            file_output = config.log_dir.is_some(),
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }
}

fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Parse log level string to Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
