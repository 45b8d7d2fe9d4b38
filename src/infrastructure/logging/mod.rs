//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber, written to
//! stderr so stdout stays free for command output. An optional JSON log
//! file can be added through tracing-appender.

pub mod logger;

pub use logger::LoggerImpl;
