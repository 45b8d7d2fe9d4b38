//! Infrastructure layer module
//!
//! Ambient concerns shared by every command:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod logging;
