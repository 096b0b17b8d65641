//! # Runtime Bootstrap
//!
//! Shared process-level infrastructure for hosts embedding the pipeline
//! crates: structured logging setup on top of `tracing-subscriber`.

pub mod error;
pub mod logging;

pub use error::{Result, RuntimeError};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
