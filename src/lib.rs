//! # Word Reverser
//!
//! A console utility that reverses a word, reports each reversal through an
//! injectable logger, and records every word in an in-memory cache.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Word cache and logging capability traits
//! - **Application Layer** ([`application`]) - The word reversal service
//! - **Infrastructure Layer** ([`infrastructure`]) - Instrumented logger and `tracing` sink
//!
//! ## Quick Start
//!
//! ```bash
//! echo mountain | LOG_ENABLED=true cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from `appsettings.json` and environment variables
//! via [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::WordService;
    pub use crate::config::{Config, LogOptions};
    pub use crate::domain::{LogSink, WordCache, WordLogger};
    pub use crate::error::{AppError, REVERSE_ERROR_ENTER_A_WORD};
    pub use crate::infrastructure::logger::{InstrumentedLogger, TracingSink};
}
