//! Capability traits consumed by the word reversal service.
//!
//! The service depends on two independent capabilities:
//!
//! - [`WordLogger`] - the log-enabled switch and the word cache
//! - [`LogSink`] - emission of log records at a given severity
//!
//! # Implementations
//!
//! - [`crate::infrastructure::logger::InstrumentedLogger`] - implements both
//! - [`crate::infrastructure::logger::TracingSink`] - `tracing`-backed sink
//! - Test mocks available with `cfg(test)`

use crate::error::AppError;
use tracing::Level;

/// Narrow capability used by [`crate::application::services::WordService`].
#[cfg_attr(test, mockall::automock)]
pub trait WordLogger: Send + Sync {
    /// Returns the configured `LogOptions.IsLogEnabled` flag.
    fn is_log_enabled(&self) -> bool;

    /// Records a word and its reversed form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if `word` was already recorded.
    fn add_to_word_cache(&self, word: &str, reversed_word: &str) -> Result<(), AppError>;
}

/// Structured logging facility.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Emits one record at `level`.
    fn log(&self, level: Level, message: &str);
}
