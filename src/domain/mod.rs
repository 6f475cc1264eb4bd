//! Domain layer containing the word cache and the logging capabilities.
//!
//! # Architecture
//!
//! - [`word_cache`] - Owned word -> reversed word mapping
//! - [`logger`] - Capability traits consumed by the reversal service
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Capability traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod logger;
pub mod word_cache;

pub use logger::{LogSink, WordLogger};
pub use word_cache::WordCache;

#[cfg(test)]
pub use logger::{MockLogSink, MockWordLogger};
