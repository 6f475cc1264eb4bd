//! Infrastructure layer for external integrations.
//!
//! This layer implements the capability traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`logger`] - Instrumented logger and `tracing`-backed log sink

pub mod logger;
