//! Application layer services implementing business logic.
//!
//! Services consume the capability traits from [`crate::domain`] and provide
//! a clean API for the command-line front end.
//!
//! # Available Services
//!
//! - [`services::word_service::WordService`] - Word reversal with logging and caching

pub mod services;
