//! Business logic services for the application layer.

pub mod word_service;

pub use word_service::WordService;
