//! Logger that carries the log-enabled switch and owns the word cache.

use crate::config::LogOptions;
use crate::domain::{LogSink, WordCache, WordLogger};
use crate::error::AppError;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{Level, debug, warn};

/// Logger consumed by [`crate::application::services::WordService`].
///
/// Wraps a [`LogSink`] and delegates every record to it. The word cache is
/// created empty here and lives as long as this instance. Insertion is
/// serialized through a mutex, so the logger can be shared through `Arc`.
pub struct InstrumentedLogger {
    options: LogOptions,
    sink: Arc<dyn LogSink>,
    cache: Mutex<WordCache>,
}

impl InstrumentedLogger {
    /// Creates a logger with an empty word cache.
    pub fn new(options: LogOptions, sink: Arc<dyn LogSink>) -> Self {
        debug!(
            is_log_enabled = options.is_log_enabled,
            "Instrumented logger created"
        );
        Self {
            options,
            sink,
            cache: Mutex::new(WordCache::new()),
        }
    }

    /// Number of words recorded so far.
    pub fn cached_words(&self) -> usize {
        self.lock_cache().len()
    }

    /// Returns the cached reversed form of `word`, if any.
    pub fn cached_reverse(&self, word: &str) -> Option<String> {
        self.lock_cache().get(word).map(str::to_string)
    }

    fn lock_cache(&self) -> MutexGuard<'_, WordCache> {
        // The cache is left consistent by every insert, so a poisoned lock is still usable.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WordLogger for InstrumentedLogger {
    fn is_log_enabled(&self) -> bool {
        self.options.is_log_enabled
    }

    fn add_to_word_cache(&self, word: &str, reversed_word: &str) -> Result<(), AppError> {
        let mut cache = self.lock_cache();

        match cache.insert(word, reversed_word) {
            Ok(()) => {
                debug!("Word cache SET: {} -> {} (size: {})", word, reversed_word, cache.len());
                Ok(())
            }
            Err(e) => {
                warn!("Word cache rejected duplicate key: {}", word);
                Err(e)
            }
        }
    }
}

impl LogSink for InstrumentedLogger {
    fn log(&self, level: Level, message: &str) {
        self.sink.log(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockLogSink;

    fn logger_with(enabled: bool, sink: MockLogSink) -> InstrumentedLogger {
        InstrumentedLogger::new(
            LogOptions {
                is_log_enabled: enabled,
            },
            Arc::new(sink),
        )
    }

    #[test]
    fn test_is_log_enabled_reflects_options() {
        assert!(logger_with(true, MockLogSink::new()).is_log_enabled());
        assert!(!logger_with(false, MockLogSink::new()).is_log_enabled());
    }

    #[test]
    fn test_add_to_word_cache_stores_pair() {
        let logger = logger_with(false, MockLogSink::new());

        logger.add_to_word_cache("mountain", "niatnuom").unwrap();

        assert_eq!(logger.cached_words(), 1);
        assert_eq!(logger.cached_reverse("mountain").as_deref(), Some("niatnuom"));
    }

    #[test]
    fn test_add_to_word_cache_rejects_duplicate() {
        let logger = logger_with(false, MockLogSink::new());

        logger.add_to_word_cache("mountain", "niatnuom").unwrap();
        let result = logger.add_to_word_cache("mountain", "niatnuom");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::DuplicateKey { .. }));
        assert_eq!(logger.cached_words(), 1);
    }

    #[test]
    fn test_log_delegates_to_sink() {
        let mut sink = MockLogSink::new();
        sink.expect_log()
            .withf(|level, message| *level == Level::WARN && message == "careful")
            .times(1)
            .return_const(());

        let logger = logger_with(false, sink);

        logger.log(Level::WARN, "careful");
    }

    #[test]
    fn test_shared_across_threads() {
        let logger = Arc::new(logger_with(false, MockLogSink::new()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    let word = format!("word{i}");
                    let reversed: String = word.chars().rev().collect();
                    logger.add_to_word_cache(&word, &reversed)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(logger.cached_words(), 8);
    }
}
