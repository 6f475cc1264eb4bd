//! Word reversal service.

use crate::domain::{LogSink, WordLogger};
use crate::error::AppError;
use std::sync::Arc;
use tracing::Level;

/// Service that reverses words and reports each reversal to its logger.
///
/// Depends on two injected capabilities: a [`WordLogger`] for the log-enabled
/// switch and the word cache, and a [`LogSink`] for emitting records. In the
/// binary both are the same [`crate::infrastructure::logger::InstrumentedLogger`].
pub struct WordService<L: WordLogger + ?Sized, S: LogSink + ?Sized> {
    logger: Arc<L>,
    sink: Arc<S>,
}

impl<L: WordLogger + ?Sized, S: LogSink + ?Sized> WordService<L, S> {
    /// Creates a new word service.
    pub fn new(logger: Arc<L>, sink: Arc<S>) -> Self {
        Self { logger, sink }
    }

    /// Reverses a word (e.g. "mountain" to "niatnuom").
    ///
    /// Characters are reversed as Unicode scalar values; nothing is trimmed
    /// or case-folded. On success the logger is asked whether logging is
    /// enabled, one `INFO` record is emitted if it is, and the pair is then
    /// added to the word cache whatever the flag says.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `word` is `None` or empty.
    /// Returns [`AppError::DuplicateKey`] if the logger already cached `word`.
    pub fn reverse<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<String, AppError> {
        let word = match word.into() {
            Some(w) if !w.is_empty() => w,
            _ => return Err(AppError::missing_word()),
        };

        let reversed_word: String = word.chars().rev().collect();

        if self.logger.is_log_enabled() {
            self.sink.log(
                Level::INFO,
                &format!("The word \"{}\" was reversed as \"{}\"", word, reversed_word),
            );
        }

        self.logger.add_to_word_cache(word, &reversed_word)?;

        Ok(reversed_word)
    }
}
