//! In-memory mapping of observed words to their reversed forms.

use crate::error::{AppError, DUPLICATE_KEY_MESSAGE};
use serde_json::json;
use std::collections::HashMap;

/// Mapping of words to their reversed forms.
///
/// Grows by one entry per successful reversal. There is no eviction and no
/// capacity bound. Inserting a key that is already present is an error and
/// leaves the existing entry untouched.
#[derive(Debug, Default)]
pub struct WordCache {
    entries: HashMap<String, String>,
}

impl WordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word and its reversed form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if `word` is already cached.
    pub fn insert(&mut self, word: &str, reversed_word: &str) -> Result<(), AppError> {
        if self.contains(word) {
            return Err(AppError::duplicate_key(
                DUPLICATE_KEY_MESSAGE,
                json!({ "key": word }),
            ));
        }

        self.entries
            .insert(word.to_string(), reversed_word.to_string());
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
