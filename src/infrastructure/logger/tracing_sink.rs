//! `tracing`-backed log sink.

use crate::domain::LogSink;
use tracing::Level;

/// Log sink that forwards records to the installed `tracing` subscriber.
///
/// Records are emitted under the `word_reverser` target so they can be
/// filtered with `RUST_LOG=word_reverser=info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "word_reverser", "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "word_reverser", "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "word_reverser", "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "word_reverser", "{}", message);
        } else {
            tracing::trace!(target: "word_reverser", "{}", message);
        }
    }
}
