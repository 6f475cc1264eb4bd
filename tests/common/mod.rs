#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use word_reverser::application::services::WordService;
use word_reverser::config::LogOptions;
use word_reverser::domain::LogSink;
use word_reverser::infrastructure::logger::{InstrumentedLogger, TracingSink};

/// Log sink that keeps every record in memory.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

pub type TestService = WordService<InstrumentedLogger, InstrumentedLogger>;

/// Builds a service wired the same way as the binary, over a recording sink.
pub fn create_test_service(
    is_log_enabled: bool,
) -> (TestService, Arc<InstrumentedLogger>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Arc::new(InstrumentedLogger::new(
        LogOptions { is_log_enabled },
        sink.clone(),
    ));
    let service = WordService::new(Arc::clone(&logger), Arc::clone(&logger));

    (service, logger, sink)
}

/// Builds a service wired exactly as the binary does, logging through `tracing`.
pub fn create_tracing_service(is_log_enabled: bool) -> (TestService, Arc<InstrumentedLogger>) {
    let logger = Arc::new(InstrumentedLogger::new(
        LogOptions { is_log_enabled },
        Arc::new(TracingSink::new()),
    ));
    let service = WordService::new(Arc::clone(&logger), Arc::clone(&logger));

    (service, logger)
}

/// Writer that appends formatted subscriber output to a shared buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
