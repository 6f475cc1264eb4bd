//! Logging layer used by the reversal service.
//!
//! Provides two implementations of the domain capabilities:
//! - [`InstrumentedLogger`] - Log-enabled switch, owned word cache, and delegating sink
//! - [`TracingSink`] - Emits records through `tracing`

mod instrumented_logger;
mod tracing_sink;

pub use instrumented_logger::InstrumentedLogger;
pub use tracing_sink::TracingSink;
