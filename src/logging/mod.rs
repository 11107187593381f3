//! Structured JSON logging for assessment audit trails.

mod format;

pub use format::{LogEvent, StructuredLogger};
