//! Observability subsystem.
//!
//! The `ErrorLogger` trait is the seam between the record handler and the
//! logging backend; the default implementation forwards to `tracing`.

pub mod logging;

pub use logging::{init_tracing, ErrorLogger, ErrorRecord, TracingLogger};
