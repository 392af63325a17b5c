//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Define the logger seam consumed by the record handler
//!
//! # Design Decisions
//! - `ErrorLogger` is a trait object so tests can substitute a recording
//!   double and deployments can route to a dedicated error backend
//! - The record carries the facts a log line needs (request id, method,
//!   path); the backend decides formatting

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::LogLevel;

/// One structured record for a handled error.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub level: LogLevel,
    pub channel: String,
    pub message: String,
    pub request_id: String,
    pub method: String,
    pub path: String,
}

/// Sink for error records.
pub trait ErrorLogger: Send + Sync {
    fn log(&self, record: ErrorRecord);
}

/// Default logger: emits each record as a tracing event at the record's
/// severity, with the channel and request facts as fields.
#[derive(Debug, Default, Clone)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorLogger for TracingLogger {
    fn log(&self, record: ErrorRecord) {
        macro_rules! emit {
            ($level:ident) => {
                tracing::$level!(
                    channel = %record.channel,
                    request_id = %record.request_id,
                    method = %record.method,
                    path = %record.path,
                    "{}",
                    record.message
                )
            };
        }

        match record.level {
            LogLevel::Trace => emit!(trace),
            LogLevel::Debug => emit!(debug),
            LogLevel::Info => emit!(info),
            LogLevel::Warn => emit!(warn),
            LogLevel::Error => emit!(error),
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faultline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
