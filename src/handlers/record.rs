//! Log recording handler.
//!
//! Always registered, regardless of debug mode: production errors are
//! recorded even when nothing displays them. Never produces a response.

use std::sync::Arc;

use axum::response::Response;

use crate::config::schema::{LogLevel, ReportingConfig};
use crate::handlers::{ErrorEvent, ErrorHandler};
use crate::observability::logging::{ErrorLogger, ErrorRecord};

/// Sends one structured record per error to the configured logger.
pub struct RecordHandler {
    logger: Arc<dyn ErrorLogger>,
    level: LogLevel,
    channel: String,
}

impl RecordHandler {
    /// The handler receives the full reporting configuration and picks out
    /// the options it recognizes (level, channel).
    pub fn new(logger: Arc<dyn ErrorLogger>, config: &ReportingConfig) -> Self {
        Self {
            logger,
            level: config.log.level,
            channel: config.log.channel.clone(),
        }
    }
}

impl ErrorHandler for RecordHandler {
    fn name(&self) -> &'static str {
        "log_record"
    }

    fn handle(&self, event: &ErrorEvent) -> Option<Response> {
        let facts = event.facts();
        self.logger.log(ErrorRecord {
            level: self.level,
            channel: self.channel.clone(),
            message: event.message(),
            request_id: facts.request_id.clone(),
            method: facts.method.clone(),
            path: facts.path.clone(),
        });
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLogger {
        records: Mutex<Vec<ErrorRecord>>,
    }

    impl ErrorLogger for MemoryLogger {
        fn log(&self, record: ErrorRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    #[test]
    fn test_one_record_per_error_and_no_response() {
        let logger = Arc::new(MemoryLogger::default());
        let mut config = ReportingConfig::default();
        config.log.level = LogLevel::Warn;
        config.log.channel = "billing".to_string();

        let handler = RecordHandler::new(logger.clone(), &config);
        let outcome = handler.handle(&ErrorEvent::detached("payment declined"));

        assert!(outcome.is_none());
        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "payment declined");
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[0].channel, "billing");
    }
}
