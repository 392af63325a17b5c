//! Error reporting middleware.
//!
//! # Responsibilities
//! - Read the debug flag and compose the per-request handler stack
//! - Attach diagnostic data tables to the debug page renderer
//! - Install the stack in request scope and publish it to shared state
//! - Delegate to `next` and return its response unchanged
//!
//! # Design Decisions
//! - Handler registration is request-scoped (an extension) plus a shared
//!   `ArcSwapOption` slot, not a process-global trap; the slot holds the most
//!   recently installed stack until the next request overwrites it
//! - Configuration, logger, and request facts are explicit parameters of
//!   `ReportingState`; no container lookups
//! - Composition errors propagate to the caller; this middleware performs no
//!   recovery of its own

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::config::schema::ReportingConfig;
use crate::handlers::{
    BoxError, ErrorEvent, HandlerStack, JsonHandler, PageHandler, RecordHandler,
};
use crate::observability::logging::ErrorLogger;
use crate::request::facts::{is_ajax, RequestFacts};

/// Shared state for the middleware.
#[derive(Clone)]
pub struct ReportingState {
    config: Arc<ReportingConfig>,
    logger: Arc<dyn ErrorLogger>,
    err_logger: Option<Arc<dyn ErrorLogger>>,
    published: Arc<ArcSwapOption<ActiveReporter>>,
}

impl ReportingState {
    pub fn new(config: ReportingConfig, logger: Arc<dyn ErrorLogger>) -> Self {
        Self {
            config: Arc::new(config),
            logger,
            err_logger: None,
            published: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Install a dedicated error logger, preferred over the general one.
    pub fn with_error_logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.err_logger = Some(logger);
        self
    }

    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    /// The logger the record handler should use: the dedicated error logger
    /// when one is installed, otherwise the general logger.
    pub fn error_logger(&self) -> Arc<dyn ErrorLogger> {
        self.err_logger
            .clone()
            .unwrap_or_else(|| self.logger.clone())
    }

    /// The most recently installed reporter, for reuse by fallback paths.
    pub fn published(&self) -> Option<Arc<ActiveReporter>> {
        self.published.load_full()
    }

    pub(crate) fn published_slot(&self) -> Arc<ArcSwapOption<ActiveReporter>> {
        self.published.clone()
    }

    fn publish(&self, reporter: Arc<ActiveReporter>) {
        self.published.store(Some(reporter));
    }
}

/// The composed handler stack plus the request snapshot it was built for.
///
/// Inserted into request extensions by the middleware; route handlers pull it
/// out to turn an error into the negotiated response.
#[derive(Clone)]
pub struct ActiveReporter {
    stack: Arc<HandlerStack>,
    facts: Arc<RequestFacts>,
}

impl ActiveReporter {
    fn new(stack: Arc<HandlerStack>, facts: Arc<RequestFacts>) -> Self {
        Self { stack, facts }
    }

    /// Report an error: every registered handler runs, the first rendered
    /// response is returned.
    pub fn report(&self, error: impl Into<BoxError>) -> Response {
        let event = ErrorEvent::new(error, (*self.facts).clone());
        self.stack.run(&event)
    }

    pub fn stack(&self) -> &HandlerStack {
        &self.stack
    }

    pub fn facts(&self) -> &RequestFacts {
        &self.facts
    }
}

/// Pipeline step: compose the error handler stack for this request, install
/// it, then hand the request to `next`.
pub async fn error_reporting(
    State(state): State<ReportingState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let facts = Arc::new(RequestFacts::capture(&req, &state.config.application));

    let mut stack = HandlerStack::new();

    if state.config.debug {
        // Content negotiation first: AJAX callers get JSON ahead of HTML.
        if is_ajax(&req) {
            stack.push(Arc::new(JsonHandler::new()));
        }

        let mut page = PageHandler::new()
            .with_table("Application", facts.environment_table())
            .with_table("Request", facts.request_table());
        if let Some(editor) = &state.config.editor {
            page = page.with_editor(editor);
        }
        stack.push(Arc::new(page));
    }

    // Recorded in every case, including debug off.
    stack.push(Arc::new(RecordHandler::new(
        state.error_logger(),
        &state.config,
    )));

    let reporter = Arc::new(ActiveReporter::new(Arc::new(stack), facts));
    req.extensions_mut().insert((*reporter).clone());
    state.publish(reporter);

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::logging::ErrorRecord;
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
    fn test_error_logger_preference() {
        let general = Arc::new(MemoryLogger::default());
        let dedicated = Arc::new(MemoryLogger::default());

        let state = ReportingState::new(ReportingConfig::default(), general.clone());
        state.error_logger().log(ErrorRecord {
            level: crate::config::LogLevel::Error,
            channel: "error".into(),
            message: "one".into(),
            request_id: "r".into(),
            method: "GET".into(),
            path: "/".into(),
        });
        assert_eq!(general.records.lock().unwrap().len(), 1);

        let state = ReportingState::new(ReportingConfig::default(), general.clone())
            .with_error_logger(dedicated.clone());
        state.error_logger().log(ErrorRecord {
            level: crate::config::LogLevel::Error,
            channel: "error".into(),
            message: "two".into(),
            request_id: "r".into(),
            method: "GET".into(),
            path: "/".into(),
        });
        assert_eq!(general.records.lock().unwrap().len(), 1);
        assert_eq!(dedicated.records.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_nothing_published_before_first_request() {
        let state = ReportingState::new(
            ReportingConfig::default(),
            Arc::new(MemoryLogger::default()),
        );
        assert!(state.published().is_none());
    }
}
