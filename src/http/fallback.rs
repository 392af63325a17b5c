//! Error reporting for framework fallback paths.
//!
//! A 404/500 fallback runs outside the route that installed the per-request
//! reporter, so it reuses the published one instead. When nothing has been
//! published yet (an error before the first request completes middleware
//! setup), the error is still recorded and answered with a bare 500.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handlers::{BoxError, ErrorEvent, ErrorHandler, RecordHandler};
use crate::http::middleware::{ActiveReporter, ReportingState};

/// Downstream error delegate built from the record handler and the published
/// reporter slot.
pub struct FallbackReporter {
    recorder: RecordHandler,
    published: Arc<ArcSwapOption<ActiveReporter>>,
}

impl FallbackReporter {
    pub fn new(state: &ReportingState) -> Self {
        Self {
            recorder: RecordHandler::new(state.error_logger(), state.config()),
            published: state.published_slot(),
        }
    }

    /// Log the error and render it through the published stack when one
    /// exists.
    pub fn respond(&self, error: impl Into<BoxError>) -> Response {
        match self.published.load_full() {
            Some(reporter) => reporter.report(error),
            None => {
                let _ = self.recorder.handle(&ErrorEvent::detached(error));
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
