//! JSON error renderer for API-style callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::handlers::{ErrorEvent, ErrorHandler};

/// Renders errors as a JSON body instead of an HTML page.
///
/// Registered ahead of the page renderer for AJAX requests, so API callers
/// receive structured output.
#[derive(Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorHandler for JsonHandler {
    fn name(&self) -> &'static str {
        "json_response"
    }

    fn handle(&self, event: &ErrorEvent) -> Option<Response> {
        let body = json!({
            "error": {
                "message": event.message(),
                "chain": event.chain(),
            },
            "request_id": event.request_id(),
            "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        });

        Some((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response())
    }
}
