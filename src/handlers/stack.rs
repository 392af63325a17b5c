//! Ordered composition of error handlers.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handlers::{ErrorEvent, ErrorHandler};

/// Ordered sequence of error handlers for one request.
///
/// Evaluation rule: handlers run in registration order and ALL of them run.
/// The first response produced wins as the display outcome; later handlers
/// still execute, which is how the log recorder observes every error even
/// when a renderer already answered.
#[derive(Default)]
pub struct HandlerStack {
    handlers: Vec<Arc<dyn ErrorHandler>>,
}

impl HandlerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler. Order is fixed once the middleware hands the stack
    /// out; nothing mutates it afterwards.
    pub fn push(&mut self, handler: Arc<dyn ErrorHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered handler names, in invocation order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.iter().any(|h| h.name() == name)
    }

    /// Run every handler against the event and return the display outcome.
    ///
    /// Falls back to a bare 500 when no handler produced a response (the
    /// production path, where only the recorder is registered).
    pub fn run(&self, event: &ErrorEvent) -> Response {
        let mut outcome: Option<Response> = None;
        for handler in &self.handlers {
            let produced = handler.handle(event);
            if outcome.is_none() {
                outcome = produced;
            }
        }

        outcome.unwrap_or_else(|| {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Probe {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        respond: bool,
    }

    impl ErrorHandler for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn handle(&self, _event: &ErrorEvent) -> Option<Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.respond {
                Some((StatusCode::IM_A_TEAPOT, self.name).into_response())
            } else {
                None
            }
        }
    }

    fn probe(name: &'static str, respond: bool) -> (Arc<Probe>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe = Arc::new(Probe {
            name,
            calls: calls.clone(),
            respond,
        });
        (probe, calls)
    }

    #[test]
    fn test_first_response_wins_but_all_run() {
        let (first, first_calls) = probe("first", true);
        let (second, second_calls) = probe("second", true);
        let (recorder, recorder_calls) = probe("recorder", false);

        let mut stack = HandlerStack::new();
        stack.push(first);
        stack.push(second);
        stack.push(recorder);

        let response = stack.run(&ErrorEvent::detached("boom"));
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(recorder_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_response_falls_back_to_500() {
        let (recorder, _) = probe("recorder", false);
        let mut stack = HandlerStack::new();
        stack.push(recorder);

        let response = stack.run(&ErrorEvent::detached("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_names_preserve_order() {
        let (a, _) = probe("json_response", true);
        let (b, _) = probe("pretty_page", true);
        let mut stack = HandlerStack::new();
        stack.push(a);
        stack.push(b);

        assert_eq!(stack.handler_names(), vec!["json_response", "pretty_page"]);
        assert!(stack.contains("pretty_page"));
        assert!(!stack.contains("log_record"));
    }
}
