//! Error handler subsystem.
//!
//! # Data Flow
//! ```text
//! middleware composes per request:
//!     [json.rs]   (debug + AJAX only)
//!     [page.rs]   (debug only)
//!     [record.rs] (always)
//!         → stack.rs (ordered, all handlers invoked, first response wins)
//! ```
//!
//! # Design Decisions
//! - Handlers are polymorphic over the `ErrorHandler` trait; the stack is an
//!   explicit ordered list, not an inherited library traversal order
//! - Content negotiation comes first: the JSON renderer sits ahead of the
//!   page renderer so an AJAX caller gets structured output
//! - The recorder sits last and never produces a response, so every error is
//!   logged even when a renderer already answered

pub mod json;
pub mod page;
pub mod record;
pub mod stack;

pub use json::JsonHandler;
pub use page::PageHandler;
pub use record::RecordHandler;
pub use stack::HandlerStack;

use axum::response::Response;

use crate::request::facts::RequestFacts;

/// Boxed error as reported by application code. Opaque to this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One reported error plus the request snapshot it occurred under.
pub struct ErrorEvent {
    error: BoxError,
    facts: RequestFacts,
}

impl ErrorEvent {
    pub fn new(error: impl Into<BoxError>, facts: RequestFacts) -> Self {
        Self {
            error: error.into(),
            facts,
        }
    }

    /// An error reported outside any request scope.
    pub fn detached(error: impl Into<BoxError>) -> Self {
        Self::new(error, RequestFacts::unknown())
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Source chain, outermost cause first. Empty for leaf errors.
    pub fn chain(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut current = self.error.source();
        while let Some(err) = current {
            causes.push(err.to_string());
            current = err.source();
        }
        causes
    }

    pub fn facts(&self) -> &RequestFacts {
        &self.facts
    }

    pub fn request_id(&self) -> &str {
        &self.facts.request_id
    }
}

/// A step in the error handler stack.
///
/// `handle` may produce a response (renderers) or decline (recorders); it
/// never inspects or transforms the error beyond formatting it.
pub trait ErrorHandler: Send + Sync {
    /// Stable name, used for introspection and logging.
    fn name(&self) -> &'static str;

    fn handle(&self, event: &ErrorEvent) -> Option<Response>;
}
