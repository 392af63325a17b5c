//! Error reporting middleware for axum request pipelines.
//!
//! Per request, the middleware composes an ordered stack of error handlers —
//! an HTML debug page and a JSON renderer when debug mode is on, plus a log
//! recorder unconditionally — then threads the stack through request-scoped
//! context and a shared slot so both route handlers and framework fallbacks
//! can report errors through it.

pub mod config;
pub mod handlers;
pub mod http;
pub mod observability;
pub mod request;

pub use config::ReportingConfig;
pub use handlers::{BoxError, ErrorEvent, ErrorHandler, HandlerStack};
pub use http::fallback::FallbackReporter;
pub use http::middleware::{error_reporting, ActiveReporter, ReportingState};
pub use observability::logging::{ErrorLogger, ErrorRecord, TracingLogger};
pub use request::facts::RequestFacts;
