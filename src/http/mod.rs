//! HTTP pipeline integration.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → middleware.rs (capture facts, compose handler stack,
//!                      install per-request + publish shared)
//!     → next (application routes)
//!     → response returned unchanged
//!
//! on error, downstream code reports through:
//!     ActiveReporter (request extension)  — in-scope errors
//!     FallbackReporter (fallback.rs)      — 404/500 fallback paths
//! ```

pub mod fallback;
pub mod middleware;

pub use fallback::FallbackReporter;
pub use middleware::{error_reporting, ActiveReporter, ReportingState};
