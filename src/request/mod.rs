//! Request introspection subsystem.
//!
//! Read-only snapshots of inbound requests, consumed by the diagnostic
//! tables on the debug page and by the log recorder. Nothing here mutates
//! the request.

pub mod facts;

pub use facts::{is_ajax, RequestFacts, NONE_PLACEHOLDER};
