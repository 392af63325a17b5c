//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize the [reporting] section)
//!     → semantic checks
//!     → ReportingConfig (validated, immutable)
//!     → shared via Arc with the middleware state
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid production config
//! - `editor` is passed through to the page renderer unvalidated; a bogus
//!   value degrades the rendered hint, nothing else
//! - Logging options live under `log` and are consumed only by the recorder

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{LogConfig, LogLevel, ReportingConfig};
