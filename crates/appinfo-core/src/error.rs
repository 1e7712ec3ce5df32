//! Configuration error types.
//!
//! Registry misuse is a programmer error and fails fast. Everything
//! environmental (missing tools, failed version probes, non-frozen
//! processes) is expected and degrades into the data model instead.

use thiserror::Error;

/// Errors that can occur when configuring the tool registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A tool was registered with an empty name.
    #[error("Tool name cannot be empty")]
    EmptyToolName,

    /// Detection was requested for a name that was never registered.
    #[error("Tool '{0}' was never registered")]
    UnknownTool(String),
}
