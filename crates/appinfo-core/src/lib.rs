//! Core domain types and port definitions for appinfo.
//!
//! This crate is pure: it defines the data model for application identity,
//! execution environment and external-tool detection, plus the
//! `ToolProbePort` trait. Active probing (PATH lookups, subprocess
//! invocation, environment snapshots) lives in `appinfo-runtime`.

pub mod error;
pub mod execution;
pub mod identity;
pub mod ports;
pub mod registry;
pub mod report;
pub mod tools;

// Re-export commonly used types for convenience
pub use error::ConfigError;
pub use execution::{Bundler, ExecutionInfo, ExecutionMode};
pub use identity::AppIdentity;
pub use ports::ToolProbePort;
pub use registry::ToolRegistry;
pub use report::AppInfo;
pub use tools::{DEFAULT_VERSION_TIMEOUT, ToolResult, ToolSpec, ToolStatus};
