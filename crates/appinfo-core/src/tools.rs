//! External-tool specifications and detection results.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a version probe may run before the child is killed.
pub const DEFAULT_VERSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Specification for an external CLI tool to detect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Human-readable display name (e.g. "ExifTool").
    pub name: String,
    /// Executable name resolved on the search path (e.g. "exiftool").
    pub command: String,
    /// CLI flag that prints the version (e.g. "-ver", "--version").
    pub version_flag: String,
    /// Extra locations to probe when the search path misses. Each entry is
    /// a path to the executable itself, not just its directory.
    pub fallback_paths: Vec<PathBuf>,
    /// Upper bound on the version subprocess.
    pub version_timeout: Duration,
}

impl ToolSpec {
    /// Create a spec with the default `--version` flag and timeout.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            version_flag: "--version".to_string(),
            fallback_paths: Vec::new(),
            version_timeout: DEFAULT_VERSION_TIMEOUT,
        }
    }

    /// Set the flag used to request version output.
    #[must_use]
    pub fn with_version_flag(mut self, flag: impl Into<String>) -> Self {
        self.version_flag = flag.into();
        self
    }

    /// Append a fallback executable path.
    #[must_use]
    pub fn with_fallback_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_paths.push(path.into());
        self
    }

    /// Set the version-probe timeout.
    #[must_use]
    pub const fn with_version_timeout(mut self, timeout: Duration) -> Self {
        self.version_timeout = timeout;
        self
    }
}

/// Outcome class of a single tool detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    /// Executable resolved and the version probe succeeded.
    Available,
    /// Executable not found on the search path or any fallback path.
    NotFound,
    /// Executable resolved, but the version probe failed or timed out.
    Error,
}

/// Detection result for a single tool.
///
/// Produced fresh on every detection run; resolution success and
/// version-query success are independent outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Display name (copied from the spec).
    pub name: String,
    /// Absolute path to the executable, or `None` if not found.
    pub path: Option<PathBuf>,
    /// Version string reported by the tool, or `None`.
    pub version: Option<String>,
    /// Outcome class.
    pub status: ToolStatus,
}

impl ToolResult {
    /// Result for a tool that could not be located anywhere.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            version: None,
            status: ToolStatus::NotFound,
        }
    }

    /// Result for a resolved tool with a successful version probe.
    pub fn available(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            version: Some(version.into()),
            status: ToolStatus::Available,
        }
    }

    /// Result for a resolved tool whose version probe failed.
    pub fn probe_failed(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            version: None,
            status: ToolStatus::Error,
        }
    }

    /// Whether an executable was resolved (on the search path or a
    /// fallback path), independent of the version probe outcome.
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = ToolSpec::new("ExifTool", "exiftool");
        assert_eq!(spec.version_flag, "--version");
        assert_eq!(spec.version_timeout, DEFAULT_VERSION_TIMEOUT);
        assert!(spec.fallback_paths.is_empty());
    }

    #[test]
    fn test_spec_builder() {
        let spec = ToolSpec::new("ExifTool", "exiftool")
            .with_version_flag("-ver")
            .with_fallback_path("/usr/local/bin/exiftool")
            .with_version_timeout(Duration::from_secs(2));
        assert_eq!(spec.version_flag, "-ver");
        assert_eq!(spec.fallback_paths.len(), 1);
        assert_eq!(spec.version_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_result_found_follows_path() {
        assert!(!ToolResult::not_found("Nope").found());
        assert!(ToolResult::available("Git", "/usr/bin/git", "2.43.0").found());
        // Version probe failure still counts as found
        let failed = ToolResult::probe_failed("Git", "/usr/bin/git");
        assert!(failed.found());
        assert_eq!(failed.status, ToolStatus::Error);
        assert!(failed.version.is_none());
    }
}
