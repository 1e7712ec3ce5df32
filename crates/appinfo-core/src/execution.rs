//! Execution environment types.
//!
//! Describes how the current process was launched: from a source checkout
//! or from a bundled ("frozen") executable, and which bundler produced it.
//! The values are computed once per call by the runtime crate's snapshot
//! function; nothing here performs detection.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the current process was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Running from source files under a toolchain/interpreter.
    Source,
    /// Running from a bundled, self-contained executable.
    Bundled,
}

impl ExecutionMode {
    /// Whether this mode denotes a frozen/bundled executable.
    pub const fn is_frozen(self) -> bool {
        matches!(self, Self::Bundled)
    }

    /// Human-readable label used in summaries and dialogs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "Running from source",
            Self::Bundled => "Compiled executable",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The bundler that produced a frozen executable.
///
/// Closed set of known bundlers; anything unrecognized falls into
/// [`Bundler::Unknown`] (still frozen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bundler {
    PyInstaller,
    CxFreeze,
    /// Frozen, but neither bundler-specific marker was recognized.
    Unknown,
}

impl Bundler {
    /// Human-readable label used in summaries and exports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PyInstaller => "PyInstaller",
            Self::CxFreeze => "cx_Freeze",
            Self::Unknown => "unknown bundler",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Automatically detected runtime environment details.
///
/// `is_frozen` is derived from [`ExecutionInfo::mode`], so mode and
/// frozen-ness cannot disagree. A `bundler` is only ever set alongside
/// [`ExecutionMode::Bundled`]; the runtime crate's classifier is the only
/// producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInfo {
    /// Path to the running executable.
    pub executable: PathBuf,
    /// Toolchain/runtime version string the binary was built with.
    pub runtime_version: String,
    /// Resolved path to where the code lives: the bundled binary when
    /// frozen, otherwise the caller's source location.
    pub code_location: PathBuf,
    /// OS name and version (e.g. "Ubuntu 24.04").
    pub os_platform: String,
    /// How the process was launched.
    pub mode: ExecutionMode,
    /// Bundler name, set only when `mode` is [`ExecutionMode::Bundled`].
    pub bundler: Option<Bundler>,
}

impl ExecutionInfo {
    /// Whether the process runs inside a bundled executable.
    pub const fn is_frozen(&self) -> bool {
        self.mode.is_frozen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(ExecutionMode::Source.label(), "Running from source");
        assert_eq!(ExecutionMode::Bundled.label(), "Compiled executable");
        assert!(!ExecutionMode::Source.is_frozen());
        assert!(ExecutionMode::Bundled.is_frozen());
    }

    #[test]
    fn test_bundler_labels() {
        assert_eq!(Bundler::PyInstaller.to_string(), "PyInstaller");
        assert_eq!(Bundler::CxFreeze.to_string(), "cx_Freeze");
        assert_eq!(Bundler::Unknown.to_string(), "unknown bundler");
    }

    #[test]
    fn test_is_frozen_follows_mode() {
        let info = ExecutionInfo {
            executable: PathBuf::from("/usr/bin/app"),
            runtime_version: "rustc 1.85.0".to_string(),
            code_location: PathBuf::from("/usr/bin/app"),
            os_platform: "Linux".to_string(),
            mode: ExecutionMode::Bundled,
            bundler: Some(Bundler::PyInstaller),
        };
        assert!(info.is_frozen());
    }
}
