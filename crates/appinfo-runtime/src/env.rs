//! Frozen/bundled executable detection.
//!
//! Classifies the current process as running from source or from a bundled
//! executable, and identifies the bundler that produced it. Markers are
//! read into an explicit snapshot at call time; no global state is cached,
//! so callers wanting a snapshot hold the returned value.

use std::env;
use std::path::{Path, PathBuf};

use appinfo_core::{Bundler, ExecutionMode};
use tracing::debug;

/// Environment variable bundling wrappers set to mark a frozen process.
///
/// Any value other than empty, `0`, `false` or `no` (case-insensitive)
/// counts as set.
pub const FROZEN_ENV_VAR: &str = "APPINFO_FROZEN";

/// PyInstaller bootloader extraction-directory markers, newest first.
const EXTRACTION_ENV_VARS: [&str; 2] = ["_MEIPASS2", "_MEIPASS"];

/// Point-in-time snapshot of the process-global markers consulted by
/// frozen detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeMarkers {
    /// Frozen flag: [`FROZEN_ENV_VAR`] truthy, or implied by an extraction
    /// marker (the PyInstaller bootloader does not set the explicit flag).
    pub frozen_flag: bool,
    /// PyInstaller temporary extraction directory, when exported.
    pub extraction_dir: Option<PathBuf>,
    /// Path of the running executable.
    pub executable: PathBuf,
}

/// Result of frozen-executable classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrozenState {
    /// Source or bundled.
    pub mode: ExecutionMode,
    /// Bundler label, set only when bundled.
    pub bundler: Option<Bundler>,
}

impl RuntimeMarkers {
    /// Read the current process markers.
    ///
    /// Pure inspection; absence of markers is a normal negative result,
    /// never a failure. An unreadable executable path degrades to empty.
    pub fn capture() -> Self {
        let explicit_flag = env::var(FROZEN_ENV_VAR).is_ok_and(|value| is_truthy(&value));
        let extraction_dir = EXTRACTION_ENV_VARS
            .iter()
            .find_map(|var| env::var_os(var).map(PathBuf::from));
        let executable = env::current_exe().unwrap_or_default();

        Self {
            frozen_flag: explicit_flag || extraction_dir.is_some(),
            extraction_dir,
            executable,
        }
    }

    /// Classify the snapshot.
    ///
    /// Policy, in order: a set frozen flag means bundled, with the bundler
    /// told apart by the extraction marker (PyInstaller), then by a
    /// cx_Freeze-style build directory in the executable path, then the
    /// generic unknown label. No flag means running from source.
    pub fn classify(&self) -> FrozenState {
        if !self.frozen_flag {
            return FrozenState {
                mode: ExecutionMode::Source,
                bundler: None,
            };
        }

        let bundler = if self.extraction_dir.is_some() {
            Bundler::PyInstaller
        } else if in_cx_freeze_layout(&self.executable) {
            Bundler::CxFreeze
        } else {
            Bundler::Unknown
        };
        debug!(bundler = %bundler, "process classified as frozen");

        FrozenState {
            mode: ExecutionMode::Bundled,
            bundler: Some(bundler),
        }
    }
}

/// Return a meaningful path for where the code lives.
///
/// When frozen, the individual source files do not exist on disk, so the
/// bundled executable path is returned. When running from source the
/// caller-supplied file is absolutized; without one, the executable path
/// is the best available answer.
pub fn resolve_code_location(caller_file: Option<&Path>) -> PathBuf {
    resolve_code_location_from(&RuntimeMarkers::capture(), caller_file)
}

pub(crate) fn resolve_code_location_from(
    markers: &RuntimeMarkers,
    caller_file: Option<&Path>,
) -> PathBuf {
    if markers.classify().mode.is_frozen() {
        return markers.executable.clone();
    }
    match caller_file {
        Some(path) => absolutize(path),
        None => markers.executable.clone(),
    }
}

/// cx_Freeze places executables in `build/exe.<platform>-<version>`
/// directories; any such path component marks the layout.
fn in_cx_freeze_layout(executable: &Path) -> bool {
    executable.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| name.len() > 4 && name.starts_with("exe."))
    })
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no"
    )
}

fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
