//! One-call aggregation of identity, environment and tool detection.

use std::path::Path;

use appinfo_core::{AppIdentity, AppInfo, ExecutionInfo, ToolProbePort, ToolRegistry};
use tracing::debug;

use crate::env::{RuntimeMarkers, resolve_code_location_from};
use crate::platform::{RUNTIME_VERSION, os_platform};
use crate::probe::DefaultToolProbe;

/// Detect the runtime environment and return a complete [`AppInfo`].
///
/// The environment snapshot is captured once and each registered tool is
/// detected once, in registration order. Sub-failures (missing tools,
/// broken version probes) degrade into the data model; this call always
/// succeeds.
///
/// `caller_file` is typically `file!()` from the calling module, used to
/// resolve the code location when not frozen.
///
/// # Example
///
/// ```no_run
/// use appinfo_core::{AppIdentity, ToolRegistry, ToolSpec};
/// use appinfo_runtime::gather_info;
/// use std::path::Path;
///
/// let mut registry = ToolRegistry::new();
/// registry.register(ToolSpec::new("ExifTool", "exiftool").with_version_flag("-ver"))?;
///
/// let identity = AppIdentity::new("Photo App").with_version("1.2.3");
/// let info = gather_info(identity, Some(&registry), Some(Path::new(file!())));
/// for line in info.summary_lines() {
///     println!("{line}");
/// }
/// # Ok::<(), appinfo_core::ConfigError>(())
/// ```
pub fn gather_info(
    identity: AppIdentity,
    registry: Option<&ToolRegistry>,
    caller_file: Option<&Path>,
) -> AppInfo {
    gather_info_with(identity, registry, caller_file, &DefaultToolProbe::new())
}

/// Like [`gather_info`], with a caller-supplied probe implementation.
pub fn gather_info_with(
    identity: AppIdentity,
    registry: Option<&ToolRegistry>,
    caller_file: Option<&Path>,
    probe: &dyn ToolProbePort,
) -> AppInfo {
    let markers = RuntimeMarkers::capture();
    let state = markers.classify();
    debug!(app = %identity.name, frozen = state.mode.is_frozen(), "gathering app info");

    let execution = ExecutionInfo {
        executable: markers.executable.clone(),
        runtime_version: RUNTIME_VERSION.to_string(),
        code_location: resolve_code_location_from(&markers, caller_file),
        os_platform: os_platform(),
        mode: state.mode,
        bundler: state.bundler,
    };

    let tools = registry
        .map(|registry| registry.detect_all(probe))
        .unwrap_or_default();

    AppInfo {
        identity,
        execution,
        tools,
    }
}
