//! Platform and toolchain descriptive strings.

use sysinfo::System;

/// Toolchain version the binary was built with (e.g. "rustc 1.85.0"),
/// captured by the build script; "unknown" when rustc could not be probed.
pub const RUNTIME_VERSION: &str = env!("APPINFO_RUSTC_VERSION");

/// OS name, version and architecture (e.g. "Ubuntu 24.04 (x86_64)").
pub fn os_platform() -> String {
    let name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| std::env::consts::OS.to_string());
    format!("{} ({})", name.trim(), std::env::consts::ARCH)
}
