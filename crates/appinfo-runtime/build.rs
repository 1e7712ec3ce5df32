use std::env;
use std::process::Command;

fn main() {
    // Always rerun when this build script changes.
    println!("cargo:rerun-if-changed=build.rs");

    // Toolchain version string exposed as ExecutionInfo::runtime_version.
    // Best-effort probing, but NEVER fail the build: if rustc cannot be
    // queried we emit an explicit fallback so `env!()` never fails.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=APPINFO_RUSTC_VERSION={version}");
}
