//! Active probing for appinfo.
//!
//! Implements the ports defined in `appinfo-core`: environment snapshots
//! and frozen-executable classification, search-path and fallback tool
//! resolution, bounded-timeout version subprocesses, and the
//! [`gather_info`] entry point that combines everything into one
//! [`appinfo_core::AppInfo`].

pub mod env;
pub mod gather;
pub mod platform;
pub mod probe;

pub use env::{FROZEN_ENV_VAR, FrozenState, RuntimeMarkers, resolve_code_location};
pub use gather::{gather_info, gather_info_with};
pub use platform::{RUNTIME_VERSION, os_platform};
pub use probe::DefaultToolProbe;
