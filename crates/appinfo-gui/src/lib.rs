//! About-dialog view models for appinfo.
//!
//! Adapter-neutral DTOs: a frontend (Tauri webview, native toolkit bridge)
//! renders these without running any detection itself. Everything here is
//! a pure view over [`appinfo_core::AppInfo`].

pub mod about;

pub use about::AboutView;
