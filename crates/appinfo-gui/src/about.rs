//! View model for a parameterized About dialog.

use appinfo_core::AppInfo;
use serde::{Deserialize, Serialize};

/// Everything an About dialog needs, pre-rendered as display strings.
///
/// Two sections mirror the dialog layout: the identity block at the top
/// (heading, version, description, feature bullets) and a selectable
/// technical-details block at the bottom (execution info plus one line per
/// tool result). Serializable so webview-style frontends can consume it
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutView {
    /// Window title ("About <name> [ <short> ]").
    pub window_title: String,
    /// Heading line: full name plus short name when set.
    pub heading: String,
    /// Version string; empty when the host supplied none.
    pub version: String,
    /// Commit / build date; empty when unset.
    pub commit_date: String,
    /// Author or organization; empty when unset.
    pub author: String,
    /// One-line description; empty when unset.
    pub description: String,
    /// Feature bullets, in display order.
    pub features: Vec<String>,
    /// Selectable technical-details block.
    pub details: String,
}

impl AboutView {
    /// Build the view model from a gathered [`AppInfo`].
    ///
    /// Performs no detection; call this with the result of
    /// `appinfo_runtime::gather_info()`.
    pub fn from_app_info(info: &AppInfo) -> Self {
        let ident = &info.identity;
        let title = ident.title();

        Self {
            window_title: format!("About {title}"),
            heading: title,
            version: ident.version.clone(),
            commit_date: ident.commit_date.clone(),
            author: ident.author.clone(),
            description: ident.description.clone(),
            features: ident.features.clone(),
            details: details_block(info),
        }
    }
}

fn details_block(info: &AppInfo) -> String {
    let exe = &info.execution;
    let mut lines = vec![
        format!("Execution: {}", exe.mode),
        format!("Code location: {}", exe.code_location.display()),
        format!("Executable: {}", exe.executable.display()),
        format!("Runtime: {}", exe.runtime_version),
        format!("OS: {}", exe.os_platform),
    ];
    if let Some(bundler) = exe.bundler {
        lines.push(format!("Bundler: {bundler}"));
    }

    for tool in &info.tools {
        lines.push(match (&tool.path, &tool.version) {
            (Some(path), Some(version)) => {
                format!("{}: v{} ({})", tool.name, version, path.display())
            }
            (Some(path), None) => {
                format!("{}: found, version unavailable ({})", tool.name, path.display())
            }
            _ => format!("{}: not found", tool.name),
        });
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use appinfo_core::{
        AppIdentity, Bundler, ExecutionInfo, ExecutionMode, ToolResult,
    };
    use std::path::PathBuf;

    fn sample_info() -> AppInfo {
        AppInfo {
            identity: AppIdentity::new("Photo App")
                .with_short_name("PA")
                .with_version("1.2.3")
                .with_commit_date("2026-08-01")
                .with_author("Archives Team")
                .with_description("Does photo things")
                .with_feature("EXIF editing")
                .with_feature("Batch export"),
            execution: ExecutionInfo {
                executable: PathBuf::from("/opt/app/app"),
                runtime_version: "rustc 1.85.0".to_string(),
                code_location: PathBuf::from("/opt/app/app"),
                os_platform: "Ubuntu 24.04 (x86_64)".to_string(),
                mode: ExecutionMode::Bundled,
                bundler: Some(Bundler::CxFreeze),
            },
            tools: vec![
                ToolResult::available("ExifTool", "/usr/bin/exiftool", "12.70"),
                ToolResult::probe_failed("Magick", "/usr/bin/magick"),
                ToolResult::not_found("Nope"),
            ],
        }
    }

    #[test]
    fn test_identity_section() {
        let view = AboutView::from_app_info(&sample_info());
        assert_eq!(view.window_title, "About Photo App [ PA ]");
        assert_eq!(view.heading, "Photo App [ PA ]");
        assert_eq!(view.version, "1.2.3");
        assert_eq!(view.author, "Archives Team");
        assert_eq!(view.features.len(), 2);
    }

    #[test]
    fn test_details_block_lines() {
        let view = AboutView::from_app_info(&sample_info());
        let details: Vec<&str> = view.details.lines().collect();

        assert_eq!(details[0], "Execution: Compiled executable");
        assert!(details.contains(&"Bundler: cx_Freeze"));
        assert!(details.contains(&"ExifTool: v12.70 (/usr/bin/exiftool)"));
        assert!(details.contains(&"Magick: found, version unavailable (/usr/bin/magick)"));
        assert!(details.contains(&"Nope: not found"));
    }

    #[test]
    fn test_no_bundler_line_when_source() {
        let mut info = sample_info();
        info.execution.mode = ExecutionMode::Source;
        info.execution.bundler = None;

        let view = AboutView::from_app_info(&info);
        assert!(!view.details.contains("Bundler:"));
        assert!(view.details.contains("Execution: Running from source"));
    }

    #[test]
    fn test_serializes_for_frontends() {
        let view = AboutView::from_app_info(&sample_info());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["window_title"], "About Photo App [ PA ]");
        assert_eq!(value["features"][1], "Batch export");
        assert!(value["details"].as_str().unwrap().contains("ExifTool"));
    }
}
