//! The aggregate report: identity + execution environment + tool results.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::execution::ExecutionInfo;
use crate::identity::AppIdentity;
use crate::tools::{ToolResult, ToolStatus};

/// Complete application information.
///
/// Returned by `appinfo_runtime::gather_info()`. Immutable; callers wanting
/// fresh tool results gather again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Static caller-supplied identity.
    pub identity: AppIdentity,
    /// Detected execution environment.
    pub execution: ExecutionInfo,
    /// Tool detection results, in registration order.
    pub tools: Vec<ToolResult>,
}

impl AppInfo {
    /// Structured export as a nested JSON mapping.
    ///
    /// The field names and nesting are a contract consumers rely on
    /// (serialization, logging): additions are backward-compatible,
    /// renames and removals are not.
    pub fn export(&self) -> Value {
        let ident = &self.identity;
        let exe = &self.execution;
        json!({
            "identity": {
                "name": ident.name,
                "short_name": ident.short_name,
                "version": ident.version,
                "commit_date": ident.commit_date,
                "author": ident.author,
                "description": ident.description,
                "features": ident.features,
            },
            "execution": {
                "executable": display(&exe.executable),
                "runtime_version": exe.runtime_version,
                "code_location": display(&exe.code_location),
                "os_platform": exe.os_platform,
                "is_frozen": exe.is_frozen(),
                "execution_mode": exe.mode.label(),
                "bundler": exe.bundler.map(|b| b.label()),
            },
            "tools": self
                .tools
                .iter()
                .map(|tool| {
                    json!({
                        "name": tool.name,
                        "found": tool.found(),
                        "path": tool.path.as_deref().map(display),
                        "version": tool.version,
                        "status": tool.status,
                    })
                })
                .collect::<Vec<_>>(),
        })
    }

    /// Human-readable summary lines, in a fixed order (handy for CLI
    /// output): identity block, blank separator, execution block (with a
    /// bundler line only when frozen), one line per tool, one line per
    /// feature. Empty optional fields produce no line.
    pub fn summary_lines(&self) -> Vec<String> {
        let ident = &self.identity;
        let exe = &self.execution;
        let mut lines: Vec<String> = Vec::new();

        lines.push(ident.title());
        if !ident.version.is_empty() {
            lines.push(format!("  Version:      {}", ident.version));
        }
        if !ident.commit_date.is_empty() {
            lines.push(format!("  Commit Date:  {}", ident.commit_date));
        }
        if !ident.description.is_empty() {
            lines.push(format!("  {}", ident.description));
        }

        lines.push(String::new());
        lines.push(format!("  Execution:    {}", exe.mode));
        lines.push(format!("  Code:         {}", exe.code_location.display()));
        lines.push(format!("  Executable:   {}", exe.executable.display()));
        lines.push(format!("  Runtime:      {}", exe.runtime_version));
        lines.push(format!("  OS:           {}", exe.os_platform));
        if let Some(bundler) = exe.bundler {
            lines.push(format!("  Bundler:      {bundler}"));
        }

        for tool in &self.tools {
            lines.push(tool_line(tool));
        }

        for feature in &ident.features {
            lines.push(format!("  - {feature}"));
        }

        lines
    }
}

fn tool_line(tool: &ToolResult) -> String {
    match (&tool.path, &tool.version) {
        (Some(path), Some(version)) => format!(
            "  {}:  found at {}, version {}",
            tool.name,
            path.display(),
            version
        ),
        (Some(path), None) => format!(
            "  {}:  found at {}, version unknown",
            tool.name,
            path.display()
        ),
        _ => format!("  {}:  not found", tool.name),
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::{Bundler, ExecutionMode};
    use std::path::PathBuf;

    fn source_execution() -> ExecutionInfo {
        ExecutionInfo {
            executable: PathBuf::from("/home/dev/app/target/debug/app"),
            runtime_version: "rustc 1.85.0".to_string(),
            code_location: PathBuf::from("/home/dev/app/src/main.rs"),
            os_platform: "Ubuntu 24.04".to_string(),
            mode: ExecutionMode::Source,
            bundler: None,
        }
    }

    fn frozen_execution() -> ExecutionInfo {
        ExecutionInfo {
            executable: PathBuf::from("/opt/app/app"),
            runtime_version: "rustc 1.85.0".to_string(),
            code_location: PathBuf::from("/opt/app/app"),
            os_platform: "Ubuntu 24.04".to_string(),
            mode: ExecutionMode::Bundled,
            bundler: Some(Bundler::PyInstaller),
        }
    }

    #[test]
    fn test_minimal_summary_has_only_identity_and_execution_lines() {
        let info = AppInfo {
            identity: AppIdentity::new("Bare App"),
            execution: source_execution(),
            tools: vec![],
        };
        let lines = info.summary_lines();

        // Title, blank separator, five execution lines. No bundler line
        // when not frozen, no tool lines, no feature lines.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Bare App");
        assert_eq!(lines[1], "");
        assert!(lines[2].contains("Running from source"));
        assert!(!lines.iter().any(|l| l.contains("Bundler")));
    }

    #[test]
    fn test_full_summary_order() {
        let info = AppInfo {
            identity: AppIdentity::new("Photo App")
                .with_short_name("PA")
                .with_version("1.2.3")
                .with_commit_date("2026-08-01")
                .with_description("Does photo things")
                .with_feature("EXIF editing"),
            execution: frozen_execution(),
            tools: vec![
                ToolResult::available("ExifTool", "/usr/bin/exiftool", "12.70"),
                ToolResult::probe_failed("Magick", "/usr/bin/magick"),
                ToolResult::not_found("Nope"),
            ],
        };
        let lines = info.summary_lines();

        assert_eq!(lines[0], "Photo App [ PA ]");
        assert_eq!(lines[1], "  Version:      1.2.3");
        assert_eq!(lines[2], "  Commit Date:  2026-08-01");
        assert_eq!(lines[3], "  Does photo things");
        assert_eq!(lines[4], "");
        assert!(lines[5].contains("Compiled executable"));
        assert!(lines.iter().any(|l| l == "  Bundler:      PyInstaller"));
        assert!(
            lines
                .iter()
                .any(|l| l == "  ExifTool:  found at /usr/bin/exiftool, version 12.70")
        );
        assert!(
            lines
                .iter()
                .any(|l| l == "  Magick:  found at /usr/bin/magick, version unknown")
        );
        assert!(lines.iter().any(|l| l == "  Nope:  not found"));
        assert_eq!(lines.last().unwrap(), "  - EXIF editing");
    }

    #[test]
    fn test_export_round_trips_every_field() {
        let info = AppInfo {
            identity: AppIdentity::new("Photo App")
                .with_short_name("PA")
                .with_version("1.2.3")
                .with_commit_date("2026-08-01")
                .with_author("Archives Team")
                .with_description("Does photo things")
                .with_features(["a", "b"]),
            execution: frozen_execution(),
            tools: vec![
                ToolResult::available("ExifTool", "/usr/bin/exiftool", "12.70"),
                ToolResult::not_found("Nope"),
            ],
        };
        let value = info.export();

        assert_eq!(value["identity"]["name"], "Photo App");
        assert_eq!(value["identity"]["short_name"], "PA");
        assert_eq!(value["identity"]["version"], "1.2.3");
        assert_eq!(value["identity"]["commit_date"], "2026-08-01");
        assert_eq!(value["identity"]["author"], "Archives Team");
        assert_eq!(value["identity"]["description"], "Does photo things");
        assert_eq!(value["identity"]["features"], json!(["a", "b"]));

        assert_eq!(value["execution"]["is_frozen"], true);
        assert_eq!(value["execution"]["execution_mode"], "Compiled executable");
        assert_eq!(value["execution"]["bundler"], "PyInstaller");
        assert_eq!(value["execution"]["executable"], "/opt/app/app");
        assert_eq!(value["execution"]["os_platform"], "Ubuntu 24.04");

        let tools = value["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "ExifTool");
        assert_eq!(tools[0]["found"], true);
        assert_eq!(tools[0]["path"], "/usr/bin/exiftool");
        assert_eq!(tools[0]["version"], "12.70");
        assert_eq!(tools[1]["found"], false);
        assert_eq!(tools[1]["path"], Value::Null);
        assert_eq!(tools[1]["version"], Value::Null);
    }

    #[test]
    fn test_export_bundler_null_when_source() {
        let info = AppInfo {
            identity: AppIdentity::new("App"),
            execution: source_execution(),
            tools: vec![],
        };
        let value = info.export();
        assert_eq!(value["execution"]["bundler"], Value::Null);
        assert_eq!(value["execution"]["is_frozen"], false);
        assert_eq!(value["execution"]["execution_mode"], "Running from source");
    }
}
