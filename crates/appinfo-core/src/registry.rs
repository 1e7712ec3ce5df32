//! Registry of external tools to detect.

use tracing::debug;

use crate::error::ConfigError;
use crate::ports::ToolProbePort;
use crate::tools::{ToolResult, ToolSpec};

/// Insertion-ordered registry of [`ToolSpec`]s.
///
/// Registering a name twice silently replaces the earlier spec; the entry
/// then occupies the position of its most recent registration. Detection
/// results always come back in registration order.
///
/// # Example
///
/// ```
/// use appinfo_core::{ToolRegistry, ToolSpec};
///
/// let mut registry = ToolRegistry::new();
/// registry.register(
///     ToolSpec::new("ExifTool", "exiftool")
///         .with_version_flag("-ver")
///         .with_fallback_path("/usr/local/bin/exiftool"),
/// )?;
/// # Ok::<(), appinfo_core::ConfigError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool specification.
    ///
    /// Replaces any earlier spec with the same name. The only validation is
    /// a non-empty name; everything else is the probe's concern.
    pub fn register(&mut self, spec: ToolSpec) -> Result<(), ConfigError> {
        if spec.name.trim().is_empty() {
            return Err(ConfigError::EmptyToolName);
        }
        self.specs.retain(|existing| existing.name != spec.name);
        self.specs.push(spec);
        Ok(())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Registered specs in registration order.
    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    /// Look up a registered spec by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Detect a single registered tool by name.
    pub fn detect(
        &self,
        name: &str,
        probe: &dyn ToolProbePort,
    ) -> Result<ToolResult, ConfigError> {
        let spec = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTool(name.to_string()))?;
        Ok(probe.probe(spec))
    }

    /// Detect every registered tool, in registration order.
    ///
    /// Individual failures never surface here: an unresolvable tool or a
    /// broken version probe shows up as fields on its [`ToolResult`].
    pub fn detect_all(&self, probe: &dyn ToolProbePort) -> Vec<ToolResult> {
        debug!(tools = self.specs.len(), "detecting registered tools");
        self.specs.iter().map(|spec| probe.probe(spec)).collect()
    }
}
