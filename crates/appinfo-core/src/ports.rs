//! Tool probe port.
//!
//! Core owns the trait and types; the active implementation (PATH lookup,
//! subprocess invocation) lives in `appinfo-runtime`. This keeps the
//! registry and aggregation logic pure and testable.

use crate::tools::{ToolResult, ToolSpec};

/// Port for resolving a tool spec into a detection result.
///
/// Implementations may block briefly (one subprocess per probe) and must
/// absorb every failure into the returned [`ToolResult`] — a missing tool
/// or a broken version probe is data, not an error.
pub trait ToolProbePort: Send + Sync {
    /// Attempt to locate the tool and query its version.
    fn probe(&self, spec: &ToolSpec) -> ToolResult;
}


#[cfg(test)]
mod tests {
    use super::testing::FixedProbe;
    use super::*;

    #[test]
    fn test_fixed_probe_answers_by_name() {
        let probe = FixedProbe {
            results: vec![ToolResult::available("Git", "/usr/bin/git", "2.43.0")],
        };
        let hit = probe.probe(&ToolSpec::new("Git", "git"));
        assert!(hit.found());
        assert_eq!(hit.version.as_deref(), Some("2.43.0"));

        let miss = probe.probe(&ToolSpec::new("Nope", "nope"));
        assert!(!miss.found());
    }
}
