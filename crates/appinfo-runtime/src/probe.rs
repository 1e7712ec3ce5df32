//! Default tool probe: search-path resolution, fallback paths, and
//! bounded-timeout version subprocesses.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use appinfo_core::{ToolProbePort, ToolResult, ToolSpec};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Default implementation of [`ToolProbePort`].
///
/// Resolves the command on the process search path via `which`, probes the
/// spec's fallback paths on a miss, then queries the version with one
/// subprocess bounded by the spec's timeout. Every failure degrades into
/// the returned [`ToolResult`]; nothing is raised.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultToolProbe;

impl DefaultToolProbe {
    /// Create a new default probe.
    pub const fn new() -> Self {
        Self
    }
}

impl ToolProbePort for DefaultToolProbe {
    fn probe(&self, spec: &ToolSpec) -> ToolResult {
        let Some(path) = resolve_executable(spec) else {
            debug!(tool = %spec.name, command = %spec.command, "tool not found");
            return ToolResult::not_found(&spec.name);
        };

        match query_version(&path, &spec.version_flag, spec.version_timeout) {
            Some(version) => {
                debug!(tool = %spec.name, version = %version, "tool available");
                ToolResult::available(&spec.name, path, version)
            }
            None => ToolResult::probe_failed(&spec.name, path),
        }
    }
}

/// Locate the executable: search path first, then fallback paths in order.
fn resolve_executable(spec: &ToolSpec) -> Option<PathBuf> {
    if let Ok(path) = which::which(&spec.command) {
        return Some(path);
    }
    spec.fallback_paths
        .iter()
        .find(|candidate| is_executable_file(candidate))
        .cloned()
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Run `<path> <flag>` and extract a version string.
///
/// The child is always reaped and its pipes closed before this returns,
/// including on the timeout path.
fn query_version(path: &Path, flag: &str, timeout: Duration) -> Option<String> {
    let mut child = match Command::new(path)
        .arg(flag)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to launch version probe");
            return None;
        }
    };

    // Drain both pipes while waiting: a tool whose output exceeds the OS
    // pipe buffer would otherwise block on write and never exit.
    let stdout_reader = spawn_pipe_reader(child.stdout.take());
    let stderr_reader = spawn_pipe_reader(child.stderr.take());

    let Some(status) = wait_with_timeout(&mut child, timeout) else {
        warn!(path = %path.display(), "version probe timed out");
        let _ = child.kill();
        let _ = child.wait();
        // The write ends are closed now, so the drain threads finish
        // promptly; join them before returning.
        let _ = join_pipe_reader(stdout_reader);
        let _ = join_pipe_reader(stderr_reader);
        return None;
    };

    let stdout = join_pipe_reader(stdout_reader);
    let stderr = join_pipe_reader(stderr_reader);

    if !status.success() {
        return None;
    }
    extract_version(&stdout, &stderr)
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    return None;
                }
                thread::sleep(POLL_INTERVAL);
            }
            // Caller kills and reaps on None
            Err(_) => return None,
        }
    }
}

fn spawn_pipe_reader<R>(pipe: Option<R>) -> Option<thread::JoinHandle<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = pipe.read_to_end(&mut buffer);
            buffer
        })
    })
}

fn join_pipe_reader(handle: Option<thread::JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Best-effort extraction: trimmed first non-empty line, stdout first,
/// stderr as fallback (some tools print their version there).
fn extract_version(stdout: &str, stderr: &str) -> Option<String> {
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
