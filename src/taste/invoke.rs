//! Subprocess invocation for the external tools

use crate::exceptions::{EsrocosError, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Resolve executable path using the PATH environment variable
///
/// Only bare names are looked up. A program containing a path separator
/// (`./build-script.sh`, `/usr/bin/TASTE`) is passed through unchanged so
/// the child resolves it against its own working directory. Falls back to
/// the given name if PATH resolution fails, so spawn errors surface with
/// the name the user asked for.
pub fn resolve_executable(executable: &str) -> String {
    if executable.contains('/') {
        return executable.to_string();
    }

    if let Ok(path) = which::which(executable) {
        let resolved = path.to_string_lossy().to_string();
        debug!("Resolved executable '{executable}' to '{resolved}'");
        resolved
    } else {
        debug!("Could not resolve executable '{executable}' in PATH, using it as-is");
        executable.to_string()
    }
}

/// Run a command to completion with inherited stdio
///
/// Returns the child's exit code; the code is not interpreted here beyond
/// passing it back to the caller.
pub fn run_command(program: &str, args: &[String], dir: &Path) -> Result<i32> {
    debug!("Running: {program} {args:?} in {dir:?}");

    let resolved = resolve_executable(program);
    let status = Command::new(&resolved)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| EsrocosError::CommandError(format!("failed to run {program}: {e}")))?;

    Ok(status.code().unwrap_or(1))
}

/// Run a helper command and capture its trimmed stdout
///
/// Non-zero exit is fatal and carries the child's stderr in the message.
pub fn capture_stdout(program: &str, args: &[&str]) -> Result<String> {
    debug!("Querying: {program} {args:?}");

    let resolved = resolve_executable(program);
    let output = Command::new(&resolved)
        .args(args)
        .output()
        .map_err(|e| EsrocosError::CommandError(format!("failed to run {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EsrocosError::CommandError(format!(
            "{program} failed with status {}: {stderr}",
            output.status.code().unwrap_or(-1)
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_bare_name_uses_path() {
        // 'sh' is on PATH everywhere we run tests
        let resolved = resolve_executable("sh");
        assert!(resolved.starts_with('/'));
        assert!(resolved.ends_with("sh"));
    }

    #[test]
    fn test_resolve_keeps_path_programs_unchanged() {
        assert_eq!(resolve_executable("./build-script.sh"), "./build-script.sh");
        assert_eq!(resolve_executable("/opt/taste/bin/TASTE"), "/opt/taste/bin/TASTE");
    }

    #[test]
    fn test_relative_program_runs_in_target_dir() {
        use std::os::unix::fs::PermissionsExt;

        // The project's own script must run even when the test process cwd
        // holds an unrelated file of the same name
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build-script.sh");
        fs::write(&script, "#!/bin/sh\necho ran > marker.txt\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let code = run_command("./build-script.sh", &[], temp_dir.path()).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("marker.txt")).unwrap(),
            "ran\n"
        );
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_name() {
        assert_eq!(
            resolve_executable("definitely-not-a-real-tool-9000"),
            "definitely-not-a-real-tool-9000"
        );
    }

    #[test]
    fn test_capture_stdout_trims() {
        let out = capture_stdout("echo", &["hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_capture_stdout_failure_is_error() {
        let err = capture_stdout("sh", &["-c", "echo nope >&2; exit 3"]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
