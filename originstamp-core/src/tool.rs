//! Wrapper around the external `c2patool` binary
//!
//! All real manifest parsing, signing, and embedding is delegated to
//! c2patool; this module only locates the binary, invokes it, and relays
//! its output.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{OriginStampError, Result};

/// Name of the external provenance tool binary.
pub const C2PATOOL_BIN: &str = "c2patool";

/// Environment variable overriding binary discovery.
pub const C2PATOOL_PATH_ENV: &str = "C2PATOOL_PATH";

/// Handle on a located c2patool binary.
#[derive(Debug, Clone)]
pub struct C2paTool {
    binary: PathBuf,
}

impl C2paTool {
    /// Locate c2patool.
    ///
    /// Resolution order: the `C2PATOOL_PATH` environment variable, then a
    /// PATH lookup.
    pub fn locate() -> Result<Self> {
        if let Some(path) = std::env::var_os(C2PATOOL_PATH_ENV) {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(OriginStampError::ToolNotFound(format!(
                    "{} points to {}, which does not exist",
                    C2PATOOL_PATH_ENV,
                    path.display()
                )));
            }
            debug!(path = %path.display(), "Using c2patool from environment override");
            return Ok(Self { binary: path });
        }

        let binary = which::which(C2PATOOL_BIN).map_err(|e| {
            OriginStampError::ToolNotFound(format!("{C2PATOOL_BIN} not found in PATH ({e})"))
        })?;
        debug!(path = %binary.display(), "Located c2patool on PATH");

        Ok(Self { binary })
    }

    /// Use an explicit binary path, bypassing discovery.
    pub fn at(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the underlying binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check whether c2patool can be located at all.
    pub fn is_installed() -> bool {
        Self::locate().is_ok()
    }

    /// Run c2patool with the given arguments and return its stdout.
    ///
    /// Output is fully captured; a non-zero exit status is reported as
    /// `ToolFailed` carrying the trimmed stderr.
    pub async fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.binary).args(args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, "c2patool exited with failure");
            return Err(OriginStampError::ToolFailed {
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }

    /// Read the C2PA manifest of a media file (`c2patool <file> --detailed`).
    pub async fn read_manifest(&self, file: &Path) -> Result<String> {
        debug!(file = %file.display(), "Reading manifest via c2patool");
        self.run([file.as_os_str(), OsStr::new("--detailed")]).await
    }

    /// Report the installed c2patool version (`c2patool --version`).
    pub async fn version(&self) -> Result<String> {
        Ok(self.run([OsStr::new("--version")]).await?.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn fake_tool(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-c2patool");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tool = C2paTool::at(fake_tool(dir.path(), "echo manifest-output"));

        let out = tool.run(["--detailed"]).await.expect("run");
        assert_eq!(out.trim(), "manifest-output");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_failure_with_stderr() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tool = C2paTool::at(fake_tool(dir.path(), "echo 'no manifest found' >&2; exit 1"));

        let err = tool.run(["bad.jpg"]).await.unwrap_err();
        match err {
            OriginStampError::ToolFailed { status, stderr } => {
                assert_eq!(status.code(), Some(1));
                assert_eq!(stderr, "no manifest found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_version_trims_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tool = C2paTool::at(fake_tool(dir.path(), "echo 'c2patool 0.9.12'"));

        let version = tool.version().await.expect("version");
        assert_eq!(version, "c2patool 0.9.12");
    }

    #[tokio::test]
    async fn test_missing_binary_is_an_io_error() {
        let tool = C2paTool::at("/nonexistent/c2patool");
        let err = tool.run(["--version"]).await.unwrap_err();
        assert!(matches!(err, OriginStampError::Io(_)));
    }
}
