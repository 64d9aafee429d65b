//! Sidecar runner
//!
//! Spawns the sidecar executable once per request with the input string as
//! its only argument and captures stdout. Invocations go through a semaphore
//! so at most `max_concurrent` children exist at once, and each child is
//! killed if it outlives the configured deadline.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::Command;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::errors::SidecarError;

/// Runs the sidecar executable on behalf of request handlers.
#[derive(Debug, Clone)]
pub struct SidecarRunner {
    path: PathBuf,
    timeout: Duration,
    permits: Arc<Semaphore>,
}

impl SidecarRunner {
    /// Create a runner for the executable at `path`.
    pub fn new(path: impl Into<PathBuf>, timeout: Duration, max_concurrent: usize) -> Self {
        Self {
            path: path.into(),
            timeout,
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Create a runner from the service configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            config.sidecar_path.clone(),
            config.sidecar_timeout,
            config.max_concurrent_sidecars,
        )
    }

    /// Location of the sidecar executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of invocations that could start right now without waiting.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Encode `data` by running the sidecar and returning its stdout with
    /// one trailing line terminator removed.
    pub async fn encode(&self, data: &str) -> Result<String, SidecarError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SidecarError::Closed)?;

        let mut command = Command::new(&self.path);
        command
            .arg(data)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = command.spawn().map_err(SidecarError::Spawn)?;
        debug!(pid = ?child.id(), path = %self.path.display(), "Spawned sidecar");

        // Dropping the future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(SidecarError::Spawn)?,
            Err(_) => return Err(SidecarError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(SidecarError::Exit(output.status));
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(trim_line_ending(stdout))
    }
}

/// Remove a single trailing `\n` or `\r\n`.
pub fn trim_line_ending(mut output: String) -> String {
    if output.ends_with('\n') {
        output.pop();
        if output.ends_with('\r') {
            output.pop();
        }
    }
    output
}
