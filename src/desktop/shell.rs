//! External process collaborators: detached spawns, captured command runs,
//! and shortcut-file resolution.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;

use crate::error::{DriverError, Result};

use super::types::{CommandOutput, ShortcutTarget};

#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Start a process not tied to this process's lifetime. The child is not
    /// waited on and is never retracted once started.
    fn spawn_detached(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<()>;

    /// Run a command to completion, capturing stdout and stderr.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<CommandOutput>;
}

/// Resolves a shortcut file to the executable it points at. Windows-family
/// concern; the embedder supplies a real implementation there.
pub trait ShortcutResolver: Send + Sync {
    fn resolve(&self, path: &Path) -> anyhow::Result<ShortcutTarget>;
}

/// Spawner backed by the OS process facilities.
pub struct SystemSpawner;

#[async_trait]
impl ProcessSpawner for SystemSpawner {
    fn spawn_detached(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<()> {
        let mut command = std::process::Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }
        command.spawn().map_err(|source| DriverError::Spawn {
            program: program.to_string(),
            source,
        })?;
        Ok(())
    }

    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<CommandOutput> {
        let mut command = tokio::process::Command::new(program);
        command.args(args);
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }
        let output = command
            .output()
            .await
            .map_err(|source| DriverError::Spawn {
                program: program.to_string(),
                source,
            })?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Default resolver for platforms without shortcut files.
pub struct NoShortcuts;

impl ShortcutResolver for NoShortcuts {
    fn resolve(&self, path: &Path) -> anyhow::Result<ShortcutTarget> {
        anyhow::bail!(
            "shortcut resolution is not available for {}",
            path.display()
        )
    }
}
