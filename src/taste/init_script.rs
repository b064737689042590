//! Transient pre-init environment script for the build step
//!
//! `user_init_pre.sh` hands `DEPLOYMENTVIEW` and optional
//! `ORCHESTRATOR_OPTIONS` to `build-script.sh`. The file is scoped to one
//! build: any stale copy is removed before writing and the fresh one is
//! removed again once the build returns. Removal is best-effort; a failure
//! to delete is logged and the run continues. There is no locking, so
//! concurrent builds in the same directory are not supported.

use crate::exceptions::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the transient environment script
pub const PRE_INIT_SCRIPT: &str = "user_init_pre.sh";

/// Handle for the transient pre-init script in a project directory
#[derive(Debug)]
pub struct PreInitScript {
    path: PathBuf,
}

impl PreInitScript {
    /// Create a handle for the script in the given project directory
    pub fn new(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(PRE_INIT_SCRIPT),
        }
    }

    /// Path of the script file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove any existing script, logging (not failing) on error
    pub fn remove(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("Could not remove {}: {e}", self.path.display());
            } else {
                debug!("Removed {}", self.path.display());
            }
        }
    }

    /// Write the script exporting the deployment view and, when present,
    /// the orchestrator options
    ///
    /// Write failure is fatal for the whole run.
    pub fn write(&self, deployment_view: &Path, orchestrator_options: Option<&str>) -> Result<()> {
        let mut content = format!("export DEPLOYMENTVIEW={}\n", deployment_view.display());
        if let Some(options) = orchestrator_options {
            content.push_str(&format!("export ORCHESTRATOR_OPTIONS=\"{options}\"\n"));
        }

        debug!("Writing {}", self.path.display());
        fs::write(&self.path, content)?;
        Ok(())
    }
}
