//! Assembly of the TASTE editor command line
//!
//! The data view argument is built from the installed-types directory
//! contents. Listing is single level and unsorted: the order of the entries
//! is observable in the external command line, so whatever order the
//! directory listing yields is passed through unchanged.

use crate::config::ProjectConfig;
use crate::exceptions::{EsrocosError, Result};
use crate::taste::invoke::capture_stdout;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative location of the Ocarina AADL component library under the
/// TASTE installation prefix
const OCARINA_COMPONENTS: &str = "share/ocarina/AADLv2/ocarina_components.aadl";

/// List the `.aadl` files directly inside `dir`, as absolute paths
///
/// Non-recursive; subdirectories and files with other suffixes are skipped.
pub fn aadl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        EsrocosError::ConfigError(format!(
            "cannot list installed types directory {}: {e}",
            dir.display()
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "aadl") {
            files.push(std::path::absolute(&path)?);
        }
    }

    debug!("Found {} AADL files in {}", files.len(), dir.display());
    Ok(files)
}

/// Comma-join a file list into a single data-view argument value
pub fn data_view_argument(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve the TASTE installation prefix via `taste-config --prefix`
pub fn taste_prefix() -> Result<PathBuf> {
    let prefix = capture_stdout("taste-config", &["--prefix"])?;
    debug!("TASTE installation prefix: {prefix}");
    Ok(PathBuf::from(prefix))
}

/// Path of the Ocarina component library under the given prefix
pub fn ocarina_components(prefix: &Path) -> PathBuf {
    prefix.join(OCARINA_COMPONENTS)
}

/// Build the full TASTE editor argument list for a project
///
/// The AADL library path comes from the caller (see [`taste_prefix`] and
/// [`ocarina_components`]) so assembly itself needs no installed toolchain.
pub fn editor_arguments(
    config: &ProjectConfig,
    project_dir: &Path,
    aadl_library: &Path,
) -> Result<Vec<String>> {
    let types_dir = project_dir.join(&config.installed_types_dir);
    let data_view = data_view_argument(&aadl_files(&types_dir)?);

    Ok(vec![
        "--project-name".to_string(),
        config.project_name.clone(),
        "--data-view".to_string(),
        data_view,
        "--load-interface-view".to_string(),
        config.interface_view().to_string_lossy().into_owned(),
        "--load-deployment-view".to_string(),
        config.deployment_view().to_string_lossy().into_owned(),
        "--aadl-library".to_string(),
        aadl_library.to_string_lossy().into_owned(),
    ])
}
