//! Project configuration loaded from `esrocos.yml` and `linkings.yml`
//!
//! Both files live in the project directory. `esrocos.yml` is mandatory and
//! every recognized key must be present; any omission is fatal for the whole
//! run. `linkings.yml` is optional and only contributes the linked-library
//! list used to derive orchestrator options for the build.

use crate::exceptions::{EsrocosError, Result};
use log::debug;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the mandatory project configuration file
pub const PROJECT_CONFIG_FILE: &str = "esrocos.yml";

/// Name of the optional linked-libraries file
pub const LINKINGS_FILE: &str = "linkings.yml";

/// Project configuration, read once per invocation and immutable afterwards
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// TASTE project name
    pub project_name: String,
    /// Directory holding the project ASN.1/ACN data view sources
    pub asnacn_dir: String,
    /// Directory holding installed AADL type definitions
    pub installed_types_dir: String,
    /// Directory holding installed packages
    pub installed_pkgs_dir: String,
}

impl ProjectConfig {
    /// Load `esrocos.yml` from the given project directory
    pub fn load(project_dir: &Path) -> Result<Self> {
        Self::load_from(&project_dir.join(PROJECT_CONFIG_FILE))
    }

    /// Load the project configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            EsrocosError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let doc: Value = serde_yaml::from_str(&data)?;

        let config = ProjectConfig {
            project_name: require_str(&doc, "PROJECT_NAME", path)?,
            asnacn_dir: require_str(&doc, "ASNACN_DIR", path)?,
            installed_types_dir: require_str(&doc, "INSTALLED_TYPES_DIR", path)?,
            installed_pkgs_dir: require_str(&doc, "INSTALLED_PKGS_DIR", path)?,
        };

        debug!("Loaded project configuration for '{}'", config.project_name);
        Ok(config)
    }

    /// Interface view file for this project: `<name>_iv.aadl`
    pub fn interface_view(&self) -> PathBuf {
        PathBuf::from(format!("{}_iv.aadl", self.project_name))
    }

    /// Deployment view file for this project: `<name>_dv.aadl`
    pub fn deployment_view(&self) -> PathBuf {
        PathBuf::from(format!("{}_dv.aadl", self.project_name))
    }
}

/// Extract a required string value from a YAML mapping
fn require_str(doc: &Value, key: &str, path: &Path) -> Result<String> {
    doc.get(key)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| {
            EsrocosError::ConfigError(format!(
                "missing required key '{key}' in {}",
                path.display()
            ))
        })
}

/// Linked-library list from `linkings.yml`
#[derive(Debug, Clone, Default)]
pub struct Linkings {
    /// Library names to pass to the orchestrator, in file order
    pub libs: Vec<String>,
}

impl Linkings {
    /// Load `linkings.yml` from the given project directory
    ///
    /// A missing file or a mapping without a `libs` key yields an empty list.
    /// A file that exists but does not parse is still a fatal error.
    pub fn load(project_dir: &Path) -> Result<Self> {
        Self::load_from(&project_dir.join(LINKINGS_FILE))
    }

    /// Load the linked-library list from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No {} present, no extra libraries", path.display());
            return Ok(Linkings::default());
        }

        let data = fs::read_to_string(path).map_err(|e| {
            EsrocosError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let doc: Value = serde_yaml::from_str(&data)?;

        let libs = match doc.get("libs") {
            None => Vec::new(),
            Some(value) => value
                .as_sequence()
                .ok_or_else(|| {
                    EsrocosError::ConfigError(format!(
                        "'libs' in {} must be a sequence",
                        path.display()
                    ))
                })?
                .iter()
                .map(|item| {
                    item.as_str().map(String::from).ok_or_else(|| {
                        EsrocosError::ConfigError(format!(
                            "'libs' entries in {} must be strings",
                            path.display()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(Linkings { libs })
    }

    /// Orchestrator options string for the linked libraries
    ///
    /// Returns `None` when the list is empty, otherwise
    /// `--with-extra-lib x86_partition:<lib1>,<lib2>,...`.
    pub fn orchestrator_options(&self) -> Option<String> {
        if self.libs.is_empty() {
            return None;
        }
        Some(format!(
            "--with-extra-lib x86_partition:{}",
            self.libs.join(",")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(PROJECT_CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn test_load_complete_config() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "PROJECT_NAME: demo\n\
             ASNACN_DIR: types/asn\n\
             INSTALLED_TYPES_DIR: install/types\n\
             INSTALLED_PKGS_DIR: install/pkgs\n",
        );

        let config = ProjectConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.asnacn_dir, "types/asn");
        assert_eq!(config.installed_types_dir, "install/types");
        assert_eq!(config.installed_pkgs_dir, "install/pkgs");
        assert_eq!(config.interface_view(), PathBuf::from("demo_iv.aadl"));
        assert_eq!(config.deployment_view(), PathBuf::from("demo_dv.aadl"));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "PROJECT_NAME: demo\n\
             ASNACN_DIR: types/asn\n\
             INSTALLED_TYPES_DIR: install/types\n",
        );

        let err = ProjectConfig::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("INSTALLED_PKGS_DIR"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ProjectConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_linkings_with_libs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LINKINGS_FILE), "libs:\n  - foo\n  - bar\n").unwrap();

        let linkings = Linkings::load(temp_dir.path()).unwrap();
        assert_eq!(linkings.libs, vec!["foo", "bar"]);
        assert_eq!(
            linkings.orchestrator_options().unwrap(),
            "--with-extra-lib x86_partition:foo,bar"
        );
    }

    #[test]
    fn test_linkings_without_libs_key() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LINKINGS_FILE), "other: value\n").unwrap();

        let linkings = Linkings::load(temp_dir.path()).unwrap();
        assert!(linkings.libs.is_empty());
        assert!(linkings.orchestrator_options().is_none());
    }

    #[test]
    fn test_linkings_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let linkings = Linkings::load(temp_dir.path()).unwrap();
        assert!(linkings.orchestrator_options().is_none());
    }
}
