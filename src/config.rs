//! Consumer project configuration
//!
//! `inlay.yaml` in the consumer project records the destination directory
//! that installed components are copied into. The file is optional: loading
//! falls back to a default configuration when it is absent.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InlayError, Result};

/// Project config filename
pub const CONFIG_FILE: &str = "inlay.yaml";

/// Destination used when neither the config file nor --dest names one
pub const DEFAULT_DESTINATION: &str = "src/components";

/// Contents of `inlay.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory components are installed into, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl ProjectConfig {
    /// Effective destination, falling back to the documented default
    pub fn destination(&self) -> PathBuf {
        PathBuf::from(self.destination.as_deref().unwrap_or(DEFAULT_DESTINATION))
    }
}

/// Load project configuration from a directory
///
/// Returns the default config when `inlay.yaml` does not exist; the file is
/// never required.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig> {
    let path = project_dir.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| InlayError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| InlayError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Save project configuration to a directory
///
/// Uses an atomic write (temp file + rename) so a reader never observes a
/// partially written `inlay.yaml`.
pub fn save_config(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let path = project_dir.join(CONFIG_FILE);
    let content = serde_yaml::to_string(config).map_err(|e| InlayError::IoError {
        message: format!("failed to serialize config: {e}"),
    })?;

    let tmp_path = project_dir.join(format!("{CONFIG_FILE}.tmp"));

    fs::write(&tmp_path, &content).map_err(|e| InlayError::FileWriteFailed {
        path: tmp_path.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::rename(&tmp_path, &path).map_err(|e| InlayError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert!(config.destination.is_none());
        assert_eq!(config.destination(), PathBuf::from(DEFAULT_DESTINATION));
    }

    #[test]
    fn test_load_reads_destination() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "destination: lib/widgets\n").unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.destination(), PathBuf::from("lib/widgets"));
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "destination: [unclosed\n").unwrap();
        let result = load_config(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            InlayError::ConfigParseFailed { .. }
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            destination: Some("app/components".to_string()),
        };
        save_config(temp.path(), &config).unwrap();

        let loaded = load_config(temp.path()).unwrap();
        assert_eq!(loaded.destination(), PathBuf::from("app/components"));
        // No leftover temp file
        assert!(!temp.path().join(format!("{CONFIG_FILE}.tmp")).exists());
    }
}
