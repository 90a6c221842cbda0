//! Repository configuration file support.
//!
//! Reads repository configuration from TOML files:
//!
//! ```toml
//! [repository]
//! type = "file"
//!
//! [file]
//! data_dir = "/var/lib/transferbuddy"
//! catalog_path = "/etc/transferbuddy/catalog.json"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::factory::{RepositoryType, CATALOG_PATH_VAR, DATA_DIR_VAR};
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// File backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for FileSettings {
    fn default() -> Self {
        FileSettings {
            data_dir: default_data_dir(),
            catalog_path: None,
        }
    }
}

impl FileSettings {
    /// Build settings from environment variables, using defaults when unset.
    pub fn from_env() -> Self {
        FileSettings {
            data_dir: std::env::var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            catalog_path: std::env::var(CATALOG_PATH_VAR).ok().map(PathBuf::from),
        }
    }
}

impl RepositoryConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RepositoryError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&contents).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type)
            .map_err(RepositoryError::configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [repository]
            type = "file"

            [file]
            data_dir = "/tmp/tb-data"
            catalog_path = "/tmp/catalog.json"
        "#;
        let config: RepositoryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::File);
        assert_eq!(config.file.data_dir, PathBuf::from("/tmp/tb-data"));
        assert_eq!(
            config.file.catalog_path,
            Some(PathBuf::from("/tmp/catalog.json"))
        );
    }

    #[test]
    fn test_file_section_defaults() {
        let toml_str = r#"
            [repository]
            type = "local"
        "#;
        let config: RepositoryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert_eq!(config.file.data_dir, PathBuf::from("./data"));
        assert!(config.file.catalog_path.is_none());
    }

    #[test]
    fn test_unknown_type_is_configuration_error() {
        let toml_str = r#"
            [repository]
            type = "postgres"
        "#;
        let config: RepositoryConfig = toml::from_str(toml_str).unwrap();
        assert!(config.repository_type().is_err());
    }
}
