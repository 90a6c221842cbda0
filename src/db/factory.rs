//! Repository factory for dependency injection.
//!
//! Creates and configures repository instances based on runtime
//! configuration (environment variables or a TOML config file).

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::FileSettings;
#[cfg(feature = "file-repo")]
use super::repositories::FileRepository;
#[cfg(feature = "local-repo")]
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Environment variable selecting the repository backend.
pub const REPOSITORY_TYPE_VAR: &str = "REPOSITORY_TYPE";
/// Environment variable pointing at the plan data directory (file backend).
pub const DATA_DIR_VAR: &str = "TRANSFERBUDDY_DATA_DIR";
/// Environment variable pointing at a catalog JSON file (file backend).
pub const CATALOG_PATH_VAR: &str = "TRANSFERBUDDY_CATALOG";

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository with the built-in seed catalog
    Local,
    /// JSON-document repository
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`; when unset, defaults to File if a data
    /// directory is configured, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(REPOSITORY_TYPE_VAR) {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var(DATA_DIR_VAR).is_ok() {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the given type.
    ///
    /// `settings` is required for the file backend and ignored for the
    /// in-memory backend.
    pub fn create(
        repo_type: RepositoryType,
        settings: Option<&FileSettings>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Local => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Arc::new(LocalRepository::new()))
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "local repository requested but the local-repo feature is disabled",
                    ))
                }
            }
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    let settings = settings.ok_or_else(|| {
                        RepositoryError::configuration(
                            "file repository requested without file settings",
                        )
                    })?;
                    let repo = FileRepository::open(
                        &settings.data_dir,
                        settings.catalog_path.as_deref(),
                    )?;
                    Ok(Arc::new(repo))
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    let _ = settings;
                    Err(RepositoryError::configuration(
                        "file repository requested but the file-repo feature is disabled",
                    ))
                }
            }
        }
    }

    /// Create a repository from environment variables alone.
    pub fn create_from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = RepositoryType::from_env();
        let settings = FileSettings::from_env();
        Self::create(repo_type, Some(&settings))
    }

    /// Create an in-memory repository (testing convenience).
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_parsing() {
        assert_eq!("local".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
        assert_eq!("LOCAL".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
        assert_eq!("memory".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
        assert_eq!("file".parse::<RepositoryType>().unwrap(), RepositoryType::File);
        assert_eq!("json".parse::<RepositoryType>().unwrap(), RepositoryType::File);
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[cfg(feature = "local-repo")]
    #[test]
    fn test_create_local() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None);
        assert!(repo.is_ok());
    }

    #[cfg(feature = "file-repo")]
    #[test]
    fn test_create_file_requires_settings() {
        let err = RepositoryFactory::create(RepositoryType::File, None).err().unwrap();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }
}
