//! JSON-document repository.
//!
//! The catalog is loaded once from a catalog JSON file; each
//! major's plan is stored as one JSON document under the data directory.
//! Writes replace the whole document (last writer wins), going through a
//! temporary file so a crashed write never leaves a truncated plan behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::api::{MajorId, MajorSummary};
use crate::db::repository::{
    CatalogRepository, ErrorContext, PlanRepository, RepositoryError, RepositoryResult,
};
use crate::models::{load_catalog_file, seed_catalog, Major, Plan};

/// File-backed repository: catalog file + one plan document per major.
pub struct FileRepository {
    majors: Vec<Major>,
    data_dir: PathBuf,
}

impl FileRepository {
    /// Open a repository rooted at `data_dir`.
    ///
    /// When `catalog_path` is `None` the built-in seed catalog is served.
    /// The data directory is created if absent.
    pub fn open(data_dir: impl Into<PathBuf>, catalog_path: Option<&Path>) -> RepositoryResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            RepositoryError::storage_with_context(
                e.to_string(),
                ErrorContext::new("open").with_details(format!("data_dir={}", data_dir.display())),
            )
        })?;

        let majors = match catalog_path {
            Some(path) => load_catalog_file(path).map_err(|e| {
                RepositoryError::validation_with_context(
                    e.to_string(),
                    ErrorContext::new("open")
                        .with_entity("catalog")
                        .with_details(format!("path={}", path.display())),
                )
            })?,
            None => seed_catalog(),
        };

        Ok(FileRepository { majors, data_dir })
    }

    fn plan_path(&self, major_id: &MajorId) -> PathBuf {
        // Major ids come from the catalog, but sanitize anyway so a hostile
        // id cannot escape the data directory.
        let safe: String = major_id
            .as_str()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_dir.join(format!("plan-{}.json", safe))
    }
}

#[async_trait]
impl CatalogRepository for FileRepository {
    async fn list_majors(&self) -> RepositoryResult<Vec<MajorSummary>> {
        Ok(self.majors.iter().map(Into::into).collect())
    }

    async fn all_majors(&self) -> RepositoryResult<Vec<Major>> {
        Ok(self.majors.clone())
    }

    async fn get_major(&self, id: &MajorId) -> RepositoryResult<Option<Major>> {
        Ok(self.majors.iter().find(|m| &m.id == id).cloned())
    }
}

#[async_trait]
impl PlanRepository for FileRepository {
    async fn load_plan(&self, major_id: &MajorId) -> RepositoryResult<Plan> {
        let path = self.plan_path(major_id);
        if !path.exists() {
            return Ok(Plan::default_skeleton(major_id.clone()));
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            RepositoryError::from(e)
                .with_operation("load_plan")
        })?;
        let plan: Plan = serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::validation_with_context(
                e.to_string(),
                ErrorContext::new("load_plan")
                    .with_entity("plan")
                    .with_entity_id(major_id),
            )
        })?;
        Ok(plan)
    }

    async fn save_plan(&self, major_id: &MajorId, plan: &Plan) -> RepositoryResult<()> {
        let path = self.plan_path(major_id);
        let tmp = path.with_extension("json.tmp");

        let contents = serde_json::to_string_pretty(plan)?;
        std::fs::write(&tmp, contents)
            .map_err(|e| RepositoryError::from(e).with_operation("save_plan"))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| RepositoryError::from(e).with_operation("save_plan"))?;
        Ok(())
    }

    async fn has_plan(&self, major_id: &MajorId) -> RepositoryResult<bool> {
        Ok(self.plan_path(major_id).exists())
    }
}
