//! In-memory repository for unit testing and local development.
//!
//! The catalog is fixed at construction (built-in seed data unless one is
//! supplied); plans live in a `RwLock`-guarded map keyed by major id and do
//! not survive a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{MajorId, MajorSummary};
use crate::db::repository::{
    CatalogRepository, PlanRepository, RepositoryResult,
};
use crate::models::{seed_catalog, Major, Plan};

/// In-memory repository backed by the seed catalog and a plan map.
pub struct LocalRepository {
    majors: Vec<Major>,
    plans: RwLock<HashMap<MajorId, Plan>>,
}

impl LocalRepository {
    /// Create a repository with the built-in seed catalog.
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    /// Create a repository serving the supplied catalog.
    pub fn with_catalog(majors: Vec<Major>) -> Self {
        LocalRepository {
            majors,
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored plan documents (skeletons are not stored).
    pub fn stored_plan_count(&self) -> usize {
        self.plans.read().len()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
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
impl PlanRepository for LocalRepository {
    async fn load_plan(&self, major_id: &MajorId) -> RepositoryResult<Plan> {
        let plans = self.plans.read();
        Ok(plans
            .get(major_id)
            .cloned()
            .unwrap_or_else(|| Plan::default_skeleton(major_id.clone())))
    }

    async fn save_plan(&self, major_id: &MajorId, plan: &Plan) -> RepositoryResult<()> {
        self.plans.write().insert(major_id.clone(), plan.clone());
        Ok(())
    }

    async fn has_plan(&self, major_id: &MajorId) -> RepositoryResult<bool> {
        Ok(self.plans.read().contains_key(major_id))
    }
}
