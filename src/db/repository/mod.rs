//! Repository trait definitions.
//!
//! The traits split along the two kinds of data the system holds: the
//! immutable course catalog and the mutable per-major semester plans.
//! Implementations must be `Send + Sync` to work with async Rust.

use async_trait::async_trait;

use crate::api::{MajorId, MajorSummary};
use crate::models::{Major, Plan};

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for read-only catalog access.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all majors without their course lists (id, name, school).
    async fn list_majors(&self) -> RepositoryResult<Vec<MajorSummary>>;

    /// Fetch all majors including course lists, in catalog order.
    async fn all_majors(&self) -> RepositoryResult<Vec<Major>>;

    /// Fetch a single major by id.
    ///
    /// Returns `Ok(None)` for an unknown id; the service layer decides
    /// whether that is a `NotFound` error at its boundary.
    async fn get_major(&self, id: &MajorId) -> RepositoryResult<Option<Major>>;
}

/// Repository trait for semester plan persistence.
///
/// The persistence unit is the whole plan per major: no partial updates, no
/// versioning, last writer wins.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Load the plan for a major.
    ///
    /// When no plan has been saved yet this materializes the default
    /// four-semester skeleton without persisting it; a stored document is
    /// only created by [`save_plan`](Self::save_plan).
    async fn load_plan(&self, major_id: &MajorId) -> RepositoryResult<Plan>;

    /// Replace the stored plan for a major with `plan`.
    async fn save_plan(&self, major_id: &MajorId, plan: &Plan) -> RepositoryResult<()>;

    /// Whether a plan document exists for the major.
    async fn has_plan(&self, major_id: &MajorId) -> RepositoryResult<bool>;
}

/// Combined repository trait used by the application state.
pub trait FullRepository: CatalogRepository + PlanRepository {}

impl<T: CatalogRepository + PlanRepository> FullRepository for T {}
