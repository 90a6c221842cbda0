//! Persistence layer for catalog and plan data.
//!
//! This module provides abstractions for storage via the Repository pattern,
//! allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, tests)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Catalog boundary checks (unknown major -> NotFound)  │
//! │  - Whole-plan validation before save                    │
//! │  - Reconciler load-transform-save orchestration         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────┐
//!     │  LocalRepository   FileRepository    │
//!     │   (in-memory)      (JSON documents)  │
//!     └──────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For application code, use the service layer:**
//! ```ignore
//! use transferbuddy::api::MajorId;
//! use transferbuddy::db::{factory::RepositoryFactory, services};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_from_env()?;
//!     let majors = services::list_majors(repo.as_ref()).await?;
//!     let plan = services::load_plan(repo.as_ref(), &MajorId::new("cs-ucb")).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "local-repo", feature = "file-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(all(test, feature = "local-repo"))]
#[path = "services_tests.rs"]
mod services_tests;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::{FileSettings, RepositoryConfig};
pub use repository::{FullRepository, RepositoryError, RepositoryResult};
pub use services::{ServiceError, ServiceResult};

use std::sync::{Arc, OnceLock};

static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

/// Initialize the process-wide repository from environment configuration.
///
/// Idempotent: a second call leaves the already-initialized repository in
/// place. The server binary calls this once at startup.
pub fn init_repository() -> RepositoryResult<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }
    let repo = RepositoryFactory::create_from_env()?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get the process-wide repository initialized by [`init_repository`].
pub fn get_repository() -> RepositoryResult<&'static Arc<dyn FullRepository>> {
    REPOSITORY
        .get()
        .ok_or_else(|| RepositoryError::configuration("Repository not initialized"))
}
