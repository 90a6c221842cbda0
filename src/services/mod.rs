//! Service layer for business logic.
//!
//! This module contains the plan reconciler (the logic behind the frontend's
//! drag-and-drop) and the progress calculator. Both operate on plain domain
//! values: the reconciler takes a plan in and returns a new plan out, and the
//! progress calculator is a pure function of a major and a plan.

pub mod planner;

pub mod progress;

pub use planner::{PlanError, PlanResult};
pub use progress::compute_progress;
