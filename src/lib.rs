//! # TransferBuddy Backend
//!
//! Backend for a community-college-to-university transfer planning tool.
//!
//! Students pick a target major, see which courses from partner community
//! colleges articulate to required university courses, and arrange the
//! remaining courses into a semester-by-semester plan. This crate provides
//! the catalog and plan domain model, the plan reconciliation logic behind
//! the frontend's drag-and-drop, progress reporting, and a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: ID newtypes and Data Transfer Objects for API responses
//! - [`models`]: Catalog (majors, courses, equivalencies) and semester plans
//! - [`services`]: Plan reconciliation and progress computation
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Plan reconciliation
//!
//! Every reconciler operation takes a [`models::Plan`] by reference and
//! returns a new value (or an error), never a partially mutated state. The
//! caller adopts the result as the new current plan, so each operation is
//! atomic from the presentation layer's point of view. The one invariant the
//! reconciler maintains is that a course code appears in at most one
//! scheduled instance across the entire plan.

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
