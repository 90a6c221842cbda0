//! Repository implementations module.
//!
//! This module contains the implementations of the repository traits:
//! - `local`: in-memory implementation for unit testing and local development
//! - `file`: JSON-document implementation (catalog file + plan documents)

#[cfg(feature = "file-repo")]
pub mod file;
#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "file-repo")]
pub use file::FileRepository;
#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
