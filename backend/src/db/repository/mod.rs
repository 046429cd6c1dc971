//! Repository trait definitions for dataset access.
//!
//! - [`error`]: Error types for repository operations
//! - [`dataset`]: Read-only lookups over contestants and seasons

pub mod dataset;
pub mod error;

pub use dataset::DatasetRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
