//! Dataset Store: loading, validating and serving the static dataset.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / aggregation callers                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - DatasetRepository     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LocalRepository (in-memory, Arc-shared)                │
//! │    built by DatasetLoader + validate_dataset            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The dataset is read once at startup. Any load or validation failure is
//! returned to the caller, which must refuse to serve.

pub mod checksum;
pub mod loader;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;
pub mod validation;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use services::{
    dataset_info, get_contestant, get_season, health_check, list_contestants, list_seasons,
    validation_report,
};

pub use checksum::calculate_checksum;
pub use loader::{DatasetLoader, CONTESTANTS_FILE, SEASONS_FILE};
pub use models::Dataset;
pub use repositories::LocalRepository;
pub use repository::{DatasetRepository, ErrorContext, RepositoryError, RepositoryResult};
pub use validation::{validate_dataset, ValidationPolicy};
