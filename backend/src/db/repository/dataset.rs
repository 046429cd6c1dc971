//! Read-only dataset repository trait.
//!
//! The dataset is written once at startup and only read afterwards, so the
//! trait exposes lookups and listings and nothing that mutates.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Contestant, ContestantId, DatasetInfo, Season, SeriesNumber, ValidationReport};

/// Repository trait for the contestant and season collections.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Check that the dataset is loaded and servable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every contestant in source order.
    async fn list_contestants(&self) -> RepositoryResult<Vec<Contestant>>;

    /// Retrieve one contestant.
    ///
    /// # Returns
    /// * `Ok(Contestant)` - The matching record
    /// * `Err(RepositoryError::NotFound)` - If no contestant has this id
    async fn get_contestant(&self, id: ContestantId) -> RepositoryResult<Contestant>;

    /// List every season in source order.
    async fn list_seasons(&self) -> RepositoryResult<Vec<Season>>;

    /// Retrieve one season by series number.
    ///
    /// # Returns
    /// * `Ok(Season)` - The matching record
    /// * `Err(RepositoryError::NotFound)` - If no season has this number
    async fn get_season(&self, series: SeriesNumber) -> RepositoryResult<Season>;

    /// Counts, checksum and provenance of the loaded dataset.
    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo>;

    /// Issues found while validating the dataset at load time.
    async fn validation_report(&self) -> RepositoryResult<ValidationReport>;
}
