//! Repository-agnostic dataset operations.
//!
//! These functions work with any [`DatasetRepository`] implementation and are
//! what the HTTP handlers call. They add logging around the repository
//! lookups so a miss shows up in the service log with its context.
//!
//! # Usage
//!
//! ```no_run
//! use taskmaster_analytics::db::{services, repositories::LocalRepository, ValidationPolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::load("data", ValidationPolicy::Strict)?;
//!     let contestants = services::list_contestants(&repo).await?;
//!     println!("Found {} contestants", contestants.len());
//!     Ok(())
//! }
//! ```

use log::{debug, info, warn};

use super::models::{Contestant, ContestantId, DatasetInfo, Season, SeriesNumber, ValidationReport};
use super::repository::{DatasetRepository, RepositoryResult};

// ==================== Health ====================

/// Check that the repository can serve requests.
pub async fn health_check<R: DatasetRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Contestants ====================

/// All contestants in load order.
pub async fn list_contestants<R: DatasetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Contestant>> {
    let contestants = repo.list_contestants().await?;
    debug!("Service layer: listed {} contestants", contestants.len());
    Ok(contestants)
}

/// One contestant by id.
///
/// # Returns
/// * `Ok(Contestant)` - The record
/// * `Err(RepositoryError::NotFound)` - No contestant has this id
pub async fn get_contestant<R: DatasetRepository + ?Sized>(
    repo: &R,
    id: ContestantId,
) -> RepositoryResult<Contestant> {
    repo.get_contestant(id).await.inspect_err(|e| {
        if e.is_not_found() {
            debug!("Service layer: contestant {} not found", id);
        } else {
            warn!("Service layer: get_contestant({}) failed: {}", id, e);
        }
    })
}

// ==================== Seasons ====================

/// All seasons in load order.
pub async fn list_seasons<R: DatasetRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Season>> {
    let seasons = repo.list_seasons().await?;
    debug!("Service layer: listed {} seasons", seasons.len());
    Ok(seasons)
}

/// One season by series number.
pub async fn get_season<R: DatasetRepository + ?Sized>(
    repo: &R,
    series: SeriesNumber,
) -> RepositoryResult<Season> {
    repo.get_season(series).await.inspect_err(|e| {
        if e.is_not_found() {
            debug!("Service layer: series {} not found", series);
        } else {
            warn!("Service layer: get_season({}) failed: {}", series, e);
        }
    })
}

// ==================== Dataset ====================

/// Counts, checksum and provenance of the loaded dataset.
pub async fn dataset_info<R: DatasetRepository + ?Sized>(repo: &R) -> RepositoryResult<DatasetInfo> {
    repo.dataset_info().await
}

/// Validation issues recorded when the dataset was loaded.
pub async fn validation_report<R: DatasetRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<ValidationReport> {
    let report = repo.validation_report().await?;
    info!(
        "Service layer: validation report has {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    Ok(report)
}
