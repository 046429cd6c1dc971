//! In-memory dataset repository.
//!
//! The dataset is loaded once and never written again, so the repository
//! holds it behind an `Arc` and hands out clones of individual records. The
//! id indexes are built at construction so lookups don't scan.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::api::{Contestant, ContestantId, DatasetInfo, Season, SeriesNumber, ValidationReport};
use crate::db::loader::DatasetLoader;
use crate::db::models::Dataset;
use crate::db::repository::*;
use crate::db::validation::ValidationPolicy;

/// In-memory repository over a loaded [`Dataset`].
///
/// Cloning is cheap: clones share the same dataset.
///
/// # Example
/// ```no_run
/// use taskmaster_analytics::db::repositories::LocalRepository;
/// use taskmaster_analytics::db::validation::ValidationPolicy;
///
/// let repo = LocalRepository::load("data", ValidationPolicy::Strict)?;
/// # Ok::<(), taskmaster_analytics::db::RepositoryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LocalRepository {
    data: Arc<LocalData>,
}

#[derive(Debug)]
struct LocalData {
    dataset: Dataset,
    contestant_index: HashMap<ContestantId, usize>,
    season_index: HashMap<SeriesNumber, usize>,
}

impl LocalRepository {
    /// Wrap an already-built dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        // First occurrence wins; duplicates never survive validation anyway.
        let mut contestant_index = HashMap::with_capacity(dataset.contestants.len());
        for (pos, contestant) in dataset.contestants.iter().enumerate() {
            contestant_index.entry(contestant.id).or_insert(pos);
        }
        let mut season_index = HashMap::with_capacity(dataset.seasons.len());
        for (pos, season) in dataset.seasons.iter().enumerate() {
            season_index.entry(season.series_number).or_insert(pos);
        }

        Self {
            data: Arc::new(LocalData {
                dataset,
                contestant_index,
                season_index,
            }),
        }
    }

    /// Load and validate the dataset in `dir`.
    ///
    /// # Errors
    /// * `RepositoryError::LoadError` - A source file is missing or malformed
    /// * `RepositoryError::ValidationError` - The dataset breaks an invariant
    pub fn load<P: AsRef<Path>>(dir: P, policy: ValidationPolicy) -> RepositoryResult<Self> {
        let dataset = DatasetLoader::new(policy).load_dir(dir)?;
        Ok(Self::from_dataset(dataset))
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.data.dataset
    }

    pub fn contestant_count(&self) -> usize {
        self.data.dataset.contestants.len()
    }

    pub fn season_count(&self) -> usize {
        self.data.dataset.seasons.len()
    }
}

#[async_trait]
impl DatasetRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(!self.data.dataset.checksum.is_empty())
    }

    async fn list_contestants(&self) -> RepositoryResult<Vec<Contestant>> {
        Ok(self.data.dataset.contestants.clone())
    }

    async fn get_contestant(&self, id: ContestantId) -> RepositoryResult<Contestant> {
        self.data
            .contestant_index
            .get(&id)
            .map(|pos| self.data.dataset.contestants[*pos].clone())
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Contestant {} not found", id),
                    ErrorContext::new("get_contestant")
                        .with_entity("contestant")
                        .with_entity_id(id),
                )
            })
    }

    async fn list_seasons(&self) -> RepositoryResult<Vec<Season>> {
        Ok(self.data.dataset.seasons.clone())
    }

    async fn get_season(&self, series: SeriesNumber) -> RepositoryResult<Season> {
        self.data
            .season_index
            .get(&series)
            .map(|pos| self.data.dataset.seasons[*pos].clone())
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Series {} not found", series),
                    ErrorContext::new("get_season")
                        .with_entity("season")
                        .with_entity_id(series),
                )
            })
    }

    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo> {
        Ok(self.data.dataset.info())
    }

    async fn validation_report(&self) -> RepositoryResult<ValidationReport> {
        Ok(self.data.dataset.validation.clone())
    }
}
