use std::sync::Arc;

use super::loader::DatasetLoader;
use super::repositories::LocalRepository;
use super::repository::DatasetRepository;
use super::services;
use super::validation::ValidationPolicy;
use crate::api::{ContestantId, SeriesNumber};

const CONTESTANTS: &str = r#"[
    {"id": 1, "name": "Frank", "seasonIds": [1], "seasonWins": 0, "episodes": 2,
     "totalPoints": 9},
    {"id": 2, "name": "Josh", "seasonIds": [1], "seasonWins": 1, "episodes": 2,
     "totalPoints": 12}
]"#;
const SEASONS: &str = r#"[
    {"seriesNumber": 1, "year": 2015, "episodes": 6,
     "contestants": [{"id": 1, "name": "Frank"}, {"id": 2, "name": "Josh"}],
     "winner": {"id": 2, "name": "Josh"}}
]"#;

fn repo() -> LocalRepository {
    let dataset = DatasetLoader::new(ValidationPolicy::Strict)
        .load_json(CONTESTANTS, SEASONS, "inline")
        .unwrap();
    LocalRepository::from_dataset(dataset)
}

#[tokio::test]
async fn test_services_work_through_trait_object() {
    let repo: Arc<dyn DatasetRepository> = Arc::new(repo());

    assert!(services::health_check(repo.as_ref()).await.unwrap());
    assert_eq!(services::list_contestants(repo.as_ref()).await.unwrap().len(), 2);
    assert_eq!(services::list_seasons(repo.as_ref()).await.unwrap().len(), 1);

    let josh = services::get_contestant(repo.as_ref(), ContestantId::new(2))
        .await
        .unwrap();
    assert_eq!(josh.name, "Josh");
}

#[tokio::test]
async fn test_service_misses_are_not_found() {
    let repo = repo();
    let err = services::get_season(&repo, SeriesNumber::new(9))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.context().operation.as_deref(), Some("get_season"));
}

#[tokio::test]
async fn test_dataset_info_and_report() {
    let repo = repo();
    let info = services::dataset_info(&repo).await.unwrap();
    assert_eq!(info.contestant_count, 2);
    assert_eq!(info.season_count, 1);
    assert_eq!(info.checksum.len(), 64);

    let report = services::validation_report(&repo).await.unwrap();
    assert!(report.is_valid());
}
