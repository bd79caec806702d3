//! Runtime wiring helpers
//!
//! Builds the JSON-backed service from configuration so binary crates do
//! not need to know the concrete repository types.

use configs::StorageConfig;
use tracing::info;

use crate::entities::EntityService;
use crate::errors::ServiceError;
use crate::file::{CityJsonRepository, EntityJsonRepository};

pub type JsonEntityService = EntityService<CityJsonRepository, EntityJsonRepository>;

/// Ensure the data directory exists before the stores are opened.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir).await
}

/// Open both JSON collections named by `cfg` and wire them into a service.
pub async fn open_json_service(cfg: &StorageConfig) -> Result<JsonEntityService, ServiceError> {
    let cities = CityJsonRepository::new(cfg.cities_path()).await?;
    let entities = EntityJsonRepository::new(cfg.entities_path()).await?;
    info!(
        cities = cities.count().await,
        entities = entities.count().await,
        data_dir = %cfg.data_dir,
        "json_stores_opened"
    );
    Ok(EntityService::new(cities, entities))
}
