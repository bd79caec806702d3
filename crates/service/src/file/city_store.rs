use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::CityModel;
use uuid::Uuid;

use crate::entities::repository::CityRepository;
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// File-backed city repository.
/// Cities are written by other tools; this side only reads them.
#[derive(Clone)]
pub struct CityJsonRepository {
    store: Arc<JsonListStore<CityModel>>,
}

impl CityJsonRepository {
    /// Attach to the city collection at `path`. Creates an empty file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<CityModel>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Re-read the file to see cities written since open; returns the new count.
    pub async fn refresh(&self) -> Result<usize, ServiceError> {
        self.store.reload().await
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}

#[async_trait]
impl CityRepository for CityJsonRepository {
    async fn get_by_guid(&self, guid: Uuid) -> Result<Option<CityModel>, ServiceError> {
        Ok(self.store.find(|c| c.guid == guid).await)
    }

    async fn get_all(&self) -> Result<Vec<CityModel>, ServiceError> {
        Ok(self.store.all().await)
    }
}
