use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::EntityModel;
use tracing::debug;
use uuid::Uuid;

use crate::entities::repository::EntityRepository;
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// File-backed entity repository. Type matching is exact.
#[derive(Clone)]
pub struct EntityJsonRepository {
    store: Arc<JsonListStore<EntityModel>>,
}

impl EntityJsonRepository {
    /// Attach to the entity collection at `path`. Creates an empty file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<EntityModel>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}

#[async_trait]
impl EntityRepository for EntityJsonRepository {
    async fn get_by_guid(&self, guid: Uuid) -> Result<Option<EntityModel>, ServiceError> {
        Ok(self.store.find(|e| e.guid == guid).await)
    }

    async fn get_by_city_and_type(&self, city_id: Uuid, entity_type: &str) -> Result<Vec<EntityModel>, ServiceError> {
        Ok(self
            .store
            .filter(|e| e.city_id == city_id && e.entity_type == entity_type)
            .await)
    }

    async fn insert(&self, entity: EntityModel) -> Result<(), ServiceError> {
        debug!(guid = %entity.guid, path = %self.store.path().display(), "entity_insert");
        self.store.push(entity).await
    }
}
