use async_trait::async_trait;
use models::{CityModel, EntityModel};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Read access to cities. Cities are created outside this crate.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn get_by_guid(&self, guid: Uuid) -> Result<Option<CityModel>, ServiceError>;
    /// Whole collection, in store-defined order.
    async fn get_all(&self) -> Result<Vec<CityModel>, ServiceError>;
}

/// Persistence for entities.
///
/// `get_by_city_and_type` compares `entity_type` exactly; callers are
/// responsible for normalizing case.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    async fn get_by_guid(&self, guid: Uuid) -> Result<Option<EntityModel>, ServiceError>;
    async fn get_by_city_and_type(&self, city_id: Uuid, entity_type: &str) -> Result<Vec<EntityModel>, ServiceError>;
    async fn insert(&self, entity: EntityModel) -> Result<(), ServiceError>;
}

/// In-memory repositories for tests, benches and doc examples.
/// They record what the service asked for so callers can assert on it.
pub mod mock {
    use super::*;
    use std::io;
    use tokio::sync::Mutex;

    fn injected() -> ServiceError {
        ServiceError::Io(io::Error::other("injected failure"))
    }

    #[derive(Default)]
    pub struct MockCityRepository {
        cities: Vec<CityModel>,
        fail: bool,
    }

    impl MockCityRepository {
        pub fn with_cities(cities: Vec<CityModel>) -> Self {
            Self { cities, fail: false }
        }

        /// Every call returns an io error.
        pub fn failing() -> Self {
            Self { cities: Vec::new(), fail: true }
        }
    }

    #[async_trait]
    impl CityRepository for MockCityRepository {
        async fn get_by_guid(&self, guid: Uuid) -> Result<Option<CityModel>, ServiceError> {
            if self.fail { return Err(injected()); }
            Ok(self.cities.iter().find(|c| c.guid == guid).cloned())
        }

        async fn get_all(&self) -> Result<Vec<CityModel>, ServiceError> {
            if self.fail { return Err(injected()); }
            Ok(self.cities.clone())
        }
    }

    #[derive(Default)]
    pub struct MockEntityRepository {
        entities: Mutex<Vec<EntityModel>>,
        queries: Mutex<Vec<(Uuid, String)>>, // (city_id, entity_type) as received
        inserted: Mutex<Vec<EntityModel>>,
        fail: bool,
    }

    impl MockEntityRepository {
        pub fn with_entities(entities: Vec<EntityModel>) -> Self {
            Self { entities: Mutex::new(entities), ..Self::default() }
        }

        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        /// Arguments of every `get_by_city_and_type` call, oldest first.
        pub async fn queries(&self) -> Vec<(Uuid, String)> {
            self.queries.lock().await.clone()
        }

        /// Records handed to `insert`, oldest first.
        pub async fn inserted(&self) -> Vec<EntityModel> {
            self.inserted.lock().await.clone()
        }
    }

    #[async_trait]
    impl EntityRepository for MockEntityRepository {
        async fn get_by_guid(&self, guid: Uuid) -> Result<Option<EntityModel>, ServiceError> {
            if self.fail { return Err(injected()); }
            let entities = self.entities.lock().await;
            Ok(entities.iter().find(|e| e.guid == guid).cloned())
        }

        async fn get_by_city_and_type(&self, city_id: Uuid, entity_type: &str) -> Result<Vec<EntityModel>, ServiceError> {
            self.queries.lock().await.push((city_id, entity_type.to_string()));
            if self.fail { return Err(injected()); }
            let entities = self.entities.lock().await;
            Ok(entities
                .iter()
                .filter(|e| e.city_id == city_id && e.entity_type == entity_type)
                .cloned()
                .collect())
        }

        async fn insert(&self, entity: EntityModel) -> Result<(), ServiceError> {
            self.inserted.lock().await.push(entity.clone());
            if self.fail { return Err(injected()); }
            self.entities.lock().await.push(entity);
            Ok(())
        }
    }

}
