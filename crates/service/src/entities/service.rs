use std::sync::Arc;

use models::{CityModel, EntityModel};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::entities::repository::{CityRepository, EntityRepository};
use crate::errors::ServiceError;

/// Application service over the city and entity repositories.
///
/// Reads are passthroughs. The only rules applied here are type
/// normalization on lookup and the forced fields on user submission.
/// Repository errors are returned as-is.
pub struct EntityService<C: CityRepository, E: EntityRepository> {
    cities: Arc<C>,
    entities: Arc<E>,
}

impl<C: CityRepository, E: EntityRepository> EntityService<C, E> {
    pub fn new(cities: Arc<C>, entities: Arc<E>) -> Self { Self { cities, entities } }

    #[instrument(skip(self))]
    pub async fn get_city(&self, guid: Uuid) -> Result<Option<CityModel>, ServiceError> {
        self.cities.get_by_guid(guid).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_cities(&self) -> Result<Vec<CityModel>, ServiceError> {
        self.cities.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_entity(&self, guid: Uuid) -> Result<Option<EntityModel>, ServiceError> {
        self.entities.get_by_guid(guid).await
    }

    /// Entities of a city with the given type, whatever casing the caller used.
    #[instrument(skip(self))]
    pub async fn get_entities(&self, city_id: Uuid, entity_type: &str) -> Result<Vec<EntityModel>, ServiceError> {
        let normalized = lowercase_invariant(entity_type);
        debug!(%city_id, entity_type = %normalized, "entity_lookup");
        self.entities.get_by_city_and_type(city_id, &normalized).await
    }

    /// Persist a user-submitted entity.
    ///
    /// The stored record is always pending review, inactive, and carries a
    /// freshly generated guid; the caller's values for those fields are
    /// discarded.
    ///
    /// # Examples
    /// ```
    /// use service::entities::EntityService;
    /// use service::entities::repository::mock::{MockCityRepository, MockEntityRepository};
    /// use models::EntityModel;
    /// use std::sync::Arc;
    /// let entities = Arc::new(MockEntityRepository::default());
    /// let svc = EntityService::new(Arc::new(MockCityRepository::default()), entities.clone());
    /// let submitted = EntityModel { is_active: true, ..EntityModel::new(uuid::Uuid::new_v4(), "museum", "Carnegie") };
    /// tokio_test::block_on(svc.add_user_entity(submitted.clone())).unwrap();
    /// let stored = tokio_test::block_on(entities.inserted()).pop().unwrap();
    /// assert!(stored.needs_reviewed && !stored.is_active);
    /// assert_ne!(stored.guid, submitted.guid);
    /// ```
    #[instrument(skip(self, entity), fields(city_id = %entity.city_id, entity_type = %entity.entity_type))]
    pub async fn add_user_entity(&self, mut entity: EntityModel) -> Result<(), ServiceError> {
        entity.needs_reviewed = true;
        entity.is_active = false;
        entity.guid = fresh_guid(entity.guid);

        let guid = entity.guid;
        self.entities.insert(entity).await?;
        info!(%guid, "user_entity_added");
        Ok(())
    }
}

/// Per-char lowercase with no context rules. Chars whose lowercase form is
/// not a single char are kept, so the output has the same char count.
fn lowercase_invariant(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        })
        .collect()
}

fn fresh_guid(previous: Uuid) -> Uuid {
    loop {
        let guid = Uuid::new_v4();
        if guid != previous {
            return guid;
        }
    }
}
