use std::sync::Arc;

use models::{CityModel, EntityModel};
use service::entities::EntityService;
use service::file::{CityJsonRepository, EntityJsonRepository};
use uuid::Uuid;

struct TestStores {
    dir: std::path::PathBuf,
    cities: Arc<CityJsonRepository>,
    entities: Arc<EntityJsonRepository>,
}

impl TestStores {
    async fn open(seed_cities: &[CityModel]) -> anyhow::Result<Self> {
        // isolated temp dir per test run
        let dir = std::env::temp_dir().join(format!("entities_flow_{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join("cities.json"), serde_json::to_vec(seed_cities)?).await?;

        let cities = CityJsonRepository::new(dir.join("cities.json")).await?;
        let entities = EntityJsonRepository::new(dir.join("entities.json")).await?;
        Ok(Self { dir, cities, entities })
    }

    fn service(&self) -> EntityService<CityJsonRepository, EntityJsonRepository> {
        EntityService::new(self.cities.clone(), self.entities.clone())
    }

    async fn cleanup(self) {
        let _ = tokio::fs::remove_dir_all(&self.dir).await;
    }
}

#[tokio::test]
async fn user_submission_is_persisted_pending_review() -> anyhow::Result<()> {
    let pgh = CityModel::new("Pittsburgh");
    let stores = TestStores::open(&[pgh.clone()]).await?;
    let svc = stores.service();

    let g1 = Uuid::new_v4();
    let submitted = EntityModel {
        guid: g1,
        needs_reviewed: false,
        is_active: true,
        ..EntityModel::new(pgh.guid, "restaurant", "Primanti")
    };
    svc.add_user_entity(submitted).await?;

    let found = svc.get_entities(pgh.guid, "Restaurant").await?;
    assert_eq!(found.len(), 1);
    let stored = &found[0];
    assert_ne!(stored.guid, g1);
    assert!(stored.needs_reviewed);
    assert!(!stored.is_active);
    assert_eq!(svc.get_entity(g1).await?, None);
    assert_eq!(svc.get_entity(stored.guid).await?.as_ref(), Some(stored));

    // survives a restart
    let raw = tokio::fs::read_to_string(stores.dir.join("entities.json")).await?;
    let on_disk: Vec<EntityModel> = serde_json::from_str(&raw)?;
    assert_eq!(on_disk, found);
    assert!(raw.contains("\"NeedsReviewed\": true"));

    stores.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn city_reads_pass_through_json_store() -> anyhow::Result<()> {
    let seeded = vec![CityModel::new("Pittsburgh"), CityModel::new("Erie")];
    let stores = TestStores::open(&seeded).await?;
    let svc = stores.service();

    assert_eq!(svc.get_all_cities().await?, seeded);
    assert_eq!(svc.get_city(seeded[1].guid).await?, Some(seeded[1].clone()));
    assert_eq!(svc.get_city(Uuid::new_v4()).await?, None);

    stores.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn lowercase_lookup_misses_mixed_case_records() -> anyhow::Result<()> {
    let stores = TestStores::open(&[]).await?;
    let svc = stores.service();
    let city = Uuid::new_v4();

    // case normalization is applied to lookups only, not to stored values
    svc.add_user_entity(EntityModel::new(city, "Museum", "Carnegie")).await?;
    assert!(svc.get_entities(city, "Museum").await?.is_empty());

    svc.add_user_entity(EntityModel::new(city, "museum", "Warhol")).await?;
    let found = svc.get_entities(city, "MUSEUM").await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Warhol");

    stores.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn concurrent_submissions_all_land() -> anyhow::Result<()> {
    let stores = TestStores::open(&[]).await?;
    let svc = Arc::new(stores.service());
    let city = Uuid::new_v4();

    let mut handles = Vec::new();
    for i in 0..16 {
        let svc = svc.clone();
        handles.push(tokio::spawn(async move {
            svc.add_user_entity(EntityModel::new(city, "park", &format!("park-{i}"))).await
        }));
    }
    for h in handles {
        h.await??;
    }

    assert_eq!(svc.get_entities(city, "park").await?.len(), 16);
    let reopened = EntityJsonRepository::new(stores.dir.join("entities.json")).await?;
    assert_eq!(reopened.count().await, 16);

    stores.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn corrupt_city_file_fails_to_open() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("entities_flow_bad_{}.json", Uuid::new_v4()));
    tokio::fs::write(&path, b"[{\"Guid\": 42}]").await?;

    let err = CityJsonRepository::new(&path).await.err();
    assert!(matches!(err, Some(service::ServiceError::Serialization(_))));

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}
