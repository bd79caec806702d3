use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::{CityModel, EntityModel};
use service::entities::EntityService;
use service::entities::repository::mock::{MockCityRepository, MockEntityRepository};
use service::file::{CityJsonRepository, EntityJsonRepository};

fn bench_lookups(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let city = uuid::Uuid::new_v4();
    let entities: Vec<EntityModel> = (0..1_000)
        .map(|i| EntityModel::new(city, if i % 4 == 0 { "park" } else { "restaurant" }, &format!("e{i}")))
        .collect();

    let mock_svc = EntityService::new(
        Arc::new(MockCityRepository::default()),
        Arc::new(MockEntityRepository::with_entities(entities.clone())),
    );
    c.bench_function("get_entities_mock_1k", |b| {
        b.iter(|| rt.block_on(mock_svc.get_entities(city, "PARK")).unwrap());
    });

    // file-backed stores seeded outside of the measured loop
    let dir = std::env::temp_dir().join(format!("lookup_bench_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let cities: Vec<CityModel> = (0..1_000).map(|i| CityModel::new(&format!("city{i}"))).collect();
    let last = cities[cities.len() - 1].guid;
    std::fs::write(dir.join("cities.json"), serde_json::to_vec(&cities).unwrap()).unwrap();
    std::fs::write(dir.join("entities.json"), serde_json::to_vec(&entities).unwrap()).unwrap();
    let json_svc = rt.block_on(async {
        EntityService::new(
            CityJsonRepository::new(dir.join("cities.json")).await.unwrap(),
            EntityJsonRepository::new(dir.join("entities.json")).await.unwrap(),
        )
    });

    c.bench_function("get_city_json_linear_scan_1k", |b| {
        b.iter(|| rt.block_on(json_svc.get_city(last)).unwrap());
    });
    c.bench_function("get_entities_json_1k", |b| {
        b.iter(|| rt.block_on(json_svc.get_entities(city, "park")).unwrap());
    });

    let _ = std::fs::remove_dir_all(&dir);
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
