//! JSON file-backed repository implementations.

pub mod city_store;
pub mod entity_store;

pub use city_store::CityJsonRepository;
pub use entity_store::EntityJsonRepository;
