//! City/entity use cases: repository contracts and the service on top of them.

pub mod repository;
pub mod service;

pub use repository::{CityRepository, EntityRepository};
pub use service::EntityService;
