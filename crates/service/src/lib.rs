//! Service layer for cities and entities.
//! - Repository traits decouple the service from storage.
//! - JSON file-backed repositories are the shipped implementation.
//! - Errors from storage reach callers unchanged.

pub mod errors;
pub mod storage;
pub mod entities;
pub mod file;
pub mod runtime;

pub use entities::{CityRepository, EntityRepository, EntityService};
pub use errors::ServiceError;
