//! Record types shared by the repositories and the service layer.

pub mod city;
pub mod entity;

pub use city::CityModel;
pub use entity::EntityModel;
