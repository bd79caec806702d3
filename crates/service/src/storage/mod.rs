//! Storage abstractions for service layer
//!
//! Contains the file-backed document collection shared by the JSON
//! repositories.

pub mod json_list_store;
