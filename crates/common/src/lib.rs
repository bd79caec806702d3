//! Process-level helpers shared by the binary and the service crate.

pub mod env;
pub mod utils;
