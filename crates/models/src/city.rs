use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A city record. Only `guid` is meaningful to the service layer; the
/// remaining attributes are carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityModel {
    pub guid: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl CityModel {
    pub fn new(name: &str) -> Self {
        Self { guid: Uuid::new_v4(), name: name.to_string(), state: None }
    }
}
