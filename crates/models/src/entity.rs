use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A domain record attached to a city.
///
/// `entity_type` is stored as `Type`. Lookups by type expect the stored value
/// to already be lowercase; the service lowercases caller input, stores do not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityModel {
    pub guid: Uuid,
    pub city_id: Uuid,
    #[serde(rename = "Type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pending manual approval.
    #[serde(default)]
    pub needs_reviewed: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl EntityModel {
    pub fn new(city_id: Uuid, entity_type: &str, name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            city_id,
            entity_type: entity_type.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }
}
