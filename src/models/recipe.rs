use serde::{Deserialize, Serialize};

/// A recipe as served by the backend.
///
/// Wire field names are camelCase; every descriptive field is optional so a
/// sparse record still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Estimated cost in rupiah
    #[serde(default)]
    pub estimated_cost: Option<u64>,
    /// Region display name, matching the catalog's region names
    #[serde(default)]
    pub region: Option<String>,
}
