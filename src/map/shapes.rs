//! Province shapes from the external map-shape provider.
//!
//! Geometry is an opaque pass-through: the path data is carried verbatim and
//! never parsed, copied into the catalog, or mutated. The provider's JSON
//! layout matches the `@svg-maps` package family (a `viewBox` string plus a
//! flat `locations` list).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_VIEW_BOX: &str = "0 0 800 400";

/// One province shape record as supplied by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceShape {
    /// Identifier in the provider's key space (matches catalog province ids)
    pub id: String,
    /// Display name, if the provider supplies one
    #[serde(default)]
    pub name: Option<String>,
    /// Opaque vector path data
    pub path: String,
}

/// A full map definition: view box plus province shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapDefinition {
    #[serde(rename = "viewBox", default = "default_view_box")]
    pub view_box: String,
    #[serde(default)]
    pub locations: Vec<ProvinceShape>,
}

fn default_view_box() -> String {
    DEFAULT_VIEW_BOX.to_string()
}

impl MapDefinition {
    /// An empty definition with the default view box.
    pub fn empty() -> Self {
        Self {
            view_box: default_view_box(),
            locations: Vec::new(),
        }
    }

    /// Parse a definition from provider JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a definition from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_json() {
        let json = r#"{
            "viewBox": "0 0 792.54486 316.66392",
            "locations": [
                { "id": "id-su", "name": "North Sumatra", "path": "m 10,10 l 5,5 z" },
                { "id": "id-jb", "path": "m 20,20 l 5,5 z" }
            ]
        }"#;
        let map = MapDefinition::from_json(json).unwrap();
        assert_eq!(map.view_box, "0 0 792.54486 316.66392");
        assert_eq!(map.locations.len(), 2);
        assert_eq!(map.locations[0].id, "id-su");
        assert_eq!(map.locations[1].name, None);
    }

    #[test]
    fn test_path_data_passes_through_verbatim() {
        let json = r#"{ "locations": [ { "id": "id-ba", "path": "M 1.5,2 C 3,4 5,6 7,8 Z" } ] }"#;
        let map = MapDefinition::from_json(json).unwrap();
        assert_eq!(map.locations[0].path, "M 1.5,2 C 3,4 5,6 7,8 Z");
    }

    #[test]
    fn test_missing_view_box_uses_default() {
        let map = MapDefinition::from_json(r#"{ "locations": [] }"#).unwrap();
        assert_eq!(map.view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_empty_definition() {
        let map = MapDefinition::empty();
        assert!(map.locations.is_empty());
    }
}
