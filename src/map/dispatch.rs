//! Selection dispatch: province/marker activation to region selection.
//!
//! Translates a province-level interaction into the region record the hosting
//! page consumes. Activating an unaffiliated province is a silent no-op,
//! consistent with those shapes being non-interactive.

use tracing::debug;

use super::catalog::Region;
use super::index::ProvinceIndex;

/// Resolve a province activation to its owning region, if any.
pub fn activate_province(province_id: &str, index: &ProvinceIndex) -> Option<&'static Region> {
    match index.region_of_province(province_id) {
        Some(region) => {
            debug!(province_id, region_id = region.id, "province activated");
            Some(region)
        }
        None => {
            debug!(province_id, "activation on unaffiliated province ignored");
            None
        }
    }
}

/// Resolve a direct marker activation by region id, bypassing the province
/// lookup.
pub fn activate_region(region_id: &str, index: &ProvinceIndex) -> Option<&'static Region> {
    let region = index.region(region_id);
    if region.is_none() {
        debug!(region_id, "activation on unknown region ignored");
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::index::default_index;

    #[test]
    fn test_province_activation_emits_owning_region() {
        let region = activate_province("id-su", default_index()).unwrap();
        assert_eq!(region.id, "sumatra");
        assert_eq!(region.name, "Sumatera");
        assert!(region.province_ids.contains(&"id-su"));
    }

    #[test]
    fn test_unaffiliated_province_activation_is_noop() {
        assert!(activate_province("id-xx", default_index()).is_none());
    }

    #[test]
    fn test_marker_activation_bypasses_province_lookup() {
        let region = activate_region("maluku", default_index()).unwrap();
        assert_eq!(region.name, "Maluku");
    }

    #[test]
    fn test_unknown_region_marker_activation_is_noop() {
        assert!(activate_region("atlantis", default_index()).is_none());
    }
}
