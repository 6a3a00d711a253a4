//! Derived lookup tables over the region catalog.
//!
//! `ProvinceIndex` is built once from a catalog and memoized: a reverse map
//! from province id to owning region id, and a forward map from region id to
//! the region record. Both are immutable after construction and safe to share
//! read-only across render passes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use super::catalog::{Region, REGIONS};

/// Province-to-region and region-by-id lookups derived from a catalog.
#[derive(Debug)]
pub struct ProvinceIndex {
    province_to_region: HashMap<&'static str, &'static str>,
    regions_by_id: HashMap<&'static str, &'static Region>,
}

impl ProvinceIndex {
    /// Build the index from a catalog.
    ///
    /// Walks regions in catalog order and records `province_id -> region_id`
    /// for every owned province. If a province id is claimed by more than one
    /// region, the later region in catalog order wins; the overlap is logged
    /// but is not an error. An empty catalog yields an empty index.
    pub fn build(regions: &'static [Region]) -> Self {
        let mut province_to_region = HashMap::new();
        let mut regions_by_id = HashMap::with_capacity(regions.len());

        for region in regions {
            for province_id in region.province_ids {
                if let Some(previous) = province_to_region.insert(*province_id, region.id) {
                    if previous != region.id {
                        warn!(
                            province_id = *province_id,
                            previous,
                            winner = region.id,
                            "province claimed by multiple regions; keeping later region"
                        );
                    }
                }
            }
            regions_by_id.insert(region.id, region);
        }

        Self {
            province_to_region,
            regions_by_id,
        }
    }

    /// Look up the id of the region owning a province, if any.
    pub fn region_id_of_province(&self, province_id: &str) -> Option<&'static str> {
        self.province_to_region.get(province_id).copied()
    }

    /// Look up the full region record owning a province, if any.
    pub fn region_of_province(&self, province_id: &str) -> Option<&'static Region> {
        self.region_id_of_province(province_id)
            .and_then(|region_id| self.region(region_id))
    }

    /// Look up a region record by its id.
    pub fn region(&self, region_id: &str) -> Option<&'static Region> {
        self.regions_by_id.get(region_id).copied()
    }

    /// Whether a province belongs to any region.
    ///
    /// Unaffiliated provinces are rendered inert, so callers use this to
    /// decide whether hover/click handling should be attached at all.
    pub fn is_interactive(&self, province_id: &str) -> bool {
        self.province_to_region.contains_key(province_id)
    }

    /// Number of provinces claimed by some region.
    pub fn province_count(&self) -> usize {
        self.province_to_region.len()
    }
}

/// The memoized index over the default catalog.
///
/// The default catalog is static configuration, so the index never needs to
/// be rebuilt within a process.
pub fn default_index() -> &'static ProvinceIndex {
    static INDEX: Lazy<ProvinceIndex> = Lazy::new(|| ProvinceIndex::build(REGIONS));
    &INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::catalog::MarkerPosition;

    #[test]
    fn test_default_index_covers_all_catalog_provinces() {
        let index = default_index();
        let expected: usize = REGIONS.iter().map(|r| r.province_ids.len()).sum();
        assert_eq!(index.province_count(), expected);
    }

    #[test]
    fn test_province_resolves_to_owning_region() {
        let index = default_index();
        assert_eq!(index.region_id_of_province("id-su"), Some("sumatra"));
        assert_eq!(index.region_id_of_province("id-jb"), Some("java"));
        assert_eq!(index.region_of_province("id-ba").map(|r| r.name), Some("Bali & Nusa Tenggara"));
    }

    #[test]
    fn test_unknown_province_is_not_found() {
        let index = default_index();
        assert_eq!(index.region_id_of_province("id-xx"), None);
        assert!(index.region_of_province("id-xx").is_none());
        assert!(!index.is_interactive("id-xx"));
    }

    #[test]
    fn test_region_lookup_by_id() {
        let index = default_index();
        assert_eq!(index.region("papua").map(|r| r.name), Some("Papua"));
        assert!(index.region("atlantis").is_none());
    }

    #[test]
    fn test_empty_catalog_yields_empty_index() {
        let index = ProvinceIndex::build(&[]);
        assert_eq!(index.province_count(), 0);
        assert!(index.region_id_of_province("id-su").is_none());
    }

    const OVERLAPPING: &[Region] = &[
        Region {
            id: "first",
            name: "First",
            description: "",
            specialties: &[],
            province_ids: &["p-1", "p-2"],
            position: MarkerPosition { top: 0.0, left: 0.0 },
        },
        Region {
            id: "second",
            name: "Second",
            description: "",
            specialties: &[],
            province_ids: &["p-2", "p-3"],
            position: MarkerPosition { top: 0.0, left: 0.0 },
        },
    ];

    #[test]
    fn test_overlapping_province_resolves_to_later_region() {
        let index = ProvinceIndex::build(OVERLAPPING);
        assert_eq!(index.region_id_of_province("p-1"), Some("first"));
        assert_eq!(index.region_id_of_province("p-2"), Some("second"));
        assert_eq!(index.region_id_of_province("p-3"), Some("second"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = ProvinceIndex::build(OVERLAPPING);
        let b = ProvinceIndex::build(OVERLAPPING);
        for province_id in ["p-1", "p-2", "p-3"] {
            assert_eq!(
                a.region_id_of_province(province_id),
                b.region_id_of_province(province_id)
            );
        }
    }
}
