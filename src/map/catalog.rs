//! Static catalog of culinary regions.
//!
//! The catalog is immutable configuration: seven regions, each owning a set
//! of province ids in the key space of the external map-shape provider. It is
//! defined once at process start and never mutated, which lets the derived
//! index be memoized for the lifetime of the process.

/// Anchor point for a region's marker, in percent of the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPosition {
    /// Distance from the top edge, 0.0..=100.0
    pub top: f32,
    /// Distance from the left edge, 0.0..=100.0
    pub left: f32,
}

/// A named cultural grouping of provinces.
///
/// Province ids form a partition across the catalog: each province belongs to
/// at most one region. A province absent from every region is unaffiliated
/// and rendered inert by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Unique region identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description shown in the detail card
    pub description: &'static str,
    /// Signature dishes, in display order
    pub specialties: &'static [&'static str],
    /// Province ids owned by this region (map-shape provider key space)
    pub province_ids: &'static [&'static str],
    /// Marker anchor in percent coordinates
    pub position: MarkerPosition,
}

impl Region {
    /// The specialties shown on the marker card (first two at most).
    pub fn headline_specialties(&self) -> &'static [&'static str] {
        let n = self.specialties.len().min(2);
        &self.specialties[..n]
    }
}

/// The culinary regions of Indonesia, in catalog order.
///
/// Catalog order matters: when a province id appears in more than one
/// region's set, the index builder lets the later region win.
pub const REGIONS: &[Region] = &[
    Region {
        id: "sumatra",
        name: "Sumatera",
        description: "Kaya akan rempah-rempah dan santan",
        specialties: &["Rendang", "Gulai", "Sate Padang"],
        province_ids: &[
            "id-ac", "id-su", "id-sb", "id-ri", "id-kr", "id-ja", "id-bb", "id-be", "id-ss",
            "id-la",
        ],
        position: MarkerPosition {
            top: 52.0,
            left: 23.0,
        },
    },
    Region {
        id: "java",
        name: "Jawa",
        description: "Pusat kuliner tradisional Indonesia",
        specialties: &["Gudeg", "Rawon", "Gado-gado"],
        province_ids: &["id-bt", "id-jk", "id-jb", "id-jt", "id-yo", "id-ji"],
        position: MarkerPosition {
            top: 75.0,
            left: 44.0,
        },
    },
    Region {
        id: "kalimantan",
        name: "Kalimantan",
        description: "Perpaduan rasa manis dan gurih",
        specialties: &["Soto Banjar", "Ayam Cincane", "Ketupat Kandangan"],
        province_ids: &["id-kb", "id-kt", "id-ks", "id-ki", "id-ku"],
        position: MarkerPosition {
            top: 48.0,
            left: 51.0,
        },
    },
    Region {
        id: "sulawesi",
        name: "Sulawesi",
        description: "Cita rasa pedas dan khas",
        specialties: &["Coto Makassar", "Pallubasa", "Konro"],
        province_ids: &["id-sa", "id-st", "id-sn", "id-sg", "id-sr", "id-go"],
        position: MarkerPosition {
            top: 50.0,
            left: 68.0,
        },
    },
    Region {
        id: "bali-nusa",
        name: "Bali & Nusa Tenggara",
        description: "Bumbu khas dan tradisi unik",
        specialties: &["Ayam Betutu", "Plecing Kangkung", "Sate Lilit"],
        province_ids: &["id-ba", "id-nb", "id-nt"],
        position: MarkerPosition {
            top: 78.0,
            left: 58.0,
        },
    },
    Region {
        id: "maluku",
        name: "Maluku",
        description: "Rempah laut dan tradisi bahari",
        specialties: &["Ikan Asar", "Papeda Maluku", "Kohu-kohu"],
        province_ids: &["id-ma", "id-mu"],
        position: MarkerPosition {
            top: 60.0,
            left: 74.0,
        },
    },
    Region {
        id: "papua",
        name: "Papua",
        description: "Kuliner tradisional asli Indonesia",
        specialties: &["Papeda", "Ikan Bakar Manokwari", "Sagu Lempeng"],
        province_ids: &["id-pa", "id-pb"],
        position: MarkerPosition {
            top: 56.0,
            left: 88.0,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_regions() {
        assert_eq!(REGIONS.len(), 7);
    }

    #[test]
    fn test_region_ids_are_unique() {
        let mut ids: Vec<&str> = REGIONS.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), REGIONS.len());
    }

    #[test]
    fn test_province_ids_do_not_overlap() {
        let mut seen: Vec<&str> = Vec::new();
        for region in REGIONS {
            for province_id in region.province_ids {
                assert!(
                    !seen.contains(province_id),
                    "province {} claimed by more than one region",
                    province_id
                );
                seen.push(province_id);
            }
        }
    }

    #[test]
    fn test_marker_positions_are_percentages() {
        for region in REGIONS {
            assert!((0.0..=100.0).contains(&region.position.top), "{}", region.id);
            assert!((0.0..=100.0).contains(&region.position.left), "{}", region.id);
        }
    }

    #[test]
    fn test_headline_specialties_truncates_to_two() {
        let java = REGIONS.iter().find(|r| r.id == "java").unwrap();
        assert_eq!(java.headline_specialties(), &["Gudeg", "Rawon"]);
    }

    #[test]
    fn test_headline_specialties_short_list() {
        let region = Region {
            id: "test",
            name: "Test",
            description: "",
            specialties: &["One"],
            province_ids: &[],
            position: MarkerPosition { top: 0.0, left: 0.0 },
        };
        assert_eq!(region.headline_specialties(), &["One"]);
    }
}
