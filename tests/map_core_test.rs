//! End-to-end behavior of the map core: catalog, index, interaction state,
//! attribute resolution, and selection dispatch working together.

use nusarasa::map::{
    activate_province, activate_region, default_index, marker_state, resolve_attributes,
    HoverState, InteractionSnapshot, MarkerPosition, MarkerState, ProvinceIndex, Region, Tier,
    REGIONS,
};

#[test]
fn affiliated_provinces_resolve_to_default_tier_when_idle() {
    let index = default_index();
    let idle = InteractionSnapshot::idle();

    for region in REGIONS {
        for province_id in region.province_ids {
            let attrs = resolve_attributes(province_id, index, idle);
            assert_eq!(attrs.tier, Tier::Affiliated, "province {}", province_id);
            assert!(attrs.interactive);
            assert_eq!(attrs.region_id, Some(region.id));
        }
    }

    let attrs = resolve_attributes("no-such-province", index, idle);
    assert_eq!(attrs.tier, Tier::Unaffiliated);
    assert!(!attrs.interactive);
}

#[test]
fn active_always_beats_hover_on_the_same_region() {
    let index = default_index();

    for region in REGIONS {
        let snapshot = InteractionSnapshot::new(Some(region.id), Some(region.id));
        for province_id in region.province_ids {
            let attrs = resolve_attributes(province_id, index, snapshot);
            assert_eq!(attrs.tier, Tier::Active, "province {}", province_id);
        }
        assert_eq!(marker_state(region.id, snapshot), MarkerState::Active);
    }
}

#[test]
fn repeated_hover_enter_is_observably_identical_to_one() {
    let mut once = HoverState::new();
    once.enter("java");

    let mut twice = HoverState::new();
    twice.enter("java");
    twice.enter("java");

    assert_eq!(once, twice);
    assert_eq!(
        once.snapshot(Some("sumatra")),
        twice.snapshot(Some("sumatra"))
    );
}

#[test]
fn leave_without_hover_changes_nothing() {
    let mut state = HoverState::new();
    state.leave();
    state.leave();
    assert_eq!(state, HoverState::new());
}

#[test]
fn index_is_deterministic_and_overlaps_resolve_to_the_later_region() {
    static CONTESTED: &[Region] = &[
        Region {
            id: "west",
            name: "West",
            description: "",
            specialties: &[],
            province_ids: &["p-a", "p-shared"],
            position: MarkerPosition { top: 10.0, left: 10.0 },
        },
        Region {
            id: "east",
            name: "East",
            description: "",
            specialties: &[],
            province_ids: &["p-shared", "p-b"],
            position: MarkerPosition { top: 10.0, left: 90.0 },
        },
    ];

    for _ in 0..3 {
        let index = ProvinceIndex::build(CONTESTED);
        assert_eq!(index.region_id_of_province("p-a"), Some("west"));
        assert_eq!(index.region_id_of_province("p-shared"), Some("east"));
        assert_eq!(index.region_id_of_province("p-b"), Some("east"));
    }
}

#[test]
fn selecting_sumatra_highlights_only_sumatran_provinces() {
    let index = default_index();
    let snapshot = InteractionSnapshot::new(None, Some("sumatra"));

    let sumatran = resolve_attributes("id-su", index, snapshot);
    assert_eq!(sumatran.tier, Tier::Active);

    let javan = resolve_attributes("id-jb", index, snapshot);
    assert_eq!(javan.tier, Tier::Affiliated);
}

#[test]
fn unmapped_province_is_inert() {
    let index = default_index();
    let attrs = resolve_attributes("id-xx", index, InteractionSnapshot::idle());
    assert_eq!(attrs.tier, Tier::Unaffiliated);
    assert!(!attrs.interactive);
    assert_eq!(attrs.region_id, None);
}

#[test]
fn province_activation_emits_the_full_region_record() {
    let index = default_index();

    let region = activate_province("id-su", index).expect("id-su belongs to Sumatera");
    assert_eq!(region.id, "sumatra");
    assert_eq!(region.name, "Sumatera");
    assert_eq!(region.description, "Kaya akan rempah-rempah dan santan");
    assert_eq!(region.headline_specialties(), &["Rendang", "Gulai"]);
    assert!(region.province_ids.contains(&"id-su"));

    assert!(activate_province("id-xx", index).is_none());
}

#[test]
fn marker_activation_works_without_a_province() {
    let index = default_index();
    assert_eq!(activate_region("bali-nusa", index).map(|r| r.name), Some("Bali & Nusa Tenggara"));
    assert!(activate_region("nowhere", index).is_none());
}

#[test]
fn stale_interaction_ids_degrade_to_defaults_everywhere() {
    let index = default_index();
    let snapshot = InteractionSnapshot::new(Some("gone-1"), Some("gone-2"));

    for region in REGIONS {
        assert_eq!(marker_state(region.id, snapshot), MarkerState::Inactive);
        for province_id in region.province_ids {
            assert_eq!(
                resolve_attributes(province_id, index, snapshot).tier,
                Tier::Affiliated
            );
        }
    }
}
