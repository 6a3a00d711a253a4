//! Visual attribute resolution for province shapes and region markers.
//!
//! The resolver is the precedence contract of the map: active strictly
//! dominates hover, hover strictly dominates the affiliated default, and
//! unaffiliated provinces are visually and interactively inert. It is a pure
//! function over (province id, index, interaction snapshot), so it can be
//! tested without any rendering surface.

use super::index::ProvinceIndex;
use super::interaction::InteractionSnapshot;

/// An RGBA color, renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0..=1.0
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// Palette shared with the web frontend: forest green primary, turmeric accent.
const FILL_ACTIVE: Rgba = Rgba::new(233, 173, 56, 1.0);
const FILL_HOVER: Rgba = Rgba::new(233, 173, 56, 0.75);
const FILL_AFFILIATED: Rgba = Rgba::new(45, 90, 39, 0.32);
const FILL_UNAFFILIATED: Rgba = Rgba::new(45, 90, 39, 0.18);

const STROKE_ACTIVE: Rgba = Rgba::new(33, 64, 39, 0.9);
const STROKE_HOVER: Rgba = Rgba::new(45, 90, 39, 0.7);
const STROKE_DEFAULT: Rgba = Rgba::new(45, 90, 39, 0.45);

const STROKE_WIDTH_ACTIVE: f32 = 2.2;
const STROKE_WIDTH_DEFAULT: f32 = 1.5;

/// Resolved visual/interactive tier of a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Province's region is the durable selection
    Active,
    /// Province's region is under the pointer
    Hover,
    /// Province belongs to a region with no interaction on it
    Affiliated,
    /// Province belongs to no region; inert
    Unaffiliated,
}

/// Elevation tier for the raised/glow effect, strongest for active shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Elevation {
    Flat,
    Low,
    Medium,
    High,
}

/// The drawing layer's per-province record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvinceAttributes {
    pub tier: Tier,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,
    pub elevation: Elevation,
    /// Whether hover/click handlers should be attached to this shape
    pub interactive: bool,
    /// Owning region id, when affiliated
    pub region_id: Option<&'static str>,
}

/// Resolve the visual attributes of one province.
///
/// Precedence, evaluated after finding the owning region through the index:
/// owning region is active > owning region is hovered > owned by any region >
/// unaffiliated. Unknown province ids and stale hover/active region ids are
/// absorbed silently, never faulted.
pub fn resolve_attributes(
    province_id: &str,
    index: &ProvinceIndex,
    snapshot: InteractionSnapshot,
) -> ProvinceAttributes {
    let region_id = match index.region_id_of_province(province_id) {
        Some(region_id) => region_id,
        None => {
            return ProvinceAttributes {
                tier: Tier::Unaffiliated,
                fill: FILL_UNAFFILIATED,
                stroke: STROKE_DEFAULT,
                stroke_width: STROKE_WIDTH_DEFAULT,
                elevation: Elevation::Flat,
                interactive: false,
                region_id: None,
            };
        }
    };

    let tier = if snapshot.active == Some(region_id) {
        Tier::Active
    } else if snapshot.hovered == Some(region_id) {
        Tier::Hover
    } else {
        Tier::Affiliated
    };

    let (fill, stroke, stroke_width, elevation) = match tier {
        Tier::Active => (
            FILL_ACTIVE,
            STROKE_ACTIVE,
            STROKE_WIDTH_ACTIVE,
            Elevation::High,
        ),
        Tier::Hover => (
            FILL_HOVER,
            STROKE_HOVER,
            STROKE_WIDTH_DEFAULT,
            Elevation::Medium,
        ),
        _ => (
            FILL_AFFILIATED,
            STROKE_DEFAULT,
            STROKE_WIDTH_DEFAULT,
            Elevation::Low,
        ),
    };

    ProvinceAttributes {
        tier,
        fill,
        stroke,
        stroke_width,
        elevation,
        interactive: true,
        region_id: Some(region_id),
    }
}

/// State of a region's marker in the decorative overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Inactive,
    Hovered,
    Active,
}

/// Resolve a marker's state. Active dominates hover, matching the shape
/// precedence.
pub fn marker_state(region_id: &str, snapshot: InteractionSnapshot) -> MarkerState {
    if snapshot.active == Some(region_id) {
        MarkerState::Active
    } else if snapshot.hovered == Some(region_id) {
        MarkerState::Hovered
    } else {
        MarkerState::Inactive
    }
}
