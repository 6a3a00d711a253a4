//! Hit area registry for the map page.
//!
//! Rebuilt on every render pass. Each area carries the action a click should
//! dispatch and, when the shape is interactive, the region whose hover state
//! the pointer drives. Unaffiliated province swatches register no area at
//! all, so they never receive hover or click handling.

use ratatui::layout::Rect;

/// An action dispatched by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    /// Activate the region owning a province shape
    ActivateProvince(String),
    /// Activate a region directly via its marker
    ActivateRegion(&'static str),
    /// Drop the durable selection
    ClearSelection,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangle that responds to the pointer
    pub rect: Rect,
    /// Action to dispatch on click
    pub action: MapAction,
    /// Region whose hover slot this area drives, if any
    pub hover_region: Option<&'static str>,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for one rendered frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registration order is z-order: later areas sit on top
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render pass.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a hit area.
    pub fn register(&mut self, rect: Rect, action: MapAction, hover_region: Option<&'static str>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_region,
        });
    }

    /// Find the action for a click, topmost area first.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<MapAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Find the region hovered at a pointer position, topmost area first.
    pub fn hover_region_at(&self, x: u16, y: u16) -> Option<&'static str> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .and_then(|area| area.hover_region)
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether no areas are registered.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
