//! Application state for the TUI.
//!
//! `App` holds everything the render pass and event loop touch: the memoized
//! province index, the transient hover slot, the durable region selection,
//! fetched recipes, and the hit-area registry rebuilt on every render.

use tracing::debug;

use crate::events::AppEvent;
use crate::map::{
    default_index, HoverState, InteractionSnapshot, MapDefinition, ProvinceIndex, ProvinceShape,
    Region, REGIONS,
};
use crate::models::Recipe;
use crate::ui::interaction::HitAreaRegistry;

/// Top-level application state.
pub struct App {
    /// Memoized province-to-region index over the static catalog
    pub index: &'static ProvinceIndex,
    /// Province shapes from the external provider (opaque geometry)
    pub shapes: MapDefinition,
    /// Transient hover slot
    pub hover: HoverState,
    /// Durable region selection, owned here (the "hosting page" of the map)
    pub selected: Option<&'static Region>,
    /// Keyboard focus over the catalog, as an index into `REGIONS`
    pub focus: usize,
    /// Recipes fetched for the selected region
    pub recipes: Vec<Recipe>,
    /// Which region the recipes belong to
    pub recipes_region: Option<&'static str>,
    /// Backend health, `None` until the startup check completes
    pub backend_healthy: Option<bool>,
    /// Transient status message for the footer
    pub status: Option<String>,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Whether the next loop iteration must redraw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app over the default catalog and the given shapes.
    pub fn new(shapes: MapDefinition) -> Self {
        Self {
            index: default_index(),
            shapes,
            hover: HoverState::new(),
            selected: None,
            focus: 0,
            recipes: Vec::new(),
            recipes_region: None,
            backend_healthy: None,
            status: None,
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Shapes synthesized from the catalog, used when no provider file is
    /// configured. Geometry stays empty; the terminal renderer never reads it.
    pub fn placeholder_shapes() -> MapDefinition {
        let mut shapes = MapDefinition::empty();
        for region in REGIONS {
            for province_id in region.province_ids {
                shapes.locations.push(ProvinceShape {
                    id: (*province_id).to_string(),
                    name: None,
                    path: String::new(),
                });
            }
        }
        shapes
    }

    /// Interaction inputs for the current render pass.
    pub fn snapshot(&self) -> InteractionSnapshot {
        self.hover.snapshot(self.selected.map(|r| r.id))
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Make a region the durable selection.
    pub fn select_region(&mut self, region: &'static Region) {
        debug!(region_id = region.id, "region selected");
        if let Some(position) = REGIONS.iter().position(|r| r.id == region.id) {
            self.focus = position;
        }
        self.selected = Some(region);
        self.mark_dirty();
    }

    /// Drop the durable selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.hover.leave();
        self.mark_dirty();
    }

    /// The region under keyboard focus.
    pub fn focused_region(&self) -> &'static Region {
        &REGIONS[self.focus % REGIONS.len()]
    }

    /// Move keyboard focus forward; the focused region previews as hovered.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % REGIONS.len();
        self.hover.enter(self.focused_region().id);
        self.mark_dirty();
    }

    /// Move keyboard focus backward; the focused region previews as hovered.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + REGIONS.len() - 1) % REGIONS.len();
        self.hover.enter(self.focused_region().id);
        self.mark_dirty();
    }

    /// Activate the focused region (keyboard Enter).
    pub fn activate_focused(&mut self) {
        let region = self.focused_region();
        self.select_region(region);
    }

    /// Whether recipes for the current selection still need fetching.
    pub fn needs_recipes(&self) -> bool {
        match self.selected {
            Some(region) => self.recipes_region != Some(region.id),
            None => false,
        }
    }

    /// Apply an event from a background task.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HealthChecked(healthy) => {
                self.backend_healthy = Some(healthy);
            }
            AppEvent::RecipesLoaded { region_id, recipes } => {
                // A stale fetch for a previously selected region is dropped.
                if self.selected.map(|r| r.id) == Some(region_id) {
                    debug!(region_id, count = recipes.len(), "recipes loaded");
                    self.recipes = recipes;
                    self.recipes_region = Some(region_id);
                }
            }
            AppEvent::ApiFailed { region_id, message } => {
                // The failure is terminal for this selection so the event
                // loop does not respawn the fetch; reselecting retries.
                // A stale failure for a deselected region is dropped.
                if self.selected.map(|r| r.id) == Some(region_id) {
                    self.recipes.clear();
                    self.recipes_region = Some(region_id);
                    self.status = Some(message);
                }
            }
        }
        self.mark_dirty();
    }
}
