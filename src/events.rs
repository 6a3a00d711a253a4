//! Events delivered to the app from background API tasks.

use crate::models::Recipe;

/// A message from a background task to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Result of the startup health check
    HealthChecked(bool),
    /// Recipes fetched for a region selection
    RecipesLoaded {
        region_id: &'static str,
        recipes: Vec<Recipe>,
    },
    /// The recipe fetch for a region failed
    ApiFailed {
        region_id: &'static str,
        message: String,
    },
}
