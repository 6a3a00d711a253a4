//! Click action handling for the map page.
//!
//! Translates map actions from the hit-area registry into app state changes,
//! going through the core's selection dispatch so province clicks and marker
//! clicks share one resolution path.

use tracing::debug;

use super::hit_area::MapAction;
use crate::app::App;
use crate::map::dispatch;

/// Handle a click action by updating app state.
pub fn handle_map_action(app: &mut App, action: MapAction) {
    app.mark_dirty();

    match action {
        MapAction::ActivateProvince(province_id) => {
            match dispatch::activate_province(&province_id, app.index) {
                Some(region) => app.select_region(region),
                // Unaffiliated shapes register no hit area, so this only
                // happens for stale registry contents; ignore it.
                None => debug!(province_id, "click on unresolvable province"),
            }
        }
        MapAction::ActivateRegion(region_id) => {
            if let Some(region) = dispatch::activate_region(region_id, app.index) {
                app.select_region(region);
            }
        }
        MapAction::ClearSelection => {
            debug!("selection cleared");
            app.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(App::placeholder_shapes())
    }

    #[test]
    fn test_province_click_selects_owning_region() {
        let mut app = test_app();
        handle_map_action(&mut app, MapAction::ActivateProvince("id-su".to_string()));
        assert_eq!(app.selected.map(|r| r.id), Some("sumatra"));
    }

    #[test]
    fn test_unaffiliated_province_click_is_noop() {
        let mut app = test_app();
        handle_map_action(&mut app, MapAction::ActivateProvince("id-xx".to_string()));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_marker_click_selects_region() {
        let mut app = test_app();
        handle_map_action(&mut app, MapAction::ActivateRegion("maluku"));
        assert_eq!(app.selected.map(|r| r.name), Some("Maluku"));
    }

    #[test]
    fn test_clear_selection_action() {
        let mut app = test_app();
        handle_map_action(&mut app, MapAction::ActivateRegion("java"));
        handle_map_action(&mut app, MapAction::ClearSelection);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_click_marks_dirty() {
        let mut app = test_app();
        app.needs_redraw = false;
        handle_map_action(&mut app, MapAction::ActivateRegion("java"));
        assert!(app.needs_redraw);
    }
}
