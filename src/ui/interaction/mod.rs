//! Mouse interaction for the map page.
//!
//! Components register hit areas during rendering; the event loop queries the
//! registry to translate raw mouse events into map actions and hover
//! transitions.

pub mod click_handler;
pub mod hit_area;

pub use click_handler::handle_map_action;
pub use hit_area::{HitArea, HitAreaRegistry, MapAction};
