//! Terminal color theme.
//!
//! The map core emits renderer-agnostic RGBA attributes; this module maps
//! them onto terminal colors. Alpha is resolved by compositing over the
//! page's dark background, since terminals have no opacity.

use ratatui::style::Color;

use crate::map::{MarkerState, Rgba};

/// Background the map composites against (dark, green-tinted).
const BACKGROUND: (u8, u8, u8) = (14, 22, 14);

/// Header text.
pub const COLOR_HEADER: Color = Color::White;
/// Borders and separators.
pub const COLOR_BORDER: Color = Color::DarkGray;
/// De-emphasized text.
pub const COLOR_DIM: Color = Color::DarkGray;
/// Healthy backend indicator.
pub const COLOR_OK: Color = Color::LightGreen;
/// Failing backend indicator.
pub const COLOR_ERR: Color = Color::LightRed;

/// Composite an RGBA color over the map background.
pub fn blend(color: Rgba) -> Color {
    let a = color.a.clamp(0.0, 1.0);
    let channel = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
    Color::Rgb(
        channel(color.r, BACKGROUND.0),
        channel(color.g, BACKGROUND.1),
        channel(color.b, BACKGROUND.2),
    )
}

/// Marker color per resolved marker state: accent when active, turmeric when
/// hovered, primary green otherwise.
pub fn marker_color(state: MarkerState) -> Color {
    match state {
        MarkerState::Active => Color::Rgb(233, 173, 56),
        MarkerState::Hovered => Color::Rgb(214, 158, 73),
        MarkerState::Inactive => Color::Rgb(45, 90, 39),
    }
}
