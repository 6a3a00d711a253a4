//! The map panel: region marker overlay and province swatches.
//!
//! Markers are positioned from the catalog's percentage anchors. Province
//! shapes are shown as a swatch strip; their geometry is opaque to the
//! terminal, so each shape renders as a colored cell styled entirely from the
//! resolver's attribute record. Interactive swatches and markers register hit
//! areas; unaffiliated swatches register nothing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::map::{marker_state, resolve_attributes, Elevation, MarkerState, Region, REGIONS};
use crate::ui::interaction::MapAction;
use crate::ui::theme;

/// Width of one province swatch, in cells.
const SWATCH_WIDTH: u16 = 2;
/// Horizontal gap between swatches.
const SWATCH_GAP: u16 = 1;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered()
        .title(" Peta Budaya Kuliner ")
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 10 {
        return;
    }

    // Bottom-most area: a click on empty map space drops the selection.
    // Markers and swatches register later and sit on top.
    app.hit_areas.register(inner, MapAction::ClearSelection, None);

    let swatch_rows = swatch_row_count(app.shapes.locations.len(), inner.width);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(swatch_rows)])
        .split(inner);

    render_markers(frame, sections[0], app);
    render_swatches(frame, sections[1], app);
}

fn swatch_row_count(shapes: usize, width: u16) -> u16 {
    let per_row = (width / (SWATCH_WIDTH + SWATCH_GAP)).max(1) as usize;
    shapes.div_ceil(per_row).min(4) as u16
}

fn render_markers(frame: &mut Frame, area: Rect, app: &mut App) {
    let snapshot = app.snapshot();

    for region in REGIONS {
        let state = marker_state(region.id, snapshot);
        let label = marker_label(region, state);
        let width = label.chars().count() as u16;

        let x = area.x
            + ((region.position.left / 100.0) * area.width.saturating_sub(1) as f32) as u16;
        let y = area.y
            + ((region.position.top / 100.0) * area.height.saturating_sub(1) as f32) as u16;
        let x = x.min(area.right().saturating_sub(width.min(area.width)));
        let rect = Rect {
            x,
            y: y.min(area.bottom().saturating_sub(1)),
            width: width.min(area.width),
            height: 1,
        };

        let mut style = Style::default().fg(theme::marker_color(state));
        if state != MarkerState::Inactive {
            style = style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);

        app.hit_areas
            .register(rect, MapAction::ActivateRegion(region.id), Some(region.id));
    }
}

fn marker_label(region: &Region, state: MarkerState) -> String {
    let symbol = match state {
        MarkerState::Active => "◉",
        MarkerState::Hovered => "◎",
        MarkerState::Inactive => "●",
    };
    format!("{} {}", symbol, region.name)
}

fn render_swatches(frame: &mut Frame, area: Rect, app: &mut App) {
    let snapshot = app.snapshot();
    let per_row = (area.width / (SWATCH_WIDTH + SWATCH_GAP)).max(1);

    // Borrow the shape list up front; rendering only needs the ids.
    let province_ids: Vec<String> = app
        .shapes
        .locations
        .iter()
        .map(|shape| shape.id.clone())
        .collect();

    for (position, province_id) in province_ids.iter().enumerate() {
        let col = (position as u16) % per_row;
        let row = (position as u16) / per_row;
        if row >= area.height {
            break;
        }
        let rect = Rect {
            x: area.x + col * (SWATCH_WIDTH + SWATCH_GAP),
            y: area.y + row,
            width: SWATCH_WIDTH,
            height: 1,
        };

        let attrs = resolve_attributes(province_id, app.index, snapshot);
        let symbol = match attrs.elevation {
            Elevation::High => "▓▓",
            Elevation::Medium => "▒▒",
            _ => "░░",
        };
        let style = Style::default().fg(theme::blend(attrs.fill));
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), rect);

        if attrs.interactive {
            app.hit_areas.register(
                rect,
                MapAction::ActivateProvince(province_id.clone()),
                attrs.region_id,
            );
        }
    }
}
