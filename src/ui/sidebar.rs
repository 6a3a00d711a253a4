//! Sidebar: region detail card and recipes for the current selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::map::{marker_state, MarkerState, Region, REGIONS};
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered()
        .title(" Daerah ")
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let snapshot = app.snapshot();
    let spotlight = app
        .selected
        .or_else(|| snapshot.hovered.and_then(|id| app.index.region(id)));

    let mut lines: Vec<Line> = Vec::new();

    match spotlight {
        Some(region) => {
            let state = marker_state(region.id, snapshot);
            let name_style = Style::default()
                .fg(theme::marker_color(state))
                .add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(region.name, name_style)));
            lines.push(Line::from(Span::styled(
                region.description,
                Style::default().fg(theme::COLOR_DIM),
            )));
            lines.push(Line::default());
            for specialty in region.headline_specialties() {
                lines.push(Line::from(format!("  • {}", specialty)));
            }
            lines.push(Line::default());
            push_recipe_lines(&mut lines, app, region);
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Pilih daerah di peta",
                Style::default().fg(theme::COLOR_DIM),
            )));
            lines.push(Line::default());
            for (position, region) in REGIONS.iter().enumerate() {
                let focused = position == app.focus;
                let prefix = if focused { "▸ " } else { "  " };
                let style = if focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("{}{}", prefix, region.name),
                    style,
                )));
            }
        }
    }

    if let Some(ref status) = app.status {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme::COLOR_ERR),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn push_recipe_lines(lines: &mut Vec<Line>, app: &App, region: &'static Region) {
    if app.recipes_region == Some(region.id) {
        if app.recipes.is_empty() {
            lines.push(Line::from(Span::styled(
                "Belum ada resep untuk daerah ini",
                Style::default().fg(theme::COLOR_DIM),
            )));
            return;
        }
        lines.push(Line::from(Span::styled(
            "Resep:",
            Style::default().fg(theme::COLOR_HEADER),
        )));
        for recipe in app.recipes.iter().take(8) {
            let time = recipe
                .cooking_time
                .map(|minutes| format!(" ({} mnt)", minutes))
                .unwrap_or_default();
            lines.push(Line::from(format!("  {}{}", recipe.name, time)));
        }
    } else if app.selected == Some(region) {
        lines.push(Line::from(Span::styled(
            "Memuat resep…",
            Style::default().fg(theme::COLOR_DIM),
        )));
    }
}
