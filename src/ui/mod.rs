//! Terminal rendering for the map page.
//!
//! Layout: a header, the map panel (marker overlay plus province swatches) on
//! the left, a sidebar with the region detail card and recipes on the right,
//! and a footer with keybind hints. All visual decisions about provinces and
//! markers come from the map core's resolver; this layer only converts its
//! attribute records into terminal styles.

pub mod interaction;
pub mod map_view;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render one frame. Hit areas are rebuilt from scratch on every pass.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    map_view::render(frame, columns[0], app);
    sidebar::render(frame, columns[1], app);

    render_footer(frame, rows[2]);
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let health = match app.backend_healthy {
        Some(true) => Span::styled("● online", Style::default().fg(theme::COLOR_OK)),
        Some(false) => Span::styled("● offline", Style::default().fg(theme::COLOR_ERR)),
        None => Span::styled("● checking…", Style::default().fg(theme::COLOR_DIM)),
    };
    let line = Line::from(vec![
        Span::styled(" Peta Kuliner Indonesia ", Style::default().fg(theme::COLOR_HEADER)),
        Span::raw(" "),
        health,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hints = Line::from(Span::styled(
        " tab/arrows: regions · enter: select · esc: clear · q: quit",
        Style::default().fg(theme::COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
