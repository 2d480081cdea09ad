//! The metric readout tiles.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, value_color};

/// Render the five metric tiles in one row.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let profit_sign = state.metrics.map(|m| m.profit).unwrap_or(0.0);
    let margin_sign = state.metrics.map(|m| m.profit_margin).unwrap_or(0.0);

    render_tile(
        frame,
        tiles[0],
        "Profit",
        state.readouts.profit.text(),
        value_color(profit_sign),
    );
    render_tile(
        frame,
        tiles[1],
        "Profit Margin",
        state.readouts.profit_margin.text(),
        value_color(margin_sign),
    );
    render_tile(
        frame,
        tiles[2],
        "Burn Rate",
        state.readouts.burn_rate.text(),
        HEADER_COLOR,
    );
    render_tile(
        frame,
        tiles[3],
        "Runway",
        state.readouts.runway.text(),
        HEADER_COLOR,
    );
    render_tile(
        frame,
        tiles[4],
        "Growth Score",
        state.readouts.growth_score.text(),
        HEADER_COLOR,
    );
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    color: ratatui::style::Color,
) {
    let block = Block::default().borders(Borders::ALL).title(label.to_string());
    let value_line = Line::from(value.to_string()).style(
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD),
    );
    let paragraph = Paragraph::new(vec![Line::from(""), value_line])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
