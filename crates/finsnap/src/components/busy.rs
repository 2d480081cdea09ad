//! Centered busy overlay shown while an analysis request is in flight.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::AppState;
use crate::util::styles::HEADER_COLOR;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.loading.is_visible() {
        return;
    }

    let area = centered_rect(30, 5, frame.area());
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(HEADER_COLOR));
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("{spinner} Analyzing your snapshot...")),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}
