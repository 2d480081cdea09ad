//! Chart slots and forecast chart rendering.

mod forecast;

pub use forecast::{ChartKind, ChartSlot, ChartSlots, ForecastChart};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::util::styles::HELP_COLOR;

/// Shown in the chart region before the first analysis has settled.
pub fn render_placeholder(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Enter your numbers and press Enter to analyze.")
        .style(Style::default().fg(HELP_COLOR))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
