//! The three snapshot input fields.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, InputField};
use crate::util::styles::{FOCUS_COLOR, focused_block};

const FIELDS: [InputField; 3] = [InputField::Revenue, InputField::Expenses, InputField::Cash];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (field, column) in FIELDS.into_iter().zip(columns.iter()) {
        let focused = state.focus == field;
        let block = focused_block(field.label(), focused);

        let mut spans = vec![Span::raw(format!("$ {}", state.input_for(field)))];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(FOCUS_COLOR)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, *column);
    }
}
