//! Strategy narrative panel: typed-text reveal, typing indicator, risk badge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, risk_color};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Strategic Guidance");

    let mut lines: Vec<Line> = Vec::new();

    if let Some(risk) = state.risk {
        lines.push(Line::from(vec![
            Span::raw("Risk: "),
            Span::styled(
                risk.as_str(),
                Style::default()
                    .fg(risk_color(risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    match &state.narrative {
        Some(narrative) if narrative.is_typing() => {
            // indicator is visible exactly until the first character appears
            lines.push(Line::from(Span::styled(
                "● ● ●",
                Style::default().fg(HELP_COLOR),
            )));
        }
        Some(narrative) => {
            lines.push(Line::from(narrative.visible()));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Run an analysis to get strategic guidance.",
                Style::default().fg(HELP_COLOR),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}
