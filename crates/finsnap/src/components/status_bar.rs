//! Bottom status bar: notices and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, NoticeKind};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR};

const KEY_HINTS: &str = " Tab: switch field · Enter: analyze · Esc: dismiss · q: quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Error => NEGATIVE_COLOR,
                NoticeKind::Info => POSITIVE_COLOR,
            };
            Line::from(Span::styled(
                format!(" {}", notice.message),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(HELP_COLOR))),
    };

    frame.render_widget(Paragraph::new(line), area);
}
