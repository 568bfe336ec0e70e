//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let mut spans = vec![
        Span::raw("[j/k] Browse | "),
        Span::raw("[1/2/Tab] Slot | "),
        Span::raw("[Enter] Assign | "),
        Span::raw("[a] Attack | "),
        Span::raw("[b] New board | "),
    ];
    if app_state.fate.is_some() {
        spans.push(Span::raw("[f] Fate | "));
    }
    spans.push(Span::raw("[q] Quit   "));
    spans.push(Span::styled(
        format!("-> {}", app_state.active_slot.label()),
        Style::default().fg(Color::Yellow),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
