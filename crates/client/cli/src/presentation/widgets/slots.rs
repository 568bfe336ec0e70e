//! The two selection slots rendered as stat cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::text::card_lines;
use crate::state::{AppState, Slot};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(frame, chunks[0], app_state, Slot::Attacker);
    render_card(frame, chunks[1], app_state, Slot::Defender);
}

fn render_card(frame: &mut Frame, area: Rect, app_state: &AppState, slot: Slot) {
    let mut lines = card_lines(app_state.slot(slot)).into_iter();

    let mut text = Vec::new();
    if let Some(name) = lines.next() {
        text.push(Line::from(Span::styled(
            name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    text.extend(lines.map(Line::from));

    let border = if app_state.active_slot == slot {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(slot.label()),
    );

    frame.render_widget(paragraph, area);
}
