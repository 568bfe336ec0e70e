//! Fate hand widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tactics_core::Rarity;

use crate::presentation::text::fate_line;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text: Vec<Line> = if app_state.fate.is_none() {
        vec![Line::from(Span::styled(
            "No fate deck loaded",
            Style::default().fg(Color::Gray),
        ))]
    } else if app_state.fate_hand.is_empty() {
        vec![Line::from(Span::styled(
            "Press [f] to draw",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        app_state
            .fate_hand
            .iter()
            .map(|card| {
                let color = match card.rarity {
                    Rarity::Common => Color::White,
                    Rarity::Uncommon => Color::LightBlue,
                    Rarity::Rare => Color::Magenta,
                };
                Line::from(Span::styled(fate_line(card), Style::default().fg(color)))
            })
            .collect()
    };

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Fate"));

    frame.render_widget(paragraph, area);
}
