//! Result panel for the most recent attack roll.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactics_core::AttackOutcome;

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match &app_state.last_attack {
        Some(result) => {
            let color = match result.outcome {
                AttackOutcome::Hit => Color::LightGreen,
                AttackOutcome::Miss => Color::Red,
            };
            vec![
                Line::from(result.attack_line()),
                Line::from(result.evade_line()),
                Line::from(Span::styled(
                    result.outcome.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Press [a] to attack",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Attack"));

    frame.render_widget(paragraph, area);
}
