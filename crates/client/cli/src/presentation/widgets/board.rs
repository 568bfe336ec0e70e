//! Terrain board widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tactics_core::Terrain;

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let board = &app_state.board;

    let rows: Vec<Line> = board
        .rows()
        .map(|row| {
            let spans = row
                .iter()
                .map(|square| {
                    let glyph = format!("{} ", square.terrain.marker());
                    Span::styled(glyph, style_for(square.terrain))
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Board ({0}×{0})", board.side())),
    );

    frame.render_widget(paragraph, area);
}

fn style_for(terrain: Terrain) -> Style {
    match terrain {
        Terrain::Empty => Style::default().fg(Color::DarkGray),
        Terrain::Low => Style::default().fg(Color::Green),
        Terrain::High => Style::default().fg(Color::Yellow),
    }
}
