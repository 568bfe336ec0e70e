//! Card rack: every available class, with the cursor highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::{AppState, Slot};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let items: Vec<ListItem> = app_state
        .classes
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let mut spans = vec![Span::raw(unit.name().to_owned())];
            for slot in [Slot::Attacker, Slot::Defender] {
                if app_state.slot(slot) == unit {
                    spans.push(Span::styled(
                        format!(" [{}]", slot.index() + 1),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }

            let style = if i == app_state.cursor {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Classes ({})", app_state.classes.len())),
    );

    frame.render_widget(list, area);
}
