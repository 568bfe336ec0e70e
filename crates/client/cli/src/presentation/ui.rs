//! Frame layout for the interactive view.
//!
//! ```text
//! +---------+-----------+-----------------+
//! | Classes | Slot 1    | Board           |
//! |         +-----------+                 |
//! |         | Slot 2    +-----------------+
//! |         |           | Fate            |
//! +---------+-----------+-----------------+
//! | Attack                                |
//! +---------------------------------------+
//! | Footer                                |
//! +---------------------------------------+
//! ```
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    presentation::{terminal::Tui, widgets},
    state::AppState,
};

pub const ATTACK_PANEL_HEIGHT: u16 = 5;

pub fn render(terminal: &mut Tui, app_state: &AppState) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, app_state))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, app_state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ATTACK_PANEL_HEIGHT),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[2]);

    widgets::rack::render(frame, columns[0], app_state);
    widgets::slots::render(frame, columns[1], app_state);
    widgets::board::render(frame, right[0], app_state);
    widgets::fate::render(frame, right[1], app_state);
    widgets::attack::render(frame, rows[1], app_state);
    widgets::footer::render(frame, rows[2], app_state);
}
