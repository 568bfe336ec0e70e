//! Presentation layer: ratatui widgets for the interactive view and plain
//! text for the headless report.

pub mod terminal;
pub mod text;
pub mod ui;
pub mod widgets;

pub use terminal::TerminalSession;
