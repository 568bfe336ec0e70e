//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads [`crate::state::AppState`] and
//! renders into one area of the frame.

pub mod attack;
pub mod board;
pub mod fate;
pub mod footer;
pub mod rack;
pub mod slots;
