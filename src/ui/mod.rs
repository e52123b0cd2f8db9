//! Terminal rendering for the board.

pub mod board;
pub mod common;
pub mod theme;

pub use theme::Theme;
