//! Theme configuration for the board.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::page::{AlertCategory, AlertPhase, EntryStatus};

/// Color and style theme for the board.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for active elements.
    pub highlight: Color,
    /// Style for the row of the current customer.
    pub current_customer: Style,
    /// Color for success alerts and completed entries.
    pub success: Color,
    /// Color for error alerts.
    pub error: Color,
    /// Color for informational alerts.
    pub info: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            current_customer: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            current_customer: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the style for an alert, dimmed while it fades out.
    pub fn alert_style(&self, category: AlertCategory, phase: AlertPhase) -> Style {
        let style = match category {
            AlertCategory::Success => Style::default().fg(self.success),
            AlertCategory::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            AlertCategory::Info => Style::default().fg(self.info),
        };
        match phase {
            AlertPhase::Visible => style,
            AlertPhase::Fading => style.add_modifier(Modifier::DIM),
        }
    }

    /// Get the style for a queue entry status.
    pub fn status_style(&self, status: EntryStatus) -> Style {
        match status {
            EntryStatus::Waiting => Style::default(),
            EntryStatus::Assigned => Style::default().fg(self.highlight),
            EntryStatus::Completed => {
                Style::default().fg(self.success).add_modifier(Modifier::DIM)
            }
        }
    }
}
