//! Common UI components: header bar, status bar, help overlay.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::page::EntryStatus;

/// Render the header bar with the branch, the clock, and queue counts.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let clock = app.now_hhmm();

    let Some(ref page) = app.page else {
        let line = Line::from(vec![
            Span::styled(" TRIMQ BOARD ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("| {} | Loading...", clock)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let waiting = page
        .rows
        .iter()
        .filter(|r| r.status == EntryStatus::Waiting)
        .count();
    let current = page.rows.iter().filter(|r| r.current).count();

    let mut spans = vec![
        Span::styled(" TRIMQ BOARD ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(clock, Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
    ];

    if page.has_queue_display {
        spans.push(Span::styled(
            format!("{}", page.rows.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" in queue, "));
        spans.push(Span::raw(format!("{} waiting", waiting)));
        if current > 0 {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "now serving",
                Style::default().fg(app.theme.success).add_modifier(Modifier::BOLD),
            ));
        }
    } else {
        spans.push(Span::styled(
            "no queue display",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows: the page source, time since the page loaded, the refresh
/// countdown, and available controls. Temporary status messages and
/// errors take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else if let Some(loaded) = app.last_loaded {
        let refresh = match app.seconds_until_reload(Instant::now()) {
            Some(secs) => format!("refresh in {}s", secs),
            None => "no refresh".to_string(),
        };
        format!(
            " {} | Loaded {:.0}s ago | {} | r:reload ?:help q:quit",
            app.source_description(),
            loaded.elapsed().as_secs_f64(),
            refresh,
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the board.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  r         Reload the page now"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 9u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
