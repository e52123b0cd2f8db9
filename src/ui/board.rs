//! The queue display itself: alerts on top, the customer list below.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::page::{Alert, PageData};

/// Render the main content area for the current page.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref page) = app.page else {
        let msg = if let Some(ref err) = app.load_error {
            format!("Could not load page: {}", err)
        } else {
            "Waiting for a page...".to_string()
        };
        let paragraph = Paragraph::new(msg)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    };

    // Alerts take one line each while they are on the page.
    let alert_height = page.alerts.len().min(4) as u16;
    let chunks = Layout::vertical([Constraint::Length(alert_height), Constraint::Min(4)])
        .split(area);

    if alert_height > 0 {
        render_alerts(frame, app, &page.alerts, chunks[0]);
    }
    render_queue(frame, app, page, chunks[1]);
}

fn render_alerts(frame: &mut Frame, app: &App, alerts: &[Alert], area: Rect) {
    let lines: Vec<Line> = alerts
        .iter()
        .take(area.height as usize)
        .map(|alert| {
            Line::from(Span::styled(
                format!(" ▪ {}", alert.message),
                app.theme.alert_style(alert.category, alert.phase),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_queue(frame: &mut Frame, app: &App, page: &PageData, area: Rect) {
    let title = match page.branch {
        Some(ref branch) => format!(" Queue: {} ", branch),
        None => " Queue ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if !page.has_queue_display {
        let paragraph = Paragraph::new("This page has no queue display")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["Time", "Customer", "Service", "Status"]).style(app.theme.header);

    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|row| {
            let marker = if row.current { "▶ " } else { "  " };
            let cells = vec![
                format!("{}{}", marker, row.time_label.trim()),
                row.name.clone(),
                row.service.clone(),
                row.status.label().to_string(),
            ];
            let style = if row.current {
                app.theme.current_customer
            } else {
                app.theme.status_style(row.status)
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
