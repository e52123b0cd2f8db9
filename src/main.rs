// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};

mod app;
mod behavior;
mod clock;
mod events;
mod page;
mod source;
mod ui;

use app::App;
use clock::WallClock;
use source::{FileSource, PageSource};

#[derive(Parser, Debug)]
#[command(name = "trimq-board")]
#[command(about = "Terminal queue-display board for TrimQ barbershop branches")]
struct Args {
    /// Path to the page snapshot the server renders
    #[arg(short, long, default_value = "page.json")]
    file: PathBuf,

    /// Scheduled page refresh interval in milliseconds
    #[arg(short, long, default_value = "30000")]
    refresh: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = Box::new(FileSource::new(&args.file));
    run_tui(source, Duration::from_millis(args.refresh))
}

/// Run the board with the given page source
fn run_tui(source: Box<dyn PageSource>, refresh_after: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create the app and load the initial page
    let mut app = App::new(source, Box::new(WallClock), refresh_after);
    let _ = app.poll_source(Instant::now());

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 10;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, resize_notice_area(area));
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(6),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::board::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for input with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        let now = Instant::now();

        // Pick up freshly rendered pages (a changed file is a new page)
        let _ = app.poll_source(now);

        // Run due effects: alert dismissal, and the scheduled refresh
        app.tick(now);
    }

    Ok(())
}

/// Centered area for the too-small-terminal notice, clamped so it never
/// extends past the terminal on very short screens.
fn resize_notice_area(area: Rect) -> Rect {
    let y = (area.height / 2).saturating_sub(2);
    let height = area.height.saturating_sub(y).min(5);
    Rect::new(area.x, area.y + y, area.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_notice_fits_tiny_terminal() {
        // Heights at or below the centering offset must neither wrap the
        // y coordinate nor reach past the bottom edge.
        for height in 0..6 {
            let area = Rect::new(0, 0, 40, height);
            let notice = resize_notice_area(area);
            assert!(notice.bottom() <= area.bottom(), "height {}", height);
        }
    }

    #[test]
    fn test_resize_notice_centers_in_normal_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let notice = resize_notice_area(area);
        assert_eq!(notice.y, 10);
        assert_eq!(notice.height, 5);
        assert_eq!(notice.width, 80);
    }
}
