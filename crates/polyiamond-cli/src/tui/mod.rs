//! Interactive terminal browser.
//!
//! ## Rust Lesson #12: Threads and channels
//!
//! Enumeration for larger counts takes seconds, so it runs on a spawned
//! thread and reports back through an `mpsc` channel. The UI loop polls the
//! receiver with `try_recv()` each frame and never blocks on the search.

mod app;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::cli::common::leaf_policy;
use crate::cli::{BrowseArgs, Config};

use app::App;

/// Execute the browse command.
pub fn run(config: &Config, args: BrowseArgs) -> Result<()> {
    if args.count == 0 || args.count > config.max_triangles {
        anyhow::bail!(
            "number of triangles must be between 1 and {}, got {}",
            config.max_triangles,
            args.count
        );
    }

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(
        args.count,
        config.max_triangles,
        leaf_policy(args.exhaustive),
        config.render.clone(),
    );

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.check_result();
        app.update_image();

        if app.is_loading {
            app.spinner_frame = (app.spinner_frame + 1) % 8;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Up | KeyCode::Char('k') => app.prev_pattern(),
                        KeyCode::Down | KeyCode::Char('j') => app.next_pattern(),
                        KeyCode::Left | KeyCode::Char('h') => app.change_count(-1),
                        KeyCode::Right | KeyCode::Char('l') => app.change_count(1),
                        KeyCode::Char('g') => app.toggle_grid(),
                        KeyCode::Char('x') => app.toggle_axes(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
