//! Zanaki TUI - the Zanaki Secondary School website in the terminal
//!
//! A Ratatui-based single page with section navigation, a gallery lightbox,
//! office hours and a validated contact form.

mod app;
mod config;
mod endpoint;
mod error;
mod office_hours;
mod platform;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use endpoint::{register_offline_worker, HttpFormEndpoint};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval while something is animating (~60fps)
const FAST_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Log to a file in the data dir; the alternate screen owns stderr
fn log_writer() -> BoxMakeWriter {
    let file = SiteConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::options()
            .create(true)
            .append(true)
            .open(dir.join("zanaki-tui.log"))
            .ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zanaki_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        tracing::error!(%info, "panic");
        default_hook(info);
    }));

    let config = SiteConfig::load()?;
    let endpoint = HttpFormEndpoint::new(config.form_action.clone())?;
    if endpoint.action().is_none() {
        tracing::info!("no form action configured, submissions will be dropped");
    }

    if let Some(url) = config.worker_url() {
        let client = endpoint.client().clone();
        tokio::spawn(async move {
            // Failures are logged by the registration and never shown
            let _ = register_offline_worker(&client, &url).await;
        });
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Arc::new(endpoint), Instant::now());
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "exited with error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.terminal_size = Some((size.height, size.width));

    loop {
        // Submission tasks run detached; failures are logged inside them
        app.tick(Instant::now(), &chrono::Local::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.is_animating(Instant::now()) {
            FAST_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                Event::FocusGained => app.handle_focus_gained(),
                Event::Resize(width, height) => app.handle_resize(width, height, now),
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
