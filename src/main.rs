use ayur_connect::app::App;
use ayur_connect::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("ayur-connect {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // File-backed logging, opt-in via RUST_LOG, so the alternate screen
    // stays clean.
    init_tracing()?;

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Initialize application state with its fixed mount values
    let mut app = App::new()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;

    result
}

/// Initialize tracing when `RUST_LOG` is set.
///
/// Events go to a log file rather than stdout: the terminal is in raw
/// alternate-screen mode for the whole session.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let log_path = std::env::temp_dir().join("ayur-connect.log");
    let log_file = std::fs::File::create(log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of terminal events. The loop is purely event-driven: no
    // timer or background task ever mutates view state.
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when a transition marked the frame dirty
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        match event_stream.next().await {
            Some(Ok(Event::Resize(_, _))) => {
                // The next draw picks up the new frame area.
                app.mark_dirty();
            }
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                // Any key press may change state (navigation, overlays, input)
                app.mark_dirty();
                app.handle_key(key);
                if app.should_quit {
                    return Ok(());
                }
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e.into()),
            // Event stream closed: treat like a quit
            None => return Ok(()),
        }
    }
}
