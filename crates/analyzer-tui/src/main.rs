use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use analyzer_core::{Config, HttpExtractor, display_name, upload_path};

mod action;
mod app;
mod input;
mod logging;
mod theme;
mod tui_event;
mod view;

use app::App;
use tui_event::{BackendCommand, BackendEvent};

/// content-analyzer TUI: drop a PDF or image, read the extracted text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to upload right away, as if it had been dropped
    file: Option<PathBuf>,

    /// Extraction endpoint, e.g. http://localhost:5000/api/analyze
    #[arg(long)]
    backend_url: Option<String>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = &args.file
        && !path.exists()
    {
        anyhow::bail!("File not found: {}", path.display());
    }

    let _log_guard = logging::init();

    // CLI flags > env vars > config file > defaults
    let config = Config::resolve(args.backend_url, None);
    let theme_name = args.theme.unwrap_or_else(|| config.theme.clone());
    let theme = theme::Theme::by_name(&theme_name);

    tracing::info!(
        backend = config.backend_url.as_deref().unwrap_or("<unset>"),
        timeout_secs = config.timeout.as_secs(),
        "starting"
    );

    let extractor = Arc::new(HttpExtractor::from_config(&config)?);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste,
            DisableFocusChange
        );
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme);
    app.backend_url = config.backend_url.clone();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BackendEvent>();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);

    // Backend listener: one task per upload so a slow reply never blocks a newer one
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                BackendCommand::Upload { request, path } => {
                    let extractor = Arc::clone(&extractor);
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let outcome = upload_path(&*extractor, &path)
                            .await
                            .map_err(|e| e.to_string());
                        let _ = tx.send(BackendEvent::UploadFinished {
                            request,
                            filename: display_name(&path),
                            outcome,
                        });
                    });
                }
            }
        }
    });

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    if let Some(path) = args.file
        && let Some(path) = app.surface.take_first(Some(path))
    {
        app.start_upload(path);
    }

    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    app.update(input::map_event(&evt));
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    Ok(())
}
