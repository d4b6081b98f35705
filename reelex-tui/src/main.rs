//! # Reelex
//!
//! Terminal explorer for the TMDB popular-movies catalog. Aggregates a
//! fixed batch of listing pages at startup, then offers client-side
//! search, sort, and pagination over the result set.

mod app;
mod event;
mod ui;

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::oneshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelex_config::Config;
use reelex_core::{ProviderError, TmdbProvider, fetch_all_pages};
use reelex_model::{MovieRecord, SortKey};

use crate::app::App;
use crate::event::{CrosstermEventSource, EventSource, ScriptEventSource};

type FetchResult = Result<Vec<MovieRecord>, ProviderError>;

const TICK: Duration = Duration::from_millis(50);

/// Terminal explorer for the TMDB popular-movies catalog.
#[derive(Debug, Parser)]
#[command(name = "reelex", version, about)]
struct Args {
    /// Number of listing pages to aggregate at startup
    #[arg(long)]
    pages: Option<u32>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Initial sort key (none, release_date_asc, release_date_desc,
    /// rating_asc, rating_desc)
    #[arg(long, default_value = "none")]
    sort: SortKey,

    /// Drive the UI from a scripted input file instead of the tty
    #[arg(long, hide = true)]
    tui_script: Option<PathBuf>,

    /// Write consumed scripted events to this file
    #[arg(long, hide = true, requires = "tui_script")]
    tui_trace: Option<PathBuf>,
}

fn init_tracing() -> Result<()> {
    // The alternate screen owns stdout, so logs go to a file.
    let log_path = std::env::var("REELEX_LOG_FILE")
        .unwrap_or_else(|_| "reelex.log".to_string());
    let file = File::create(&log_path)
        .with_context(|| format!("create log file {log_path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let config = match &args.env_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    let pages = args.pages.unwrap_or(config.fetch_pages);
    tracing::info!(pages, api_base = %config.api_base, "starting reelex");

    let provider = TmdbProvider::with_api_base(
        config.api_base.clone(),
        config.api_token.clone(),
    );

    // Fire the aggregation on the runtime; the UI loop polls for the
    // outcome while rendering the loading state.
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = fetch_all_pages(&provider, pages).await;
        let _ = tx.send(result);
    });

    let mut app = App::new(config.image_base);
    if args.sort != SortKey::None {
        app.catalog.set_sort_key(args.sort);
    }

    let mut events: Box<dyn EventSource> = match args.tui_script {
        Some(path) => {
            Box::new(ScriptEventSource::from_path(path, args.tui_trace)?)
        }
        None => Box::new(CrosstermEventSource),
    };

    run(&mut app, events.as_mut(), rx)
}

fn run(
    app: &mut App,
    events: &mut dyn EventSource,
    mut fetch_rx: oneshot::Receiver<FetchResult>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).context("initialize terminal")?;

    let result = event_loop(&mut terminal, app, events, &mut fetch_rx);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut dyn EventSource,
    fetch_rx: &mut oneshot::Receiver<FetchResult>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Ok(result) = fetch_rx.try_recv() {
            app.catalog.finish_load(result);
        }

        if let Some(event) = events.next(TICK)? {
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
