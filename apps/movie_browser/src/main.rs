use std::{
    cell::Cell,
    io::{self, BufRead, Write},
    path::PathBuf,
    rc::Rc,
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, FetchController, FetchResult, ListViewState, TmdbCatalog};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use controller::{
    events::{parse_command, parse_position, BrowserAction, InputCommand, NavigationRequest, HELP},
    orchestration::apply_action,
};
use ui::{render_screen, RenderOptions};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "movie_browser", about = "Browse a TMDb movie list in the terminal")]
struct Args {
    /// Config file; defaults to ./movie_browser.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long, default_value_t = 2)]
    columns: usize,
    /// Open the details of movie <n> once loaded, print, and exit.
    #[arg(long)]
    open: Option<String>,
    /// Print the list once loaded and exit.
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }
    if settings.api_key.is_empty() {
        tracing::warn!("no TMDb API key configured; set TMDB_API_KEY or pass --api-key");
    }

    let catalog = TmdbCatalog::from_settings(&settings).context("invalid TMDb endpoint")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build background runtime")?;

    let mut state = ListViewState::new(FetchController::new(
        Arc::new(catalog),
        runtime.handle().clone(),
    ));
    let options = RenderOptions::from_settings(&settings, args.columns);

    let open_index = args
        .open
        .as_deref()
        .map(parse_position)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    if args.once || open_index.is_some() {
        run_once(&mut state, &options, open_index)
    } else {
        run_interactive(&mut state, &options)
    }
}

fn run_once(
    state: &mut ListViewState,
    options: &RenderOptions,
    open_index: Option<usize>,
) -> Result<()> {
    state.start()?;
    while !state.wait(Duration::from_secs(1)) {
        tracing::debug!("still waiting for the movie list");
    }

    let mut notice = String::new();
    if let Some(index) = open_index {
        // No other screen is listening in this mode.
        let (nav_tx, _) = bounded::<NavigationRequest>(1);
        apply_action(state, BrowserAction::Select(index), &nav_tx, &mut notice);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_screen(state, options, &notice).as_bytes())?;
    stdout.flush()?;

    if let FetchResult::Failure(err) = state.current_result() {
        bail!("movie list unavailable: {err}");
    }
    Ok(())
}

fn run_interactive(state: &mut ListViewState, options: &RenderOptions) -> Result<()> {
    let needs_redraw = Rc::new(Cell::new(true));
    let flag = Rc::clone(&needs_redraw);
    state.on_result_changed(move |_| flag.set(true));
    state.start()?;

    let (nav_tx, nav_rx) = bounded::<NavigationRequest>(16);
    let (input_tx, input_rx) = bounded::<String>(64);
    spawn_input_reader(input_tx);

    let mut notice = HELP.to_string();
    loop {
        state.poll();
        if let Some(message) = drain_navigation(&nav_rx) {
            notice = message;
            needs_redraw.set(true);
        }

        if needs_redraw.replace(false) {
            let mut stdout = io::stdout().lock();
            stdout.write_all(render_screen(state, options, &notice).as_bytes())?;
            stdout.write_all(b"> ")?;
            stdout.flush()?;
        }

        let line = match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        notice.clear();
        match parse_command(&line) {
            Ok(InputCommand::Quit) => break,
            Ok(InputCommand::Help) => notice = HELP.to_string(),
            Ok(InputCommand::Redraw) => {}
            Ok(InputCommand::Action(action)) => apply_action(state, action, &nav_tx, &mut notice),
            Err(message) => notice = message,
        }
        needs_redraw.set(true);
    }

    Ok(())
}

/// Search and profile screens live outside this binary; requests for them are
/// acknowledged and logged.
fn drain_navigation(nav_rx: &Receiver<NavigationRequest>) -> Option<String> {
    let mut last = None;
    while let Ok(request) = nav_rx.try_recv() {
        tracing::info!(request = request.label(), "navigation requested");
        last = Some(format!("{} screen is not part of this browser", request.label()));
    }
    last
}

fn spawn_input_reader(input_tx: Sender<String>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });
}
