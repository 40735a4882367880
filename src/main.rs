//! novella: a chapter-aware terminal reader for plain-text novels.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use novella::app_state::{AppState, FileMode, View};
use novella::formats::novel::NovelFormat;
use novella::loader::Loader;
use novella::outline::Outline;
use novella::{config, input, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How long to wait for input before checking on a background load.
const TICK: Duration = Duration::from_millis(100);

/// Lines moved by one page of scrolling.
const PAGE: u16 = 20;

#[derive(Parser)]
#[command(name = "novella")]
#[command(about = "Chapter-aware terminal reader for plain-text novels", long_about = None)]
struct Args {
    /// Files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match in directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print each document's chapter outline as JSON and exit
    #[arg(long)]
    json: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)
        .context("Failed to collect input files")?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if args.json {
        return print_outlines(&documents);
    }

    let mut app = AppState::new(documents, cfg);
    let mut loader = Loader::new(NovelFormat);
    if app.file_mode == FileMode::Single {
        open_selected(&mut app, &mut loader);
    }

    run_tui(app, loader).context("Terminal error")
}

/// Logs go to `--log-file` when given. Without one they go to stderr in `--json` mode and
/// nowhere while the TUI owns the terminal.
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if !args.json {
        return Ok(());
    }

    builder.init();
    Ok(())
}

fn print_outlines(documents: &[PathBuf]) -> anyhow::Result<()> {
    let mut loader = Loader::new(NovelFormat);
    let mut outlines = Vec::with_capacity(documents.len());
    for path in documents {
        loader.request(path.clone());
        let outcome = loader
            .wait()
            .with_context(|| format!("Loader stopped while reading {}", path.display()))?;
        outlines.push(Outline::from_document(&outcome.result?));
    }

    let json = if let [outline] = outlines.as_slice() {
        outline.to_json()?
    } else {
        serde_json::to_string_pretty(&outlines)?
    };
    println!("{json}");
    Ok(())
}

fn open_selected(app: &mut AppState, loader: &mut Loader<NovelFormat>) {
    if let Some(path) = app.selected_file().cloned() {
        app.begin_load(path.clone());
        loader.request(path);
    }
}

fn run_tui(mut app: AppState, mut loader: Loader<NovelFormat>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut loader);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    loader: &mut Loader<NovelFormat>,
) -> io::Result<()> {
    loop {
        if let Some(outcome) = loader.poll() {
            app.apply_load(outcome.result);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let quit = match app.current_view {
                View::FileList => handle_file_list_key(app, loader, key),
                View::Reader => handle_reader_key(app, key),
            };
            if quit {
                return Ok(());
            }
        }
    }
}

fn handle_file_list_key(
    app: &mut AppState,
    loader: &mut Loader<NovelFormat>,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            // Back to the open document, if there is one
            if app.document.is_some() {
                app.current_view = View::Reader;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_file(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_file(),
        KeyCode::Enter => open_selected(app, loader),
        _ => {}
    }
    false
}

fn handle_reader_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            if app.file_mode == FileMode::Multi {
                app.current_view = View::FileList;
            } else {
                return true;
            }
        }
        KeyCode::Char('o') => app.current_view = View::FileList,
        KeyCode::Left | KeyCode::Char('p') => {
            app.prev_chapter();
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_chapter();
        }
        KeyCode::Home => {
            app.first_chapter();
        }
        KeyCode::End => {
            app.last_chapter();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
        KeyCode::Char('+' | '=') => {
            app.increase_font();
        }
        KeyCode::Char('-') => {
            app.decrease_font();
        }
        _ => {}
    }
    false
}
