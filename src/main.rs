use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEvent, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tokio::sync::oneshot;

/// Terminal movie browser with dual-handle range filters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset JSON file or http(s) URL (overrides the config file)
    dataset: Option<String>,

    /// Enable debug logging to /tmp/movietui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, j/k in lists)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod config;
mod handlers;
mod services;
mod ui;
mod utils;

use config::Config;
use movietui::controller::{Controller, MovieListView};
use movietui::dataset::{DatasetSource, MovieRecord};
use movietui::model::{Axis, UiModel};
use movietui::SortKey;
use services::LoadResult;
use ui::layout::LayoutInfo;

fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Table body as last handed over by the controller
#[derive(Debug, Default)]
pub struct TableView {
    pub rows: Vec<MovieRecord>,
}

impl MovieListView for TableView {
    fn render_rows(&mut self, rows: &[MovieRecord]) {
        self.rows = rows.to_vec();
    }

    fn show_range(&mut self, axis: Axis, low: i64, high: i64) {
        log_debug(&format!("{} range: {}..={}", axis.label(), low, high));
    }
}

pub struct App {
    pub controller: Controller<TableView>,
    pub ui: UiModel,

    /// Layout of the last frame, used for mouse hit-testing
    pub layout: Option<LayoutInfo>,
    /// Area and scroll offset of the open dropdown popup, as last drawn
    pub dropdown_popup: Option<(Rect, usize)>,
    /// First table row scrolled into view, as last drawn
    pub table_offset: usize,

    source: DatasetSource,
    dataset_rx: Option<oneshot::Receiver<LoadResult>>,
    initial_sort: Option<SortKey>,
}

impl App {
    fn new(config: Config, source: DatasetSource) -> Self {
        let initial_sort = config.initial_sort.as_deref().and_then(|s| match s.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                log_debug(&format!("Ignoring initial_sort: {}", e));
                None
            }
        });

        Self {
            controller: Controller::new(TableView::default()),
            ui: UiModel::new(config.vim_mode),
            layout: None,
            dropdown_popup: None,
            table_offset: 0,
            source,
            dataset_rx: None,
            initial_sort,
        }
    }

    /// Dataset location as shown in the title bar
    pub fn source_label(&self) -> String {
        self.source.describe()
    }

    fn start_loading(&mut self) {
        self.dataset_rx = Some(services::spawn_dataset_load(self.source.clone()));
    }

    /// Pick up the dataset once the background load finishes
    fn poll_dataset(&mut self) {
        let Some(rx) = self.dataset_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.dataset_rx = None;
                self.handle_load_result(result);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.dataset_rx = None;
                self.handle_load_result(Err(anyhow::anyhow!("Dataset loader stopped unexpectedly")));
            }
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key).await
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        handlers::handle_mouse(self, mouse);
    }
}

/// Determine the config file path with fallback logic
///
/// `Ok(None)` means no config file exists and defaults apply. An explicit
/// `--config` path that does not exist is an error.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/movietui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("movietui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let config_str = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Failed to parse config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config_path = get_config_path(args.config)?;
    match &config_path {
        Some(path) => log_debug(&format!("Loading config from: {:?}", path)),
        None => log_debug("No config file found, using defaults"),
    }
    let mut config = load_config(config_path.as_ref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(dataset) = args.dataset {
        config.dataset = dataset;
    }

    let source = DatasetSource::parse(&config.dataset);
    let mut app = App::new(config, source);
    app.start_loading();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.ui.should_dismiss_toast() {
            app.ui.dismiss_toast();
        }

        if app.ui.should_quit {
            break;
        }

        app.poll_dataset();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key).await?,
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::FocusLost => {
                    if app.controller.drag_session().is_dragging() {
                        log_debug("Focus lost, ending drag");
                    }
                    app.controller.pointer_leave();
                }
                // Next draw recomputes the layout and resizes the tracks
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
