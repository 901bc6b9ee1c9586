// Composition root: wires the core, adapters, service and TUI together and
// owns the tick interval and the event loop.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keepsake_core::app::{Command, TimeEngine};
use keepsake_core::domain::{video_card_index, Event};
use keepsake_core::ports::{AppConfig, Clock, ConfigStore, MediaPort, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::adapters::{media::ProcessPlayer, persistence::FileConfigStore};
use crate::cli::CliArgs;
use crate::services::AppService;
use crate::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

const RENDER_INTERVAL: Duration = Duration::from_millis(16); // ~60 FPS

/// The main application struct that coordinates everything
pub struct KeepsakeApp {
    /// Commands in, events out
    app_service: AppService,

    /// The TUI model (MVU pattern)
    tui_model: TuiModel,

    /// Terminal for rendering
    terminal: Tui,

    /// Event receiver from the app service
    event_rx: mpsc::UnboundedReceiver<Event>,

    /// Commands from the UI and from deferred timers
    command_rx: mpsc::UnboundedReceiver<Command>,

    tick_interval: Duration,
}

/// Load config and apply CLI overrides
pub fn load_config(cli_args: &CliArgs) -> Result<AppConfig> {
    let config_store = match &cli_args.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new()?,
    };

    let mut config = config_store.load()?;
    info!("Loaded config from {}", config_store.path().display());

    // CLI overrides config file
    if let Some(start) = cli_args.journey_start {
        config.dates.journey_start = start;
    }
    if let Some(target) = cli_args.countdown_target {
        config.dates.countdown_target = target;
    }

    Ok(config)
}

/// Build the service, its media adapter and the initial model from config
pub fn build_service(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<(AppService, TuiModel, mpsc::UnboundedReceiver<Event>, mpsc::UnboundedReceiver<Command>)> {
    let engine = TimeEngine::from_local(config.dates.journey_start, config.dates.countdown_target)
        .context("Invalid date in configuration")?;
    info!(
        "Journey started {}, counting down to {}",
        engine.journey_start(),
        engine.countdown_target()
    );

    let media: Option<Box<dyn MediaPort>> = video_card_index(&config.cards)
        .and_then(|index| config.cards[index].video.as_ref())
        .map(|clip| {
            info!("Video overlay bound to {}", clip.display());
            Box::new(ProcessPlayer::new(&config.video, clip)) as Box<dyn MediaPort>
        });

    let (app_service, event_rx, command_rx) =
        AppService::new(engine, clock, media, config.ui.clone(), StdRng::from_entropy());
    let tui_model = TuiModel::new(config.cards.clone(), config.ui.hearts_per_message);

    Ok((app_service, tui_model, event_rx, command_rx))
}

impl KeepsakeApp {
    /// Create a new application instance
    /// This is the composition root - where dependency injection happens
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing Keepsake");

        let (app_service, tui_model, event_rx, command_rx) =
            build_service(&config, Arc::new(SystemClock))?;

        // Initialize terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            app_service,
            tui_model,
            terminal,
            event_rx,
            command_rx,
            tick_interval: config.ui.tick_interval(),
        })
    }

    /// Run the application
    pub async fn run(self) -> Result<()> {
        info!("Starting Keepsake");

        let KeepsakeApp {
            mut app_service,
            mut tui_model,
            mut terminal,
            mut event_rx,
            mut command_rx,
            tick_interval,
        } = self;

        let result = run_main_loop(
            &mut app_service,
            &mut tui_model,
            &mut terminal,
            &mut event_rx,
            &mut command_rx,
            tick_interval,
        )
        .await;

        shutdown(&mut terminal)?;

        result
    }
}

/// Main application loop
async fn run_main_loop(
    app_service: &mut AppService,
    tui_model: &mut TuiModel,
    terminal: &mut Tui,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    command_rx: &mut mpsc::UnboundedReceiver<Command>,
    tick_interval: Duration,
) -> Result<()> {
    let command_tx = app_service.command_sender();

    if let Ok(size) = terminal.size() {
        TuiUpdate::handle_resize(tui_model, size.width, size.height)?;
        app_service.set_viewport_width(size.width);
    }

    // Skipped ticks are not made up; every tick reads the real time anyway
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app_service.start();

    loop {
        tokio::select! {
            biased;

            _ = ticker.tick() => {
                let output = app_service.tick();
                tui_model.apply_event(&Event::Ticked { output });
            }

            Some(cmd) = command_rx.recv() => {
                debug!("Handling command: {:?}", cmd);
                app_service.handle_command(cmd)?;
            }

            Some(event) = event_rx.recv() => {
                tui_model.apply_event(&event);
            }

            _ = tokio::time::sleep(RENDER_INTERVAL) => {}
        }

        // Drain whatever else is ready before drawing
        while let Ok(event) = event_rx.try_recv() {
            tui_model.apply_event(&event);
        }

        // Handle user input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                TermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    let message = TuiUpdate::handle_key(tui_model, key_event.code, key_event.modifiers)?;
                    if let TuiMessage::Command(cmd) = message {
                        if let Err(e) = command_tx.send(cmd) {
                            error!("Failed to send command: {}", e);
                        }
                    }
                }
                TermEvent::Resize(width, height) => {
                    TuiUpdate::handle_resize(tui_model, width, height)?;
                    app_service.set_viewport_width(width);
                }
                _ => {}
            }
        }

        app_service.poll_media();

        if tui_model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }

        terminal.draw(|frame| TuiView::render(tui_model, frame))?;
    }

    Ok(())
}

/// Clean shutdown
fn shutdown(terminal: &mut Tui) -> Result<()> {
    info!("Shutting down Keepsake");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Initialize tracing. Logs go to `log_file` when given, stderr otherwise.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }

    Ok(())
}

/// Entry point used by the binary
pub async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.log_file.as_deref())?;

    info!("Starting Keepsake");

    let config = load_config(&cli_args)?;
    let app = KeepsakeApp::new(config)?;

    if let Err(e) = app.run().await {
        error!("Application error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("Keepsake shut down cleanly");
    Ok(())
}
