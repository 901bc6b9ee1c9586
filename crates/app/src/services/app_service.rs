use anyhow::Result;
use keepsake_core::app::{Command, HeartSpawner, RenderOutput, TapOutcome, TimeEngine, VideoOverlay};
use keepsake_core::domain::Event;
use keepsake_core::ports::{Clock, MediaPort, MediaState, UiConfig};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The application service: turns commands into events and owns the one-shot
/// deferred timers (heart removal, card release, the initial heart burst).
///
/// Deferred work is never cancelled. A timer that fires after the UI is gone
/// simply fails to deliver.
pub struct AppService<R: Rng = StdRng> {
    engine: TimeEngine,
    clock: Arc<dyn Clock>,
    spawner: HeartSpawner<R>,
    media: Option<Box<dyn MediaPort>>,
    overlay: VideoOverlay,
    settings: UiConfig,
    viewport_width: u16,

    // Event bus towards the UI
    event_tx: mpsc::UnboundedSender<Event>,

    // Kept for commands scheduled by the service itself
    command_tx: mpsc::UnboundedSender<Command>,
}

impl<R: Rng> AppService<R> {
    pub fn new(
        engine: TimeEngine,
        clock: Arc<dyn Clock>,
        media: Option<Box<dyn MediaPort>>,
        settings: UiConfig,
        rng: R,
    ) -> (Self, mpsc::UnboundedReceiver<Event>, mpsc::UnboundedReceiver<Command>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let service = Self {
            engine,
            clock,
            spawner: HeartSpawner::new(rng),
            media,
            overlay: VideoOverlay::new(),
            settings,
            viewport_width: 0,
            event_tx,
            command_tx,
        };

        (service, event_rx, command_rx)
    }

    /// Get a clone of the command sender for the UI
    pub fn command_sender(&self) -> mpsc::UnboundedSender<Command> {
        self.command_tx.clone()
    }

    pub fn overlay(&self) -> &VideoOverlay {
        &self.overlay
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    /// Schedule the startup heart burst
    pub fn start(&self) {
        info!(
            "Scheduling {} initial hearts in {:?}",
            self.settings.initial_hearts,
            self.settings.initial_hearts_delay()
        );
        self.schedule_command(
            self.settings.initial_hearts_delay(),
            Command::SpawnHearts { count: self.settings.initial_hearts },
        );
    }

    /// Read the clock and compute this tick's display values
    pub fn tick(&self) -> RenderOutput {
        self.engine.tick(&self.clock.now())
    }

    /// Handle a command
    pub fn handle_command(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::SpawnHearts { count } => {
                self.spawn_hearts(count);
            }
            Command::PressCard { index } => {
                debug!("Card {} pressed", index);
                self.schedule_event(self.settings.card_press(), Event::CardReleased { index });
                self.spawn_hearts(self.settings.hearts_per_message);
            }
            Command::TapOverlay => {
                self.tap_overlay();
            }
            Command::PauseVideo => {
                self.pause_video();
            }
            Command::Quit => {
                info!("Quit command received");
                self.emit(Event::QuitRequested);
            }
        }
        Ok(())
    }

    /// Pick up play/pause transitions made on the player's side
    pub fn poll_media(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        match media.poll() {
            Some(MediaState::Paused) => {
                self.overlay.on_pause();
                self.emit(Event::PlaybackChanged { playing: false });
            }
            Some(MediaState::Playing) => {
                self.overlay.on_play();
                self.emit(Event::PlaybackChanged { playing: true });
            }
            None => {}
        }
    }

    fn spawn_hearts(&mut self, count: usize) {
        let hearts = self.spawner.spawn(count, f64::from(self.viewport_width));
        debug!("Spawned {} hearts", hearts.len());

        for heart in &hearts {
            self.schedule_event(heart.lifetime(), Event::HeartExpired { id: heart.id });
        }
        self.emit(Event::HeartsSpawned { hearts });
    }

    fn tap_overlay(&mut self) {
        let Some(media) = self.media.as_mut() else {
            debug!("Overlay tapped but no video is configured");
            return;
        };

        match self.overlay.tap(media.as_mut()) {
            TapOutcome::Started => self.emit(Event::PlaybackChanged { playing: true }),
            TapOutcome::AlreadyPlaying | TapOutcome::Failed => {}
        }
    }

    fn pause_video(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        if media.is_paused() {
            return;
        }

        match media.pause() {
            Ok(()) => {
                self.overlay.on_pause();
                self.emit(Event::PlaybackChanged { playing: false });
            }
            Err(e) => warn!("Video pause failed: {:#}", e),
        }
    }

    fn emit(&self, event: Event) {
        if let Err(e) = self.event_tx.send(event) {
            error!("Failed to send event: {}", e);
        }
    }

    fn schedule_event(&self, delay: Duration, event: Event) {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }

    fn schedule_command(&self, delay: Duration, cmd: Command) {
        let tx = self.command_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(cmd);
        });
    }
}
