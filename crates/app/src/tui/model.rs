use keepsake_core::app::RenderOutput;
use keepsake_core::domain::{video_card_index, Event, HeartId, HeartParticle, MemoryCard};
use std::time::Instant;

/// The TUI Model - this represents the complete UI state
#[derive(Debug, Default)]
pub struct TuiModel {
    /// Display values from the latest tick, if any
    pub output: Option<RenderOutput>,

    /// Hearts currently floating, in spawn order
    pub hearts: Vec<LiveHeart>,

    /// Memory cards and which one is selected/pressed
    pub cards: CardState,

    /// Video overlay as last reported by the service
    pub video: VideoState,

    /// UI-specific state
    pub ui_state: UiState,

    /// Current view mode
    pub mode: ViewMode,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// A spawned heart and when it appeared on screen
#[derive(Debug, Clone)]
pub struct LiveHeart {
    pub particle: HeartParticle,
    pub born: Instant,
}

impl LiveHeart {
    /// How far through its lifetime the heart is, in [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        let lifetime = self.particle.lifetime();
        if lifetime.is_zero() {
            return 1.0;
        }
        let age = now.saturating_duration_since(self.born);
        (age.as_secs_f64() / lifetime.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct CardState {
    pub cards: Vec<MemoryCard>,
    pub selected: usize,
    /// Card currently showing pressed feedback
    pub pressed: Option<usize>,
    /// Message of the last pressed card
    pub message: Option<String>,
}

#[derive(Debug, Default)]
pub struct VideoState {
    /// Card that holds the video, if one does
    pub card: Option<usize>,
    pub playing: bool,
}

impl VideoState {
    pub fn overlay_visible(&self) -> bool {
        self.card.is_some() && !self.playing
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Hearts spawned by a single Space press
    pub heart_burst: usize,
}

/// Different view modes for the TUI
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ViewMode {
    #[default]
    /// The dashboard with clock, countdown and journey
    Dashboard,

    /// Help view
    Help,
}

impl TuiModel {
    pub fn new(cards: Vec<MemoryCard>, heart_burst: usize) -> Self {
        Self {
            ui_state: UiState {
                heart_burst,
                ..Default::default()
            },
            video: VideoState {
                card: video_card_index(&cards),
                playing: false,
            },
            cards: CardState {
                cards,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Apply an event to update the UI state
    pub fn apply_event(&mut self, event: &Event) {
        self.apply_event_at(event, Instant::now());
    }

    pub fn apply_event_at(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Ticked { output } => {
                self.output = Some(output.clone());
            }

            Event::HeartsSpawned { hearts } => {
                self.hearts.extend(hearts.iter().cloned().map(|particle| LiveHeart {
                    particle,
                    born: now,
                }));
            }

            Event::HeartExpired { id } => {
                self.remove_heart(*id);
            }

            Event::CardReleased { index } => {
                if self.cards.pressed == Some(*index) {
                    self.cards.pressed = None;
                }
            }

            Event::PlaybackChanged { playing } => {
                self.video.playing = *playing;
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }
        }
    }

    fn remove_heart(&mut self, id: HeartId) {
        self.hearts.retain(|heart| heart.particle.id != id);
    }

    pub fn selected_card(&self) -> Option<&MemoryCard> {
        self.cards.cards.get(self.cards.selected)
    }

    pub fn select_next_card(&mut self) {
        if self.cards.selected + 1 < self.cards.cards.len() {
            self.cards.selected += 1;
        }
    }

    pub fn select_previous_card(&mut self) {
        self.cards.selected = self.cards.selected.saturating_sub(1);
    }

    /// Show pressed feedback and the card's message. Returns false when there
    /// is no card to press.
    pub fn press_selected_card(&mut self) -> bool {
        let index = self.cards.selected;
        let Some(card) = self.cards.cards.get(index) else {
            return false;
        };
        self.cards.message = Some(card.message.clone());
        self.cards.pressed = Some(index);
        true
    }

    /// Whether Enter on the selected card should go to the video overlay
    pub fn selected_card_shows_overlay(&self) -> bool {
        self.video.overlay_visible() && self.video.card == Some(self.cards.selected)
    }
}
