use crate::ports::media::MediaPort;
use tracing::{info, warn};

/// What a tap on the overlay did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Started,
    AlreadyPlaying,
    /// Playback could not start; the overlay stays up
    Failed,
}

/// Play button overlay shown over the video while it is paused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOverlay {
    visible: bool,
}

impl Default for VideoOverlay {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl VideoOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_play(&mut self) {
        self.visible = false;
    }

    pub fn on_pause(&mut self) {
        self.visible = true;
    }

    /// Handle a tap on the overlay. The tap is always consumed here and never
    /// reaches the card underneath.
    pub fn tap(&mut self, media: &mut dyn MediaPort) -> TapOutcome {
        if !media.is_paused() {
            return TapOutcome::AlreadyPlaying;
        }

        match media.play() {
            Ok(()) => {
                info!("Video playback started");
                self.on_play();
                TapOutcome::Started
            }
            Err(e) => {
                warn!("Video play failed: {:#}", e);
                TapOutcome::Failed
            }
        }
    }
}
