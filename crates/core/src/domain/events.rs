use super::heart::{HeartId, HeartParticle};
use crate::app::RenderOutput;

/// Domain events delivered to the UI
#[derive(Debug, Clone)]
pub enum Event {
    /// Fresh display values from a clock tick
    Ticked { output: RenderOutput },

    /// New hearts were spawned and should start floating
    HeartsSpawned { hearts: Vec<HeartParticle> },

    /// A heart's lifetime elapsed; its visual should be removed
    HeartExpired { id: HeartId },

    /// Pressed feedback on a memory card is over
    CardReleased { index: usize },

    /// The media element started or stopped playing
    PlaybackChanged { playing: bool },

    /// User requested to quit the application
    QuitRequested,
}
