use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A memory card shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub title: String,
    pub message: String,
    /// Clip played through the video overlay when this card holds one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,
}

impl MemoryCard {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            video: None,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}

/// Index of the first card holding a video. Only one media element is driven.
pub fn video_card_index(cards: &[MemoryCard]) -> Option<usize> {
    cards.iter().position(MemoryCard::has_video)
}
