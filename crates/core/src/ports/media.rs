use anyhow::Result;

/// Play/pause state of the media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaState {
    Playing,
    Paused,
}

/// Port for the single optional media element
pub trait MediaPort: Send {
    /// Start playback. May fail, e.g. when the player cannot be launched.
    fn play(&mut self) -> Result<()>;

    /// Stop playback
    fn pause(&mut self) -> Result<()>;

    fn is_paused(&self) -> bool;

    /// Report a transition that happened on the player's side since the last
    /// poll, such as the clip reaching its end.
    fn poll(&mut self) -> Option<MediaState>;
}
