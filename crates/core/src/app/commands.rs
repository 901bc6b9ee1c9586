/// Commands that can be sent to the application service
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Spawn a burst of floating hearts
    SpawnHearts { count: usize },

    /// Press a memory card: pressed feedback, its message and a heart burst
    PressCard { index: usize },

    /// Tap the video overlay to start playback
    TapOverlay,

    /// Pause the video
    PauseVideo,

    /// Quit the application
    Quit,
}
