use derive_more::Display;

/// The playback state of the player.
///
/// The state is always [PlaybackState::Stopped] when no video is active.
#[derive(Debug, Copy, Clone, Default, Display, PartialEq)]
pub enum PlaybackState {
    /// No video is active within the playback slot.
    #[default]
    Stopped,
    /// The current video is playing.
    Playing,
    /// The current video has been paused.
    Paused,
}
