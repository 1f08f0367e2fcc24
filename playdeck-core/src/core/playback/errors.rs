use thiserror::Error;

/// The result type for playback actions.
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// The errors which are thrown by the playback package.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaybackError {
    /// The requested video couldn't be found within the library
    #[error("video {0} doesn't exist in the library")]
    VideoNotFound(String),
    /// The requested video has been flagged and cannot be played
    #[error("video {id} has been flagged, reason: {reason}")]
    VideoFlagged { id: String, reason: String },
    /// There is no active video within the playback slot
    #[error("no video is currently playing")]
    NothingPlaying,
    /// The current video is playing and cannot be resumed
    #[error("the current video is not paused")]
    NotPaused,
    /// Every video within the library has been flagged
    #[error("there are no playable videos in the library")]
    NoPlayableVideos,
}
