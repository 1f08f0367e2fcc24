use thiserror::Error;

/// The result type for media actions.
pub type Result<T> = std::result::Result<T, MediaError>;

/// The errors which are thrown by the media package.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MediaError {
    /// The requested video couldn't be found within the library
    #[error("video {0} doesn't exist in the library")]
    NotFound(String),
    /// The video already carries a flag reason
    #[error("video {id} has already been flagged, reason: {reason}")]
    AlreadyFlagged { id: String, reason: String },
    /// The video carries no flag reason that could be cleared
    #[error("video {0} is not flagged")]
    NotFlagged(String),
    /// The library document failed to load
    #[error("failed to load the video library, {0}")]
    LibraryLoadingFailed(String),
}
