use thiserror::Error;

/// The result type for playlist actions.
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// The errors which are thrown by the playlist package.
///
/// Playlist names within the errors are reported as given by the caller,
/// not as the canonical stored name.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaylistError {
    /// The playlist name contains whitespace
    #[error("playlist name {0} contains whitespace")]
    InvalidName(String),
    /// A playlist with the same case-insensitive name already exists
    #[error("a playlist with the name {0} already exists")]
    DuplicateName(String),
    /// The requested playlist couldn't be found
    #[error("playlist {0} doesn't exist")]
    NotFound(String),
    /// The requested video couldn't be found within the library
    #[error("video {0} doesn't exist in the library")]
    VideoNotFound(String),
    /// The video has been flagged and cannot be added to a playlist
    #[error("video {id} has been flagged, reason: {reason}")]
    VideoFlagged { id: String, reason: String },
    /// The video is already present within the playlist
    #[error("video {id} is already present in playlist {name}")]
    DuplicateVideo { name: String, id: String },
    /// The video is not present within the playlist
    #[error("video {id} is not present in playlist {name}")]
    VideoNotInPlaylist { name: String, id: String },
}
