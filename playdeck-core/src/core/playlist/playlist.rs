use derive_more::Display;

/// A named, ordered collection of video ids.
///
/// The name keeps the casing it was created with for display purposes;
/// lookups within the [crate::core::playlist::PlaylistStore] are
/// case-insensitive. Video ids are unique within a playlist and keep their
/// insertion order.
#[derive(Debug, Clone, Display, PartialEq)]
#[display("{} ({} videos)", name, video_ids.len())]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist with the given display name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            video_ids: vec![],
        }
    }

    /// The canonical display name of the playlist.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The video ids within the playlist, in insertion order.
    pub fn video_ids(&self) -> &[String] {
        self.video_ids.as_slice()
    }

    /// Verify if the playlist contains the given video id.
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|e| e == video_id)
    }

    /// The number of videos within the playlist.
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }

    /// Append the given video id to the playlist.
    pub(crate) fn add(&mut self, video_id: String) {
        self.video_ids.push(video_id);
    }

    /// Remove the given video id from the playlist.
    ///
    /// It returns `true` when the id was present.
    pub(crate) fn remove(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|e| e == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all video ids from the playlist.
    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }
}
