use std::collections::HashMap;

use log::{debug, error, trace, warn};

use crate::core::media::{self, MediaError, Video};
use crate::core::storage::{Storage, StorageError};

/// The video library holding every video known to the application.
///
/// The collection itself is fixed once loaded; only the flag state of the
/// individual videos can change afterwards.
#[derive(Debug, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Load the library from the given storage document.
    ///
    /// A missing document results in an empty library.
    /// It returns the loaded library, or a [MediaError] when the document is corrupt.
    pub fn from_storage(storage: &Storage, filename: &str) -> media::Result<Self> {
        trace!("Loading video library from {}", filename);
        match storage.read::<Vec<Video>>(filename) {
            Ok(videos) => {
                let library: Self = videos.into_iter().collect();
                debug!("Loaded {} videos from {}", library.len(), filename);
                Ok(library)
            }
            Err(StorageError::FileNotFound(file)) => {
                debug!("Library document {} not found, starting with an empty library", file);
                Ok(Self::default())
            }
            Err(e) => {
                error!("Failed to load the video library, {}", e);
                Err(MediaError::LibraryLoadingFailed(e.to_string()))
            }
        }
    }

    /// Retrieve the video with the given id.
    ///
    /// It returns the video when known, else [None].
    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.videos.get(video_id)
    }

    /// Retrieve a mutable reference to the video with the given id.
    pub(crate) fn get_mut(&mut self, video_id: &str) -> Option<&mut Video> {
        self.videos.get_mut(video_id)
    }

    /// Retrieve all videos within the library.
    ///
    /// The returned order is undefined; callers sort as needed.
    pub fn all(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    /// The total number of videos within the library.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<T: IntoIterator<Item = Video>>(iter: T) -> Self {
        let mut videos = HashMap::new();

        for video in iter {
            if let Some(replaced) = videos.insert(video.id().to_string(), video) {
                warn!("Duplicate video id {} within the library source", replaced.id());
            }
        }

        Self { videos }
    }
}
