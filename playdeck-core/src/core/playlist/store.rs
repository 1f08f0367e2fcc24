use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info, trace};

use crate::core::media::{Video, VideoLibrary};
use crate::core::playlist::{self, Playlist, PlaylistError};

/// The playlist store owns every playlist and is the canonical source of
/// truth for playlist existence and name uniqueness.
///
/// Names are unique case-insensitively; the primary lookup key is the
/// lowercased name while each playlist keeps its canonical casing for
/// display. Every mutating operation is atomic: on any error the store is
/// left unchanged.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty playlist with the given name.
    ///
    /// It returns the created playlist, else the [PlaylistError].
    pub fn create(&mut self, name: &str) -> playlist::Result<&Playlist> {
        trace!("Creating playlist {}", name);
        if name.chars().any(char::is_whitespace) {
            return Err(PlaylistError::InvalidName(name.to_string()));
        }

        let key = name.to_lowercase();
        if self.playlists.contains_key(&key) {
            debug!("Playlist name {} is already in use", name);
            return Err(PlaylistError::DuplicateName(name.to_string()));
        }

        info!("Created playlist {}", name);
        Ok(self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    /// Resolve the canonical name of a playlist through case-insensitive lookup.
    ///
    /// It returns the canonical name when the playlist exists, else [None].
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.playlists.get(&name.to_lowercase()).map(|e| e.name())
    }

    /// Retrieve the playlist with the given name through case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Add the given video to the playlist.
    ///
    /// The video must exist within the library, must not be flagged and must
    /// not already be present within the playlist.
    pub fn add_video(
        &mut self,
        library: &VideoLibrary,
        name: &str,
        video_id: &str,
    ) -> playlist::Result<()> {
        trace!("Adding video {} to playlist {}", video_id, name);
        let key = name.to_lowercase();
        if !self.playlists.contains_key(&key) {
            return Err(PlaylistError::NotFound(name.to_string()));
        }

        let video = library
            .get(video_id)
            .ok_or_else(|| PlaylistError::VideoNotFound(video_id.to_string()))?;
        if let Some(reason) = video.flag_reason() {
            debug!("Video {} is flagged and won't be added to playlist {}", video_id, name);
            return Err(PlaylistError::VideoFlagged {
                id: video_id.to_string(),
                reason: reason.to_string(),
            });
        }

        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;
        if playlist.contains(video_id) {
            return Err(PlaylistError::DuplicateVideo {
                name: name.to_string(),
                id: video_id.to_string(),
            });
        }

        playlist.add(video_id.to_string());
        debug!("Added video {} to playlist {}", video_id, playlist.name());
        Ok(())
    }

    /// Remove the given video from the playlist.
    pub fn remove_video(
        &mut self,
        library: &VideoLibrary,
        name: &str,
        video_id: &str,
    ) -> playlist::Result<()> {
        trace!("Removing video {} from playlist {}", video_id, name);
        let key = name.to_lowercase();
        if !self.playlists.contains_key(&key) {
            return Err(PlaylistError::NotFound(name.to_string()));
        }

        if library.get(video_id).is_none() {
            return Err(PlaylistError::VideoNotFound(video_id.to_string()));
        }

        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;
        if !playlist.remove(video_id) {
            return Err(PlaylistError::VideoNotInPlaylist {
                name: name.to_string(),
                id: video_id.to_string(),
            });
        }

        debug!("Removed video {} from playlist {}", video_id, playlist.name());
        Ok(())
    }

    /// Remove all videos from the playlist.
    ///
    /// Clearing an already empty playlist succeeds.
    pub fn clear(&mut self, name: &str) -> playlist::Result<()> {
        let playlist = self
            .playlists
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;

        playlist.clear();
        info!("Cleared playlist {}", playlist.name());
        Ok(())
    }

    /// Delete the playlist with the given name.
    ///
    /// It returns the removed playlist, else the [PlaylistError].
    pub fn delete(&mut self, name: &str) -> playlist::Result<Playlist> {
        match self.playlists.remove(&name.to_lowercase()) {
            Some(playlist) => {
                info!("Deleted playlist {}", playlist.name());
                Ok(playlist)
            }
            None => Err(PlaylistError::NotFound(name.to_string())),
        }
    }

    /// Retrieve the canonical names of all playlists, sorted
    /// lexicographically on their lowercased form.
    pub fn names(&self) -> Vec<&str> {
        self.playlists
            .values()
            .map(|e| e.name())
            .sorted_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()))
            .collect()
    }

    /// Retrieve the videos of the playlist in insertion order, each id
    /// resolved against the library.
    ///
    /// An id which cannot be resolved is reported as
    /// [PlaylistError::VideoNotFound] rather than being skipped.
    pub fn videos(&self, library: &VideoLibrary, name: &str) -> playlist::Result<Vec<Video>> {
        let playlist = self
            .get(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;

        playlist
            .video_ids()
            .iter()
            .map(|id| {
                library
                    .get(id)
                    .cloned()
                    .ok_or_else(|| PlaylistError::VideoNotFound(id.to_string()))
            })
            .collect()
    }

    /// The number of playlists within the store.
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::init_logger;

    use super::*;

    fn library() -> VideoLibrary {
        vec![
            Video::new(
                "Amazing Cats".to_string(),
                "cat1".to_string(),
                vec!["cat".to_string(), "animal".to_string()],
            ),
            Video::new(
                "Dog Video".to_string(),
                "dog1".to_string(),
                vec!["dog".to_string(), "animal".to_string()],
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_create() {
        init_logger!();
        let mut store = PlaylistStore::new();

        let result = store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        assert_eq!("My_PLAYLIST", result.name());
        assert_eq!(1, store.len());
    }

    #[test]
    fn test_create_name_with_whitespace() {
        init_logger!();
        let mut store = PlaylistStore::new();

        let result = store.create("my playlist");

        assert_eq!(
            Err(PlaylistError::InvalidName("my playlist".to_string())),
            result.map(|_| ())
        );
        assert!(
            store.is_empty(),
            "expected no playlist to have been created"
        );
    }

    #[test]
    fn test_create_duplicate_name() {
        init_logger!();
        let mut store = PlaylistStore::new();
        store
            .create("Foo")
            .expect("expected the playlist to have been created");

        let result = store.create("foo");

        assert_eq!(
            Err(PlaylistError::DuplicateName("foo".to_string())),
            result.map(|_| ())
        );
        assert_eq!(1, store.len());
    }

    #[test]
    fn test_resolve() {
        init_logger!();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        assert_eq!(Some("My_PLAYLIST"), store.resolve("my_playlist"));
        assert_eq!(Some("My_PLAYLIST"), store.resolve("MY_PLAYLIST"));
        assert_eq!(None, store.resolve("lorem"));
    }

    #[test]
    fn test_add_video() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");

        let playlist = store.get("MY_PLAYLIST").expect("expected the playlist to exist");
        assert_eq!(&["dog1".to_string()], playlist.video_ids());
    }

    #[test]
    fn test_add_video_unknown_playlist() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();

        let result = store.add_video(&library, "lorem", "dog1");

        assert_eq!(Err(PlaylistError::NotFound("lorem".to_string())), result);
    }

    #[test]
    fn test_add_video_unknown_video() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        let result = store.add_video(&library, "my_playlist", "lorem");

        assert_eq!(
            Err(PlaylistError::VideoNotFound("lorem".to_string())),
            result
        );
    }

    #[test]
    fn test_add_video_flagged() {
        init_logger!();
        let mut library = library();
        library.get_mut("cat1").unwrap().set_flag("dont_like_cats");
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        let result = store.add_video(&library, "my_playlist", "cat1");

        assert_eq!(
            Err(PlaylistError::VideoFlagged {
                id: "cat1".to_string(),
                reason: "dont_like_cats".to_string(),
            }),
            result
        );
    }

    #[test]
    fn test_add_video_duplicate() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");

        let result = store.add_video(&library, "my_playlist", "dog1");

        assert_eq!(
            Err(PlaylistError::DuplicateVideo {
                name: "my_playlist".to_string(),
                id: "dog1".to_string(),
            }),
            result
        );
        let playlist = store.get("my_playlist").expect("expected the playlist to exist");
        assert_eq!(
            1,
            playlist.len(),
            "expected the playlist length to have been unchanged"
        );
    }

    #[test]
    fn test_remove_video() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");

        store
            .remove_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been removed");

        let playlist = store.get("my_playlist").expect("expected the playlist to exist");
        assert!(
            playlist.is_empty(),
            "expected the playlist to have been empty"
        );
    }

    #[test]
    fn test_remove_video_not_in_playlist() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");
        store
            .remove_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been removed");

        let result = store.remove_video(&library, "my_playlist", "dog1");

        assert_eq!(
            Err(PlaylistError::VideoNotInPlaylist {
                name: "my_playlist".to_string(),
                id: "dog1".to_string(),
            }),
            result
        );
    }

    #[test]
    fn test_remove_video_unknown_video() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        let result = store.remove_video(&library, "my_playlist", "lorem");

        assert_eq!(
            Err(PlaylistError::VideoNotFound("lorem".to_string())),
            result
        );
    }

    #[test]
    fn test_clear() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");

        store
            .clear("my_playlist")
            .expect("expected the playlist to have been cleared");
        store
            .clear("my_playlist")
            .expect("expected clearing an empty playlist to have succeeded");

        let playlist = store.get("my_playlist").expect("expected the playlist to exist");
        assert!(
            playlist.is_empty(),
            "expected the playlist to have been empty"
        );
    }

    #[test]
    fn test_delete() {
        init_logger!();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        let result = store
            .delete("my_playlist")
            .expect("expected the playlist to have been deleted");

        assert_eq!("My_PLAYLIST", result.name());
        assert!(
            store.is_empty(),
            "expected no playlists to have been left"
        );
    }

    #[test]
    fn test_delete_unknown_playlist() {
        init_logger!();
        let mut store = PlaylistStore::new();

        let result = store.delete("lorem");

        assert_eq!(
            Err(PlaylistError::NotFound("lorem".to_string())),
            result.map(|_| ())
        );
    }

    #[test]
    fn test_names_sorted_case_insensitively() {
        init_logger!();
        let mut store = PlaylistStore::new();
        store
            .create("beta")
            .expect("expected the playlist to have been created");
        store
            .create("Alpha")
            .expect("expected the playlist to have been created");
        store
            .create("GAMMA")
            .expect("expected the playlist to have been created");

        let result = store.names();

        assert_eq!(vec!["Alpha", "beta", "GAMMA"], result);
    }

    #[test]
    fn test_videos() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");
        store
            .add_video(&library, "my_playlist", "cat1")
            .expect("expected the video to have been added");

        let result = store
            .videos(&library, "MY_playlist")
            .expect("expected the videos to have been resolved");

        assert_eq!(2, result.len());
        assert_eq!("dog1", result[0].id(), "expected the insertion order to have been kept");
        assert_eq!("cat1", result[1].id());
    }

    #[test]
    fn test_videos_empty_playlist() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");

        let result = store
            .videos(&library, "my_playlist")
            .expect("expected an empty result to have been returned");

        assert!(
            result.is_empty(),
            "expected no videos to have been returned"
        );
    }

    #[test]
    fn test_videos_unresolvable_id() {
        init_logger!();
        let library = library();
        let mut store = PlaylistStore::new();
        store
            .create("My_PLAYLIST")
            .expect("expected the playlist to have been created");
        store
            .add_video(&library, "my_playlist", "dog1")
            .expect("expected the video to have been added");
        let empty_library = VideoLibrary::default();

        let result = store.videos(&empty_library, "my_playlist");

        assert_eq!(
            Err(PlaylistError::VideoNotFound("dog1".to_string())),
            result
        );
    }
}
