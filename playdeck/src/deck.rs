use log::{debug, info};

use playdeck_core::core::media::flags::FlagService;
use playdeck_core::core::media::{self, Video, VideoLibrary};
use playdeck_core::core::playback::{self, NowPlaying, PauseOutcome, PlaybackController};
use playdeck_core::core::playlist::{self, Playlist, PlaylistStore};
use playdeck_core::core::search::SearchEngine;
use playdeck_core::core::storage::Storage;

/// The filename of the video library document within the storage directory.
const LIBRARY_FILENAME: &str = "library.json";

/// The playdeck application instance.
///
/// It owns the video library and every component operating on it, and exposes
/// one call per operation. All operations return structured results; turning
/// them into user-facing output is left to the presentation layer.
#[derive(Debug)]
pub struct PlayDeck {
    library: VideoLibrary,
    playback: PlaybackController,
    playlists: PlaylistStore,
    search: SearchEngine,
    flags: FlagService,
}

impl PlayDeck {
    /// Create a new instance on top of the given video library.
    pub fn new(library: VideoLibrary) -> Self {
        info!("Starting playdeck with {} videos", library.len());
        Self {
            library,
            playback: PlaybackController::new(),
            playlists: PlaylistStore::new(),
            search: SearchEngine::new(),
            flags: FlagService::new(),
        }
    }

    /// Create a new instance with the video library loaded from the given
    /// storage directory.
    ///
    /// It returns the new instance, or a [media::MediaError] when the library
    /// document is corrupt.
    pub fn from_directory(path: &str) -> media::Result<Self> {
        let storage = Storage::from_directory(path);
        let library = VideoLibrary::from_storage(&storage, LIBRARY_FILENAME)?;
        Ok(Self::new(library))
    }

    /// The total number of videos within the library.
    pub fn total_videos(&self) -> usize {
        self.library.len()
    }

    /// Retrieve all library videos ordered by title.
    ///
    /// Flagged videos are included; they carry their flag reason for display.
    pub fn available_videos(&self) -> Vec<Video> {
        let mut videos: Vec<Video> = self.library.all().into_iter().cloned().collect();
        videos.sort_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(b.id())));
        videos
    }

    /// Start playback of the video with the given id.
    pub fn play(&mut self, video_id: &str) -> playback::Result<Video> {
        self.playback.play(&self.library, video_id)
    }

    /// Start playback of a randomly selected non-flagged video.
    pub fn play_random(&mut self) -> playback::Result<Video> {
        self.playback.play_random(&self.library)
    }

    /// Stop the current video.
    pub fn stop(&mut self) -> playback::Result<Video> {
        self.playback.stop()
    }

    /// Pause the current video.
    pub fn pause(&mut self) -> playback::Result<PauseOutcome> {
        self.playback.pause()
    }

    /// Continue the playback of the paused video.
    pub fn resume(&mut self) -> playback::Result<Video> {
        self.playback.resume()
    }

    /// Retrieve the currently active video, or [None] when stopped.
    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.playback.now_playing()
    }

    /// Create a new empty playlist with the given name.
    pub fn create_playlist(&mut self, name: &str) -> playlist::Result<Playlist> {
        self.playlists.create(name).map(|e| e.clone())
    }

    /// Add the given video to the playlist.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> playlist::Result<()> {
        self.playlists.add_video(&self.library, name, video_id)
    }

    /// Remove the given video from the playlist.
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> playlist::Result<()> {
        self.playlists.remove_video(&self.library, name, video_id)
    }

    /// Remove all videos from the playlist.
    pub fn clear_playlist(&mut self, name: &str) -> playlist::Result<()> {
        self.playlists.clear(name)
    }

    /// Delete the playlist with the given name.
    pub fn delete_playlist(&mut self, name: &str) -> playlist::Result<Playlist> {
        self.playlists.delete(name)
    }

    /// Retrieve the canonical names of all playlists, sorted
    /// case-insensitively.
    pub fn playlist_names(&self) -> Vec<&str> {
        self.playlists.names()
    }

    /// Retrieve the videos of the playlist in insertion order.
    pub fn playlist_videos(&self, name: &str) -> playlist::Result<Vec<Video>> {
        self.playlists.videos(&self.library, name)
    }

    /// Search all non-flagged videos whose title contains the given term.
    pub fn search(&self, term: &str) -> Vec<Video> {
        self.search.by_title(&self.library, term)
    }

    /// Search all non-flagged videos of which any tag contains the given term.
    pub fn search_tag(&self, term: &str) -> Vec<Video> {
        self.search.by_tag(&self.library, term)
    }

    /// Search by title and start playback of the video selected by the caller.
    ///
    /// The selection function receives the ordered results and yields the id
    /// to play, or [None] to play nothing. It returns the started video, or
    /// [None] when the search was empty or nothing was selected.
    pub fn search_and_play<F>(&mut self, term: &str, select: F) -> playback::Result<Option<Video>>
    where
        F: FnOnce(&[Video]) -> Option<String>,
    {
        let results = self.search.by_title(&self.library, term);
        self.play_selected(results, select)
    }

    /// Search by tag and start playback of the video selected by the caller.
    pub fn search_tag_and_play<F>(
        &mut self,
        term: &str,
        select: F,
    ) -> playback::Result<Option<Video>>
    where
        F: FnOnce(&[Video]) -> Option<String>,
    {
        let results = self.search.by_tag(&self.library, term);
        self.play_selected(results, select)
    }

    /// Flag the given video, stopping its playback when it is the current one.
    pub fn flag(&mut self, video_id: &str, reason: Option<&str>) -> media::Result<Video> {
        self.flags
            .flag(&mut self.library, &mut self.playback, video_id, reason)
    }

    /// Remove the flag from the given video.
    pub fn allow(&mut self, video_id: &str) -> media::Result<Video> {
        self.flags.allow(&mut self.library, video_id)
    }

    fn play_selected<F>(&mut self, results: Vec<Video>, select: F) -> playback::Result<Option<Video>>
    where
        F: FnOnce(&[Video]) -> Option<String>,
    {
        if results.is_empty() {
            return Ok(None);
        }

        match select(&results) {
            Some(video_id) => {
                debug!("Selected video {} from the search results", video_id);
                self.playback.play(&self.library, &video_id).map(Some)
            }
            None => Ok(None),
        }
    }
}
