use derive_more::Display;
use log::{debug, info, trace};
#[cfg(any(test, feature = "testing"))]
use mockall::automock;
use rand::RngExt;

use crate::core::media::{Video, VideoLibrary};
use crate::core::playback::{self, PlaybackError, PlaybackState};

/// A capability for reacting to a video being flagged.
///
/// Moderation-side callers hold this capability instead of a concrete player,
/// which declares the dependency direction and keeps it mockable.
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait PlaybackNotifier {
    /// Notify that the video with the given id has been flagged.
    fn notify_flagged(&mut self, video_id: &str);
}

/// Information about the video which is currently active within the player.
#[derive(Debug, Clone, Display, PartialEq)]
#[display("{} - {}", video, state)]
pub struct NowPlaying {
    /// The active video.
    pub video: Video,
    /// The playback state of the active video.
    pub state: PlaybackState,
}

/// The outcome of a pause request.
///
/// Pausing an already paused video succeeds, but is reported distinctly from
/// a fresh pause.
#[derive(Debug, Clone, Display, PartialEq)]
pub enum PauseOutcome {
    /// The video transitioned from playing to paused.
    #[display("paused video {}", _0)]
    Paused(Video),
    /// The video was already paused; no transition occurred.
    #[display("video {} is already paused", _0)]
    AlreadyPaused(Video),
}

/// The playback controller owns the single playback slot of the application.
///
/// Starting a new video while another is active stops the active one first;
/// this implicit stop is logged but never reported as an error.
#[derive(Debug, Default)]
pub struct PlaybackController {
    current: Option<Video>,
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playback of the video with the given id.
    ///
    /// A video which doesn't exist or has been flagged leaves the playback
    /// slot unchanged.
    ///
    /// It returns the started video, else the [PlaybackError].
    pub fn play(&mut self, library: &VideoLibrary, video_id: &str) -> playback::Result<Video> {
        trace!("Starting playback of video {}", video_id);
        let video = library
            .get(video_id)
            .ok_or_else(|| PlaybackError::VideoNotFound(video_id.to_string()))?;

        if let Some(reason) = video.flag_reason() {
            debug!("Video {} is flagged and won't be played", video_id);
            return Err(PlaybackError::VideoFlagged {
                id: video_id.to_string(),
                reason: reason.to_string(),
            });
        }

        if let Some(active) = self.current.take() {
            debug!("Stopping video {} before starting {}", active.id(), video_id);
        }

        let video = video.clone();
        self.current = Some(video.clone());
        self.state = PlaybackState::Playing;
        info!("Playing video {}", video);
        Ok(video)
    }

    /// Start playback of a randomly selected non-flagged video.
    ///
    /// It returns the started video, or [PlaybackError::NoPlayableVideos]
    /// when every library video has been flagged.
    pub fn play_random(&mut self, library: &VideoLibrary) -> playback::Result<Video> {
        let playable: Vec<&Video> = library
            .all()
            .into_iter()
            .filter(|e| !e.is_flagged())
            .collect();

        if playable.is_empty() {
            return Err(PlaybackError::NoPlayableVideos);
        }

        let index = rand::rng().random_range(0..playable.len());
        let video_id = playable[index].id().to_string();
        debug!("Selected random video {}", video_id);
        self.play(library, &video_id)
    }

    /// Stop the current video.
    ///
    /// It returns the video that was stopped, else the [PlaybackError].
    pub fn stop(&mut self) -> playback::Result<Video> {
        match self.current.take() {
            Some(video) => {
                self.state = PlaybackState::Stopped;
                info!("Stopped video {}", video);
                Ok(video)
            }
            None => Err(PlaybackError::NothingPlaying),
        }
    }

    /// Pause the current video.
    ///
    /// It returns the [PauseOutcome], else the [PlaybackError].
    pub fn pause(&mut self) -> playback::Result<PauseOutcome> {
        let video = self
            .current
            .as_ref()
            .ok_or(PlaybackError::NothingPlaying)?
            .clone();

        if self.state == PlaybackState::Paused {
            debug!("Video {} is already paused", video.id());
            return Ok(PauseOutcome::AlreadyPaused(video));
        }

        self.state = PlaybackState::Paused;
        info!("Paused video {}", video);
        Ok(PauseOutcome::Paused(video))
    }

    /// Continue the playback of the paused video.
    ///
    /// It returns the resumed video, else the [PlaybackError].
    pub fn resume(&mut self) -> playback::Result<Video> {
        let video = self
            .current
            .as_ref()
            .ok_or(PlaybackError::NothingPlaying)?
            .clone();

        if self.state != PlaybackState::Paused {
            return Err(PlaybackError::NotPaused);
        }

        self.state = PlaybackState::Playing;
        info!("Continuing video {}", video);
        Ok(video)
    }

    /// The state of the playback slot.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Retrieve the currently active video, or [None] when stopped.
    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.current.as_ref().map(|video| NowPlaying {
            video: video.clone(),
            state: self.state,
        })
    }
}

impl PlaybackNotifier for PlaybackController {
    fn notify_flagged(&mut self, video_id: &str) {
        let is_current = self
            .current
            .as_ref()
            .map(|e| e.id() == video_id)
            .unwrap_or(false);

        if is_current {
            debug!("Current video {} has been flagged, stopping playback", video_id);
            let _ = self.stop();
        }
    }
}
