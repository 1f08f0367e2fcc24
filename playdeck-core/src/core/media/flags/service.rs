use log::{debug, info, trace};

use crate::core::media::{self, MediaError, Video, VideoLibrary};
use crate::core::playback::PlaybackNotifier;

/// The reason which is applied when a video is flagged without one.
const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// The flag service manages the moderation marks on library videos.
///
/// Flagged videos are excluded from playback, random picks and search results.
/// Flagging the video which is currently playing stops its playback through
/// the [PlaybackNotifier] capability of the caller.
#[derive(Debug, Default)]
pub struct FlagService;

impl FlagService {
    pub fn new() -> Self {
        Self
    }

    /// Flag the given video with the given reason.
    ///
    /// When no reason is supplied, [DEFAULT_FLAG_REASON] is applied instead.
    /// The playback controller is notified so that a currently playing video
    /// is stopped as part of the same operation.
    ///
    /// It returns the flagged video, else the [MediaError].
    pub fn flag(
        &self,
        library: &mut VideoLibrary,
        playback: &mut dyn PlaybackNotifier,
        video_id: &str,
        reason: Option<&str>,
    ) -> media::Result<Video> {
        trace!("Flagging video {}", video_id);
        let video = library
            .get_mut(video_id)
            .ok_or_else(|| MediaError::NotFound(video_id.to_string()))?;

        if let Some(reason) = video.flag_reason() {
            debug!("Video {} has already been flagged", video_id);
            return Err(MediaError::AlreadyFlagged {
                id: video_id.to_string(),
                reason: reason.to_string(),
            });
        }

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);
        video.set_flag(reason);
        let video = video.clone();

        playback.notify_flagged(video_id);
        info!("Video {} has been flagged, reason: {}", video_id, reason);
        Ok(video)
    }

    /// Remove the flag from the given video, allowing it again for playback
    /// and search.
    ///
    /// It returns the allowed video, else the [MediaError].
    pub fn allow(&self, library: &mut VideoLibrary, video_id: &str) -> media::Result<Video> {
        trace!("Removing flag from video {}", video_id);
        let video = library
            .get_mut(video_id)
            .ok_or_else(|| MediaError::NotFound(video_id.to_string()))?;

        if !video.is_flagged() {
            return Err(MediaError::NotFlagged(video_id.to_string()));
        }

        video.clear_flag();
        info!("Video {} is allowed again", video_id);
        Ok(video.clone())
    }
}
