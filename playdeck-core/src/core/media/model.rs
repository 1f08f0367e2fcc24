use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A video within the library.
///
/// The title, id and tags are fixed at construction time.
/// The flag reason is the only mutable field and is managed by the
/// [crate::core::media::flags::FlagService]; `None` means the video is not flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// The title of the video
    title: String,
    /// The unique identifier of the video
    id: String,
    /// The tags associated with the video
    #[serde(default)]
    tags: Vec<String>,
    /// The reason the video has been flagged, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flag: Option<String>,
}

impl Video {
    pub fn new(title: String, id: String, tags: Vec<String>) -> Self {
        Self {
            title,
            id,
            tags,
            flag: None,
        }
    }

    /// The title of the video.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The unique identifier of the video.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The tags associated with the video.
    pub fn tags(&self) -> &[String] {
        self.tags.as_slice()
    }

    /// The reason the video has been flagged, or [None] when it isn't flagged.
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Verify if the video has been flagged.
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Mark the video as flagged with the given reason.
    pub(crate) fn set_flag(&mut self, reason: &str) {
        self.flag = Some(reason.to_string());
    }

    /// Remove the flag from the video.
    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }
}

impl Display for Video {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;

        if let Some(reason) = self.flag.as_ref() {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn amazing_cats() -> Video {
        Video::new(
            "Amazing Cats".to_string(),
            "amazing_cats_video_id".to_string(),
            vec!["cat".to_string(), "animal".to_string()],
        )
    }

    #[test]
    fn test_new() {
        let video = amazing_cats();

        assert_eq!("Amazing Cats", video.title());
        assert_eq!("amazing_cats_video_id", video.id());
        assert_eq!(vec!["cat".to_string(), "animal".to_string()], video.tags());
        assert_eq!(None, video.flag_reason());
        assert!(!video.is_flagged(), "expected a new video to not be flagged");
    }

    #[test]
    fn test_set_flag() {
        let mut video = amazing_cats();

        video.set_flag("dont_like_cats");

        assert!(video.is_flagged(), "expected the video to have been flagged");
        assert_eq!(Some("dont_like_cats"), video.flag_reason());
    }

    #[test]
    fn test_clear_flag() {
        let mut video = amazing_cats();

        video.set_flag("dont_like_cats");
        video.clear_flag();

        assert_eq!(None, video.flag_reason());
        assert!(
            !video.is_flagged(),
            "expected the flag to have been removed"
        );
    }

    #[test]
    fn test_display() {
        let video = amazing_cats();

        assert_eq!(
            "Amazing Cats (amazing_cats_video_id) [cat animal]",
            video.to_string()
        );
    }

    #[test]
    fn test_display_flagged() {
        let mut video = amazing_cats();

        video.set_flag("dont_like_cats");

        assert_eq!(
            "Amazing Cats (amazing_cats_video_id) [cat animal] - FLAGGED (reason: dont_like_cats)",
            video.to_string()
        );
    }

    #[test]
    fn test_deserialize_without_flag() {
        let document = r#"{"title":"Amazing Cats","id":"amazing_cats_video_id","tags":["cat","animal"]}"#;

        let video: Video = serde_json::from_str(document)
            .expect("expected the document to have been parsed");

        assert_eq!(amazing_cats(), video);
    }
}
