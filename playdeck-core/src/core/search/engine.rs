use itertools::Itertools;
use log::{debug, trace};

use crate::core::media::{Video, VideoLibrary};

/// The search engine filters the library by title or tag.
///
/// Flagged videos are never part of a result. Results are ordered by title
/// with the id as tie-breaker so the ranking is deterministic; an empty
/// result is an empty list, never an error. Presenting the results and
/// selecting one is left to the caller.
#[derive(Debug, Default)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Search all non-flagged videos whose title contains the given term.
    ///
    /// The match is case-insensitive.
    pub fn by_title(&self, library: &VideoLibrary, term: &str) -> Vec<Video> {
        trace!("Searching videos by title term {}", term);
        let term = term.to_lowercase();
        let results = Self::search(library, |e| e.title().to_lowercase().contains(&term));

        debug!("Found {} videos for title term {}", results.len(), term);
        results
    }

    /// Search all non-flagged videos of which any tag contains the given term.
    ///
    /// The match is case-insensitive.
    pub fn by_tag(&self, library: &VideoLibrary, term: &str) -> Vec<Video> {
        trace!("Searching videos by tag term {}", term);
        let term = term.to_lowercase();
        let results = Self::search(library, |e| {
            e.tags().iter().any(|tag| tag.to_lowercase().contains(&term))
        });

        debug!("Found {} videos for tag term {}", results.len(), term);
        results
    }

    fn search<P: Fn(&Video) -> bool>(library: &VideoLibrary, predicate: P) -> Vec<Video> {
        library
            .all()
            .into_iter()
            .filter(|e| !e.is_flagged())
            .filter(|e| predicate(e))
            .sorted_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(b.id())))
            .cloned()
            .collect()
    }
}
