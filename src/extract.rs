use once_cell::sync::Lazy;
use regex::Regex;

/// Compile the URL pattern once. Recognized markers are `youtu.be/`, `v/`,
/// `u/<word char>/`, `embed/`, `watch?v=` and `&v=`; the capture runs up to
/// the next `#`, `&` or `?`.
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)")
        .expect("Failed to compile video id regex")
});

/// YouTube video ids are always 11 characters
const VIDEO_ID_LEN: usize = 11;

/// Extracts the video id from a YouTube URL.
///
/// The first recognized marker wins; a capture of any other length than 11
/// characters is treated as a non-match. Absence of an id is a normal
/// outcome, never an error.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|id| id.len() == VIDEO_ID_LEN)
}
