//! Sentence segmentation of story text into scenes.

use serde::Serialize;
use std::sync::LazyLock;

/// Default cap on the number of scenes per story.
pub const DEFAULT_MAX_SCENES: usize = 5;

// Terminal punctuation followed by a run of whitespace.
static BOUNDARY: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"));

/// One sentence-level fragment of a story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Scene {
    /// 1-based position within the story
    pub number: usize,
    /// Sentence text, terminal punctuation included
    pub text: String,
}

/// Split story text into at most `max_scenes` scenes.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace. The punctuation
/// stays with the preceding sentence and the whitespace is dropped. Text
/// without any boundary comes back as a single scene. Empty or whitespace-only
/// text yields no scenes.
///
/// Abbreviations, decimals, ellipses and quoted speech are not special-cased.
///
/// # Examples
///
/// ```
/// use weaver_core::split_scenes;
///
/// let scenes = split_scenes("It rained. The robot rusted! Did it care?", 5);
/// let texts: Vec<_> = scenes.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, ["It rained.", "The robot rusted!", "Did it care?"]);
/// assert_eq!(scenes[2].number, 3);
/// ```
pub fn split_scenes(text: &str, max_scenes: usize) -> Vec<Scene> {
    let text = text.trim();
    if text.is_empty() || max_scenes == 0 {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(text) {
        if sentences.len() == max_scenes {
            break;
        }
        // Punctuation marks are single-byte ASCII.
        sentences.push(&text[start..=boundary.start()]);
        start = boundary.end();
    }
    if sentences.len() < max_scenes {
        sentences.push(&text[start..]);
    }

    sentences
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| Scene {
            number: i + 1,
            text: sentence.to_string(),
        })
        .collect()
}
