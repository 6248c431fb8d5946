//! Fixed prompt text for the story and illustration stages.

use crate::Message;

/// System instruction sent with every story request.
pub const STORY_SYSTEM_PROMPT: &str =
    "You are a creative, vivid storyteller. Write a short, engaging story (around 5 sentences).";

/// Prefix prepended to every illustration prompt.
const ILLUSTRATION_PREFIX: &str = "cinematic film still, epic, masterpiece";

/// Negative prompt excluding stylistic artifacts.
pub const NEGATIVE_PROMPT: &str =
    "cartoon, anime, 3d, painting, blurry, deformed, signature, watermark, text";

/// Narration language.
pub const NARRATION_LANGUAGE: &str = "en";

/// User message embedding the story idea.
///
/// # Examples
///
/// ```
/// use weaver_core::story_user_prompt;
///
/// assert_eq!(
///     story_user_prompt("A robot in a forest."),
///     "Write a story based on this idea: 'A robot in a forest.'"
/// );
/// ```
pub fn story_user_prompt(idea: &str) -> String {
    format!("Write a story based on this idea: '{}'", idea)
}

/// The two-message exchange for a story request.
pub fn story_messages(idea: &str) -> Vec<Message> {
    vec![
        Message::system(STORY_SYSTEM_PROMPT),
        Message::user(story_user_prompt(idea)),
    ]
}

/// Positive prompt for one scene.
///
/// # Examples
///
/// ```
/// use weaver_core::illustration_prompt;
///
/// assert_eq!(
///     illustration_prompt("A small chrome robot.", "It woke up."),
///     "cinematic film still, epic, masterpiece, A small chrome robot., It woke up."
/// );
/// ```
pub fn illustration_prompt(character: &str, scene: &str) -> String {
    format!("{}, {}, {}", ILLUSTRATION_PREFIX, character, scene)
}
