//! Tests for form input validation and prompt assembly.

use weaver_core::{
    NEGATIVE_PROMPT, Role, STORY_SYSTEM_PROMPT, StoryInputs, illustration_prompt, story_messages,
};

#[test]
fn test_complete_inputs_validate() {
    let inputs = StoryInputs::new(
        "hf_token",
        "A robot discovering an ancient, magical forest.",
        "A small chrome robot.",
    );
    assert!(inputs.validate().is_ok());
}

#[test]
fn test_each_blank_field_is_reported() {
    let cases = [
        (StoryInputs::new("", "idea", "character"), "credential"),
        (StoryInputs::new("token", "   ", "character"), "idea"),
        (StoryInputs::new("token", "idea", "\n"), "character"),
    ];
    for (inputs, field) in cases {
        assert_eq!(inputs.validate().unwrap_err().field, field);
    }
}

#[test]
fn test_first_missing_field_wins() {
    let inputs = StoryInputs::new("", "", "");
    assert_eq!(inputs.validate().unwrap_err().field, "credential");
}

#[test]
fn test_credential_debug_is_redacted() {
    let inputs = StoryInputs::new("hf_very_secret", "idea", "character");
    let rendered = format!("{:?}", inputs);
    assert!(!rendered.contains("hf_very_secret"));
    assert!(rendered.contains("redacted"));
}

#[test]
fn test_story_messages_embed_idea() {
    let messages = story_messages("A lighthouse that sings");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, STORY_SYSTEM_PROMPT);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(
        messages[1].content,
        "Write a story based on this idea: 'A lighthouse that sings'"
    );
}

#[test]
fn test_illustration_prompt_blends_character_and_scene() {
    let prompt = illustration_prompt("A small chrome robot", "It found a glowing mushroom.");
    assert!(prompt.starts_with("cinematic film still, epic, masterpiece, "));
    assert!(prompt.ends_with("A small chrome robot, It found a glowing mushroom."));
    assert!(NEGATIVE_PROMPT.contains("watermark"));
}
