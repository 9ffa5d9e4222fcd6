use scriba::application::services::{PromptStyle, notes_prompt, summary_prompt};
use scriba::domain::{Chapter, TargetWordCount};

fn words(n: u32) -> TargetWordCount {
    TargetWordCount::new(n).unwrap()
}

#[test]
fn given_whole_document_when_building_detailed_summary_then_requests_comprehensive_summary() {
    let prompt = summary_prompt(
        "Water boils at 100C.",
        &Chapter::whole_document(),
        words(80),
        PromptStyle::Detailed,
    );

    assert!(prompt.contains("Text to summarize:\nWater boils at 100C."));
    assert!(prompt.contains("Task: Create a comprehensive summary"));
    assert!(prompt.contains("approximately 80 words"));
    assert!(prompt.ends_with("Generate the summary now:"));
    assert!(!prompt.contains("Focus ONLY"));
}

#[test]
fn given_chapter_when_building_detailed_summary_then_scopes_to_chapter() {
    let chapter = Chapter::new(Some("Optics".to_string()));
    let prompt = summary_prompt("Light bends.", &chapter, words(200), PromptStyle::Detailed);

    assert!(prompt.contains("Task: Create a summary of the chapter/topic: \"Optics\""));
    assert!(prompt.contains("Focus ONLY on the \"Optics\" section/chapter"));
    assert!(prompt.contains("approximately 200 words"));
}

#[test]
fn given_condensed_style_when_building_summary_then_uses_short_template() {
    let chapter = Chapter::new(Some("Optics".to_string()));
    let prompt = summary_prompt("Light bends.", &chapter, words(120), PromptStyle::Condensed);

    assert_eq!(
        prompt,
        "Text: Light bends.\n\nCreate a 120-word summary of chapter: Optics.\nCover key concepts clearly and concisely."
    );
}

#[test]
fn given_condensed_style_without_chapter_when_building_notes_then_omits_scope() {
    let prompt = notes_prompt("Light bends.", &Chapter::whole_document(), PromptStyle::Condensed);

    assert_eq!(
        prompt,
        "Text: Light bends.\n\nCreate detailed topic-wise notes.\nFormat: Topics with bullet points, definitions, and key concepts."
    );
}

#[test]
fn given_detailed_style_when_building_notes_then_lists_structure_requirements() {
    let whole = notes_prompt("Atoms.", &Chapter::whole_document(), PromptStyle::Detailed);
    let scoped = notes_prompt(
        "Atoms.",
        &Chapter::new(Some("Bonds".to_string())),
        PromptStyle::Detailed,
    );

    assert!(whole.contains("Task: Create detailed, topic-wise notes from this content"));
    assert!(whole.contains("1. Identify all major topics/concepts\n"));
    assert!(whole.contains("4. Use markdown formatting"));
    assert!(scoped.contains("topic-wise notes for the chapter: \"Bonds\""));
    assert!(scoped.contains("1. Identify all major topics/concepts in this chapter"));
}

#[test]
fn given_styles_when_reading_system_messages_then_differ() {
    assert_eq!(
        PromptStyle::Condensed.summary_system_message(),
        "You are an expert summarizer."
    );
    assert_eq!(
        PromptStyle::Condensed.notes_system_message(),
        "You are an expert note-maker."
    );
    assert!(PromptStyle::Detailed
        .summary_system_message()
        .starts_with("You are an expert educational content summarizer."));
    assert!(PromptStyle::Detailed
        .notes_system_message()
        .starts_with("You are an expert at creating organized, topic-wise educational notes."));
}
