use std::fmt::Write;

use crate::domain::{Chapter, TargetWordCount};

/// Template flavour. `Detailed` backs the single-purpose endpoints, `Condensed`
/// the combined one, where both prompts carry the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Detailed,
    Condensed,
}

impl PromptStyle {
    pub fn summary_system_message(&self) -> &'static str {
        match self {
            PromptStyle::Detailed => {
                "You are an expert educational content summarizer. Create clear, concise summaries that capture key information."
            }
            PromptStyle::Condensed => "You are an expert summarizer.",
        }
    }

    pub fn notes_system_message(&self) -> &'static str {
        match self {
            PromptStyle::Detailed => {
                "You are an expert at creating organized, topic-wise educational notes. Make them clear, structured, and easy to study from."
            }
            PromptStyle::Condensed => "You are an expert note-maker.",
        }
    }
}

pub fn summary_prompt(
    text: &str,
    chapter: &Chapter,
    word_count: TargetWordCount,
    style: PromptStyle,
) -> String {
    match style {
        PromptStyle::Detailed => detailed_summary(text, chapter, word_count),
        PromptStyle::Condensed => {
            let scope = match chapter.as_filter() {
                Some(name) => format!(" of chapter: {name}"),
                None => String::new(),
            };
            format!(
                "Text: {text}\n\nCreate a {word_count}-word summary{scope}.\nCover key concepts clearly and concisely."
            )
        }
    }
}

pub fn notes_prompt(text: &str, chapter: &Chapter, style: PromptStyle) -> String {
    match style {
        PromptStyle::Detailed => detailed_notes(text, chapter),
        PromptStyle::Condensed => {
            let scope = match chapter.as_filter() {
                Some(name) => format!(" for chapter: {name}"),
                None => String::new(),
            };
            format!(
                "Text: {text}\n\nCreate detailed topic-wise notes{scope}.\nFormat: Topics with bullet points, definitions, and key concepts."
            )
        }
    }
}

fn detailed_summary(text: &str, chapter: &Chapter, word_count: TargetWordCount) -> String {
    let mut prompt = String::with_capacity(text.len() + 512);
    prompt.push_str("You are an expert at creating educational summaries.\n\n");
    let _ = write!(prompt, "Text to summarize:\n{text}\n\n");

    match chapter.as_filter() {
        Some(name) => {
            let _ = writeln!(prompt, "Task: Create a summary of the chapter/topic: \"{name}\"\n");
            prompt.push_str("Requirements:\n");
            let _ = writeln!(
                prompt,
                "- Write a clear, concise summary in approximately {word_count} words"
            );
            let _ = writeln!(prompt, "- Focus ONLY on the \"{name}\" section/chapter");
            prompt.push_str("- Cover key concepts, main ideas, and important points\n");
        }
        None => {
            prompt.push_str("Task: Create a comprehensive summary\n\n");
            prompt.push_str("Requirements:\n");
            let _ = writeln!(
                prompt,
                "- Write a clear, concise summary in approximately {word_count} words"
            );
            prompt.push_str("- Cover all key concepts and main ideas\n");
        }
    }

    prompt.push_str("- Use simple, easy-to-understand language\n");
    prompt.push_str("- Structure: Introduction → Main Points → Conclusion\n\n");
    prompt.push_str("Generate the summary now:");
    prompt
}

fn detailed_notes(text: &str, chapter: &Chapter) -> String {
    let mut prompt = String::with_capacity(text.len() + 512);
    prompt.push_str("You are an expert note-maker for students.\n\n");
    let _ = write!(prompt, "Text:\n{text}\n\n");

    let topics_line = match chapter.as_filter() {
        Some(name) => {
            let _ = writeln!(
                prompt,
                "Task: Create detailed, topic-wise notes for the chapter: \"{name}\"\n"
            );
            "1. Identify all major topics/concepts in this chapter\n"
        }
        None => {
            prompt.push_str("Task: Create detailed, topic-wise notes from this content\n\n");
            "1. Identify all major topics/concepts\n"
        }
    };

    prompt.push_str("Requirements:\n");
    prompt.push_str(topics_line);
    prompt.push_str(
        "2. For each topic, provide:\n   - Clear heading\n   - Key points (bullet points)\n   - Important definitions\n   - Examples if available\n",
    );
    prompt.push_str("3. Format as structured notes\n");
    prompt.push_str("4. Use markdown formatting\n");
    prompt.push_str("5. Make it student-friendly\n\n");
    prompt.push_str("Generate topic-wise notes now:");
    prompt
}
