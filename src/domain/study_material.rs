/// A generated summary. `word_count` is measured on the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    pub text: String,
}

impl Notes {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPack {
    pub summary: Summary,
    pub notes: Notes,
}
