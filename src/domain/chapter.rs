use std::fmt;

pub const FULL_DOCUMENT_LABEL: &str = "Full document";

/// Optional chapter or topic filter. An absent or empty value means the
/// whole document; anything else, whitespace included, is used verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter(Option<String>);

impl Chapter {
    pub fn new(raw: Option<String>) -> Self {
        Self(raw.filter(|c| !c.is_empty()))
    }

    pub fn whole_document() -> Self {
        Self(None)
    }

    pub fn as_filter(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn label(&self) -> &str {
        self.0.as_deref().unwrap_or(FULL_DOCUMENT_LABEL)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
