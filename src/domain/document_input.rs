/// The source a request asked us to study: an uploaded file or inline text.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentInput {
    File { filename: String, data: Vec<u8> },
    Text(String),
}

impl DocumentInput {
    /// Picks the honored source. An uploaded file always wins over inline text.
    pub fn select(file: Option<(String, Vec<u8>)>, text: Option<String>) -> Option<Self> {
        match (file, text) {
            (Some((filename, data)), _) => Some(Self::File { filename, data }),
            (None, Some(text)) => Some(Self::Text(text)),
            (None, None) => None,
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            Self::File { filename, .. } => filename,
            Self::Text(_) => "inline text",
        }
    }
}
