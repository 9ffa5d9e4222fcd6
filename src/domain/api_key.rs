use std::fmt;

/// Value shipped in sample configuration; treated as "no key".
pub const API_KEY_PLACEHOLDER: &str = "your_groq_api_key_here";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_configured(&self) -> bool {
        let key = self.0.trim();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            f.write_str("ApiKey([REDACTED])")
        } else {
            f.write_str("ApiKey(<unset>)")
        }
    }
}
