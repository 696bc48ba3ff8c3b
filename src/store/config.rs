//! Store configuration

/// Configuration for a [`Store`](super::Store).
///
/// `text_fields` names the fields searched by `$text` queries; with the
/// default empty list, `$text` matches nothing.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Fields whose stringified content is token-matched by `$text`
    pub text_fields: Vec<String>,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full-text-search fields
    pub fn with_text_fields(mut self, fields: Vec<String>) -> Self {
        self.text_fields = fields;
        self
    }
}
