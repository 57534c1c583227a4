//! Syntax modes understood by the editor highlighter.

/// Grammar applied when rendering an editor widget's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxMode {
    /// No grammar; content is rendered as-is.
    Plaintext,
    Json,
    Css,
}

impl SyntaxMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Json => "json",
            Self::Css => "css",
        }
    }
}

impl Default for SyntaxMode {
    fn default() -> Self {
        Self::Plaintext
    }
}
