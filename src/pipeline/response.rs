// Resolved response
// The normalized answer shape every pipeline stage produces

/// Label shown first on every assistant answer
pub const ASSISTANT_LABEL: &str = "MITK AI Assistant";

/// Upper bound on displayed confidence
pub const MAX_CONFIDENCE: u8 = 100;

/// An answer ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResponse {
    /// HTML-formatted answer
    pub text: String,
    /// Confidence, always within 0-100
    pub confidence: u8,
    /// Source labels, never empty
    pub sources: Vec<String>,
    /// Label of the path that produced the answer, if any
    pub model: Option<String>,
}

impl ResolvedResponse {
    /// Build a response, clamping confidence and filling empty sources
    pub fn new(
        text: impl Into<String>,
        confidence: u8,
        sources: Vec<String>,
        model: Option<String>,
    ) -> Self {
        let sources = if sources.is_empty() {
            vec![ASSISTANT_LABEL.to_string()]
        } else {
            sources
        };
        Self {
            text: text.into(),
            confidence: confidence.min(MAX_CONFIDENCE),
            sources,
            model,
        }
    }

    /// Label shown next to the confidence badge
    pub fn primary_source(&self) -> &str {
        self.sources
            .first()
            .map(String::as_str)
            .unwrap_or(ASSISTANT_LABEL)
    }
}
