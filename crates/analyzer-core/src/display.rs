/// Shown when nothing has been extracted yet, or the service returned no text.
pub const PLACEHOLDER: &str = "No content extracted yet";

/// Title above the extracted text.
pub const TEXT_TITLE: &str = "Extracted Text";

/// What the result pane shows, derived purely from session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayContent {
    Placeholder,
    /// Extracted text, verbatim. Whitespace and line breaks are preserved.
    Text(String),
    /// The latest upload failed; carries the reason.
    Failed(String),
}

impl DisplayContent {
    /// Empty text counts as absent and falls back to the placeholder.
    pub fn from_state(text: Option<&str>, failure: Option<&str>) -> Self {
        if let Some(reason) = failure {
            return DisplayContent::Failed(reason.to_string());
        }
        match text {
            Some(t) if !t.is_empty() => DisplayContent::Text(t.to_string()),
            _ => DisplayContent::Placeholder,
        }
    }

    /// Plain-text rendering used by the command line front-end.
    pub fn render_plain(&self) -> String {
        match self {
            DisplayContent::Placeholder => PLACEHOLDER.to_string(),
            DisplayContent::Text(t) => t.clone(),
            DisplayContent::Failed(reason) => failure_message(reason),
        }
    }
}

pub fn failure_message(reason: &str) -> String {
    format!("Upload failed: {}. Try again.", reason)
}
